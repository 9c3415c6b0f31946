//! Upbirdz - a grid game where a growing bird eats pills
//!
//! This library provides:
//! - Core game logic: grid geometry, collisions, item placement and the tick (game module)
//! - Input normalization with the no-reversal rule and swipe gestures (input module)
//! - A session that ties state, rules and input together (session module)
//! - TUI rendering and the interactive mode (render, modes modules)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
