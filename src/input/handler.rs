use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::gesture::{Point, SwipeTracker};
use super::mapper::InputEvent;
use crate::game::Direction;

// Approximate pixel size of a terminal cell, so swipe thresholds keep
// their pointer-distance meaning when measured in columns and rows.
const CELL_WIDTH_PX: f32 = 8.0;
const CELL_HEIGHT_PX: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(InputEvent),
    Quit,
    None,
}

/// Decodes raw terminal events into normalized game input
pub struct InputHandler {
    swipe: SwipeTracker,
}

impl InputHandler {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(InputEvent::Move(Direction::Up)),
            KeyCode::Down => KeyAction::Game(InputEvent::Move(Direction::Down)),
            KeyCode::Left => KeyAction::Game(InputEvent::Move(Direction::Left)),
            KeyCode::Right => KeyAction::Game(InputEvent::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Game(InputEvent::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Game(InputEvent::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Game(InputEvent::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Game(InputEvent::Move(Direction::Right))
            }

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::Game(InputEvent::PauseToggle)
            }
            KeyCode::Enter => KeyAction::Game(InputEvent::Confirm),
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(InputEvent::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Left-button press starts a swipe, release resolves it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        let at = Point::new(
            f32::from(mouse.column) * CELL_WIDTH_PX,
            f32::from(mouse.row) * CELL_HEIGHT_PX,
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(at);
                KeyAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.end(at) {
                Some(direction) => KeyAction::Game(InputEvent::Move(direction)),
                None => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(30.0)
    }
}
