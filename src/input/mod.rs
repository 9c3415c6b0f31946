pub mod gesture;
pub mod handler;
pub mod mapper;

pub use gesture::{resolve_swipe, Point, SwipeTracker};
pub use handler::{InputHandler, KeyAction};
pub use mapper::{Command, InputEvent, InputMapper};
