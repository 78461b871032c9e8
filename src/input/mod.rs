pub mod handler;
pub mod latch;

pub use handler::{InputHandler, KeyAction};
pub use latch::InputState;
