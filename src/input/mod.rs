//! Input handling: tool selection and the gesture dispatcher.

pub mod events;
pub mod state;
pub mod tool;
pub mod tool_state;

pub use events::CanvasEvent;
pub use state::{CanvasState, GestureState};
pub use tool::DrawMode;
pub use tool_state::ToolState;
