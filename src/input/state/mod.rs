//! Canvas gesture dispatch split into focused submodules.

mod core;
mod touch;


pub use core::{CanvasState, GestureState};
