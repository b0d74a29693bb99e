//! CLI command implementations.
//!
//! Each command is implemented in its own submodule and drives a
//! CanvasContext for all engine state.

mod check;
mod layout;
mod puzzle;
pub mod shared;

pub use check::check;
pub use layout::layout;
pub use puzzle::puzzle;
pub use shared::{parse_gesture, read_content};
