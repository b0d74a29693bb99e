//! Word-search puzzle: the letter grid, answer spans, and the drag/touch
//! selection state machine that checks completed gestures against answers.
//!
//! - `LetterGrid` / `AnswerSpan` / `Cell` - the immutable puzzle content
//! - `GridMatchState` - selection, found words, and the derived queries used
//!   by rendering

mod grid;
mod matcher;

pub use grid::{AnswerSpan, Cell, GridError, LetterGrid, SpanOrientation};
pub use matcher::{GridMatchState, GridMetrics, Phase, WordFound};
