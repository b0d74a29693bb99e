//! Shared utilities for commands: reading content files and parsing gestures.

use std::path::Path;

use crate::content::{parse_content, Content};
use crate::error_fmt::{AppError, ContentResultExt, IoResultExt};
use crate::puzzle::Cell;

/// Read and parse a content file holding either payload kind.
pub fn read_content(path: &str) -> Result<Content, AppError> {
    if !Path::new(path).exists() {
        return Err(AppError::FileNotFound(path.to_string()));
    }

    let json = std::fs::read_to_string(path).with_context(&format!("failed to read {}", path))?;
    parse_content(&json).with_path(path)
}

/// Parse a gesture written as space separated `row,col` cells, in the order
/// they were dragged over.
///
/// ```
/// use learnkit::commands::parse_gesture;
/// use learnkit::puzzle::Cell;
///
/// let cells = parse_gesture("0,4 0,3  0,0").unwrap();
/// assert_eq!(cells, vec![Cell::new(0, 4), Cell::new(0, 3), Cell::new(0, 0)]);
/// ```
pub fn parse_gesture(input: &str) -> Result<Vec<Cell>, AppError> {
    let invalid = |reason: String| AppError::InvalidGesture {
        input: input.to_string(),
        reason,
    };

    let cells = input
        .split_whitespace()
        .map(|token| {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| invalid(format!("'{}' is not a row,col pair", token)))?;
            let row = row
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid(format!("row '{}' is not a number", row)))?;
            let col = col
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid(format!("column '{}' is not a number", col)))?;
            Ok(Cell::new(row, col))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    if cells.is_empty() {
        return Err(invalid("a gesture needs at least one cell".to_string()));
    }

    Ok(cells)
}
