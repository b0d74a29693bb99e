use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A grid coordinate. Serialized as a `[row, col]` pair, the shape the
/// content backend uses for answer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Cell {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for [usize; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {cell} holds '{value}', expected a single character")]
    InvalidCell { cell: Cell, value: String },
    #[error("answer '{word}' has endpoint {cell} outside the {rows}x{cols} grid")]
    SpanOutOfBounds {
        word: String,
        cell: Cell,
        rows: usize,
        cols: usize,
    },
}

/// Immutable rectangular grid of single-character strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterGrid {
    rows: Vec<Vec<String>>,
    cols: usize,
}

impl LetterGrid {
    /// Build a grid, checking every row has the same length and every cell
    /// holds exactly one character.
    ///
    /// ```
    /// use learnkit::puzzle::{GridError, LetterGrid};
    ///
    /// let grid = LetterGrid::new(vec![
    ///     vec!["A".to_string(), "B".to_string()],
    ///     vec!["C".to_string(), "D".to_string()],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.dimensions(), (2, 2));
    ///
    /// let ragged = LetterGrid::new(vec![vec!["A".to_string()], vec![]]);
    /// assert!(matches!(ragged, Err(GridError::RaggedRows { row: 1, .. })));
    /// ```
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, value) in row.iter().enumerate() {
                if value.chars().count() != 1 {
                    return Err(GridError::InvalidCell {
                        cell: Cell::new(r, c),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(Self { rows, cols })
    }

    /// Convenience constructor from one string per row.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let rows = lines
            .iter()
            .map(|line| line.as_ref().chars().map(String::from).collect())
            .collect();
        Self::new(rows)
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols == 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows.len() && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<&str> {
        self.rows
            .get(cell.row)
            .and_then(|r| r.get(cell.col))
            .map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// How an answer span runs across the grid.
///
/// Observed content only uses horizontal spans. Matching compares endpoints
/// only, so every orientation matches the same way; this is exposed so hosts
/// can decide whether to accept non-horizontal content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanOrientation {
    Horizontal,
    Vertical,
    Diagonal,
    Irregular,
}

/// A target word and the grid cells its first and last letters occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSpan {
    pub word: String,
    pub start: Cell,
    pub end: Cell,
}

impl AnswerSpan {
    pub fn new(word: impl Into<String>, start: impl Into<Cell>, end: impl Into<Cell>) -> Self {
        Self {
            word: word.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when a gesture from `first` to `last` matches this span, drawn
    /// in either direction.
    pub fn matches_endpoints(&self, first: Cell, last: Cell) -> bool {
        (self.start == first && self.end == last) || (self.start == last && self.end == first)
    }

    /// True when `cell` lies in the row/col bounding rectangle of the span.
    pub fn covers(&self, cell: Cell) -> bool {
        let (min_row, max_row) = min_max(self.start.row, self.end.row);
        let (min_col, max_col) = min_max(self.start.col, self.end.col);
        (min_row..=max_row).contains(&cell.row) && (min_col..=max_col).contains(&cell.col)
    }

    pub fn orientation(&self) -> SpanOrientation {
        let dr = self.start.row.abs_diff(self.end.row);
        let dc = self.start.col.abs_diff(self.end.col);
        match (dr, dc) {
            (0, _) => SpanOrientation::Horizontal,
            (_, 0) => SpanOrientation::Vertical,
            (r, c) if r == c => SpanOrientation::Diagonal,
            _ => SpanOrientation::Irregular,
        }
    }

    pub(crate) fn check_bounds(&self, grid: &LetterGrid) -> Result<(), GridError> {
        let (rows, cols) = grid.dimensions();
        for cell in [self.start, self.end] {
            if !grid.contains(cell) {
                return Err(GridError::SpanOutOfBounds {
                    word: self.word.clone(),
                    cell,
                    rows,
                    cols,
                });
            }
        }
        Ok(())
    }
}

fn min_max(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_deserializes_from_pair() {
        let cell: Cell = serde_json::from_str("[3, 7]").unwrap();
        assert_eq!(cell, Cell::new(3, 7));
        assert_eq!(serde_json::to_string(&cell).unwrap(), "[3,7]");
    }

    #[test]
    fn test_answer_span_from_backend_json() {
        let span: AnswerSpan =
            serde_json::from_str(r#"{"word": "notas", "start": [0, 0], "end": [0, 4]}"#).unwrap();
        assert_eq!(span.word, "notas");
        assert_eq!(span.start, Cell::new(0, 0));
        assert_eq!(span.end, Cell::new(0, 4));
        assert_eq!(span.orientation(), SpanOrientation::Horizontal);
    }

    #[test]
    fn test_grid_rejects_multi_char_cell() {
        let result = LetterGrid::new(vec![vec!["A".to_string(), "BC".to_string()]]);
        assert_eq!(
            result,
            Err(GridError::InvalidCell {
                cell: Cell::new(0, 1),
                value: "BC".to_string(),
            })
        );
    }

    #[test]
    fn test_grid_rejects_empty_cell() {
        let result = LetterGrid::new(vec![vec![String::new()]]);
        assert!(matches!(result, Err(GridError::InvalidCell { .. })));
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let grid = LetterGrid::new(vec![]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(!grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_from_lines() {
        let grid = LetterGrid::from_lines(&["NOTAS", "MUSIC"]).unwrap();
        assert_eq!(grid.dimensions(), (2, 5));
        assert_eq!(grid.get(Cell::new(1, 2)), Some("S"));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
    }

    #[test]
    fn test_matches_endpoints_either_direction() {
        let span = AnswerSpan::new("notas", (0, 0), (0, 4));
        assert!(span.matches_endpoints(Cell::new(0, 0), Cell::new(0, 4)));
        assert!(span.matches_endpoints(Cell::new(0, 4), Cell::new(0, 0)));
        assert!(!span.matches_endpoints(Cell::new(0, 0), Cell::new(0, 3)));
    }

    #[test]
    fn test_covers_uses_bounding_box_in_any_orientation() {
        // Stored end-to-start with the column decreasing
        let span = AnswerSpan::new("ab", (2, 5), (0, 3));
        assert!(span.covers(Cell::new(1, 4)));
        assert!(span.covers(Cell::new(0, 5)));
        assert!(!span.covers(Cell::new(3, 4)));
        assert!(!span.covers(Cell::new(1, 2)));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            AnswerSpan::new("x", (0, 0), (4, 0)).orientation(),
            SpanOrientation::Vertical
        );
        assert_eq!(
            AnswerSpan::new("x", (0, 0), (3, 3)).orientation(),
            SpanOrientation::Diagonal
        );
        assert_eq!(
            AnswerSpan::new("x", (0, 0), (1, 3)).orientation(),
            SpanOrientation::Irregular
        );
    }

    #[test]
    fn test_check_bounds() {
        let grid = LetterGrid::from_lines(&["ABC"]).unwrap();
        assert!(AnswerSpan::new("abc", (0, 0), (0, 2)).check_bounds(&grid).is_ok());
        assert_eq!(
            AnswerSpan::new("abcd", (0, 0), (0, 3)).check_bounds(&grid),
            Err(GridError::SpanOutOfBounds {
                word: "abcd".to_string(),
                cell: Cell::new(0, 3),
                rows: 1,
                cols: 3,
            })
        );
    }
}
