use tracing::{debug, info, warn};

use super::grid::{AnswerSpan, Cell, GridError, LetterGrid};
use crate::mindmap::Point;

/// Gesture phase. `Evaluated` only exists inside `end_select`, so it is not
/// represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Selecting,
}

/// Screen geometry of the rendered grid, used to place the found
/// notification over the last selected cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub cell_size: f64,
    pub gap: f64,
    pub origin: Point,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            gap: 4.0,
            origin: Point::new(0.0, 0.0),
        }
    }
}

impl GridMetrics {
    /// Centre of a cell in screen space.
    pub fn center_of(&self, cell: Cell) -> Point {
        let pitch = self.cell_size + self.gap;
        Point::new(
            self.origin.x + cell.col as f64 * pitch + self.cell_size / 2.0,
            self.origin.y + cell.row as f64 * pitch + self.cell_size / 2.0,
        )
    }
}

/// Emitted once per newly found word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFound {
    pub word: String,
    /// Last cell of the gesture that found the word.
    pub cell: Cell,
    pub screen_position: Point,
}

/// Selection and matching state for one word-search puzzle.
///
/// Owns the grid and answers for the lifetime of the content; loading new
/// content means building a new state.
#[derive(Debug, Clone)]
pub struct GridMatchState {
    grid: LetterGrid,
    answers: Vec<AnswerSpan>,
    selection: Vec<Cell>,
    found: Vec<String>,
    phase: Phase,
    metrics: GridMetrics,
}

impl GridMatchState {
    /// Create a state for `grid` and its answers.
    ///
    /// Answers with an endpoint outside the grid are kept, so they still count
    /// toward `total_count`, but can never be matched.
    pub fn new(grid: LetterGrid, answers: Vec<AnswerSpan>) -> Self {
        let state = Self {
            grid,
            answers,
            selection: Vec::new(),
            found: Vec::new(),
            phase: Phase::Idle,
            metrics: GridMetrics::default(),
        };
        for issue in state.unreachable_answers() {
            warn!(%issue, "answer can never be found");
        }
        state
    }

    pub fn with_metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn answers(&self) -> &[AnswerSpan] {
        &self.answers
    }

    /// Answers with an endpoint outside the grid, as bounds errors.
    pub fn unreachable_answers(&self) -> Vec<GridError> {
        self.answers
            .iter()
            .filter_map(|a| a.check_bounds(&self.grid).err())
            .collect()
    }

    fn is_reachable(&self, answer: &AnswerSpan) -> bool {
        self.grid.contains(answer.start) && self.grid.contains(answer.end)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &[Cell] {
        &self.selection
    }

    /// Words found so far, in discovery order.
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Answers not yet found, in answer order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.answers
            .iter()
            .filter(|a| !self.is_word_found(&a.word))
            .map(|a| a.word.as_str())
    }

    /// Start a gesture at `cell`. A begin while already selecting restarts
    /// the gesture.
    pub fn begin_select(&mut self, cell: impl Into<Cell>) {
        let cell = cell.into();
        debug!(%cell, "selection started");
        self.phase = Phase::Selecting;
        self.selection.clear();
        self.selection.push(cell);
    }

    /// Extend the gesture over `cell`. Repeats of the last cell and moves
    /// outside a gesture are ignored.
    pub fn extend_select(&mut self, cell: impl Into<Cell>) {
        if self.phase != Phase::Selecting {
            return;
        }
        let cell = cell.into();
        if self.selection.last() == Some(&cell) {
            return;
        }
        self.selection.push(cell);
    }

    /// Finish the gesture, evaluate it, and clear the selection.
    ///
    /// Returns the notification for a newly found word. Misses, repeats of an
    /// already found word, and ends without a begin all return `None`.
    pub fn end_select(&mut self) -> Option<WordFound> {
        if self.phase != Phase::Selecting {
            return None;
        }
        let outcome = self.evaluate();
        self.selection.clear();
        self.phase = Phase::Idle;
        outcome
    }

    fn evaluate(&mut self) -> Option<WordFound> {
        let (&first, &last) = (self.selection.first()?, self.selection.last()?);

        let Some(answer) = self
            .answers
            .iter()
            .find(|a| a.matches_endpoints(first, last) && self.is_reachable(a))
        else {
            debug!(%first, %last, "selection matched no answer");
            return None;
        };

        if self.is_word_found(&answer.word) {
            debug!(word = %answer.word, "word already found");
            return None;
        }

        let word = answer.word.clone();
        self.found.push(word.clone());
        info!(%word, found = self.found.len(), total = self.answers.len(), "word found");

        Some(WordFound {
            word,
            cell: last,
            screen_position: self.metrics.center_of(last),
        })
    }

    pub fn is_selected(&self, cell: impl Into<Cell>) -> bool {
        self.selection.contains(&cell.into())
    }

    /// True when `cell` lies in the footprint of any found answer.
    pub fn is_found(&self, cell: impl Into<Cell>) -> bool {
        let cell = cell.into();
        self.answers
            .iter()
            .any(|a| a.covers(cell) && self.is_word_found(&a.word))
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.found_count() == self.total_count()
    }
}
