//! The view-model owning all engine state for one canvas.
//!
//! `CanvasContext` holds at most one mind map and one word search. Loading
//! new content of a kind replaces the old state of that kind wholesale;
//! nothing is merged.

use tracing::{debug, info};

use crate::content::{ContentError, MindMapResponse, WordSearchResponse};
use crate::mindmap::{Layout, TreeLayoutState};
use crate::puzzle::{Cell, GridMatchState, WordFound};
use crate::settings::Settings;

/// Central owner of the canvas engines and their settings.
///
/// All gesture and load calls run synchronously on the caller's thread.
/// `generation` increases with every content load so a host can tell that
/// previously rendered state is stale.
#[derive(Debug, Default)]
pub struct CanvasContext {
    settings: Settings,
    mind_map: Option<TreeLayoutState>,
    puzzle: Option<GridMatchState>,
    generation: u64,
}

impl CanvasContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the mind map and compute its layout.
    pub fn load_mind_map(&mut self, response: MindMapResponse) -> &Layout {
        let subject = response.general_subject.clone();
        let state = TreeLayoutState::new(response.into_tree(), self.settings.layout.params());
        self.generation += 1;
        info!(
            %subject,
            nodes = state.tree().len(),
            generation = self.generation,
            "mind map loaded"
        );
        self.mind_map.insert(state).layout()
    }

    /// Replace the word search, resetting selection and found words.
    ///
    /// On a malformed grid the previous puzzle is left untouched.
    pub fn load_word_search(&mut self, response: WordSearchResponse) -> Result<(), ContentError> {
        let state = response
            .into_state()?
            .with_metrics(self.settings.grid.metrics());
        self.generation += 1;
        info!(
            words = state.total_count(),
            generation = self.generation,
            "word search loaded"
        );
        self.puzzle = Some(state);
        Ok(())
    }

    pub fn mind_map(&self) -> Option<&TreeLayoutState> {
        self.mind_map.as_ref()
    }

    pub fn puzzle(&self) -> Option<&GridMatchState> {
        self.puzzle.as_ref()
    }

    pub fn begin_select(&mut self, cell: impl Into<Cell>) {
        if let Some(puzzle) = self.puzzle.as_mut() {
            puzzle.begin_select(cell);
        } else {
            debug!("begin_select ignored: no word search loaded");
        }
    }

    pub fn extend_select(&mut self, cell: impl Into<Cell>) {
        if let Some(puzzle) = self.puzzle.as_mut() {
            puzzle.extend_select(cell);
        }
    }

    pub fn end_select(&mut self) -> Option<WordFound> {
        self.puzzle.as_mut().and_then(GridMatchState::end_select)
    }

    pub fn is_selected(&self, cell: impl Into<Cell>) -> bool {
        self.puzzle.as_ref().is_some_and(|p| p.is_selected(cell))
    }

    pub fn is_found(&self, cell: impl Into<Cell>) -> bool {
        self.puzzle.as_ref().is_some_and(|p| p.is_found(cell))
    }

    /// Words found so far; zero when nothing is loaded.
    pub fn found_count(&self) -> usize {
        self.puzzle.as_ref().map_or(0, GridMatchState::found_count)
    }

    /// Number of answers; zero when nothing is loaded.
    pub fn total_count(&self) -> usize {
        self.puzzle.as_ref().map_or(0, GridMatchState::total_count)
    }
}
