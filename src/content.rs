//! Payload shapes returned by the content-generation backend.
//!
//! Both payloads arrive either bare or wrapped in the host API envelope
//! `{ "success": bool, "data": ..., "error": ... }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mindmap::{MindMap, TreeNode};
use crate::puzzle::{AnswerSpan, GridError, GridMatchState, LetterGrid};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("backend reported failure: {0}")]
    Backend(String),
    #[error("envelope reports success but carries no data")]
    MissingData,
    #[error("document is neither a mind map nor a word search")]
    UnknownContent,
    #[error("invalid word search: {0}")]
    Grid(#[from] GridError),
}

/// Edge as sent by the backend. Layout derives its own edges from parent
/// ids, so these are kept only for round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapResponse {
    #[serde(default)]
    pub general_subject: String,
    pub nodes: Vec<TreeNode>,
    #[serde(default)]
    pub edges: Vec<WireEdge>,
}

impl MindMapResponse {
    pub fn into_tree(self) -> MindMap {
        MindMap::new(self.nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSearchResponse {
    pub grid: Vec<Vec<String>>,
    pub answers: Vec<AnswerSpan>,
}

impl WordSearchResponse {
    /// Validate the grid and build a fresh matching state. Answers outside
    /// the grid do not fail the conversion; they are left unmatchable.
    pub fn into_state(self) -> Result<GridMatchState, GridError> {
        let grid = LetterGrid::new(self.grid)?;
        Ok(GridMatchState::new(grid, self.answers))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ContentError> {
        if !self.success {
            return Err(ContentError::Backend(
                self.error
                    .unwrap_or_else(|| "Unknown error occurred".to_string()),
            ));
        }
        self.data.ok_or(ContentError::MissingData)
    }
}

fn is_envelope(value: &serde_json::Value) -> bool {
    value.get("success").is_some()
}

fn parse_payload<T: DeserializeOwned>(json: &str) -> Result<T, ContentError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if is_envelope(&value) {
        let envelope: Envelope<T> = serde_json::from_value(value)?;
        return envelope.into_result();
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a mind-map payload.
///
/// ```
/// use learnkit::content::parse_mind_map;
///
/// let json = r#"{
///   "success": true,
///   "data": {
///     "general_subject": "Music",
///     "nodes": [
///       {"id": "1", "label": "Music", "type": "general_subject"},
///       {"id": "2", "label": "Theory", "type": "category", "parent": "1"}
///     ],
///     "edges": [{"source": "1", "target": "2"}]
///   }
/// }"#;
///
/// let map = parse_mind_map(json).unwrap();
/// assert_eq!(map.general_subject, "Music");
/// assert_eq!(map.nodes.len(), 2);
/// ```
pub fn parse_mind_map(json: &str) -> Result<MindMapResponse, ContentError> {
    parse_payload(json)
}

/// Parse a word-search payload. Grid shape is checked later, by
/// [`WordSearchResponse::into_state`].
pub fn parse_word_search(json: &str) -> Result<WordSearchResponse, ContentError> {
    parse_payload(json)
}

/// Either kind of backend content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    MindMap(MindMapResponse),
    WordSearch(WordSearchResponse),
}

/// Parse a document holding either payload, bare or enveloped, telling them
/// apart by their fields.
pub fn parse_content(json: &str) -> Result<Content, ContentError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let body = if is_envelope(&value) {
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(value)?;
        envelope.into_result()?
    } else {
        value
    };

    if body.get("nodes").is_some() {
        Ok(Content::MindMap(serde_json::from_value(body)?))
    } else if body.get("grid").is_some() {
        Ok(Content::WordSearch(serde_json::from_value(body)?))
    } else {
        Err(ContentError::UnknownContent)
    }
}
