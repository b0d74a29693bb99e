pub mod commands;
pub mod content;
pub mod context;
pub mod error_fmt;
pub mod logging;
pub mod mindmap;
pub mod puzzle;
pub mod render;
pub mod settings;

// Re-export the engine types a host embeds
pub use content::{parse_content, parse_mind_map, parse_word_search, Content, ContentError};
pub use context::CanvasContext;
pub use mindmap::{layout, Layout, MindMap, TreeLayoutState, TreeNode};
pub use puzzle::{Cell, GridMatchState, WordFound};
pub use settings::{Settings, SettingsError};
