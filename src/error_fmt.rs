use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::content::ContentError;
use crate::mindmap::TreeIssue;
use crate::puzzle::GridError;
use crate::settings::SettingsError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// Content file not found
    FileNotFound(String),
    /// IO error with context
    Io { context: String, source: io::Error },
    /// Content parse error with file path context
    Content {
        file_path: String,
        source: ContentError,
    },
    /// Settings error with settings path context
    Settings { path: String, source: SettingsError },
    /// File holds the other kind of content
    WrongContent {
        file_path: String,
        expected: &'static str,
    },
    /// Gesture argument could not be parsed
    InvalidGesture { input: String, reason: String },
    /// Mind map has structural issues
    TreeIssues {
        file_path: String,
        issues: Vec<TreeIssue>,
    },
    /// Output serialization failed
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileNotFound(path) => write!(f, "{}", format_file_not_found(path)),
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
            AppError::Content { file_path, source } => {
                write!(f, "{}", format_content_error(source, file_path))
            }
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(source, path))
            }
            AppError::WrongContent {
                file_path,
                expected,
            } => write!(f, "{}", format_wrong_content(file_path, expected)),
            AppError::InvalidGesture { input, reason } => {
                write!(f, "{}", format_invalid_gesture(input, reason))
            }
            AppError::TreeIssues { file_path, issues } => {
                write!(f, "{}", format_tree_issues(issues, file_path))
            }
            AppError::Json(source) => {
                write!(f, "{}", format_cli_error(&format!("failed to write json: {}", source)))
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Extension trait to add file path context to content results.
pub trait ContentResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> ContentResultExt<T> for Result<T, ContentError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Content {
            file_path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add settings path context to settings results.
pub trait SettingsResultExt<T> {
    fn with_settings_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_settings_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Settings {
            path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_file_not_found(path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("content file not found: {}\n", path.yellow()));
    out.push('\n');
    out.push_str(&format!("  {}\n", "The specified file does not exist.".dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    1. Check the spelling of the path\n");
    out.push_str("    2. Save the backend response to a file first, for example:\n");
    out.push_str(&format!(
        "       {}\n",
        "curl -s $BACKEND/mind-map > map.json".cyan()
    ));

    out
}

fn format_content_error(error: &ContentError, file_path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        ContentError::InvalidJson(json_err) => {
            out.push_str(&format!("invalid content in {}\n", file_path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", json_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    A mind map needs a {} list; a word search needs {} and {}\n",
                "nodes".cyan(),
                "grid".cyan(),
                "answers".cyan()
            ));
        }
        ContentError::Backend(message) => {
            out.push_str(&format!(
                "backend reported a failure in {}\n",
                file_path.cyan()
            ));
            out.push('\n');
            out.push_str(&format!("  {}\n", message.dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    Request the content again; the file holds an error response\n");
        }
        ContentError::MissingData => {
            out.push_str(&format!("no content in {}\n", file_path.cyan()));
            out.push('\n');
            out.push_str(&format!(
                "  {}\n",
                "The response reports success but has no data field.".dimmed()
            ));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Wrap the payload as {}\n",
                "{\"success\": true, \"data\": {...}}".cyan()
            ));
        }
        ContentError::UnknownContent => {
            out.push_str(&format!(
                "{} is neither a mind map nor a word search\n",
                file_path.cyan()
            ));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    1. For a mind map, provide a {} list\n",
                "nodes".cyan()
            ));
            out.push_str(&format!(
                "    2. For a word search, provide a {} and {}\n",
                "grid".cyan(),
                "answers".cyan()
            ));
        }
        ContentError::Grid(grid_err) => {
            out.push_str(&format!("invalid word search in {}\n", file_path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", grid_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            match grid_err {
                GridError::RaggedRows { row, expected, .. } => {
                    out.push_str(&format!(
                        "    Give row {} exactly {} letters, like every other row\n",
                        row.to_string().yellow(),
                        expected
                    ));
                }
                GridError::InvalidCell { cell, .. } => {
                    out.push_str(&format!(
                        "    Put a single letter in cell {}\n",
                        cell.to_string().yellow()
                    ));
                }
                GridError::SpanOutOfBounds { word, rows, cols, .. } => {
                    out.push_str(&format!(
                        "    Keep the start and end of '{}' inside the {}x{} grid\n",
                        word.yellow(),
                        rows,
                        cols
                    ));
                }
            }
        }
    }

    out
}

fn format_settings_error(error: &SettingsError, path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("failed to load {}\n", path.cyan()));
    out.push_str(&format!("  {} {}\n", "•".red(), error));

    if matches!(
        error,
        SettingsError::NotFinite { .. }
            | SettingsError::NotPositive { .. }
            | SettingsError::Negative { .. }
    ) {
        out.push('\n');
        out.push_str(&format!("  {}:\n", "To fix this".bold()));
        out.push_str(&format!(
            "    Correct the value in {} or remove it to use the default\n",
            path.cyan()
        ));
    }

    out
}

fn format_wrong_content(file_path: &str, expected: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!(
        "{} does not hold a {}\n",
        file_path.cyan(),
        expected.yellow()
    ));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    Mind maps go to {}; word searches go to {}\n",
        "learnkit layout".cyan(),
        "learnkit puzzle".cyan()
    ));

    out
}

fn format_invalid_gesture(input: &str, reason: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("invalid gesture '{}'\n", input.yellow()));
    out.push('\n');
    out.push_str(&format!("  {}\n", reason.dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    List the cells dragged over as row,col pairs separated by spaces:\n");
    out.push('\n');
    out.push_str(&format!("      {}\n", "--gesture \"0,0 0,1 0,2\"".cyan()));

    out
}

fn format_tree_issues(issues: &[TreeIssue], file_path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!(
        "{} structural issue{} in {}\n",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" },
        file_path.cyan()
    ));
    out.push('\n');

    for issue in issues {
        out.push_str(&format!("  {} {}\n", "•".red(), issue));
    }

    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        "Nodes affected by these issues are left out of the layout.".dimmed()
    ));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    1. Give every non-subject node a parent that exists\n");
    out.push_str("    2. Hang categories off the subject and concepts off categories\n");

    out
}
