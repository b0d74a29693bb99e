//! Check command - validates a content file.

use owo_colors::OwoColorize;

use crate::content::Content;
use crate::context::CanvasContext;
use crate::error_fmt::{AppError, ContentResultExt};

use super::shared::read_content;

/// Validate a mind map or word search without rendering it.
pub fn check(ctx: &mut CanvasContext, path: &str) -> Result<(), AppError> {
    match read_content(path)? {
        Content::MindMap(response) => {
            let node_count = response.nodes.len();
            ctx.load_mind_map(response);
            let issues = ctx
                .mind_map()
                .map(|state| state.issues())
                .unwrap_or_default();

            if !issues.is_empty() {
                return Err(AppError::TreeIssues {
                    file_path: path.to_string(),
                    issues,
                });
            }
            println!("ok: mind map with {} nodes validated", node_count);
        }
        Content::WordSearch(response) => {
            ctx.load_word_search(response).with_path(path)?;
            let Some(state) = ctx.puzzle() else {
                return Ok(());
            };

            for issue in state.unreachable_answers() {
                println!("{}: {}", "warning".yellow().bold(), issue);
            }

            let (rows, cols) = state.grid().dimensions();
            println!(
                "ok: {}x{} word search with {} answers validated",
                rows,
                cols,
                state.total_count()
            );
        }
    }

    Ok(())
}
