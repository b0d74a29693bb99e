//! Layout command - computes and prints the radial layout of a mind map.

use owo_colors::OwoColorize;

use crate::content::Content;
use crate::context::CanvasContext;
use crate::error_fmt::AppError;
use crate::render::render_layout;

use super::shared::read_content;

/// Lay out the mind map in `path`, printing a table or JSON.
pub fn layout(ctx: &mut CanvasContext, path: &str, json: bool) -> Result<(), AppError> {
    let Content::MindMap(response) = read_content(path)? else {
        return Err(AppError::WrongContent {
            file_path: path.to_string(),
            expected: "mind map",
        });
    };

    let layout = ctx.load_mind_map(response);

    if json {
        println!("{}", serde_json::to_string_pretty(layout)?);
        return Ok(());
    }

    if layout.is_empty() {
        println!("No nodes to lay out");
    } else {
        print!("{}", render_layout(layout));
    }

    let issue_count = ctx.mind_map().map_or(0, |state| state.issues().len());
    if issue_count > 0 {
        println!(
            "\n{}",
            format!(
                "{} structural issue{}; run `learnkit check {}` for details",
                issue_count,
                if issue_count == 1 { "" } else { "s" },
                path
            )
            .dimmed()
        );
    }

    Ok(())
}
