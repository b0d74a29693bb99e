//! Puzzle command - replays selection gestures against a word search.

use owo_colors::OwoColorize;

use crate::content::Content;
use crate::context::CanvasContext;
use crate::error_fmt::{AppError, ContentResultExt};
use crate::render::{format_found, render_grid, render_progress};

use super::shared::{parse_gesture, read_content};

/// Load the word search in `path`, replay each gesture in order, and print
/// the outcome of each followed by the final grid.
pub fn puzzle(ctx: &mut CanvasContext, path: &str, gestures: &[String]) -> Result<(), AppError> {
    let Content::WordSearch(response) = read_content(path)? else {
        return Err(AppError::WrongContent {
            file_path: path.to_string(),
            expected: "word search",
        });
    };

    // Reject bad gestures before touching any state
    let gestures = gestures
        .iter()
        .map(|g| parse_gesture(g).map(|cells| (g.as_str(), cells)))
        .collect::<Result<Vec<_>, _>>()?;

    ctx.load_word_search(response).with_path(path)?;

    for (input, cells) in gestures {
        let Some((first, rest)) = cells.split_first() else {
            continue;
        };
        ctx.begin_select(*first);
        for &cell in rest {
            ctx.extend_select(cell);
        }

        match ctx.end_select() {
            Some(found) => println!("{}", format_found(&found)),
            None => println!(
                "{} {}",
                "✗".bright_black(),
                format!("no new word for {}", input).bright_black()
            ),
        }
    }

    if let Some(state) = ctx.puzzle() {
        if !state.grid().is_empty() {
            println!();
            print!("{}", render_grid(state));
        }
        println!();
        print!("{}", render_progress(state));
    }

    Ok(())
}
