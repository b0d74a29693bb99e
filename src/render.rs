use std::collections::HashMap;

use owo_colors::OwoColorize;

use crate::mindmap::{Layout, NodeKind, PositionedNode};
use crate::puzzle::{Cell, GridMatchState, WordFound};

pub const MAX_LABEL_LEN: usize = 40;

/// Render a layout as an indented table, one placed node per line, followed
/// by the ids the layout left out.
pub fn render_layout(layout: &Layout) -> String {
    if layout.is_empty() && layout.omitted.is_empty() {
        return String::new();
    }

    // Ring depth follows the edges, not the declared kinds.
    let mut depth: HashMap<&str, usize> = HashMap::new();
    if let Some(root) = layout.positions.first() {
        depth.insert(root.id.as_str(), 0);
    }
    for edge in &layout.edges {
        let parent_depth = depth.get(edge.source_id.as_str()).copied().unwrap_or(0);
        depth.insert(edge.target_id.as_str(), parent_depth + 1);
    }

    let mut output = String::new();
    for node in &layout.positions {
        let level = depth.get(node.id.as_str()).copied().unwrap_or(0);
        output.push_str(&"  ".repeat(level));
        output.push_str(&format_node_line(node));
        output.push('\n');
    }

    if !layout.omitted.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} {}\n",
            "omitted:".yellow().bold(),
            layout.omitted.join(", ").bright_black()
        ));
    }

    output
}

pub fn node_marker(kind: NodeKind) -> String {
    match kind {
        NodeKind::Subject => "◉".purple().to_string(),
        NodeKind::Category => "◈".bright_green().to_string(),
        NodeKind::Concept => "○".cyan().to_string(),
    }
}

pub fn format_node_line(node: &PositionedNode) -> String {
    let label = truncate_label(&node.label);
    let label = match node.kind {
        NodeKind::Subject => label.purple().bold().to_string(),
        NodeKind::Category => label.bright_green().to_string(),
        NodeKind::Concept => label,
    };
    format!(
        "{} {} {} {}",
        node_marker(node.kind),
        node.id.bright_black(),
        label,
        format!("({:.1}, {:.1})", node.x, node.y).dimmed()
    )
}

pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_LEN {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX_LABEL_LEN - 1).collect();
        format!("{}…", head)
    }
}

/// Render the letter grid. Cells in the current selection are yellow, other
/// found cells are green.
pub fn render_grid(state: &GridMatchState) -> String {
    let mut output = String::new();

    for (row, letters) in state.grid().rows().enumerate() {
        let line: Vec<String> = letters
            .iter()
            .enumerate()
            .map(|(col, letter)| {
                let cell = Cell::new(row, col);
                if state.is_selected(cell) {
                    letter.yellow().bold().to_string()
                } else if state.is_found(cell) {
                    letter.bright_green().bold().to_string()
                } else {
                    letter.bright_black().to_string()
                }
            })
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }

    output
}

/// Summarize found and remaining words.
pub fn render_progress(state: &GridMatchState) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}/{}\n",
        "found".bold(),
        state.found_count(),
        state.total_count()
    ));

    for word in state.found_words() {
        output.push_str(&format!("  {} {}\n", "✓".bright_green(), word.bright_green()));
    }
    for word in state.remaining_words() {
        output.push_str(&format!("  {} {}\n", "·".bright_black(), word.bright_black()));
    }

    if state.is_complete() {
        output.push_str(&format!("{}\n", "All words found!".bright_green().bold()));
    }

    output
}

pub fn format_found(found: &WordFound) -> String {
    format!(
        "{} found '{}' at {} {}",
        "✓".bright_green(),
        found.word.bright_green().bold(),
        found.cell,
        format!(
            "(screen {:.1}, {:.1})",
            found.screen_position.x, found.screen_position.y
        )
        .dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmap::{layout, MindMap, TreeNode};
    use crate::puzzle::{AnswerSpan, LetterGrid};

    fn strip_ansi(s: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn puzzle() -> GridMatchState {
        let grid = LetterGrid::from_lines(&["SOLX", "MARX"]).unwrap();
        GridMatchState::new(
            grid,
            vec![
                AnswerSpan::new("sol", (0, 0), (0, 2)),
                AnswerSpan::new("mar", (1, 0), (1, 2)),
            ],
        )
    }

    #[test]
    fn test_render_layout_indents_by_ring() {
        let tree = MindMap::new(vec![
            TreeNode::subject("1", "Music"),
            TreeNode::category("2", "Theory", "1"),
            TreeNode::concept("3", "Scales", "2"),
            TreeNode::concept("9", "Lost", "404"),
        ]);
        let stripped = strip_ansi(&render_layout(&layout(&tree)));
        let lines: Vec<&str> = stripped.lines().collect();

        assert_eq!(lines[0], "◉ 1 Music (500.0, 300.0)");
        assert!(lines[1].starts_with("  ◈ 2 Theory (500.0, 50.0)"));
        assert!(lines[2].starts_with("    ○ 3 Scales"));
        assert_eq!(lines.last(), Some(&"omitted: 9"));
    }

    #[test]
    fn test_render_empty_layout() {
        assert_eq!(render_layout(&Layout::default()), "");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Harmony"), "Harmony");

        let long = "ñ".repeat(MAX_LABEL_LEN + 5);
        let truncated = truncate_label(&long);
        assert_eq!(truncated.chars().count(), MAX_LABEL_LEN);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_render_grid_plain_letters() {
        let stripped = strip_ansi(&render_grid(&puzzle()));
        assert_eq!(stripped, "S O L X\nM A R X\n");
    }

    #[test]
    fn test_render_grid_highlights() {
        let mut state = puzzle();
        state.begin_select((0, 0));
        state.extend_select((0, 2));
        state.end_select();
        state.begin_select((1, 0));

        let output = render_grid(&state);
        let found = "S".bright_green().bold().to_string();
        let selected = "M".yellow().bold().to_string();
        assert!(output.starts_with(&found));
        assert!(output.contains(&selected));
    }

    #[test]
    fn test_render_grid_selection_wins_over_found() {
        let mut state = puzzle();
        state.begin_select((0, 0));
        state.extend_select((0, 2));
        state.end_select();
        state.begin_select((0, 1));

        let output = render_grid(&state);
        assert!(output.contains(&"O".yellow().bold().to_string()));
        assert!(!output.contains(&"O".bright_green().bold().to_string()));
    }

    #[test]
    fn test_render_progress() {
        let mut state = puzzle();
        state.begin_select((1, 2));
        state.extend_select((1, 0));
        state.end_select();

        let stripped = strip_ansi(&render_progress(&state));
        assert_eq!(stripped, "found 1/2\n  ✓ mar\n  · sol\n");

        state.begin_select((0, 0));
        state.extend_select((0, 2));
        state.end_select();
        assert!(strip_ansi(&render_progress(&state)).ends_with("All words found!\n"));
    }

    #[test]
    fn test_format_found() {
        let mut state = puzzle();
        state.begin_select((0, 0));
        state.extend_select((0, 2));
        let found = state.end_select().unwrap();

        assert_eq!(
            strip_ansi(&format_found(&found)),
            "✓ found 'sol' at 0,2 (screen 108.0, 20.0)"
        );
    }
}
