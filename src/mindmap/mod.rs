//! Mind map: the subject / category / concept tree and its radial layout.
//!
//! This module contains:
//! - `MindMap` / `TreeNode` - flat node list linked by parent ids
//! - `layout` - pure radial layout producing positions and edges
//! - `validate_tree` - structural diagnostics a host may surface as warnings
//! - `TreeLayoutState` - owned tree plus its current layout

mod layout;
mod tree;
mod validations;

pub use layout::{
    category_angle, concept_angle, layout, layout_with, Edge, Layout, LayoutParams, Point,
    PositionedNode,
};
pub use tree::{ChildIndex, MindMap, NodeKind, TreeNode};
pub use validations::{validate_tree, TreeIssue};

/// A mind map together with the layout computed from it.
///
/// The tree is never patched; new content means a new state.
#[derive(Debug, Clone)]
pub struct TreeLayoutState {
    tree: MindMap,
    params: LayoutParams,
    layout: Layout,
}

impl TreeLayoutState {
    pub fn new(tree: MindMap, params: LayoutParams) -> Self {
        let layout = layout_with(&tree, &params);
        Self {
            tree,
            params,
            layout,
        }
    }

    /// Recompute the layout from the tree. Always yields the same result for
    /// the same tree and parameters.
    pub fn relayout(&mut self) -> &Layout {
        self.layout = layout_with(&self.tree, &self.params);
        &self.layout
    }

    pub fn tree(&self) -> &MindMap {
        &self.tree
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn positions(&self) -> &[PositionedNode] {
        &self.layout.positions
    }

    pub fn edges(&self) -> &[Edge] {
        &self.layout.edges
    }

    /// Ids of nodes the layout could not place.
    pub fn omitted(&self) -> &[String] {
        &self.layout.omitted
    }

    pub fn issues(&self) -> Vec<TreeIssue> {
        validate_tree(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> MindMap {
        MindMap::new(vec![
            TreeNode::subject("s", "Subject"),
            TreeNode::category("a", "A", "s"),
            TreeNode::concept("a1", "A1", "a"),
            TreeNode::concept("x", "X", "missing"),
        ])
    }

    #[test]
    fn test_state_computes_layout_on_creation() {
        let state = TreeLayoutState::new(tree(), LayoutParams::default());
        assert_eq!(state.positions().len(), 3);
        assert_eq!(state.edges().len(), 2);
        assert_eq!(state.omitted(), ["x"]);
        assert_eq!(state.tree().len(), 4);
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let mut state = TreeLayoutState::new(tree(), LayoutParams::default());
        let before = state.layout().clone();
        let after = state.relayout().clone();
        assert_eq!(before, after);
        assert_eq!(state.relayout(), &before);
    }

    #[test]
    fn test_issues_reports_orphan() {
        let state = TreeLayoutState::new(tree(), LayoutParams::default());
        assert_eq!(
            state.issues(),
            vec![TreeIssue::OrphanNode {
                id: "x".to_string(),
                parent_id: "missing".to_string(),
            }]
        );
    }
}
