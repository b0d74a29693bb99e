use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::tree::{MindMap, NodeKind, TreeNode};

/// A structural problem in a mind map. Layout tolerates all of these by
/// omitting what it cannot place; they are reported so a host can warn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeIssue {
    #[error("mind map has no subject node")]
    MissingSubject,
    #[error("node '{id}' is an additional subject; only '{subject_id}' is used")]
    ExtraSubject { id: String, subject_id: String },
    #[error("duplicate node id '{0}'")]
    DuplicateId(String),
    #[error("node '{id}' references missing parent '{parent_id}'")]
    OrphanNode { id: String, parent_id: String },
    #[error("node '{id}' has no parent")]
    MissingParent { id: String },
    #[error("node '{id}' is a {found} but sits where a {expected} belongs")]
    UnexpectedKind {
        id: String,
        expected: NodeKind,
        found: NodeKind,
    },
    #[error("node '{id}' is not connected to the subject")]
    Detached { id: String },
    #[error("node '{id}' is nested deeper than concept level")]
    TooDeep { id: String },
}

impl TreeIssue {
    /// Id of the node the issue is about, if any.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            TreeIssue::MissingSubject => None,
            TreeIssue::ExtraSubject { id, .. }
            | TreeIssue::OrphanNode { id, .. }
            | TreeIssue::MissingParent { id }
            | TreeIssue::UnexpectedKind { id, .. }
            | TreeIssue::Detached { id }
            | TreeIssue::TooDeep { id } => Some(id),
            TreeIssue::DuplicateId(id) => Some(id),
        }
    }
}

/// Collect every structural issue in `tree`.
///
/// Checks that:
/// - Exactly one subject exists
/// - Node ids are unique
/// - Every parent reference resolves
/// - Each node's kind matches its depth below the subject
/// - Nothing hangs below concept level
pub fn validate_tree(tree: &MindMap) -> Vec<TreeIssue> {
    let mut issues = Vec::new();

    let subject_id = match tree.subject() {
        Some(subject) => Some(subject.id.as_str()),
        None => {
            if !tree.is_empty() {
                issues.push(TreeIssue::MissingSubject);
            }
            None
        }
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for node in &tree.nodes {
        if !seen.insert(node.id.as_str()) {
            issues.push(TreeIssue::DuplicateId(node.id.clone()));
        }
    }

    // First occurrence wins when ids collide.
    let mut by_id: HashMap<&str, &TreeNode> = HashMap::new();
    for node in &tree.nodes {
        by_id.entry(node.id.as_str()).or_insert(node);
    }

    for node in &tree.nodes {
        if node.kind == NodeKind::Subject {
            if let Some(subject_id) = subject_id {
                if node.id != subject_id {
                    issues.push(TreeIssue::ExtraSubject {
                        id: node.id.clone(),
                        subject_id: subject_id.to_string(),
                    });
                }
            }
            continue;
        }

        let Some(parent_id) = node.parent_id.as_deref() else {
            issues.push(TreeIssue::MissingParent {
                id: node.id.clone(),
            });
            continue;
        };

        if !by_id.contains_key(parent_id) {
            issues.push(TreeIssue::OrphanNode {
                id: node.id.clone(),
                parent_id: parent_id.to_string(),
            });
            continue;
        }

        let Some(subject_id) = subject_id else {
            continue;
        };
        let Some(depth) = depth_below_subject(node.id.as_str(), &by_id, subject_id) else {
            issues.push(TreeIssue::Detached {
                id: node.id.clone(),
            });
            continue;
        };

        let expected = match depth {
            1 => NodeKind::Category,
            2 => NodeKind::Concept,
            _ => {
                issues.push(TreeIssue::TooDeep {
                    id: node.id.clone(),
                });
                continue;
            }
        };

        if node.kind != expected {
            issues.push(TreeIssue::UnexpectedKind {
                id: node.id.clone(),
                expected,
                found: node.kind,
            });
        }
    }

    issues
}

/// Number of parent hops from `id` to the subject, or None when the chain
/// breaks or loops.
fn depth_below_subject(
    id: &str,
    by_id: &HashMap<&str, &TreeNode>,
    subject_id: &str,
) -> Option<usize> {
    let mut current = id;
    let mut depth = 0;
    let mut visited: HashSet<&str> = HashSet::new();

    while current != subject_id {
        if !visited.insert(current) {
            return None;
        }
        let node = by_id.get(current)?;
        current = node.parent_id.as_deref()?;
        depth += 1;
    }

    Some(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> MindMap {
        MindMap::new(vec![
            TreeNode::subject("s", "Subject"),
            TreeNode::category("a", "A", "s"),
            TreeNode::concept("a1", "A1", "a"),
            TreeNode::concept("a2", "A2", "a"),
            TreeNode::category("b", "B", "s"),
        ])
    }

    #[test]
    fn test_valid_tree_has_no_issues() {
        assert!(validate_tree(&small_tree()).is_empty());
    }

    #[test]
    fn test_empty_tree_has_no_issues() {
        assert!(validate_tree(&MindMap::default()).is_empty());
    }

    #[test]
    fn test_missing_subject() {
        let tree = MindMap::new(vec![TreeNode::category("a", "A", "s")]);
        let issues = validate_tree(&tree);
        assert_eq!(
            issues,
            vec![
                TreeIssue::MissingSubject,
                TreeIssue::OrphanNode {
                    id: "a".to_string(),
                    parent_id: "s".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extra_subject() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::subject("t", "Another"));
        assert_eq!(
            validate_tree(&tree),
            vec![TreeIssue::ExtraSubject {
                id: "t".to_string(),
                subject_id: "s".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_id() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::concept("a1", "Again", "a"));
        assert_eq!(
            validate_tree(&tree),
            vec![TreeIssue::DuplicateId("a1".to_string())]
        );
    }

    #[test]
    fn test_orphan() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::concept("x", "X", "nowhere"));
        let issues = validate_tree(&tree);
        assert_eq!(
            issues,
            vec![TreeIssue::OrphanNode {
                id: "x".to_string(),
                parent_id: "nowhere".to_string(),
            }]
        );
        assert_eq!(issues[0].node_id(), Some("x"));
    }

    #[test]
    fn test_missing_parent() {
        let mut tree = small_tree();
        let mut loose = TreeNode::concept("c", "C", "a");
        loose.parent_id = None;
        tree.nodes.push(loose);
        assert_eq!(
            validate_tree(&tree),
            vec![TreeIssue::MissingParent { id: "c".to_string() }]
        );
    }

    #[test]
    fn test_unexpected_kind() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::concept("c", "Concept on ring", "s"));
        tree.nodes.push(TreeNode::category("d", "Category in arc", "b"));
        assert_eq!(
            validate_tree(&tree),
            vec![
                TreeIssue::UnexpectedKind {
                    id: "c".to_string(),
                    expected: NodeKind::Category,
                    found: NodeKind::Concept,
                },
                TreeIssue::UnexpectedKind {
                    id: "d".to_string(),
                    expected: NodeKind::Concept,
                    found: NodeKind::Category,
                },
            ]
        );
    }

    #[test]
    fn test_too_deep() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::concept("deep", "Deep", "a1"));
        assert_eq!(
            validate_tree(&tree),
            vec![TreeIssue::TooDeep {
                id: "deep".to_string()
            }]
        );
    }

    #[test]
    fn test_parent_cycle_is_detached() {
        let tree = MindMap::new(vec![
            TreeNode::subject("s", "Subject"),
            TreeNode::concept("x", "X", "y"),
            TreeNode::concept("y", "Y", "x"),
        ]);
        assert_eq!(
            validate_tree(&tree),
            vec![
                TreeIssue::Detached { id: "x".to_string() },
                TreeIssue::Detached { id: "y".to_string() },
            ]
        );
    }

    #[test]
    fn test_child_of_orphan_is_detached() {
        let mut tree = small_tree();
        tree.nodes.push(TreeNode::category("lost", "Lost", "nowhere"));
        tree.nodes.push(TreeNode::concept("lost1", "Lost 1", "lost"));
        assert_eq!(
            validate_tree(&tree),
            vec![
                TreeIssue::OrphanNode {
                    id: "lost".to_string(),
                    parent_id: "nowhere".to_string(),
                },
                TreeIssue::Detached {
                    id: "lost1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = TreeIssue::OrphanNode {
            id: "x".to_string(),
            parent_id: "p".to_string(),
        };
        assert_eq!(issue.to_string(), "node 'x' references missing parent 'p'");

        let issue = TreeIssue::UnexpectedKind {
            id: "c".to_string(),
            expected: NodeKind::Category,
            found: NodeKind::Concept,
        };
        assert_eq!(
            issue.to_string(),
            "node 'c' is a concept but sits where a category belongs"
        );
    }
}
