use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Level of a node in the three-level mind map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[serde(rename = "general_subject")]
    Subject,
    Category,
    #[serde(alias = "sub_category")]
    Concept,
}

impl NodeKind {
    /// Depth below the subject: 0, 1 or 2.
    pub fn depth(self) -> usize {
        match self {
            NodeKind::Subject => 0,
            NodeKind::Category => 1,
            NodeKind::Concept => 2,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Subject => "subject",
            NodeKind::Category => "category",
            NodeKind::Concept => "concept",
        };
        f.write_str(name)
    }
}

/// A labeled node pointing at its parent by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, rename = "parent", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl TreeNode {
    pub fn subject(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: NodeKind::Subject,
            parent_id: None,
        }
    }

    pub fn category(
        id: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: NodeKind::Category,
            parent_id: Some(parent.into()),
        }
    }

    pub fn concept(
        id: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: NodeKind::Concept,
            parent_id: Some(parent.into()),
        }
    }
}

/// Layout input: the flat node list as delivered by the content backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    pub nodes: Vec<TreeNode>,
}

impl MindMap {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// The subject node. With several candidates the first one wins.
    pub fn subject(&self) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Subject)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parent id to child node indices, in input order.
///
/// Built once per layout so child lookup is a map hit instead of a scan of
/// the whole node list.
#[derive(Debug, Default)]
pub struct ChildIndex<'a> {
    children: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ChildIndex<'a> {
    pub fn build(tree: &'a MindMap) -> Self {
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (idx, node) in tree.nodes.iter().enumerate() {
            if let Some(parent) = node.parent_id.as_deref() {
                children.entry(parent).or_default().push(idx);
            }
        }
        Self { children }
    }

    pub fn children_of(&self, id: &str) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
