use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use serde::Serialize;
use tracing::{debug, warn};

use super::tree::{ChildIndex, MindMap, NodeKind, TreeNode};

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `self` in direction `angle` (radians,
    /// y grows downward so positive angles turn clockwise on screen).
    pub fn polar_offset(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A directed parent to child edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_id: source.into(),
            target_id: target.into(),
        }
    }

    /// Identifier used by rendering surfaces to key edges.
    pub fn id(&self) -> String {
        format!("{}-{}", self.source_id, self.target_id)
    }
}

/// A node with its computed canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
}

impl PositionedNode {
    fn place(node: &TreeNode, at: Point) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            kind: node.kind,
            x: at.x,
            y: at.y,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Geometry constants of the radial layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Where the subject is placed.
    pub center: Point,
    /// Distance from the subject to each category.
    pub level_spacing: f64,
    /// Concept distance from its category, as a fraction of `level_spacing`.
    pub concept_ratio: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center: Point::new(500.0, 300.0),
            level_spacing: 250.0,
            concept_ratio: 0.8,
        }
    }
}

impl LayoutParams {
    pub fn concept_radius(&self) -> f64 {
        self.level_spacing * self.concept_ratio
    }
}

/// Layout result: positions and edges in emission order, plus the ids of
/// nodes that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub positions: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    /// Nodes left out because their parent never resolved to a placed node.
    pub omitted: Vec<String>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position_of(&self, id: &str) -> Option<&PositionedNode> {
        self.positions.iter().find(|p| p.id == id)
    }
}

/// Angle of the `index`-th of `count` categories. Index 0 sits at the top
/// and the rest follow clockwise.
pub fn category_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

/// Angle of the `index`-th of `count` concepts hanging off a category at
/// `category_angle`. Several concepts spread over a quarter turn; a single
/// concept continues straight out along the category's own angle.
pub fn concept_angle(category_angle: f64, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return category_angle;
    }
    category_angle - FRAC_PI_4 + FRAC_PI_2 * (index as f64 / (count - 1) as f64)
}

/// Compute the radial layout with default parameters.
pub fn layout(tree: &MindMap) -> Layout {
    layout_with(tree, &LayoutParams::default())
}

/// Compute the radial layout of a subject / category / concept tree.
///
/// - The subject sits at `params.center`.
/// - Children of the subject form a ring at `level_spacing`, in input order,
///   starting at the top and proceeding clockwise.
/// - Children of each ring node sit at `concept_radius()` from it, fanned
///   across a quarter turn centred on the ring node's own angle.
///
/// Nodes that never hang off a placed node are omitted rather than treated
/// as errors. A tree without a subject yields an empty layout.
pub fn layout_with(tree: &MindMap, params: &LayoutParams) -> Layout {
    let Some(subject_idx) = tree.nodes.iter().position(|n| n.kind == NodeKind::Subject) else {
        if !tree.is_empty() {
            warn!(nodes = tree.len(), "mind map has no subject node");
        }
        return Layout {
            positions: Vec::new(),
            edges: Vec::new(),
            omitted: tree.nodes.iter().map(|n| n.id.clone()).collect(),
        };
    };

    let index = ChildIndex::build(tree);
    let mut placed = vec![false; tree.nodes.len()];
    let mut positions = Vec::with_capacity(tree.nodes.len());
    let mut edges = Vec::new();

    let subject = &tree.nodes[subject_idx];
    positions.push(PositionedNode::place(subject, params.center));
    placed[subject_idx] = true;

    let categories: Vec<usize> = index
        .children_of(&subject.id)
        .iter()
        .copied()
        .filter(|&idx| idx != subject_idx)
        .collect();
    let category_count = categories.len();

    for (i, &cat_idx) in categories.iter().enumerate() {
        let category = &tree.nodes[cat_idx];
        let angle = category_angle(i, category_count);
        let anchor = params.center.polar_offset(params.level_spacing, angle);

        positions.push(PositionedNode::place(category, anchor));
        edges.push(Edge::new(&subject.id, &category.id));
        placed[cat_idx] = true;

        let concepts: Vec<usize> = index
            .children_of(&category.id)
            .iter()
            .copied()
            .filter(|&idx| !placed[idx])
            .collect();
        let concept_count = concepts.len();

        for (j, &concept_idx) in concepts.iter().enumerate() {
            let concept = &tree.nodes[concept_idx];
            let at = anchor.polar_offset(
                params.concept_radius(),
                concept_angle(angle, j, concept_count),
            );

            positions.push(PositionedNode::place(concept, at));
            edges.push(Edge::new(&category.id, &concept.id));
            placed[concept_idx] = true;
        }
    }

    let omitted: Vec<String> = tree
        .nodes
        .iter()
        .zip(&placed)
        .filter(|(_, placed)| !**placed)
        .map(|(node, _)| node.id.clone())
        .collect();

    if !omitted.is_empty() {
        warn!(count = omitted.len(), ids = ?omitted, "omitted unplaceable mind map nodes");
    }
    debug!(
        positions = positions.len(),
        edges = edges.len(),
        categories = category_count,
        "computed radial layout"
    );

    Layout {
        positions,
        edges,
        omitted,
    }
}
