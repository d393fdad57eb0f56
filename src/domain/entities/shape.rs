//! Structural shape of a menu tree
//!
//! A plain, comparable snapshot of kinds, labels and nesting. Used to check
//! that a proxy tree is isomorphic to its source.

use serde::Serialize;

use crate::domain::value_objects::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeNode {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeNode>,
}

impl ShapeNode {
    pub fn leaf(kind: NodeKind, label: Option<String>) -> Self {
        Self {
            kind,
            label,
            children: Vec::new(),
        }
    }

    pub fn branch(title: impl Into<String>, children: Vec<ShapeNode>) -> Self {
        Self {
            kind: NodeKind::Menu,
            label: Some(title.into()),
            children,
        }
    }

    /// Count this node and all of its descendants
    pub fn count(&self) -> usize {
        1 + count_nodes(&self.children)
    }
}

/// Total number of nodes in a forest
pub fn count_nodes(nodes: &[ShapeNode]) -> usize {
    nodes.iter().map(ShapeNode::count).sum()
}

/// Drop unsupported nodes at every level
pub fn without_unsupported(nodes: &[ShapeNode]) -> Vec<ShapeNode> {
    nodes
        .iter()
        .filter(|n| n.kind != NodeKind::Unsupported)
        .map(|n| ShapeNode {
            kind: n.kind,
            label: n.label.clone(),
            children: without_unsupported(&n.children),
        })
        .collect()
}
