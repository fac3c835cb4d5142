use pegboard_model::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// What is being dragged.
///
/// A palette entry represents a node *kind*; entries for pre-composed
/// templates (a multi-column group) additionally carry the pre-built
/// subtree to insert. An existing node is dragged by id and moves with its
/// whole subtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DragSource {
    Palette {
        kind: NodeKind,
        /// Pre-built subtree for template entries; minted fresh per gesture.
        template: Option<Node>,
    },
    Existing {
        node_id: String,
    },
}

impl DragSource {
    pub fn palette(kind: NodeKind) -> Self {
        DragSource::Palette {
            kind,
            template: None,
        }
    }

    pub fn template(node: Node) -> Self {
        DragSource::Palette {
            kind: node.kind.clone(),
            template: Some(node),
        }
    }

    pub fn existing(node_id: impl Into<String>) -> Self {
        DragSource::Existing {
            node_id: node_id.into(),
        }
    }
}
