use pegboard_engine::{Mutation, NodePatch};
use pegboard_model::{find_node, Node, NodeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest extent a resize gesture can produce, in page units.
pub const MIN_EXTENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which edge is being dragged. Assets resize on both axes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeAxis {
    Horizontal,
    Vertical,
    Both,
}

/// Live resize state, bound to one node for the duration of a press →
/// move* → release gesture.
///
/// Every pointer move yields a complete, independent update — the new
/// extent is the pointer's distance from the node's origin, clamped to
/// [`MIN_EXTENT`] and, for horizontal drags inside a row group, to the
/// parent's current width. Nothing is queued or batched, so the visible
/// size tracks the pointer continuously.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    node_id: String,
    axis: ResizeAxis,
    origin: Point,
}

impl ResizeSession {
    /// Press on a resize affordance: enter the resizing state.
    pub fn begin(node_id: impl Into<String>, axis: ResizeAxis, origin: Point) -> Self {
        Self {
            node_id: node_id.into(),
            axis,
            origin,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn axis(&self) -> ResizeAxis {
        self.axis
    }

    /// Pointer moved while resizing. Returns the update to apply, or `None`
    /// when the node has vanished from the tree mid-gesture.
    pub fn motion(&self, pointer: Point, nodes: &[Node]) -> Option<Mutation> {
        let Some(node) = find_node(nodes, &self.node_id) else {
            debug!(node_id = %self.node_id, "resize target vanished; ignoring motion");
            return None;
        };
        let parent = find_parent(nodes, &self.node_id);

        let mut style = node.style.clone();
        if matches!(self.axis, ResizeAxis::Horizontal | ResizeAxis::Both) {
            let mut width = (pointer.x - self.origin.x).max(MIN_EXTENT);
            // Inside a row group the parent's declared width is the ceiling.
            if let Some(max) = parent
                .filter(|p| p.kind == NodeKind::RowGroup)
                .and_then(|p| p.style.width)
            {
                width = width.min(max);
            }
            style.width = Some(width);
        }
        if matches!(self.axis, ResizeAxis::Vertical | ResizeAxis::Both) {
            let mut height = (pointer.y - self.origin.y).max(MIN_EXTENT);
            if let Some(max) = parent.and_then(|p| p.style.height) {
                height = height.min(max);
            }
            style.height = Some(height);
        }

        Some(Mutation::Update {
            node_id: self.node_id.clone(),
            patch: NodePatch::style(style),
        })
    }

    /// Release: exit the resizing state.
    pub fn finish(self) {}
}

/// Immediate parent of the node with `id`, if it is not top-level.
fn find_parent<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.children.iter().any(|child| child.id == id) {
            return Some(node);
        }
        if let Some(parent) = find_parent(&node.children, id) {
            return Some(parent);
        }
    }
    None
}
