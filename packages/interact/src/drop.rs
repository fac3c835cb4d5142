use crate::DragSource;
use pegboard_engine::Mutation;
use pegboard_model::{find_node, IdGenerator, Node, NodeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A container region that accepts drops: a parent node id, or `None` for
/// the top level, plus the column key its region belongs to inside a
/// multi-column group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DropTarget {
    pub parent_id: Option<String>,
    pub column_key: Option<String>,
}

impl DropTarget {
    pub fn top_level() -> Self {
        Self::default()
    }

    pub fn parent(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            column_key: None,
        }
    }

    pub fn column(parent_id: impl Into<String>, column_key: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            column_key: Some(column_key.into()),
        }
    }

    /// Whether this target can take the payload right now. Checked before
    /// dispatch picks a target so a refusal falls through to the enclosing
    /// one; the mutation engine re-validates on apply either way.
    fn accepts(&self, source: &DragSource, nodes: &[Node]) -> bool {
        let parent = match &self.parent_id {
            None => return self.accepts_payload_kind(source, None),
            Some(parent_id) => match find_node(nodes, parent_id) {
                Some(parent) => parent,
                None => return false,
            },
        };

        if !parent.kind.is_container() {
            return false;
        }
        if let DragSource::Existing { node_id } = source {
            // A node cannot land inside its own subtree.
            match find_node(nodes, node_id) {
                Some(dragged) => {
                    if dragged.contains(&parent.id) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        self.accepts_payload_kind(source, Some(parent))
    }

    fn accepts_payload_kind(&self, source: &DragSource, parent: Option<&Node>) -> bool {
        let form_parent = parent.is_some_and(|p| p.kind == NodeKind::Form);
        if !form_parent {
            return true;
        }
        // Forms only take field leaves, which the palette never produces.
        match source {
            DragSource::Palette { .. } => false,
            DragSource::Existing { .. } => true, // engine decides on apply
        }
    }
}

/// Result of a dispatched drop: which target took it and the mutations that
/// realize it.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    pub target: DropTarget,
    pub mutations: Vec<Mutation>,
}

/// Resolves a drop against the stack of targets under the pointer.
///
/// Targets are held innermost-first. Dispatch walks that order and the
/// first target to accept wins; enclosing targets never see a handled
/// event, so dropping inside a nested group cannot simultaneously insert
/// at an ancestor level.
#[derive(Debug, Default)]
pub struct DropDispatcher {
    targets: Vec<DropTarget>,
}

impl DropDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next enclosing target. The first registration is the
    /// innermost region under the pointer.
    pub fn push_target(&mut self, target: DropTarget) -> &mut Self {
        self.targets.push(target);
        self
    }

    /// Resolve the drop. Returns `None` when no target accepts the payload.
    pub fn dispatch(
        &self,
        source: &DragSource,
        nodes: &[Node],
        ids: &mut IdGenerator,
    ) -> Option<DropOutcome> {
        for target in &self.targets {
            if !target.accepts(source, nodes) {
                continue;
            }
            let mutations = resolve_drop(source, target, nodes, ids);
            if mutations.is_empty() {
                continue;
            }
            return Some(DropOutcome {
                target: target.clone(),
                mutations,
            });
        }
        debug!("no drop target accepted the payload");
        None
    }
}

/// Turn an accepted drop into mutations.
///
/// A palette payload becomes one `Insert` — the pre-built template subtree
/// when present, else a fresh default-styled node of the kind. An existing
/// node becomes `Remove` + `Insert` of the detached subtree, ids preserved.
pub fn resolve_drop(
    source: &DragSource,
    target: &DropTarget,
    nodes: &[Node],
    ids: &mut IdGenerator,
) -> Vec<Mutation> {
    match source {
        DragSource::Palette { kind, template } => {
            let node = match template {
                Some(prebuilt) => prebuilt.clone(),
                None => Node::with_defaults(kind.clone(), ids.next_id()),
            };
            vec![Mutation::Insert {
                node,
                parent_id: target.parent_id.clone(),
                column_key: target.column_key.clone(),
            }]
        }
        DragSource::Existing { node_id } => {
            let Some(subtree) = find_node(nodes, node_id) else {
                debug!(%node_id, "dragged node vanished before drop");
                return Vec::new();
            };
            if let Some(parent_id) = &target.parent_id {
                if subtree.contains(parent_id) {
                    debug!(%node_id, "drop into own subtree; ignoring");
                    return Vec::new();
                }
            }
            let mut moved = subtree.clone();
            moved.group_key = target.column_key.clone();
            vec![
                Mutation::Remove {
                    node_id: node_id.clone(),
                },
                Mutation::Insert {
                    node: moved,
                    parent_id: target.parent_id.clone(),
                    column_key: target.column_key.clone(),
                },
            ]
        }
    }
}
