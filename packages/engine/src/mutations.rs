//! # Tree Mutations
//!
//! The four edit operations over a page's node sequence.
//!
//! ## Semantics
//!
//! ### Insert
//! - Appends to the top level or to a matched parent's children
//! - A non-field node never enters a `Form` (rejected whole)
//! - Missing parent: input returned unchanged
//!
//! ### Update
//! - Shallow merge of a [`NodePatch`]; identity preserved
//! - Missing id: input returned unchanged
//!
//! ### Remove
//! - Removes the node and every descendant; nothing else changes
//!
//! ### Duplicate
//! - Deep copy with fresh ids throughout, placed as the next sibling
//!
//! Every operation takes the current tree and returns a new one; nodes off
//! the path to the target are carried over unchanged. None of them can
//! fail: absence of a target is a no-op, never an error, which keeps
//! editing resilient to out-of-order UI events.

use crate::NodePatch;
use pegboard_model::{find_node, IdGenerator, Node, NodeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single edit operation, serializable so gesture handlers and tooling
/// can queue and replay edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a node at the top level or under a parent, optionally tagging
    /// it with the column key of a multi-column group.
    Insert {
        node: Node,
        parent_id: Option<String>,
        column_key: Option<String>,
    },

    /// Merge a partial attribute set over the node with the given id.
    Update { node_id: String, patch: NodePatch },

    /// Remove the node with the given id and its entire subtree.
    Remove { node_id: String },

    /// Deep-clone the subtree at the given id, fresh ids throughout,
    /// inserted as the next sibling of the original.
    Duplicate { node_id: String },
}

impl Mutation {
    /// Apply the mutation, producing the successor tree.
    pub fn apply(&self, nodes: &[Node], ids: &mut IdGenerator) -> Vec<Node> {
        match self {
            Mutation::Insert {
                node,
                parent_id,
                column_key,
            } => insert(nodes, node.clone(), parent_id.as_deref(), column_key.as_deref()),
            Mutation::Update { node_id, patch } => update(nodes, node_id, patch),
            Mutation::Remove { node_id } => remove(nodes, node_id),
            Mutation::Duplicate { node_id } => duplicate(nodes, node_id, ids),
        }
    }
}

/// Insert `node` under `parent_id`, or at the top level when absent.
///
/// The parent must be a container; a `Form` parent only admits field
/// leaves. A violated constraint or a missing parent returns the input
/// tree unchanged.
pub fn insert(
    nodes: &[Node],
    mut node: Node,
    parent_id: Option<&str>,
    column_key: Option<&str>,
) -> Vec<Node> {
    let Some(parent_id) = parent_id else {
        let mut out = nodes.to_vec();
        node.group_key = column_key.map(str::to_string);
        out.push(node);
        return out;
    };

    match find_node(nodes, parent_id) {
        None => {
            debug!(parent_id, "insert target not found; ignoring");
            nodes.to_vec()
        }
        Some(parent) if !parent.kind.is_container() => {
            debug!(parent_id, kind = %parent.kind, "insert into leaf; ignoring");
            nodes.to_vec()
        }
        Some(parent) if parent.kind == NodeKind::Form && !node.is_field_leaf() => {
            debug!(parent_id, kind = %node.kind, "non-field node under form; ignoring");
            nodes.to_vec()
        }
        Some(_) => {
            node.group_key = column_key.map(str::to_string);
            insert_under(nodes, parent_id, &node).0
        }
    }
}

fn insert_under(nodes: &[Node], parent_id: &str, new_node: &Node) -> (Vec<Node>, bool) {
    let mut inserted = false;
    let out = nodes
        .iter()
        .map(|node| {
            if inserted {
                return node.clone();
            }
            if node.id == parent_id {
                let mut parent = node.clone();
                parent.children.push(new_node.clone());
                inserted = true;
                return parent;
            }
            let (children, found) = insert_under(&node.children, parent_id, new_node);
            if found {
                inserted = true;
                let mut rebuilt = node.clone();
                rebuilt.children = children;
                rebuilt
            } else {
                node.clone()
            }
        })
        .collect();
    (out, inserted)
}

/// Merge `patch` over the node with `node_id`, anywhere in the tree.
///
/// A `children` replacement that would put a non-field node under a `Form`
/// rejects the whole patch.
pub fn update(nodes: &[Node], node_id: &str, patch: &NodePatch) -> Vec<Node> {
    match find_node(nodes, node_id) {
        None => {
            debug!(node_id, "update target not found; ignoring");
            nodes.to_vec()
        }
        Some(target) => {
            if target.kind == NodeKind::Form {
                if let Some(children) = &patch.children {
                    if !children.iter().all(Node::is_field_leaf) {
                        debug!(node_id, "form children must be field leaves; ignoring");
                        return nodes.to_vec();
                    }
                }
            }
            update_in(nodes, node_id, patch).0
        }
    }
}

fn update_in(nodes: &[Node], node_id: &str, patch: &NodePatch) -> (Vec<Node>, bool) {
    let mut updated = false;
    let out = nodes
        .iter()
        .map(|node| {
            if updated {
                return node.clone();
            }
            if node.id == node_id {
                let mut merged = node.clone();
                patch.merge_into(&mut merged);
                updated = true;
                return merged;
            }
            let (children, found) = update_in(&node.children, node_id, patch);
            if found {
                updated = true;
                let mut rebuilt = node.clone();
                rebuilt.children = children;
                rebuilt
            } else {
                node.clone()
            }
        })
        .collect();
    (out, updated)
}

/// Remove the node with `node_id` and its entire subtree, wherever it
/// occurs. Siblings and ancestors are preserved unchanged.
pub fn remove(nodes: &[Node], node_id: &str) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id != node_id)
        .map(|node| {
            let mut kept = node.clone();
            kept.children = remove(&node.children, node_id);
            kept
        })
        .collect()
}

/// Deep-clone the subtree rooted at `node_id` with fresh ids throughout and
/// insert the clone as the next sibling of the original.
pub fn duplicate(nodes: &[Node], node_id: &str, ids: &mut IdGenerator) -> Vec<Node> {
    let (out, found) = duplicate_in(nodes, node_id, ids);
    if !found {
        debug!(node_id, "duplicate target not found; ignoring");
    }
    out
}

fn duplicate_in(nodes: &[Node], node_id: &str, ids: &mut IdGenerator) -> (Vec<Node>, bool) {
    if let Some(index) = nodes.iter().position(|node| node.id == node_id) {
        let mut out = nodes.to_vec();
        let clone = reissue_ids(&nodes[index], ids);
        out.insert(index + 1, clone);
        return (out, true);
    }

    let mut duplicated = false;
    let out = nodes
        .iter()
        .map(|node| {
            if duplicated {
                return node.clone();
            }
            let (children, found) = duplicate_in(&node.children, node_id, ids);
            if found {
                duplicated = true;
                let mut rebuilt = node.clone();
                rebuilt.children = children;
                rebuilt
            } else {
                node.clone()
            }
        })
        .collect();
    (out, duplicated)
}

fn reissue_ids(node: &Node, ids: &mut IdGenerator) -> Node {
    let mut copy = node.clone();
    copy.id = ids.next_id();
    copy.children = node.children.iter().map(|c| reissue_ids(c, ids)).collect();
    copy
}
