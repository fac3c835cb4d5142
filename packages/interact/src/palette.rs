use pegboard_model::{IdGenerator, Node, NodeKind};

/// Key naming column `index` (1-based) of a multi-column group.
pub fn column_key(index: u32) -> String {
    format!("col-{index}")
}

/// Pre-composed palette template: a row group declaring `columns` columns.
///
/// Children dropped into one of its column regions are tagged with that
/// column's key and the renderer partitions them by key, independent of
/// sibling order. Built fresh per gesture so ids stay unique.
pub fn column_group(columns: u32, ids: &mut IdGenerator) -> Node {
    let mut node = Node::with_defaults(NodeKind::RowGroup, ids.next_id());
    node.columns = Some(columns.max(1));
    node
}
