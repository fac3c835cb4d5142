//! Layout resolution tests: flex distribution, narrow-viewport override,
//! column partitioning.

use crate::layout::*;
use pegboard_model::{Node, NodeKind};

fn child(id: &str, width: Option<f64>) -> Node {
    let mut node = Node::new(NodeKind::RowGroup, id);
    node.style.width = width;
    node
}

#[test]
fn test_flex_distribution_fills_remaining_width() {
    // Two fixed children (100, 150) under a 500-wide parent leave 250 for
    // the one flexible child.
    let a = child("a", Some(100.0));
    let b = child("b", Some(150.0));
    let c = child("c", None);
    let children = vec![&a, &b, &c];

    let widths = distribute_row(&children, 500.0, Viewport::Wide);
    assert_eq!(
        widths,
        vec![Width::Fixed(100.0), Width::Fixed(150.0), Width::Share(250.0)]
    );
}

#[test]
fn test_flexible_children_share_equally() {
    let a = child("a", None);
    let b = child("b", None);
    let widths = distribute_row(&[&a, &b], 600.0, Viewport::Wide);
    assert_eq!(widths, vec![Width::Share(300.0), Width::Share(300.0)]);
}

#[test]
fn test_overcommitted_row_clamps_share_at_zero() {
    let a = child("a", Some(900.0));
    let b = child("b", None);
    let widths = distribute_row(&[&a, &b], 500.0, Viewport::Wide);
    assert_eq!(widths[1], Width::Share(0.0));
}

#[test]
fn test_narrow_viewport_forces_full_width() {
    let a = child("a", Some(100.0));
    let b = child("b", None);
    let widths = distribute_row(&[&a, &b], 500.0, Viewport::Narrow);
    assert_eq!(widths, vec![Width::Fill, Width::Fill]);
}

#[test]
fn test_full_block_takes_whole_row() {
    let block = Node::new(NodeKind::FullBlock, "block");
    let side = child("side", None);
    let widths = distribute_row(&[&block, &side], 400.0, Viewport::Wide);
    assert_eq!(widths[0], Width::Fill);
    // The full block does not eat into the flexible pool.
    assert_eq!(widths[1], Width::Share(400.0));
}

#[test]
fn test_kind_default_widths() {
    let image = Node::new(NodeKind::Image, "img");
    assert_eq!(declared_width(&image), Some(300.0));

    let form = Node::new(NodeKind::Form, "form");
    assert_eq!(declared_width(&form), Some(600.0));

    let mut sized = Node::new(NodeKind::Image, "sized");
    sized.style.width = Some(120.0);
    assert_eq!(declared_width(&sized), Some(120.0));

    assert_eq!(declared_width(&Node::new(NodeKind::Text, "t")), None);
}

#[test]
fn test_row_cells_without_columns() {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    row.children.push(Node::new(NodeKind::Text, "a"));
    row.children.push(Node::new(NodeKind::Text, "b"));

    let cells = row_cells(&row);
    assert_eq!(cells.len(), 2);
    assert!(matches!(cells[0], RowCell::Single(node) if node.id == "a"));
}

#[test]
fn test_row_cells_partition_by_group_key() {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    row.columns = Some(2);
    for (id, key) in [
        ("a", Some("col-2")),
        ("b", Some("col-1")),
        ("c", Some("col-2")),
    ] {
        let mut node = Node::new(NodeKind::Text, id);
        node.group_key = key.map(str::to_string);
        row.children.push(node);
    }

    let cells = row_cells(&row);
    assert_eq!(cells.len(), 2);
    match (&cells[0], &cells[1]) {
        (
            RowCell::Column { key: k1, members: m1 },
            RowCell::Column { key: k2, members: m2 },
        ) => {
            assert_eq!(k1, "col-1");
            assert_eq!(m1.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["b"]);
            assert_eq!(k2, "col-2");
            // Column order is by key, member order is document order.
            assert_eq!(
                m2.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
                ["a", "c"]
            );
        }
        other => panic!("expected two columns, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_group_key_stays_ungrouped() {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    row.columns = Some(2);
    let mut stray = Node::new(NodeKind::Text, "stray");
    stray.group_key = Some("col-9".to_string());
    row.children.push(stray);
    row.children.push(Node::new(NodeKind::Text, "untagged"));

    let cells = row_cells(&row);
    // Two (empty) declared columns, then the ungrouped children in order.
    assert_eq!(cells.len(), 4);
    assert!(matches!(&cells[0], RowCell::Column { members, .. } if members.is_empty()));
    assert!(matches!(cells[2], RowCell::Single(node) if node.id == "stray"));
    assert!(matches!(cells[3], RowCell::Single(node) if node.id == "untagged"));
}

#[test]
fn test_columns_share_row_width() {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    row.columns = Some(2);
    let cells = row_cells(&row);
    let widths = distribute_cells(&cells, 800.0, Viewport::Wide);
    assert_eq!(widths, vec![Width::Share(400.0), Width::Share(400.0)]);
}

#[test]
fn test_inner_width_subtracts_padding() {
    let mut node = Node::new(NodeKind::RowGroup, "row");
    node.style.padding = Some(20.0);
    assert_eq!(inner_width(&node.style, 500.0), 460.0);

    node.style.padding_left = Some(10.0);
    // Explicit side wins over the shorthand for that side.
    assert_eq!(inner_width(&node.style, 500.0), 470.0);

    assert_eq!(inner_width(&Node::new(NodeKind::Text, "t").style, 300.0), 300.0);
}

#[test]
fn test_width_px_resolution() {
    assert_eq!(Width::Fixed(120.0).px(500.0), 120.0);
    assert_eq!(Width::Share(250.0).px(500.0), 250.0);
    assert_eq!(Width::Fill.px(500.0), 500.0);
}

#[test]
fn test_geometry_stacking() {
    let row = Node::new(NodeKind::RowGroup, "row");
    assert!(!geometry(&row, Width::Fill, Viewport::Wide).stacked);
    assert!(geometry(&row, Width::Fill, Viewport::Narrow).stacked);

    let block = Node::new(NodeKind::FullBlock, "block");
    assert!(geometry(&block, Width::Fill, Viewport::Wide).stacked);
}
