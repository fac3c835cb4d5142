//! Geometry resolution shared by both render modes.
//!
//! Everything here is a pure function of the tree and the narrow-viewport
//! signal. The renderer threads the enclosing slot width down the tree and
//! asks this module how each node and each row cell occupies it.

use pegboard_model::{Node, NodeKind, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Edit,
    View,
}

/// External narrow-viewport signal; never computed in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Wide,
    Narrow,
}

/// Resolved width of a node or row cell within its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    /// Declared width; removed from the flexible pool.
    Fixed(f64),
    /// Equal share of the remaining row width.
    Share(f64),
    /// Full width of the enclosing slot.
    Fill,
}

impl Width {
    /// Concrete extent in page units given the enclosing slot.
    pub fn px(&self, slot: f64) -> f64 {
        match self {
            Width::Fixed(w) | Width::Share(w) => *w,
            Width::Fill => slot,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Width::Fixed(_))
    }
}

/// Concrete geometry of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub width: Width,
    pub height: Option<f64>,
    /// Children lay out vertically.
    pub stacked: bool,
}

/// Declared width of a node, with per-kind defaults for kinds that carry an
/// intrinsic one when unset.
pub fn declared_width(node: &Node) -> Option<f64> {
    node.style.width.or(match node.kind {
        NodeKind::Image => Some(300.0),
        NodeKind::Form => Some(600.0),
        _ => None,
    })
}

/// Resolve the widths of a row's direct children.
///
/// An explicit width fixes the child and removes it from the flexible
/// pool; the rest share the remaining width equally. A `FullBlock` always
/// occupies a full row. Under a narrow viewport everything is full width.
pub fn distribute_row(children: &[&Node], inner_width: f64, viewport: Viewport) -> Vec<Width> {
    if viewport == Viewport::Narrow {
        return vec![Width::Fill; children.len()];
    }

    let mut fixed_total = 0.0;
    let mut flexible = 0usize;
    for child in children {
        match child.kind {
            // A full block wraps to its own row; an unknown kind renders
            // nothing. Neither joins the pools.
            NodeKind::FullBlock | NodeKind::Unknown(_) => {}
            _ => match declared_width(child) {
                Some(w) => fixed_total += w,
                None => flexible += 1,
            },
        }
    }

    let share = if flexible > 0 {
        ((inner_width - fixed_total) / flexible as f64).max(0.0)
    } else {
        0.0
    };

    children
        .iter()
        .map(|child| match child.kind {
            NodeKind::FullBlock => Width::Fill,
            NodeKind::Unknown(_) => Width::Fixed(0.0),
            _ => match declared_width(child) {
                Some(w) => Width::Fixed(w),
                None => Width::Share(share),
            },
        })
        .collect()
}

/// One slot on a row group's line: a plain child, or a column of children
/// partitioned out of a multi-column template.
#[derive(Debug, Clone, PartialEq)]
pub enum RowCell<'a> {
    Single(&'a Node),
    Column {
        key: String,
        members: Vec<&'a Node>,
    },
}

/// Partition a row group's children into cells.
///
/// Without a declared column count every child is its own cell. With one,
/// children are bucketed by `group_key` into the declared columns
/// independently of sibling order; a child with a missing or unrecognized
/// key stays ungrouped and trails the columns as its own cell.
pub fn row_cells(row: &Node) -> Vec<RowCell<'_>> {
    let Some(columns) = row.columns.filter(|_| row.kind == NodeKind::RowGroup) else {
        return row.children.iter().map(RowCell::Single).collect();
    };

    let keys: Vec<String> = (1..=columns).map(|k| format!("col-{k}")).collect();
    let mut cells: Vec<RowCell> = keys
        .iter()
        .map(|key| RowCell::Column {
            key: key.clone(),
            members: row
                .children
                .iter()
                .filter(|child| child.group_key.as_deref() == Some(key.as_str()))
                .collect(),
        })
        .collect();

    for child in &row.children {
        let grouped = child
            .group_key
            .as_deref()
            .is_some_and(|key| keys.iter().any(|k| k == key));
        if !grouped {
            cells.push(RowCell::Single(child));
        }
    }
    cells
}

/// Widths for a row's cells. Columns are always flexible; single cells
/// follow the row distribution rules.
pub fn distribute_cells(cells: &[RowCell<'_>], inner_width: f64, viewport: Viewport) -> Vec<Width> {
    if viewport == Viewport::Narrow {
        return vec![Width::Fill; cells.len()];
    }

    let mut fixed_total = 0.0;
    let mut flexible = 0usize;
    for cell in cells {
        match cell {
            RowCell::Column { .. } => flexible += 1,
            RowCell::Single(node) => match node.kind {
                NodeKind::FullBlock | NodeKind::Unknown(_) => {}
                _ => match declared_width(node) {
                    Some(w) => fixed_total += w,
                    None => flexible += 1,
                },
            },
        }
    }

    let share = if flexible > 0 {
        ((inner_width - fixed_total) / flexible as f64).max(0.0)
    } else {
        0.0
    };

    cells
        .iter()
        .map(|cell| match cell {
            RowCell::Column { .. } => Width::Share(share),
            RowCell::Single(node) => match node.kind {
                NodeKind::FullBlock => Width::Fill,
                NodeKind::Unknown(_) => Width::Fixed(0.0),
                _ => match declared_width(node) {
                    Some(w) => Width::Fixed(w),
                    None => Width::Share(share),
                },
            },
        })
        .collect()
}

/// Geometry of a node occupying `width` within its slot.
pub fn geometry(node: &Node, width: Width, viewport: Viewport) -> Geometry {
    let stacked = match node.kind {
        NodeKind::RowGroup => viewport == Viewport::Narrow,
        NodeKind::FullBlock | NodeKind::Form => true,
        _ => false,
    };
    Geometry {
        width,
        height: node.style.height,
        stacked,
    }
}

/// Content width inside a node's box once its padding is taken out.
pub fn inner_width(style: &Style, outer: f64) -> f64 {
    let left = style.padding_left.or(style.padding).unwrap_or(0.0);
    let right = style.padding_right.or(style.padding).unwrap_or(0.0);
    (outer - left - right).max(0.0)
}
