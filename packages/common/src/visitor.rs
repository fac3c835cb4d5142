use pegboard_model::{Node, Page};

/// Visitor pattern for traversing the composition tree immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_page(&mut self, page: &Page) {
        walk_page(self, page);
    }

    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }
}

/// Mutable visitor pattern for transforming the composition tree
///
/// Similar to Visitor, but provides mutable access to nodes. Use this when
/// you need to modify the tree during traversal (a fresh copy of it — never
/// a tree another component is still rendering).
pub trait VisitorMut: Sized {
    fn visit_page_mut(&mut self, page: &mut Page) {
        walk_page_mut(self, page);
    }

    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }
}

// Default walk implementations for immutable visitor

pub fn walk_page<V: Visitor>(visitor: &mut V, page: &Page) {
    for node in &page.nodes {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    for child in &node.children {
        visitor.visit_node(child);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_page_mut<V: VisitorMut>(visitor: &mut V, page: &mut Page) {
    for node in &mut page.nodes {
        visitor.visit_node_mut(node);
    }
}

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    for child in &mut node.children {
        visitor.visit_node_mut(child);
    }
}
