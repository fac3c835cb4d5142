//! # Page Editing Session
//!
//! Owns the current tree for one page being edited.
//!
//! All mutation happens on a single logical thread of user-gesture
//! callbacks. A session applies each mutation to completion and swaps the
//! new root in before anything else can observe the page, so a render pass
//! always sees a whole version, never a tree mid-mutation.

use crate::Mutation;
use pegboard_common::visitor::{walk_node, Visitor};
use pegboard_model::{page_seed, IdGenerator, Node, NodeKind, Page};

/// Editing state for a single page: the current tree, a version counter and
/// the id generator every new node is minted from.
pub struct PageSession {
    page: Page,
    ids: IdGenerator,
    /// Increments on every applied mutation, including silent no-ops.
    pub version: u64,
    /// Unsaved changes since the last store round-trip.
    dirty: bool,
    /// Node ids currently selected on the canvas.
    pub selected_nodes: Vec<String>,
}

impl PageSession {
    /// Open a session over a page. The id generator resumes past every id
    /// already present in the tree so loaded pages keep minting unique ids.
    pub fn new(page: Page) -> Self {
        let seed = page_seed(&page.slug);
        let mut scan = HighestCounter {
            seed: &seed,
            highest: 0,
        };
        scan.visit_page(&page);
        let ids = IdGenerator::resume(seed.clone(), scan.highest);

        Self {
            page,
            ids,
            version: 0,
            dirty: false,
            selected_nodes: Vec::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Build a default-styled node of `kind` with a fresh id.
    pub fn mint_node(&mut self, kind: NodeKind) -> Node {
        Node::with_defaults(kind, self.ids.next_id())
    }

    pub fn id_generator(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Apply a mutation and swap in the successor tree. Returns the new
    /// version. Missing targets are no-ops inside the mutation itself; the
    /// version still advances so callers can observe that an event landed.
    pub fn apply(&mut self, mutation: Mutation) -> u64 {
        let next = mutation.apply(&self.page.nodes, &mut self.ids);
        self.page.nodes = next;
        self.version += 1;
        self.dirty = true;
        self.version
    }

    /// Rename the page and re-derive its slug.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.page.rename(name);
        self.dirty = true;
    }

    pub fn set_selection(&mut self, node_ids: Vec<String>) {
        self.selected_nodes = node_ids;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The store confirmed a save round-trip.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn into_page(self) -> Page {
        self.page
    }
}

/// Finds the highest sequential counter among ids minted from `seed`.
struct HighestCounter<'a> {
    seed: &'a str,
    highest: u32,
}

impl Visitor for HighestCounter<'_> {
    fn visit_node(&mut self, node: &Node) {
        if let Some(rest) = node.id.strip_prefix(self.seed) {
            if let Some(count) = rest.strip_prefix('-').and_then(|n| n.parse::<u32>().ok()) {
                self.highest = self.highest.max(count);
            }
        }
        walk_node(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodePatch;

    #[test]
    fn test_session_starts_clean() {
        let session = PageSession::new(Page::new("Landing"));
        assert_eq!(session.version, 0);
        assert!(!session.is_dirty());
        assert!(session.selected_nodes.is_empty());
    }

    #[test]
    fn test_apply_advances_version_and_dirties() {
        let mut session = PageSession::new(Page::new("Landing"));
        let node = session.mint_node(NodeKind::FullBlock);

        let version = session.apply(Mutation::Insert {
            node,
            parent_id: None,
            column_key: None,
        });

        assert_eq!(version, 1);
        assert!(session.is_dirty());
        assert_eq!(session.page().nodes.len(), 1);

        session.mark_saved();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_noop_mutation_still_advances_version() {
        let mut session = PageSession::new(Page::new("Landing"));
        let before = session.page().clone();

        let version = session.apply(Mutation::Update {
            node_id: "ghost".to_string(),
            patch: NodePatch::content("x"),
        });

        assert_eq!(version, 1);
        assert_eq!(session.page().nodes, before.nodes);
    }

    #[test]
    fn test_id_generator_resumes_past_loaded_ids() {
        let mut page = Page::new("Landing");
        let seed = page_seed(&page.slug);
        page.nodes
            .push(Node::new(NodeKind::FullBlock, format!("{seed}-41")));

        let mut session = PageSession::new(page);
        let minted = session.mint_node(NodeKind::Text);
        assert_eq!(minted.id, format!("{seed}-42"));
    }

    #[test]
    fn test_rename_rederives_slug() {
        let mut session = PageSession::new(Page::new("Old Name"));
        session.rename("Fresh Name");
        assert_eq!(session.page().slug, "fresh-name");
        assert!(session.is_dirty());
    }
}
