use crate::StoreError;
use pegboard_common::visitor::{walk_node_mut, VisitorMut};
use pegboard_model::{Node, NodeKind, Page};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;

/// Receives an inline-encoded asset payload and returns a stable reference
/// to it. The storage layer implements this; the core only ever holds
/// references once a save round-trip completes.
pub trait AssetSink {
    fn store_inline(&self, payload: &str) -> Result<String, StoreError>;
}

/// Rewrite every `Image` node whose content is an inline `data:` payload to
/// the reference the sink hands back. Returns a new page; the input is
/// untouched.
pub fn detach_inline_assets(page: &Page, sink: &dyn AssetSink) -> Result<Page, StoreError> {
    let mut detached = page.clone();
    let mut pass = DetachPass {
        sink,
        failure: None,
    };
    pass.visit_page_mut(&mut detached);
    match pass.failure {
        Some(err) => Err(err),
        None => Ok(detached),
    }
}

struct DetachPass<'a> {
    sink: &'a dyn AssetSink,
    failure: Option<StoreError>,
}

impl VisitorMut for DetachPass<'_> {
    fn visit_node_mut(&mut self, node: &mut Node) {
        if self.failure.is_some() {
            return;
        }
        if node.kind == NodeKind::Image && node.content.starts_with("data:") {
            match self.sink.store_inline(&node.content) {
                Ok(reference) => {
                    debug!(node_id = %node.id, %reference, "detached inline asset");
                    node.content = reference;
                }
                Err(err) => {
                    self.failure = Some(err);
                    return;
                }
            }
        }
        walk_node_mut(self, node);
    }
}

/// In-memory sink for tests: payloads keyed by a content hash.
#[derive(Default)]
pub struct MemorySink {
    pub stored: RefCell<HashMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetSink for MemorySink {
    fn store_inline(&self, payload: &str) -> Result<String, StoreError> {
        let reference = format!("/assets/{}", content_hash(payload));
        self.stored
            .borrow_mut()
            .insert(reference.clone(), payload.to_string());
        Ok(reference)
    }
}

/// Stable name for an asset payload. Identical payloads share a reference.
pub(crate) fn content_hash(payload: &str) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload.as_bytes());
    format!("{:08x}", hasher.finalize())
}
