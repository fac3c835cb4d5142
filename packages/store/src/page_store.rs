use crate::{detach_inline_assets, AssetSink, StoreError};
use pegboard_common::{FileSystem, RealFileSystem};
use pegboard_model::Page;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Listing entry for a stored page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub name: String,
    #[serde(rename = "url")]
    pub slug: String,
}

/// Durable owner of pages. The editing session owns a page only until it is
/// committed here; at most one outstanding save per page is the calling
/// screen's discipline, not enforced by this trait.
pub trait PageStore {
    fn load(&self, slug: &str) -> Result<Option<Page>, StoreError>;
    fn save(&self, page: &Page) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<PageMeta>, StoreError>;
}

/// In-memory store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    pages: RefCell<HashMap<String, Page>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryStore {
    fn load(&self, slug: &str) -> Result<Option<Page>, StoreError> {
        Ok(self.pages.borrow().get(slug).cloned())
    }

    fn save(&self, page: &Page) -> Result<(), StoreError> {
        self.pages
            .borrow_mut()
            .insert(page.slug.clone(), page.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<PageMeta>, StoreError> {
        let mut pages: Vec<PageMeta> = self
            .pages
            .borrow()
            .values()
            .map(|page| PageMeta {
                name: page.name.clone(),
                slug: page.slug.clone(),
            })
            .collect();
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }
}

/// Directory-backed store: one JSON document per page under `pages/`,
/// detached assets under `assets/`.
pub struct DirStore {
    root: PathBuf,
    fs: Box<dyn FileSystem>,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_filesystem(root, Box::new(RealFileSystem))
    }

    pub fn with_filesystem(root: impl Into<PathBuf>, fs: Box<dyn FileSystem>) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    fn page_path(&self, slug: &str) -> PathBuf {
        self.root.join("pages").join(format!("{slug}.json"))
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.root.join("assets").join(name)
    }
}

impl PageStore for DirStore {
    fn load(&self, slug: &str) -> Result<Option<Page>, StoreError> {
        let path = self.page_path(slug);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        let raw = self.fs.read_to_string(&path)?;
        let page = serde_json::from_str(&raw)?;
        info!(slug, "loaded page");
        Ok(Some(page))
    }

    fn save(&self, page: &Page) -> Result<(), StoreError> {
        // Inline image payloads become stable references before anything
        // touches disk, so a stored document never embeds raw asset bytes.
        let detached = detach_inline_assets(page, self)?;
        let raw = serde_json::to_string_pretty(&detached)?;
        self.fs.write(&self.page_path(&detached.slug), &raw)?;
        info!(slug = %detached.slug, "saved page");
        Ok(())
    }

    fn list(&self) -> Result<Vec<PageMeta>, StoreError> {
        let dir = self.root.join("pages");
        if !self.fs.exists(&dir) {
            return Ok(Vec::new());
        }
        let mut pages = Vec::new();
        for path in self.fs.list_dir(&dir)? {
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = self.fs.read_to_string(&path)?;
            let page: Page = serde_json::from_str(&raw)?;
            pages.push(PageMeta {
                name: page.name,
                slug: page.slug,
            });
        }
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }
}

impl AssetSink for DirStore {
    fn store_inline(&self, payload: &str) -> Result<String, StoreError> {
        let name = format!(
            "{}.{}",
            crate::assets::content_hash(payload),
            extension_for(payload)
        );
        self.fs.write(&self.asset_path(&name), payload)?;
        Ok(format!("/assets/{name}"))
    }
}

/// File extension from a `data:image/<ext>;...` payload header.
fn extension_for(payload: &str) -> &str {
    payload
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split(&[';', ','][..]).next())
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin")
}
