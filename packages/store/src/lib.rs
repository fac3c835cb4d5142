//! # Pegboard Store
//!
//! Boundary contracts around the composition core: loading and saving
//! pages, the site configuration record the renderer consumes, detachment
//! of inline image payloads into stable asset references, and the form
//! submission endpoint.
//!
//! The core never rolls an in-memory tree back on a failed round-trip;
//! errors surface to the caller, who decides whether to retry or discard.

mod assets;
mod config;
mod error;
mod page_store;
mod submit;

pub use assets::{detach_inline_assets, AssetSink, MemorySink};
pub use config::{BannerConfig, NavLink, SiteConfig};
pub use error::StoreError;
pub use page_store::{DirStore, MemoryStore, PageMeta, PageStore};
pub use submit::{FormSubmission, FormSubmitter, MemorySubmitter};
