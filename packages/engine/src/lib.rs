//! # Pegboard Engine
//!
//! Pure mutations over the composition tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node / Page / id generation          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: tree mutations + editing session    │
//! │  - insert / update / remove / duplicate     │
//! │  - every operation returns a NEW tree       │
//! │  - missing targets are silent no-ops        │
//! │  - PageSession swaps versions atomically    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: tree → VDOM → HTML                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Total operations**: no mutation throws; a stale or hostile UI event
//!    can never crash the session
//! 2. **Copy-on-write**: a render pass never observes a tree mid-mutation
//! 3. **Structural constraints live here**: a `Form` only admits field
//!    leaves, and the type system alone does not enforce that
//!
//! ## Usage
//!
//! ```rust
//! use pegboard_engine::{Mutation, PageSession};
//! use pegboard_model::{NodeKind, Page};
//!
//! let mut session = PageSession::new(Page::new("Landing"));
//! let row = session.mint_node(NodeKind::RowGroup);
//! session.apply(Mutation::Insert {
//!     node: row,
//!     parent_id: None,
//!     column_key: None,
//! });
//! assert_eq!(session.page().nodes.len(), 1);
//! ```

mod mutations;
mod patch;
mod session;

pub use mutations::{duplicate, insert, remove, update, Mutation};
pub use patch::NodePatch;
pub use session::PageSession;
