//! # Pegboard Interact
//!
//! Pointer gestures → mutations.
//!
//! Two independent protocols live here. The drag/drop protocol resolves a
//! dropped payload (a palette entry or an existing node being moved) against
//! the innermost drop target under the pointer and yields the mutations to
//! apply. The resize protocol is a press → move* → release state machine
//! where every intermediate move yields its own complete width/height
//! update, so the visible size tracks the pointer with no batching.
//!
//! Neither protocol touches a tree itself; both return [`Mutation`]s for the
//! session to apply.
//!
//! [`Mutation`]: pegboard_engine::Mutation

mod drag;
mod drop;
mod palette;
mod resize;

pub use drag::DragSource;
pub use drop::{DropDispatcher, DropOutcome, DropTarget};
pub use palette::{column_group, column_key};
pub use resize::{Point, ResizeAxis, ResizeSession, MIN_EXTENT};
