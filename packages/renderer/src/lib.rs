//! # Pegboard Renderer
//!
//! One recursive rendering path, two modes.
//!
//! `Edit` and `View` share every line of layout resolution: the same tree,
//! the same narrow-viewport signal and the same configuration produce the
//! same concrete geometry in both modes. That equivalence is the renderer's
//! core correctness contract — the editing canvas must match the public
//! page pixel for pixel. On top of the shared geometry, `Edit` decorates
//! nodes with editing affordances (options trigger, resize handles, the
//! open menu or style modal carried in [`EditorState`]) while `View` emits
//! none of that and wires forms to the submission endpoint.
//!
//! A node whose kind tag fell outside the closed set renders nothing; one
//! corrupt node never blanks the page.

pub mod editor_state;
pub mod html;
pub mod layout;
pub mod renderer;
pub mod vdom;

#[cfg(test)]
mod tests_layout;

#[cfg(test)]
mod tests_modes;

#[cfg(test)]
mod tests_html;

pub use editor_state::EditorState;
pub use html::{write_html, WriteOptions};
pub use layout::{
    distribute_cells, distribute_row, inner_width, row_cells, Geometry, RenderMode, RowCell,
    Viewport, Width,
};
pub use renderer::{render, RenderOptions};
pub use vdom::{VDocument, VNode};
