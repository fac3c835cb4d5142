use serde::{Deserialize, Serialize};

/// Local interaction state the editing canvas carries between renders.
///
/// The renderer consumes this in `Edit` mode to decide which node, if any,
/// shows its open options menu, its style-editing modal, or a live resize
/// highlight. None of it affects resolved geometry — the public view
/// renders the identical tree with the state ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Node whose options menu (duplicate / customize / delete) is open.
    pub menu_open: Option<String>,
    /// Node whose style modal is open; confirming it applies an update.
    pub style_modal: Option<String>,
    /// Node currently tracked by a resize gesture.
    pub resizing: Option<String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }
}
