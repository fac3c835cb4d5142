use pegboard_model::{FieldProps, Node, Style};
use serde::{Deserialize, Serialize};

/// Partial attribute set merged over a node by [`crate::update`].
///
/// The merge is shallow: a present `style` replaces the node's whole style
/// record, so callers pass the full sub-object they want, not a delta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldProps>,
    /// Wholesale children replacement; the form add-field path uses this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl NodePatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    pub fn children(children: Vec<Node>) -> Self {
        Self {
            children: Some(children),
            ..Self::default()
        }
    }

    /// Apply the patch to a node, identity preserved.
    pub(crate) fn merge_into(&self, node: &mut Node) {
        if let Some(content) = &self.content {
            node.content = content.clone();
        }
        if let Some(style) = &self.style {
            node.style = style.clone();
        }
        if let Some(group_key) = &self.group_key {
            node.group_key = Some(group_key.clone());
        }
        if let Some(field) = &self.field {
            node.field = Some(field.clone());
        }
        if let Some(children) = &self.children {
            node.children = children.clone();
        }
    }
}
