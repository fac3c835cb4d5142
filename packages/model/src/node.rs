use crate::Style;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Kind tag of a node. Closed variant set; a tag outside it survives
/// deserialization as [`NodeKind::Unknown`] so one corrupt node cannot fail
/// a whole document. The renderer skips unknown kinds and the mutation
/// engine treats them as leaves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Container whose children share a horizontal line, each individually
    /// fixed or flexible in width.
    RowGroup,
    /// Container that occupies a full row and stacks its children.
    FullBlock,
    /// Rich-text leaf, or a form-field leaf when `field` props are present.
    Text,
    /// Asset-reference leaf.
    Image,
    /// Label + link-like leaf.
    Button,
    /// Container whose children are exclusively field-leaf `Text` nodes.
    Form,
    /// Unrecognized persisted tag, preserved verbatim.
    Unknown(String),
}

impl NodeKind {
    pub fn as_tag(&self) -> &str {
        match self {
            NodeKind::RowGroup => "divInline",
            NodeKind::FullBlock => "divFull",
            NodeKind::Text => "text",
            NodeKind::Image => "image",
            NodeKind::Button => "button",
            NodeKind::Form => "form",
            NodeKind::Unknown(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "divInline" => NodeKind::RowGroup,
            "divFull" => NodeKind::FullBlock,
            "text" => NodeKind::Text,
            "image" => NodeKind::Image,
            "button" => NodeKind::Button,
            "form" => NodeKind::Form,
            other => NodeKind::Unknown(other.to_string()),
        }
    }

    /// Containers accept children; leaves do not.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::RowGroup | NodeKind::FullBlock | NodeKind::Form
        )
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, NodeKind::Unknown(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(NodeKind::from_tag(&tag))
    }
}

/// Input kind of a form-field leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Radio,
    Checkbox,
    #[serde(rename = "textarea")]
    TextArea,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::TextArea => "textarea",
        }
    }
}

/// Form-field attributes, present only on field-leaf `Text` nodes nested
/// under a `Form`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldProps {
    #[serde(rename = "fieldType")]
    pub kind: FieldKind,
    /// Submission name, derived from the field label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl FieldProps {
    pub fn new(kind: FieldKind, label: &str) -> Self {
        Self {
            kind,
            name: Some(field_name_from_label(label)),
            placeholder: None,
            required: false,
        }
    }
}

/// Submission name for a field: lowercased label, whitespace joined with `-`.
pub fn field_name_from_label(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// One element of the composition tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(flatten)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Column tag for children generated by a multi-column template. A key
    /// the renderer does not recognize leaves the child ungrouped.
    #[serde(
        rename = "parentSubId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub group_key: Option<String>,
    /// Declared column count of a `RowGroup` created from a multi-column
    /// template. Children carry `group_key` tags naming one of these
    /// columns; the renderer partitions them independently of sibling order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(flatten)]
    pub field: Option<FieldProps>,
}

impl Node {
    /// Bare node of the given kind, no content, no style.
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: String::new(),
            style: Style::default(),
            children: Vec::new(),
            group_key: None,
            columns: None,
            field: None,
        }
    }

    /// Node of the given kind carrying its creation-time defaults.
    pub fn with_defaults(kind: NodeKind, id: impl Into<String>) -> Self {
        let mut node = Node::new(kind, id);
        match node.kind {
            NodeKind::Image => {
                node.style.width = Some(300.0);
            }
            NodeKind::Button => {
                node.content = "Click here".to_string();
                node.style.background_color = Some("#007BFF".to_string());
                node.style.text_color = Some("#FFFFFF".to_string());
                node.style.font_size = Some("16px".to_string());
                node.style.padding = Some(10.0);
                node.style.border_radius = Some(5.0);
            }
            NodeKind::Form => {
                node.content = "New form".to_string();
            }
            _ => {}
        }
        node
    }

    /// A `Text` leaf acting as a form input.
    pub fn is_field_leaf(&self) -> bool {
        self.kind == NodeKind::Text && self.field.is_some()
    }

    /// Depth-first search for a node by id, this node included.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        find_node(&self.children, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

/// Depth-first search across a sibling sequence.
pub fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if let Some(found) = node.find(id) {
            return Some(found);
        }
    }
    None
}

/// Every id in the subtree rooted at `node`.
pub fn subtree_ids(node: &Node) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids(node, &mut ids);
    ids
}

fn collect_ids(node: &Node, ids: &mut HashSet<String>) {
    ids.insert(node.id.clone());
    for child in &node.children {
        collect_ids(child, ids);
    }
}
