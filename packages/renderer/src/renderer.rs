//! The dual-mode recursive renderer.

use crate::editor_state::EditorState;
use crate::layout::{
    distribute_cells, distribute_row, geometry, inner_width, row_cells, Geometry, RenderMode,
    RowCell, Viewport, Width,
};
use crate::vdom::{VDocument, VNode};
use pegboard_model::{Node, NodeKind};
use pegboard_store::SiteConfig;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything a render pass needs besides the tree itself. The renderer is
/// a pure function of (tree, options); nothing ambient is read.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub viewport: Viewport,
    pub config: SiteConfig,
    /// Consulted in `Edit` mode only.
    pub editor: EditorState,
    /// Where `View`-mode forms post to.
    pub submit_endpoint: String,
}

impl RenderOptions {
    pub fn view(config: SiteConfig, viewport: Viewport) -> Self {
        Self {
            mode: RenderMode::View,
            viewport,
            config,
            editor: EditorState::new(),
            submit_endpoint: "/api/contact".to_string(),
        }
    }

    pub fn edit(config: SiteConfig, viewport: Viewport, editor: EditorState) -> Self {
        Self {
            mode: RenderMode::Edit,
            viewport,
            config,
            editor,
            submit_endpoint: "/api/contact".to_string(),
        }
    }

    fn is_edit(&self) -> bool {
        self.mode == RenderMode::Edit
    }
}

/// Render a page's top-level node sequence.
///
/// The top level behaves as one row line inside the configured maximum
/// page width: full blocks take whole rows, row groups and leaves share
/// lines by the same distribution rules as row-group children.
pub fn render(nodes: &[Node], options: &RenderOptions) -> VDocument {
    let page_width = options.config.max_page_width;
    let children: Vec<&Node> = nodes.iter().collect();
    let widths = distribute_row(&children, page_width, options.viewport);

    let mut root = VNode::element("div")
        .with_attr("class", "pb-page")
        .with_style("max-width", px(page_width))
        .with_style("margin", "0 auto")
        .with_style("display", "flex")
        .with_style("flex-wrap", "wrap")
        .with_style(
            "flex-direction",
            direction(options.viewport == Viewport::Narrow),
        );

    for (child, width) in children.iter().zip(widths) {
        if let Some(rendered) = render_node(child, width, page_width, options) {
            root.push_child(rendered);
        }
    }

    let mut document = VDocument::new();
    document.add_node(root);
    document
}

/// Render one node into the slot its parent resolved for it. Returns `None`
/// for kinds outside the closed set so a corrupt node renders nothing.
fn render_node(node: &Node, width: Width, slot: f64, options: &RenderOptions) -> Option<VNode> {
    let geom = geometry(node, width, options.viewport);

    let mut element = match &node.kind {
        NodeKind::RowGroup => render_row_group(node, &geom, slot, options),
        NodeKind::FullBlock => render_full_block(node, &geom, slot, options),
        NodeKind::Form => render_form(node, &geom, options),
        NodeKind::Text => render_text(node, &geom),
        NodeKind::Image => render_image(node, &geom),
        NodeKind::Button => render_button(node, &geom),
        NodeKind::Unknown(tag) => {
            debug!(node_id = %node.id, %tag, "unknown node kind; rendering nothing");
            return None;
        }
    };

    if options.is_edit() {
        element = decorate(element, node, options);
    }
    Some(element)
}

fn render_row_group(
    node: &Node,
    geom: &Geometry,
    slot: f64,
    options: &RenderOptions,
) -> VNode {
    let own_width = geom.width.px(slot);
    let inner = inner_width(&node.style, own_width);
    let cells = row_cells(node);
    let widths = distribute_cells(&cells, inner, options.viewport);

    let mut element = VNode::element("div")
        .with_attr("class", "pb-row")
        .with_styles(container_styles(node, geom))
        .with_style("flex-direction", direction(geom.stacked));

    for (cell, width) in cells.iter().zip(widths) {
        match cell {
            RowCell::Single(child) => {
                if let Some(rendered) = render_node(child, width, width.px(inner), options) {
                    element.push_child(rendered);
                }
            }
            RowCell::Column { key, members } => {
                let mut column = VNode::element("div")
                    .with_attr("class", "pb-column")
                    .with_attr("data-column", key.clone())
                    .with_style("display", "flex")
                    .with_style("flex-direction", "column")
                    .with_styles(width_styles(width));
                let column_slot = width.px(inner);
                for member in members {
                    if let Some(rendered) =
                        render_node(member, Width::Fill, column_slot, options)
                    {
                        column.push_child(rendered);
                    }
                }
                element.push_child(column);
            }
        }
    }
    element
}

fn render_full_block(
    node: &Node,
    geom: &Geometry,
    slot: f64,
    options: &RenderOptions,
) -> VNode {
    let inner = inner_width(&node.style, geom.width.px(slot));
    let mut element = VNode::element("div")
        .with_attr("class", "pb-block")
        .with_styles(container_styles(node, geom))
        .with_style("flex-direction", "column");

    for child in &node.children {
        if let Some(rendered) = render_node(child, Width::Fill, inner, options) {
            element.push_child(rendered);
        }
    }
    element
}

fn render_form(node: &Node, geom: &Geometry, options: &RenderOptions) -> VNode {
    let style = &node.style;
    let mut element = VNode::element("form")
        .with_attr("class", "pb-form")
        .with_styles(container_styles(node, geom))
        .with_style("flex-direction", "column");
    if style.background_color.is_none() {
        element = element.with_style("background-color", "rgba(241, 236, 236, 1)");
    }

    // The public page posts for real; the canvas form goes nowhere.
    if options.mode == RenderMode::View {
        element = element
            .with_attr("action", options.submit_endpoint.clone())
            .with_attr("method", "post");
    }

    let title = if node.content.is_empty() {
        "Form"
    } else {
        node.content.as_str()
    };
    element.push_child(
        VNode::element("h2")
            .with_attr("class", "pb-form-title")
            .with_child(VNode::text(title)),
    );

    for child in &node.children {
        if child.is_field_leaf() {
            element.push_child(render_field(child));
        } else {
            // A persisted document can carry anything; skip rather than fail.
            debug!(node_id = %child.id, "non-field child under form; rendering nothing");
        }
    }

    let mut submit = VNode::element("button")
        .with_attr("class", "pb-form-submit")
        .with_attr("type", "submit")
        .with_style(
            "background-color",
            style.button_color.clone().unwrap_or_else(|| "#007BFF".to_string()),
        )
        .with_style(
            "color",
            style
                .button_text_color
                .clone()
                .unwrap_or_else(|| "#FFF".to_string()),
        )
        .with_style("padding", "10px")
        .with_style("border-radius", "5px")
        .with_style("width", "100%");
    submit.push_child(VNode::text(
        style.button_label.clone().unwrap_or_else(|| "Send".to_string()),
    ));
    element.push_child(submit);

    if options.is_edit() {
        element.push_child(add_field_panel());
    }
    element
}

/// Label + input for a field leaf, identical in both modes.
fn render_field(node: &Node) -> VNode {
    let Some(props) = &node.field else {
        return VNode::element("label").with_attr("class", "pb-field");
    };
    let name = props.name.clone().unwrap_or_default();

    let control = if props.kind == pegboard_model::FieldKind::TextArea {
        let mut textarea = VNode::element("textarea")
            .with_attr("name", name)
            .with_attr("rows", "4");
        if let Some(placeholder) = &props.placeholder {
            textarea = textarea.with_attr("placeholder", placeholder.clone());
        }
        if props.required {
            textarea = textarea.with_attr("required", "required");
        }
        textarea.with_style("width", "100%")
    } else {
        let mut input = VNode::element("input")
            .with_attr("type", props.kind.as_str())
            .with_attr("name", name);
        if let Some(placeholder) = &props.placeholder {
            input = input.with_attr("placeholder", placeholder.clone());
        }
        if props.required {
            input = input.with_attr("required", "required");
        }
        input.with_style("width", "100%")
    };

    VNode::element("label")
        .with_attr("class", "pb-field")
        .with_style("display", "block")
        .with_child(VNode::text(node.content.clone()))
        .with_child(control)
}

fn render_text(node: &Node, geom: &Geometry) -> VNode {
    if node.is_field_leaf() {
        // A field leaf outside a form still renders as its input.
        return render_field(node);
    }

    let mut element = VNode::element("div")
        .with_attr("class", "pb-text")
        .with_styles(width_styles(geom.width))
        .with_styles(spacing_styles(node))
        .with_styles(text_styles(node))
        .with_style("overflow", "hidden");
    if let Some(height) = geom.height {
        element = element.with_style("height", px(height));
    }
    if !node.content.is_empty() {
        // Trusted markup from the rich-text sub-editor, emitted verbatim.
        element.push_child(VNode::raw(node.content.clone()));
    }
    element
}

fn render_image(node: &Node, geom: &Geometry) -> VNode {
    let mut element = VNode::element("div")
        .with_attr("class", "pb-image")
        .with_styles(width_styles(geom.width))
        .with_styles(spacing_styles(node))
        .with_style("overflow", "hidden");
    if let Some(height) = geom.height {
        element = element.with_style("height", px(height));
    }
    if let Some(radius) = node.style.border_radius {
        element = element.with_style("border-radius", px(radius));
    }

    if !node.content.is_empty() {
        let mut img = VNode::element("img")
            .with_attr("src", node.content.clone())
            .with_attr("alt", "")
            .with_style("width", "100%")
            .with_style("object-fit", "cover");
        img = img.with_style(
            "height",
            if geom.height.is_some() { "100%" } else { "auto" },
        );
        element.push_child(img);
    }
    element
}

fn render_button(node: &Node, geom: &Geometry) -> VNode {
    let style = &node.style;
    let mut button = VNode::element("button")
        .with_attr("class", "pb-button")
        .with_style(
            "background-color",
            style
                .background_color
                .clone()
                .unwrap_or_else(|| "#007BFF".to_string()),
        )
        .with_style(
            "color",
            style.text_color.clone().unwrap_or_else(|| "#FFF".to_string()),
        )
        .with_style(
            "font-size",
            style.font_size.clone().unwrap_or_else(|| "16px".to_string()),
        )
        .with_style("padding", px(style.padding.unwrap_or(10.0)))
        .with_style("border-radius", px(style.border_radius.unwrap_or(5.0)))
        .with_style("cursor", "pointer");
    if let Some(width) = style.border_width {
        button = button.with_style(
            "border",
            format!(
                "{} solid {}",
                px(width),
                style.border_color.as_deref().unwrap_or("transparent")
            ),
        );
    }
    if let Some(height) = geom.height {
        button = button.with_style("height", px(height));
    }
    button.push_child(VNode::text(if node.content.is_empty() {
        "Click here"
    } else {
        node.content.as_str()
    }));

    VNode::element("div")
        .with_attr("class", "pb-button-wrap")
        .with_styles(width_styles(geom.width))
        .with_style("display", "flex")
        .with_style(
            "justify-content",
            style
                .justify_content
                .clone()
                .unwrap_or_else(|| "flex-start".to_string()),
        )
        .with_child(button)
}

// ---------------------------------------------------------------------------
// Shared style computation

fn direction(stacked: bool) -> &'static str {
    if stacked {
        "column"
    } else {
        "row"
    }
}

fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

fn width_styles(width: Width) -> BTreeMap<String, String> {
    let mut styles = BTreeMap::new();
    match width {
        Width::Fixed(w) => {
            styles.insert("width".to_string(), px(w));
            styles.insert("flex".to_string(), "0 0 auto".to_string());
        }
        Width::Share(w) => {
            styles.insert("width".to_string(), px(w));
            styles.insert("flex".to_string(), "1 1 0".to_string());
        }
        Width::Fill => {
            styles.insert("width".to_string(), "100%".to_string());
            styles.insert("flex".to_string(), "0 0 100%".to_string());
        }
    }
    styles
}

/// Box styles every container shares: resolved width, spacing, border,
/// background, alignment and offsets, plus the flex display itself.
fn container_styles(node: &Node, geom: &Geometry) -> BTreeMap<String, String> {
    let style = &node.style;
    let mut styles = width_styles(geom.width);
    styles.insert("display".to_string(), "flex".to_string());
    styles.extend(spacing_styles(node));

    if let Some(height) = geom.height {
        styles.insert("height".to_string(), px(height));
    }
    if let Some(color) = &style.background_color {
        styles.insert("background-color".to_string(), color.clone());
    }
    if let Some(width) = style.border_width {
        styles.insert(
            "border".to_string(),
            format!(
                "{} solid {}",
                px(width),
                style.border_color.as_deref().unwrap_or("#ccc")
            ),
        );
    }
    if let Some(radius) = style.border_radius {
        styles.insert("border-radius".to_string(), px(radius));
    }
    if let Some(justify) = &style.justify_content {
        styles.insert("justify-content".to_string(), justify.clone());
    }
    if let Some(align) = &style.align_items {
        styles.insert("align-items".to_string(), align.clone());
    }

    let offsets = [
        ("top", style.top),
        ("bottom", style.bottom),
        ("left", style.left),
        ("right", style.right),
    ];
    if offsets.iter().any(|(_, v)| v.is_some()) {
        styles.insert("position".to_string(), "relative".to_string());
        for (key, value) in offsets {
            if let Some(v) = value {
                styles.insert(key.to_string(), px(v));
            }
        }
    }
    styles
}

fn spacing_styles(node: &Node) -> BTreeMap<String, String> {
    let style = &node.style;
    let mut styles = BTreeMap::new();
    if let Some(margin) = style.margin {
        styles.insert("margin".to_string(), px(margin));
    }

    let sides = [
        ("padding-top", style.padding_top),
        ("padding-bottom", style.padding_bottom),
        ("padding-left", style.padding_left),
        ("padding-right", style.padding_right),
    ];
    if sides.iter().any(|(_, v)| v.is_some()) {
        for (key, value) in sides {
            if let Some(v) = value.or(style.padding) {
                styles.insert(key.to_string(), px(v));
            }
        }
    } else if let Some(padding) = style.padding {
        styles.insert("padding".to_string(), px(padding));
    }
    styles
}

fn text_styles(node: &Node) -> BTreeMap<String, String> {
    let style = &node.style;
    let mut styles = BTreeMap::new();
    if let Some(color) = &style.text_color {
        styles.insert("color".to_string(), color.clone());
    }
    if let Some(size) = &style.font_size {
        styles.insert("font-size".to_string(), size.clone());
    }
    if let Some(family) = &style.font_family {
        styles.insert("font-family".to_string(), family.clone());
    }
    if let Some(align) = &style.text_align {
        styles.insert("text-align".to_string(), align.clone());
    }
    styles
}

// ---------------------------------------------------------------------------
// Edit-mode affordances

/// Kinds that carry resize handles on the canvas.
fn resizable(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::RowGroup | NodeKind::Text | NodeKind::Button | NodeKind::Image
    )
}

/// Attach canvas-only attributes and affordance children to a rendered
/// node. Every affordance is tagged `data-affordance` so tooling (and the
/// geometry-equivalence tests) can tell chrome from content.
fn decorate(mut element: VNode, node: &Node, options: &RenderOptions) -> VNode {
    element = element.with_attr("data-node-id", node.id.clone());
    if options.editor.resizing.as_deref() == Some(node.id.as_str()) {
        element = element.with_attr("data-resizing", "true");
    }

    element.push_child(options_trigger());
    if options.editor.menu_open.as_deref() == Some(node.id.as_str()) {
        element.push_child(options_menu());
    }
    if options.editor.style_modal.as_deref() == Some(node.id.as_str()) {
        element.push_child(style_modal(node));
    }
    if resizable(&node.kind) {
        element.push_child(resize_handle("horizontal", "pb-handle pb-handle-x"));
        element.push_child(resize_handle("vertical", "pb-handle pb-handle-y"));
        if node.kind == NodeKind::Image {
            element.push_child(resize_handle("both", "pb-handle pb-handle-xy"));
        }
    }
    element
}

fn options_trigger() -> VNode {
    VNode::element("div")
        .with_attr("class", "pb-options")
        .with_attr("data-affordance", "true")
        .with_child(
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("data-action", "menu")
                .with_child(VNode::text("⋮")),
        )
}

fn options_menu() -> VNode {
    let mut menu = VNode::element("div")
        .with_attr("class", "pb-menu")
        .with_attr("data-affordance", "true");
    for (action, label) in [
        ("duplicate", "Duplicate"),
        ("customize", "Customize"),
        ("delete", "Delete"),
    ] {
        menu.push_child(
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("data-action", action)
                .with_child(VNode::text(label)),
        );
    }
    menu
}

/// The style-editing modal. Confirming it is an `Update` mutation built
/// from the `data-style-field` inputs; the renderer only emits structure.
fn style_modal(node: &Node) -> VNode {
    let mut body = VNode::element("div").with_attr("class", "pb-modal-body");
    for (field, kind) in [
        ("width", "number"),
        ("height", "number"),
        ("backgroundColor", "color"),
        ("borderColor", "color"),
        ("borderWidth", "range"),
        ("borderRadius", "range"),
        ("justifyContent", "select"),
        ("alignItems", "select"),
        ("padding", "range"),
    ] {
        body.push_child(
            VNode::element("label")
                .with_child(VNode::text(field))
                .with_child(
                    VNode::element("input")
                        .with_attr("type", kind)
                        .with_attr("data-style-field", field),
                ),
        );
    }
    body.push_child(
        VNode::element("button")
            .with_attr("type", "button")
            .with_attr("data-action", "apply-style")
            .with_child(VNode::text("Apply")),
    );

    VNode::element("div")
        .with_attr("class", "pb-modal")
        .with_attr("data-affordance", "true")
        .with_attr("data-modal-for", node.id.clone())
        .with_child(body)
}

/// The add-field panel a form shows on the canvas.
fn add_field_panel() -> VNode {
    let mut kinds = VNode::element("select").with_attr("data-field", "kind");
    for kind in ["text", "number", "email", "radio", "checkbox", "textarea"] {
        kinds.push_child(
            VNode::element("option")
                .with_attr("value", kind)
                .with_child(VNode::text(kind)),
        );
    }

    VNode::element("div")
        .with_attr("class", "pb-add-field")
        .with_attr("data-affordance", "true")
        .with_child(
            VNode::element("input")
                .with_attr("type", "text")
                .with_attr("data-field", "label")
                .with_attr("placeholder", "Field label"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "text")
                .with_attr("data-field", "placeholder")
                .with_attr("placeholder", "Placeholder (optional)"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "checkbox")
                .with_attr("data-field", "required"),
        )
        .with_child(kinds)
        .with_child(
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("data-action", "add-field")
                .with_child(VNode::text("Add field")),
        )
}

fn resize_handle(axis: &str, class: &str) -> VNode {
    VNode::element("div")
        .with_attr("class", class)
        .with_attr("data-affordance", "true")
        .with_attr("data-axis", axis)
}
