//! Mode tests: Edit and View must resolve identical geometry from the same
//! tree and viewport signal, while only Edit carries canvas affordances.

use crate::editor_state::EditorState;
use crate::layout::Viewport;
use crate::renderer::{render, RenderOptions};
use crate::vdom::VNode;
use pegboard_model::{FieldKind, FieldProps, Node, NodeKind};
use pegboard_store::SiteConfig;

/// A page exercising every kind: a mixed row, a column template, a full
/// block with leaves, a form and a corrupt node.
fn sample_tree() -> Vec<Node> {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    row.children.push({
        let mut n = Node::new(NodeKind::RowGroup, "fixed-a");
        n.style.width = Some(100.0);
        n
    });
    row.children.push({
        let mut n = Node::new(NodeKind::RowGroup, "fixed-b");
        n.style.width = Some(150.0);
        n
    });
    row.children.push(Node::new(NodeKind::Text, "flexible"));

    let mut template = Node::new(NodeKind::RowGroup, "template");
    template.columns = Some(2);
    let mut tagged = Node::new(NodeKind::Text, "tagged");
    tagged.group_key = Some("col-2".to_string());
    tagged.content = "<p>column two</p>".to_string();
    template.children.push(tagged);

    let mut block = Node::new(NodeKind::FullBlock, "block");
    let mut image = Node::with_defaults(NodeKind::Image, "image");
    image.content = "/assets/photo.png".to_string();
    image.style.height = Some(200.0);
    block.children.push(image);
    block.children.push(Node::with_defaults(NodeKind::Button, "button"));

    let mut form = Node::with_defaults(NodeKind::Form, "form");
    let mut field = Node::new(NodeKind::Text, "field");
    field.content = "Email".to_string();
    field.field = Some(FieldProps::new(FieldKind::Email, "Email"));
    form.children.push(field);

    let corrupt = Node::new(NodeKind::from_tag("carousel"), "corrupt");

    vec![row, template, block, form, corrupt]
}

fn is_affordance(node: &VNode) -> bool {
    node.attr("data-affordance").is_some()
}

/// Children that exist in both modes: everything that is not canvas chrome.
fn content_children(node: &VNode) -> Vec<&VNode> {
    node.children()
        .iter()
        .filter(|child| !is_affordance(child))
        .collect()
}

const GEOMETRY_KEYS: [&str; 5] = ["width", "height", "flex", "flex-direction", "display"];

fn assert_same_geometry(edit: &VNode, view: &VNode, path: &str) {
    match (edit, view) {
        (VNode::Element { .. }, VNode::Element { .. }) => {
            for key in GEOMETRY_KEYS {
                assert_eq!(
                    edit.style(key),
                    view.style(key),
                    "style `{key}` diverged at {path}"
                );
            }
            let edit_children = content_children(edit);
            let view_children = content_children(view);
            assert_eq!(
                edit_children.len(),
                view_children.len(),
                "content child count diverged at {path}"
            );
            for (i, (e, v)) in edit_children.iter().zip(&view_children).enumerate() {
                assert_same_geometry(e, v, &format!("{path}/{i}"));
            }
        }
        (VNode::Text { content: a }, VNode::Text { content: b }) => {
            assert_eq!(a, b, "text diverged at {path}");
        }
        (VNode::Raw { html: a }, VNode::Raw { html: b }) => {
            assert_eq!(a, b, "raw markup diverged at {path}");
        }
        (a, b) => panic!("node shape diverged at {path}: {a:?} vs {b:?}"),
    }
}

fn count_matching(node: &VNode, pred: &dyn Fn(&VNode) -> bool) -> usize {
    let mut count = usize::from(pred(node));
    for child in node.children() {
        count += count_matching(child, pred);
    }
    count
}

#[test]
fn test_edit_and_view_geometry_is_equal() {
    let tree = sample_tree();
    let config = SiteConfig::default();

    for viewport in [Viewport::Wide, Viewport::Narrow] {
        let edit = render(
            &tree,
            &RenderOptions::edit(config.clone(), viewport, EditorState::new()),
        );
        let view = render(&tree, &RenderOptions::view(config.clone(), viewport));
        assert_same_geometry(&edit.nodes[0], &view.nodes[0], "page");
    }
}

#[test]
fn test_geometry_equal_even_with_open_chrome() {
    let tree = sample_tree();
    let config = SiteConfig::default();
    let editor = EditorState {
        menu_open: Some("row".to_string()),
        style_modal: Some("button".to_string()),
        resizing: Some("fixed-a".to_string()),
    };

    let edit = render(
        &tree,
        &RenderOptions::edit(config.clone(), Viewport::Wide, editor),
    );
    let view = render(&tree, &RenderOptions::view(config, Viewport::Wide));
    assert_same_geometry(&edit.nodes[0], &view.nodes[0], "page");
}

#[test]
fn test_corrupt_node_renders_nothing_in_both_modes() {
    let tree = sample_tree();
    let config = SiteConfig::default();
    let view = render(&tree, &RenderOptions::view(config.clone(), Viewport::Wide));
    let edit = render(
        &tree,
        &RenderOptions::edit(config, Viewport::Wide, EditorState::new()),
    );

    // Five top-level nodes, one corrupt: four rendered.
    assert_eq!(view.nodes[0].children().len(), 4);
    assert_eq!(content_children(&edit.nodes[0]).len(), 4);
}

#[test]
fn test_view_mode_emits_no_affordances() {
    let view = render(
        &sample_tree(),
        &RenderOptions::view(SiteConfig::default(), Viewport::Wide),
    );
    let root = &view.nodes[0];
    assert_eq!(count_matching(root, &is_affordance), 0);
    assert_eq!(
        count_matching(root, &|n| n.attr("data-node-id").is_some()),
        0
    );
}

#[test]
fn test_edit_mode_affordances() {
    let edit = render(
        &sample_tree(),
        &RenderOptions::edit(SiteConfig::default(), Viewport::Wide, EditorState::new()),
    );
    let root = &edit.nodes[0];

    // Every rendered node carries its id and an options trigger.
    let node_count = count_matching(root, &|n| n.attr("data-node-id").is_some());
    let trigger_count = count_matching(root, &|n| {
        n.attr("class") == Some("pb-options")
    });
    assert!(node_count > 0);
    assert_eq!(trigger_count, node_count);

    // Resize handles: both-axis handles only on images.
    assert!(count_matching(root, &|n| n.attr("data-axis") == Some("horizontal")) > 0);
    assert_eq!(
        count_matching(root, &|n| n.attr("data-axis") == Some("both")),
        1
    );

    // No menu or modal is open by default.
    assert_eq!(
        count_matching(root, &|n| n.attr("class") == Some("pb-menu")),
        0
    );
    assert_eq!(
        count_matching(root, &|n| n.attr("class") == Some("pb-modal")),
        0
    );
}

#[test]
fn test_open_menu_and_modal_render_for_their_node_only() {
    let editor = EditorState {
        menu_open: Some("block".to_string()),
        style_modal: Some("button".to_string()),
        resizing: None,
    };
    let edit = render(
        &sample_tree(),
        &RenderOptions::edit(SiteConfig::default(), Viewport::Wide, editor),
    );
    let root = &edit.nodes[0];

    assert_eq!(
        count_matching(root, &|n| n.attr("class") == Some("pb-menu")),
        1
    );
    assert_eq!(
        count_matching(root, &|n| n.attr("data-modal-for") == Some("button")),
        1
    );
}

#[test]
fn test_form_submission_wiring() {
    let tree = sample_tree();
    let view = render(&tree, &RenderOptions::view(SiteConfig::default(), Viewport::Wide));
    let edit = render(
        &tree,
        &RenderOptions::edit(SiteConfig::default(), Viewport::Wide, EditorState::new()),
    );

    let posts_to_endpoint =
        |n: &VNode| n.attr("action") == Some("/api/contact") && n.attr("method") == Some("post");
    assert_eq!(count_matching(&view.nodes[0], &posts_to_endpoint), 1);
    assert_eq!(count_matching(&edit.nodes[0], &posts_to_endpoint), 0);

    // The add-field panel is canvas chrome.
    let is_panel = |n: &VNode| n.attr("class") == Some("pb-add-field");
    assert_eq!(count_matching(&edit.nodes[0], &is_panel), 1);
    assert_eq!(count_matching(&view.nodes[0], &is_panel), 0);

    // The field itself is identical in both: a named, typed input.
    let is_email_input =
        |n: &VNode| n.attr("type") == Some("email") && n.attr("name") == Some("email");
    assert_eq!(count_matching(&view.nodes[0], &is_email_input), 1);
    assert_eq!(count_matching(&edit.nodes[0], &is_email_input), 1);
}

#[test]
fn test_flex_shares_appear_in_output() {
    // A lone top-level row takes the full page width; 250 of it is fixed,
    // the one flexible child fills the remaining 1030.
    let mut row = Node::new(NodeKind::RowGroup, "row");
    for (id, width) in [("a", Some(100.0)), ("b", Some(150.0)), ("c", None)] {
        let mut child = Node::new(NodeKind::RowGroup, id);
        child.style.width = width;
        row.children.push(child);
    }

    let view = render(
        &[row],
        &RenderOptions::view(SiteConfig::default(), Viewport::Wide),
    );
    let row = &view.nodes[0].children()[0];
    let children = row.children();
    assert_eq!(children[0].style("width"), Some("100px"));
    assert_eq!(children[0].style("flex"), Some("0 0 auto"));
    assert_eq!(children[1].style("width"), Some("150px"));
    assert_eq!(children[2].style("flex"), Some("1 1 0"));
    assert_eq!(children[2].style("width"), Some("1030px"));
}

#[test]
fn test_narrow_viewport_stacks_rows() {
    let tree = sample_tree();
    let view = render(&tree, &RenderOptions::view(SiteConfig::default(), Viewport::Narrow));
    let row = &view.nodes[0].children()[0];

    assert_eq!(row.style("flex-direction"), Some("column"));
    for child in content_children(row) {
        assert_eq!(child.style("width"), Some("100%"));
    }
}

#[test]
fn test_column_template_partitions_children() {
    let tree = sample_tree();
    let view = render(&tree, &RenderOptions::view(SiteConfig::default(), Viewport::Wide));
    let template = &view.nodes[0].children()[1];

    let columns: Vec<&VNode> = template
        .children()
        .iter()
        .filter(|c| c.attr("data-column").is_some())
        .collect();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].attr("data-column"), Some("col-1"));
    assert_eq!(columns[0].children().len(), 0);
    // The tagged child landed in its column regardless of sibling order.
    assert_eq!(columns[1].children().len(), 1);
}
