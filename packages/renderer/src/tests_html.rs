//! HTML writer tests.

use crate::editor_state::EditorState;
use crate::html::{write_html, WriteOptions};
use crate::layout::Viewport;
use crate::renderer::{render, RenderOptions};
use crate::vdom::{VDocument, VNode};
use pegboard_model::{Node, NodeKind};
use pegboard_store::SiteConfig;

fn fragment_options() -> WriteOptions {
    WriteOptions {
        standalone: false,
        ..WriteOptions::default()
    }
}

fn doc(node: VNode) -> VDocument {
    let mut document = VDocument::new();
    document.add_node(node);
    document
}

#[test]
fn test_text_is_escaped() {
    let document = doc(
        VNode::element("div").with_child(VNode::text("<script>alert('x')</script>")),
    );
    let html = write_html(&document, &fragment_options());
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_raw_markup_passes_through() {
    let document = doc(VNode::element("div").with_child(VNode::raw("<p><b>bold</b></p>")));
    let html = write_html(&document, &fragment_options());
    assert!(html.contains("<p><b>bold</b></p>"));
}

#[test]
fn test_attributes_are_escaped_and_sorted() {
    let document = doc(
        VNode::element("div")
            .with_attr("title", "a \"quoted\" value")
            .with_attr("class", "box"),
    );
    let html = write_html(&document, &fragment_options());
    assert!(html.contains("title=\"a &quot;quoted&quot; value\""));
    // BTreeMap ordering puts class before title.
    let class_at = html.find("class=").unwrap();
    let title_at = html.find("title=").unwrap();
    assert!(class_at < title_at);
}

#[test]
fn test_void_tags_self_close() {
    let document = doc(VNode::element("img").with_attr("src", "/a.png"));
    let html = write_html(&document, &fragment_options());
    assert!(html.contains("<img src=\"/a.png\" />"));
    assert!(!html.contains("</img>"));
}

#[test]
fn test_styles_render_inline() {
    let document = doc(
        VNode::element("div")
            .with_style("width", "120px")
            .with_style("flex", "0 0 auto"),
    );
    let html = write_html(&document, &fragment_options());
    assert!(html.contains("style=\"flex: 0 0 auto; width: 120px;\""));
}

#[test]
fn test_standalone_shell() {
    let options = WriteOptions {
        title: "Landing".to_string(),
        ..WriteOptions::default()
    };
    let html = write_html(&doc(VNode::element("div")), &options);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Landing</title>"));
    assert!(html.contains("<body>"));
}

#[test]
fn test_compact_output_has_no_newlines() {
    let options = WriteOptions {
        pretty: false,
        standalone: false,
        ..WriteOptions::default()
    };
    let document = doc(
        VNode::element("div").with_child(VNode::element("span").with_child(VNode::text("x"))),
    );
    let html = write_html(&document, &options);
    assert_eq!(html, "<div><span>x</span></div>");
}

#[test]
fn test_rendered_page_round_trips_to_html() {
    let mut row = Node::new(NodeKind::RowGroup, "row");
    let mut text = Node::new(NodeKind::Text, "txt");
    text.content = "<p>Hello</p>".to_string();
    row.children.push(text);
    let mut image = Node::with_defaults(NodeKind::Image, "img");
    image.content = "/assets/a.png".to_string();
    row.children.push(image);
    let tree = vec![row, Node::with_defaults(NodeKind::Form, "form")];

    let view = render(&tree, &RenderOptions::view(SiteConfig::default(), Viewport::Wide));
    let html = write_html(&view, &WriteOptions::default());

    assert!(html.contains("max-width: 1280px;"));
    assert!(html.contains("<p>Hello</p>"));
    assert!(html.contains("src=\"/assets/a.png\""));
    assert!(html.contains("action=\"/api/contact\""));
    assert!(!html.contains("data-node-id"));

    let edit = render(
        &tree,
        &RenderOptions::edit(SiteConfig::default(), Viewport::Wide, EditorState::new()),
    );
    let canvas = write_html(&edit, &WriteOptions::default());
    assert!(canvas.contains("data-node-id=\"row\""));
    assert!(canvas.contains("pb-handle"));
    assert!(!canvas.contains("action=\"/api/contact\""));
}
