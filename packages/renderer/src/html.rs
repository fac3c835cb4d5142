//! Serialize a rendered [`VDocument`] to HTML text.

use crate::vdom::{VDocument, VNode};
use std::collections::BTreeMap;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap the output in a full document shell
    pub standalone: bool,
    /// Document title when standalone
    pub title: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            standalone: true,
            title: "Pegboard Page".to_string(),
        }
    }
}

struct Context {
    options: WriteOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: WriteOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Write a rendered document to HTML.
pub fn write_html(document: &VDocument, options: &WriteOptions) -> String {
    let mut ctx = Context::new(options.clone());

    if ctx.options.standalone {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();
        write_head(&mut ctx);
        ctx.add_line("<body>");
        ctx.indent();
    }

    for node in &document.nodes {
        write_node(node, &mut ctx);
    }

    if ctx.options.standalone {
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");
    }

    ctx.get_output()
}

fn write_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = escape_html(&ctx.options.title);
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.dedent();
    ctx.add_line("</head>");
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => write_element(tag, attributes, styles, children, ctx),
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }
        VNode::Raw { html } => {
            ctx.add_line(html);
        }
    }
}

fn write_element(
    tag: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if !styles.is_empty() {
        ctx.add(" style=\"");
        for (i, (key, value)) in styles.iter().enumerate() {
            if i > 0 {
                ctx.add(" ");
            }
            ctx.add(&format!("{}: {};", key, escape_html(value)));
        }
        ctx.add("\"");
    }

    if children.is_empty() && is_self_closing(tag) {
        ctx.add(" />");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return;
    }

    ctx.add(">");

    if !children.is_empty() {
        if ctx.options.pretty {
            ctx.add("\n");
        }
        ctx.indent();
        for child in children {
            write_node(child, ctx);
        }
        ctx.dedent();
        if ctx.options.pretty {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", tag));
    if ctx.options.pretty {
        ctx.add("\n");
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
