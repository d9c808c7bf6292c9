use crate::Node;
use crate::escape::{escape_attr, escape_text};
use std::fmt::Write;

fn is_void_element(name: &str) -> bool {
    name.eq_ignore_ascii_case("br")
        || name.eq_ignore_ascii_case("hr")
        || name.eq_ignore_ascii_case("img")
        || name.eq_ignore_ascii_case("input")
        || name.eq_ignore_ascii_case("link")
        || name.eq_ignore_ascii_case("meta")
}

/// Render a node tree as HTML text, two-space indented, one element per line.
///
/// All text and attribute values pass through the escape layer, so whatever
/// reached the tree as a text node can never re-enter as markup.
pub fn to_html(root: &Node) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Text { text, .. } => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                indent(depth, out);
                out.push_str(&escape_text(trimmed));
                out.push('\n');
            }
        }
        Node::Element {
            name,
            attributes,
            children,
            ..
        } => {
            indent(depth, out);
            let _ = write!(out, "<{name}");
            for (k, v) in attributes {
                match v {
                    Some(v) => {
                        let _ = write!(out, r#" {k}="{}""#, escape_attr(v));
                    }
                    None => {
                        let _ = write!(out, " {k}");
                    }
                }
            }

            if is_void_element(name) {
                out.push_str(">\n");
                return;
            }
            if children.is_empty() {
                let _ = write!(out, "></{name}>\n");
                return;
            }

            out.push_str(">\n");
            for c in children {
                write_node(c, depth + 1, out);
            }
            indent(depth, out);
            let _ = write!(out, "</{name}>\n");
        }
    }
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let tree = Node::element("div")
            .with_attr("class", "category-list")
            .with_child(Node::element("h3").with_child(Node::text("Games")));
        let html = to_html(&tree);
        assert_eq!(
            html,
            "<div class=\"category-list\">\n  <h3>\n    Games\n  </h3>\n</div>\n"
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let tree = Node::element("div")
            .with_attr("title", r#"a"b"#)
            .with_child(Node::text("<b>bold</b>"));
        let html = to_html(&tree);
        assert!(html.contains(r#"title="a&quot;b""#));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let html = to_html(&Node::element("hr"));
        assert_eq!(html, "<hr>\n");
    }
}
