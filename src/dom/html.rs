//! HTML serialization of DOM subtrees.

use super::node::NodeId;
use super::tree::Dom;

/// Elements serialized without content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Whether `tag` is an HTML void element (case-insensitive).
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

impl Dom {
    /// Serialize a node and its subtree.
    ///
    /// Attributes are written as `class`, `id`, then the rest in insertion
    /// order. Text precedes children. Void elements are written as a bare
    /// start tag. Returns an empty string for a stale id.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_outer(id, &mut out);
        out
    }

    /// Serialize the content of a node (text, then children).
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_inner(id, &mut out);
        out
    }

    /// Concatenated text of the node and its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.get(node).and_then(|data| data.text.as_deref()))
            .collect()
    }

    fn write_outer(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.get(id) else {
            return;
        };

        out.push('<');
        out.push_str(&data.tag);
        if !data.classes.is_empty() {
            write_attribute(out, "class", &data.class_name());
        }
        if let Some(node_id) = &data.id {
            write_attribute(out, "id", node_id);
        }
        for (name, value) in &data.attributes {
            write_attribute(out, name, value);
        }
        out.push('>');

        if is_void_element(&data.tag) {
            return;
        }

        self.write_inner(id, out);
        out.push_str("</");
        out.push_str(&data.tag);
        out.push('>');
    }

    fn write_inner(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.get(id).and_then(|data| data.text.as_deref()) {
            escape_into(text, false, out);
        }
        for &child in self.children(id) {
            self.write_outer(child, out);
        }
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

fn escape_into(text: &str, in_attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;

    #[test]
    fn void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("BR"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn attribute_order_class_id_rest() {
        let mut dom = Dom::new();
        let a = dom.insert(
            NodeData::new("a")
                .with_attribute("href", "/x")
                .with_id("link")
                .with_class("nav")
                .with_text("go"),
        );
        assert_eq!(
            dom.to_html(a),
            r#"<a class="nav" id="link" href="/x">go</a>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut dom = Dom::new();
        let p = dom.insert(
            NodeData::new("p")
                .with_attribute("title", "say \"hi\" & <bye>")
                .with_text("1 < 2 & \"q\""),
        );
        assert_eq!(
            dom.to_html(p),
            r#"<p title="say &quot;hi&quot; &amp; &lt;bye&gt;">1 &lt; 2 &amp; "q"</p>"#
        );
    }

    #[test]
    fn void_element_has_no_closing_tag() {
        let mut dom = Dom::new();
        let img = dom.insert(NodeData::new("img").with_attribute("src", "u"));
        assert_eq!(dom.to_html(img), r#"<img src="u">"#);
    }

    #[test]
    fn text_before_children() {
        let mut dom = Dom::new();
        let div = dom.insert(NodeData::new("div").with_text("a"));
        let span = dom.insert(NodeData::new("span").with_text("b"));
        dom.append_child(div, span).unwrap();
        assert_eq!(dom.to_html(div), "<div>a<span>b</span></div>");
        assert_eq!(dom.inner_html(div), "a<span>b</span>");
        assert_eq!(dom.text_content(div), "ab");
    }

    #[test]
    fn stale_id_serializes_empty() {
        let mut dom = Dom::new();
        let p = dom.insert(NodeData::new("p"));
        dom.remove(p);
        assert_eq!(dom.to_html(p), "");
        assert_eq!(dom.text_content(p), "");
    }
}
