//! Node types: NodeId, NodeData.

use std::borrow::Cow;

use indexmap::IndexMap;
use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Tag name (e.g. "div", "img").
    pub tag: String,
    /// Optional `id` attribute.
    pub id: Option<String>,
    /// Class list, in `class` attribute order.
    pub classes: Vec<String>,
    /// Every other attribute, in the order it was first set.
    pub attributes: IndexMap<String, String>,
    /// Text content, if any was set.
    pub text: Option<String>,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: IndexMap::new(),
            text: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute (builder). See [`NodeData::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The class list as the `class` attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Set an attribute.
    ///
    /// `id` and `class` are reflected into [`NodeData::id`] and
    /// [`NodeData::classes`]; a `class` value is split on whitespace.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "id" => self.id = Some(value),
            "class" => {
                self.classes = value.split_whitespace().map(str::to_owned).collect();
            }
            _ => {
                self.attributes.insert(name.to_owned(), value);
            }
        }
    }

    /// Read an attribute, including the reflected `id` and `class`.
    ///
    /// `class` reads as `None` when the class list is empty.
    pub fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => self.id.as_deref().map(Cow::Borrowed),
            "class" if self.classes.is_empty() => None,
            "class" => Some(Cow::Owned(self.class_name())),
            _ => self.attributes.get(name).map(|v| Cow::Borrowed(v.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("img");
        assert_eq!(data.tag, "img");
        assert!(data.id.is_none());
        assert!(data.classes.is_empty());
        assert!(data.attributes.is_empty());
        assert!(data.text.is_none());
    }

    #[test]
    fn builder_with_id() {
        let data = NodeData::new("h1").with_id("title");
        assert_eq!(data.id.as_deref(), Some("title"));
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("p").with_class("primary").with_class("primary");
        assert_eq!(data.classes, vec!["primary"]);
    }

    #[test]
    fn builder_with_text() {
        assert_eq!(NodeData::new("p").with_text("hi").text.as_deref(), Some("hi"));
    }

    #[test]
    fn set_attribute_reflects_id_and_class() {
        let mut data = NodeData::new("div");
        data.set_attribute("id", "main");
        data.set_attribute("class", " a  b ");
        assert_eq!(data.id.as_deref(), Some("main"));
        assert_eq!(data.classes, vec!["a", "b"]);
        assert!(data.attributes.is_empty());
    }

    #[test]
    fn set_attribute_keeps_first_insertion_position() {
        let data = NodeData::new("a")
            .with_attribute("href", "x")
            .with_attribute("title", "t")
            .with_attribute("href", "y");
        let pairs: Vec<_> = data
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("href", "y"), ("title", "t")]);
    }

    #[test]
    fn attribute_reads() {
        let data = NodeData::new("img")
            .with_id("logo")
            .with_class("a")
            .with_class("b")
            .with_attribute("src", "u");
        assert_eq!(data.attribute("id").as_deref(), Some("logo"));
        assert_eq!(data.attribute("class").as_deref(), Some("a b"));
        assert_eq!(data.attribute("src").as_deref(), Some("u"));
        assert_eq!(data.attribute("alt"), None);
        assert_eq!(NodeData::new("p").attribute("class"), None);
    }

    #[test]
    fn has_class_after_class_attribute() {
        let mut data = NodeData::new("li").with_class("old");
        data.set_attribute("class", "item active");
        assert!(data.has_class("active"));
        assert!(!data.has_class("old"));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
