//! Template model: a closed union of the shapes a template value can take.
//!
//! `N` is the backend's node handle type, which lets an already-built node be
//! embedded anywhere a template is accepted.

use std::fmt;

use serde_json::Number;

/// Reserved bag key whose value is an ordered list of child templates.
pub const CHILDREN_KEY: &str = "children";
/// Reserved bag key whose value becomes the element's text content.
pub const HTML_KEY: &str = "html";
/// Reserved bag key whose value becomes the element's style attribute.
pub const STYLE_KEY: &str = "style";

/// One unit of construction: either an element description or a node that
/// has already been built.
#[derive(Debug, Clone, PartialEq)]
pub enum Template<N> {
    /// A `{selector: value}` pair still to be built.
    Element(Element<N>),
    /// A materialized node, passed through unchanged.
    Node(N),
}

impl<N> Template<N> {
    /// Create an element template from a selector and a value.
    pub fn element(selector: impl Into<String>, value: impl Into<Value<N>>) -> Self {
        Template::Element(Element {
            selector: selector.into(),
            value: value.into(),
        })
    }

    /// Wrap an already-built node.
    pub fn node(node: N) -> Self {
        Template::Node(node)
    }
}

/// A selector string bound to the value that describes the element's content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<N> {
    pub selector: String,
    pub value: Value<N>,
}

/// The content of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<N> {
    /// Text content.
    Text(String),
    /// Attributes, properties and children.
    Attributes(Attributes<N>),
    /// Child templates appended in order.
    List(Vec<Template<N>>),
    /// A materialized node appended as the only child.
    Node(N),
}

impl<N> Value<N> {
    /// Text content value.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Child list value.
    pub fn list(items: impl IntoIterator<Item = Template<N>>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Materialized child node value.
    pub fn node(node: N) -> Self {
        Value::Node(node)
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Attributes(_) => "attributes",
            Value::List(_) => "list",
            Value::Node(_) => "node",
        }
    }
}

impl<N> From<&str> for Value<N> {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl<N> From<String> for Value<N> {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl<N> From<Attributes<N>> for Value<N> {
    fn from(attrs: Attributes<N>) -> Self {
        Value::Attributes(attrs)
    }
}

impl<N> From<Vec<Template<N>>> for Value<N> {
    fn from(items: Vec<Template<N>>) -> Self {
        Value::List(items)
    }
}

impl<N> From<Template<N>> for Value<N> {
    /// A single nested template: a bag holding one child.
    fn from(template: Template<N>) -> Self {
        Value::Attributes(Attributes::new().child(template))
    }
}

/// A non-child entry of an attribute bag.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Plain attribute `name = value`.
    Attribute { name: String, value: AttrValue },
    /// `html` key: text content.
    Html(String),
    /// `style` key: the style attribute.
    Style(String),
}

/// An attribute/children bag.
///
/// Properties are applied in insertion order, then children are appended in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes<N> {
    pub properties: Vec<Property>,
    pub children: Vec<Template<N>>,
}

impl<N> Attributes<N> {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a plain attribute (builder).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.properties.push(Property::Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Set text content (builder).
    pub fn html(mut self, text: impl Into<String>) -> Self {
        self.properties.push(Property::Html(text.into()));
        self
    }

    /// Set the style attribute (builder).
    pub fn style(mut self, css: impl Into<String>) -> Self {
        self.properties.push(Property::Style(css.into()));
        self
    }

    /// Append one child template (builder).
    pub fn child(mut self, template: Template<N>) -> Self {
        self.children.push(template);
        self
    }

    /// Append several child templates (builder).
    pub fn children(mut self, templates: impl IntoIterator<Item = Template<N>>) -> Self {
        self.children.extend(templates);
        self
    }

    /// Whether the bag has neither properties nor children.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.is_empty()
    }
}

impl<N> Default for Attributes<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// An attribute value as written in the template.
///
/// Backends decide how to represent non-text values; the [`Display`]
/// impl gives the conventional string form.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl AttrValue {
    /// The value as text, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n.into())
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n.into())
    }
}

impl From<u64> for AttrValue {
    fn from(n: u64) -> Self {
        AttrValue::Number(n.into())
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n.into())
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        AttrValue::Number(n.into())
    }
}

/// Non-finite floats have no number representation and become `Null`.
impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(AttrValue::Null, AttrValue::Number)
    }
}

impl From<Number> for AttrValue {
    fn from(n: Number) -> Self {
        AttrValue::Number(n)
    }
}
