//! Template model and JSON conversion.

pub mod json;
pub mod model;

pub use json::{classify_entry, is_selector_key, EntryKind};
pub use model::{
    AttrValue, Attributes, Element, Property, Template, Value, CHILDREN_KEY, HTML_KEY, STYLE_KEY,
};
