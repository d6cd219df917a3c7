//! Snapshot helpers: build a JSON template into a fresh [`Dom`] and
//! serialize it, for string assertions and snapshot tests.

use serde_json::Value as Json;

use crate::builder::build_json;
use crate::dom::{Dom, DomError};
use crate::error::{BuildError, TemplateError};

/// Build `json` into a new DOM and return the root's outer HTML.
///
/// # Examples
///
/// ```
/// use json2dom::testing::render_to_string;
/// use serde_json::json;
///
/// let html = render_to_string(&json!({"ul.x": [{"li": "a"}, {"li": "b"}]})).unwrap();
/// assert_eq!(html, r#"<ul class="x"><li>a</li><li>b</li></ul>"#);
/// ```
pub fn render_to_string(json: &Json) -> Result<String, BuildError<DomError>> {
    let mut dom = Dom::new();
    let root = build_json(&mut dom, json)?;
    Ok(dom.to_html(root))
}

/// Parse a JSON string and render it like [`render_to_string`].
pub fn render_str_to_string(input: &str) -> Result<String, BuildError<DomError>> {
    let json: Json = serde_json::from_str(input).map_err(TemplateError::from)?;
    render_to_string(&json)
}
