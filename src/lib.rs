//! # json2dom
//!
//! Build element trees from compact, JSON-shaped templates.
//!
//! A template is a single-key object: the key is a selector such as
//! `li.item#first`, the value describes the element's content.
//!
//! ```
//! use json2dom::dom::Dom;
//! use serde_json::json;
//!
//! let mut dom = Dom::new();
//! let ul = json2dom::build_json(&mut dom, &json!({
//!     "ul.list": [{"li": "a"}, {"li": "b"}]
//! })).unwrap();
//! assert_eq!(dom.to_html(ul), r#"<ul class="list"><li>a</li><li>b</li></ul>"#);
//! ```
//!
//! ## Core Systems
//!
//! - **[`selector`]** — logos-based `tag.class#id` parser
//! - **[`template`]** — template model and JSON conversion
//! - **[`builder`]** — recursive tree builder over a [`Backend`]
//! - **[`backend`]** — the node-creation capability the builder drives
//! - **[`dom`]** — slotmap-backed in-memory element tree implementing [`Backend`]
//! - **[`testing`]** — recording backend and HTML snapshot helpers
//! - **[`error`]** — error types

// Foundation
pub mod error;
pub mod selector;
pub mod template;

// Building
pub mod backend;
pub mod builder;

// Targets
pub mod dom;
pub mod testing;

pub use backend::Backend;
pub use builder::{build, build_json, Builder, BuilderConfig};
pub use error::{BuildError, TemplateError};
pub use selector::Selector;
pub use template::{AttrValue, Attributes, Template, Value};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use json2dom_macros::template;
