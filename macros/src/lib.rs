//! Proc macros for json2dom: `template!` literal syntax.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `json2dom`.

use proc_macro::TokenStream;

mod template_macro;

/// JSON-like template literal, checked at compile time.
///
/// Expands to a `json2dom::template::Template<_>` expression.
///
/// # Syntax
///
/// - `{ "selector": value }` — one element; exactly one key is allowed
/// - `"text"`, `5`, `1.5`, `true` — text content; `null` is empty text
/// - `{ "key": value, ... }` as a value — attribute bag
/// - `[ template, ... ]` — ordered children
/// - `(expr)` — a Rust expression: an already-built node in template, value
///   and list positions, an attribute value under a plain bag key
///
/// # Bag entries
///
/// - `children` must be a list of templates
/// - `html` sets text content, `style` the style attribute
/// - an object or list value, or a key containing `.` or `#`, is a nested
///   child element
/// - anything else is a plain attribute (`null` passes `AttrValue::Null`)
///
/// # Example
///
/// ```ignore
/// let link = json2dom::build(&mut dom, template!({ "a": { "href": (url), "html": "docs" } }))?;
/// let page = template!({
///     "div.page": {
///         "style": "position:relative",
///         "h1.title": "Hello",
///         "children": [ { "p": "body" }, (link) ],
///     }
/// });
/// ```
#[proc_macro]
pub fn template(input: TokenStream) -> TokenStream {
    template_macro::template_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
