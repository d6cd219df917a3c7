//! template! macro: parse JSON-like template literals and generate json2dom
//! `Template` construction code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    braced, bracketed, parenthesized, token, Error, Expr, Ident, Lit, LitFloat, LitInt, LitStr,
    Result, Token,
};

// ---------------------------------------------------------------------------
// Bag classification
// ---------------------------------------------------------------------------

// Mirrors `json2dom::template::classify_entry`; the two must stay in sync.
const CHILDREN_KEY: &str = "children";
const HTML_KEY: &str = "html";
const STYLE_KEY: &str = "style";

fn is_selector_key(key: &str) -> bool {
    key.contains(|c| c == '.' || c == '#')
}

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A value in template syntax.
#[derive(Clone)]
pub(crate) enum Node {
    /// `"text"`.
    Str(LitStr),
    /// Integer literal.
    Int(LitInt),
    /// Float literal.
    Float(LitFloat),
    /// `true` / `false`.
    Bool(bool, Span),
    /// `null`.
    Null(Span),
    /// `{ "key": value, ... }`.
    Object(Vec<Entry>, Span),
    /// `[ item, ... ]`.
    List(Vec<Node>, Span),
    /// `(expr)`: an embedded Rust expression.
    Expr(Expr),
}

/// One `"key": value` pair of an object.
#[derive(Clone)]
pub(crate) struct Entry {
    pub key: LitStr,
    pub value: Node,
}

impl Node {
    fn span(&self) -> Span {
        match self {
            Node::Str(lit) => lit.span(),
            Node::Int(lit) => lit.span(),
            Node::Float(lit) => lit.span(),
            Node::Bool(_, span)
            | Node::Null(span)
            | Node::Object(_, span)
            | Node::List(_, span) => *span,
            Node::Expr(expr) => syn::spanned::Spanned::span(expr),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Node::Str(_) => "a string",
            Node::Int(_) | Node::Float(_) => "a number",
            Node::Bool(..) => "a boolean",
            Node::Null(_) => "null",
            Node::Object(..) => "an object",
            Node::List(..) => "a list",
            Node::Expr(_) => "an expression",
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Str(lit) => write!(f, "Str({:?})", lit.value()),
            Node::Int(lit) => write!(f, "Int({})", lit.base10_digits()),
            Node::Float(lit) => write!(f, "Float({})", lit.base10_digits()),
            Node::Bool(b, _) => write!(f, "Bool({b})"),
            Node::Null(_) => f.write_str("Null"),
            Node::Object(entries, _) => f.debug_list().entries(entries).finish(),
            Node::List(items, _) => f.debug_list().entries(items).finish(),
            Node::Expr(_) => f.write_str("Expr"),
        }
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key.value())
            .field("value", &self.value)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

const EXPECTED_VALUE: &str =
    "expected a string, number, boolean, `null`, `{...}`, `[...]` or `(expr)`";

impl Parse for Node {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(token::Brace) {
            let content;
            let brace = braced!(content in input);
            let entries = Punctuated::<Entry, Token![,]>::parse_terminated(&content)?;
            return Ok(Node::Object(entries.into_iter().collect(), brace.span.join()));
        }

        if input.peek(token::Bracket) {
            let content;
            let bracket = bracketed!(content in input);
            let items = Punctuated::<Node, Token![,]>::parse_terminated(&content)?;
            return Ok(Node::List(items.into_iter().collect(), bracket.span.join()));
        }

        if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            return Ok(Node::Expr(content.parse()?));
        }

        if input.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == "null" {
                return Ok(Node::Null(ident.span()));
            }
            return Err(Error::new(ident.span(), EXPECTED_VALUE));
        }

        match input.parse::<Lit>()? {
            Lit::Str(lit) => Ok(Node::Str(lit)),
            Lit::Int(lit) => Ok(Node::Int(lit)),
            Lit::Float(lit) => Ok(Node::Float(lit)),
            Lit::Bool(lit) => Ok(Node::Bool(lit.value, lit.span)),
            other => Err(Error::new(other.span(), EXPECTED_VALUE)),
        }
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: LitStr = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: Node = input.parse()?;
        Ok(Entry { key, value })
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate a `Template` expression.
fn generate_template(node: &Node) -> Result<TokenStream> {
    match node {
        Node::Object(entries, span) => match entries.as_slice() {
            [entry] => {
                let key = &entry.key;
                let value = generate_value(&entry.value)?;
                Ok(quote! { ::json2dom::template::Template::element(#key, #value) })
            }
            [] => Err(Error::new(*span, "template object has no selector key")),
            [_, second, ..] => Err(Error::new(
                second.key.span(),
                format!(
                    "template object must have exactly one selector key, found {}",
                    entries.len()
                ),
            )),
        },
        Node::Expr(expr) => Ok(quote! { ::json2dom::template::Template::node(#expr) }),
        other => Err(Error::new(
            other.span(),
            format!(
                "expected a template object or `(node)`, found {}",
                other.describe()
            ),
        )),
    }
}

/// Generate a `Value` expression for an element's content.
fn generate_value(node: &Node) -> Result<TokenStream> {
    Ok(match node {
        Node::Str(lit) => quote! { ::json2dom::template::Value::text(#lit) },
        Node::Int(_) | Node::Float(_) | Node::Bool(..) | Node::Null(_) => {
            let text = scalar_text(node);
            quote! { ::json2dom::template::Value::text(#text) }
        }
        Node::Object(entries, _) => {
            let bag = generate_bag(entries)?;
            quote! { ::json2dom::template::Value::Attributes(#bag) }
        }
        Node::List(items, _) => {
            let items = items
                .iter()
                .map(generate_template)
                .collect::<Result<Vec<_>>>()?;
            quote! { ::json2dom::template::Value::List(::std::vec![#(#items),*]) }
        }
        Node::Expr(expr) => quote! { ::json2dom::template::Value::node(#expr) },
    })
}

/// Generate an `Attributes` builder chain, classifying each entry.
fn generate_bag(entries: &[Entry]) -> Result<TokenStream> {
    let mut calls = Vec::new();

    for entry in entries {
        let key = &entry.key;
        let name = key.value();
        let value = &entry.value;

        let call = match name.as_str() {
            CHILDREN_KEY => match value {
                Node::List(items, _) => {
                    let items = items
                        .iter()
                        .map(generate_template)
                        .collect::<Result<Vec<_>>>()?;
                    quote! { .children(::std::vec![#(#items),*]) }
                }
                other => {
                    return Err(Error::new(
                        other.span(),
                        format!("`children` must be a list, found {}", other.describe()),
                    ))
                }
            },
            HTML_KEY => {
                let text = text_arg(value, HTML_KEY)?;
                quote! { .html(#text) }
            }
            STYLE_KEY => {
                let text = text_arg(value, STYLE_KEY)?;
                quote! { .style(#text) }
            }
            _ if matches!(value, Node::Object(..) | Node::List(..)) || is_selector_key(&name) => {
                let child = generate_value(value)?;
                quote! { .child(::json2dom::template::Template::element(#key, #child)) }
            }
            _ => {
                let attr = attr_arg(value);
                quote! { .attr(#key, #attr) }
            }
        };
        calls.push(call);
    }

    Ok(quote! {
        ::json2dom::template::Attributes::new() #(#calls)*
    })
}

/// Argument for `.html(...)` / `.style(...)`: anything text-like.
fn text_arg(node: &Node, key: &str) -> Result<TokenStream> {
    match node {
        Node::Str(lit) => Ok(quote! { #lit }),
        Node::Int(_) | Node::Float(_) | Node::Bool(..) | Node::Null(_) => {
            let text = scalar_text(node);
            Ok(quote! { #text })
        }
        Node::Expr(expr) => Ok(quote! { #expr }),
        other => Err(Error::new(
            other.span(),
            format!("`{key}` must be text, found {}", other.describe()),
        )),
    }
}

/// Argument for `.attr(name, ...)`. Unsuffixed numbers are typed so that the
/// `Into<AttrValue>` conversion is unambiguous.
fn attr_arg(node: &Node) -> TokenStream {
    match node {
        Node::Int(lit) if lit.suffix().is_empty() => {
            let typed = LitInt::new(&format!("{}i64", lit.base10_digits()), lit.span());
            quote! { #typed }
        }
        Node::Float(lit) if lit.suffix().is_empty() => {
            let typed = LitFloat::new(&format!("{}f64", lit.base10_digits()), lit.span());
            quote! { #typed }
        }
        Node::Int(lit) => quote! { #lit },
        Node::Float(lit) => quote! { #lit },
        Node::Str(lit) => quote! { #lit },
        Node::Bool(b, _) => quote! { #b },
        Node::Null(_) => quote! { ::json2dom::template::AttrValue::Null },
        Node::Expr(expr) => quote! { #expr },
        // Unreachable: objects and lists are classified as children.
        Node::Object(..) | Node::List(..) => quote! { ::json2dom::template::AttrValue::Null },
    }
}

/// Text of a scalar literal as a string literal token.
fn scalar_text(node: &Node) -> LitStr {
    match node {
        Node::Int(lit) => LitStr::new(lit.base10_digits(), lit.span()),
        Node::Float(lit) => LitStr::new(lit.base10_digits(), lit.span()),
        Node::Bool(b, span) => LitStr::new(&b.to_string(), *span),
        Node::Str(lit) => lit.clone(),
        // `null` and non-scalars.
        other => LitStr::new("", other.span()),
    }
}

/// Entry point: generate code for the template! macro.
pub(crate) fn template_impl(input: TokenStream) -> Result<TokenStream> {
    if input.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "template! requires a template object or `(node)`",
        ));
    }
    let node: Node = syn::parse2(input)?;
    generate_template(&node)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    // Helper: parse a token stream into a Node.
    fn parse_node(tokens: TokenStream) -> Result<Node> {
        syn::parse2(tokens)
    }

    // Helper: expand and stringify.
    fn expand(tokens: TokenStream) -> String {
        template_impl(tokens).unwrap().to_string()
    }

    // Helper: expand and return the error message.
    fn expand_err(tokens: TokenStream) -> String {
        template_impl(tokens).unwrap_err().to_string()
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_scalars() {
        assert!(matches!(parse_node(quote! { "a" }).unwrap(), Node::Str(_)));
        assert!(matches!(parse_node(quote! { 5 }).unwrap(), Node::Int(_)));
        assert!(matches!(parse_node(quote! { 1.5 }).unwrap(), Node::Float(_)));
        assert!(matches!(parse_node(quote! { true }).unwrap(), Node::Bool(true, _)));
        assert!(matches!(parse_node(quote! { null }).unwrap(), Node::Null(_)));
    }

    #[test]
    fn parse_rejects_other_identifiers() {
        let err = parse_node(quote! { nil }).unwrap_err().to_string();
        assert!(err.contains("`null`"));
    }

    #[test]
    fn parse_object_keeps_order() {
        let node = parse_node(quote! { { "src": "u", "html": "x", } }).unwrap();
        let Node::Object(entries, _) = node else {
            panic!("expected object");
        };
        let keys: Vec<_> = entries.iter().map(|e| e.key.value()).collect();
        assert_eq!(keys, vec!["src", "html"]);
    }

    #[test]
    fn parse_list_and_expr() {
        let node = parse_node(quote! { [ { "li": "a" }, (existing) ] }).unwrap();
        let Node::List(items, _) = node else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Node::Expr(_)));
    }

    #[test]
    fn parse_rejects_byte_literal() {
        let err = parse_node(quote! { b'x' }).unwrap_err().to_string();
        assert!(err.contains("expected a string"));
    }

    #[test]
    fn parse_rejects_non_string_key() {
        assert!(parse_node(quote! { { src: "u" } }).is_err());
    }

    // -----------------------------------------------------------------------
    // Code generation tests
    // -----------------------------------------------------------------------

    #[test]
    fn codegen_text_element() {
        let code = expand(quote! { { "h1": "hi" } });
        assert!(code.contains("Template :: element (\"h1\" , :: json2dom :: template :: Value :: text (\"hi\"))"));
    }

    #[test]
    fn codegen_node_passthrough() {
        let code = expand(quote! { (built) });
        assert!(code.contains("Template :: node (built)"));
    }

    #[test]
    fn codegen_scalar_element_value_is_text() {
        let code = expand(quote! { { "span": 5 } });
        assert!(code.contains("Value :: text (\"5\")"));
    }

    #[test]
    fn codegen_null() {
        assert!(expand(quote! { { "span": null } }).contains("Value :: text (\"\")"));

        let code = expand(quote! { { "input": { "value": null, "html": null, "b.x": null } } });
        assert!(code.contains(". attr (\"value\" , :: json2dom :: template :: AttrValue :: Null)"));
        assert!(code.contains(". html (\"\")"));
        assert!(code.contains("Template :: element (\"b.x\" , :: json2dom :: template :: Value :: text (\"\"))"));

        let err = expand_err(quote! { { "ul": [ null ] } });
        assert!(err.contains("found null"));
    }

    #[test]
    fn codegen_bag_classification() {
        let code = expand(quote! {
            { "div": {
                "src": "u",
                "tabindex": 2,
                "html": "x",
                "style": "a:b",
                "img": { "src": "v" },
                "p.note": "n",
                "href": (url),
                "children": [ { "br": "" } ],
            } }
        });
        assert!(code.contains(". attr (\"src\" , \"u\")"));
        assert!(code.contains(". attr (\"tabindex\" , 2i64)"));
        assert!(code.contains(". html (\"x\")"));
        assert!(code.contains(". style (\"a:b\")"));
        assert!(code.contains(". child (:: json2dom :: template :: Template :: element (\"img\""));
        assert!(code.contains(". child (:: json2dom :: template :: Template :: element (\"p.note\""));
        assert!(code.contains(". attr (\"href\" , url)"));
        assert!(code.contains(". children (:: std :: vec ! ["));
    }

    #[test]
    fn codegen_selector_key_with_expr_is_node_child() {
        let code = expand(quote! { { "div": { "a.link": (anchor) } } });
        assert!(code.contains("Template :: element (\"a.link\" , :: json2dom :: template :: Value :: node (anchor))"));
    }

    #[test]
    fn codegen_list() {
        let code = expand(quote! { { "ul": [ { "li": "a" }, (b) ] } });
        assert!(code.contains("Value :: List (:: std :: vec ! ["));
        assert!(code.contains("Template :: node (b)"));
    }

    // -----------------------------------------------------------------------
    // Compile error tests
    // -----------------------------------------------------------------------

    #[test]
    fn error_multiple_keys() {
        let err = expand_err(quote! { { "h1": "a", "p": "b" } });
        assert!(err.contains("exactly one selector key, found 2"));
    }

    #[test]
    fn error_empty_object() {
        assert!(expand_err(quote! { {} }).contains("no selector key"));
    }

    #[test]
    fn error_children_not_list() {
        let err = expand_err(quote! { { "div": { "children": "x" } } });
        assert!(err.contains("`children` must be a list, found a string"));
    }

    #[test]
    fn error_html_object() {
        let err = expand_err(quote! { { "div": { "html": { "b": "x" } } } });
        assert!(err.contains("`html` must be text"));
    }

    #[test]
    fn error_list_item_not_template() {
        let err = expand_err(quote! { { "ul": [ "a" ] } });
        assert!(err.contains("expected a template object or `(node)`, found a string"));
    }

    #[test]
    fn error_empty_input() {
        assert!(expand_err(quote! {}).contains("requires a template object"));
    }
}
