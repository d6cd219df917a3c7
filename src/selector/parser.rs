//! Permissive selector parser.
//!
//! Grammar: `selector := [tag] (('.' class) | ('#' id))*`. The tag is the
//! verbatim text before the first marker. Each class/id segment runs from its
//! marker to the next marker (or end of input) and is kept only when it is a
//! single identifier token; anything else is dropped and parsing carries on.
//! Parsing never fails.

use tracing::debug;

use super::model::{Selector, DEFAULT_TAG};
use super::tokenizer::{tokenize, Token};

impl Selector {
    /// Parse a selector string, defaulting an empty tag to `div`.
    ///
    /// ```
    /// use json2dom::selector::Selector;
    ///
    /// let sel = Selector::parse("h1.test-1#id-1");
    /// assert_eq!(sel.tag, "h1");
    /// assert_eq!(sel.id.as_deref(), Some("id-1"));
    /// assert_eq!(sel.classes, vec!["test-1"]);
    /// ```
    pub fn parse(input: &str) -> Self {
        Self::parse_with_default(input, DEFAULT_TAG)
    }

    /// Parse a selector string, using `default_tag` when the tag segment is
    /// empty.
    pub fn parse_with_default(input: &str, default_tag: &str) -> Self {
        let tokens = tokenize(input);

        let first_marker = tokens.iter().position(|(t, _)| t.is_marker());
        let tag_end = first_marker
            .map(|i| tokens[i].1.start)
            .unwrap_or(input.len());
        let tag = &input[..tag_end];

        let mut selector = Selector::new(if tag.is_empty() { default_tag } else { tag });

        let Some(mut cursor) = first_marker else {
            return selector;
        };

        while cursor < tokens.len() {
            let marker = tokens[cursor].0;
            let body_start = cursor + 1;
            let body_end = tokens[body_start..]
                .iter()
                .position(|(t, _)| t.is_marker())
                .map(|offset| body_start + offset)
                .unwrap_or(tokens.len());
            let body = &tokens[body_start..body_end];

            match body {
                [(Token::Name, span)] => {
                    let name = &input[span.clone()];
                    if marker == Token::Hash {
                        selector.id = Some(name.to_owned());
                    } else {
                        selector.classes.push(name.to_owned());
                    }
                }
                _ => {
                    let text_start = tokens[cursor].1.end;
                    let text_end = body.last().map(|(_, s)| s.end).unwrap_or(text_start);
                    debug!(
                        selector = input,
                        segment = &input[text_start..text_end],
                        kind = if marker == Token::Hash { "id" } else { "class" },
                        "dropping invalid selector segment"
                    );
                }
            }

            cursor = body_end;
        }

        selector
    }
}
