//! JSON templates: conversion from `serde_json::Value` into [`Template`].
//!
//! Object key order is significant (attributes and children are applied in
//! insertion order), so serde_json is built with `preserve_order`.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as Json};

use super::model::{
    AttrValue, Attributes, Element, Template, Value, CHILDREN_KEY, HTML_KEY, STYLE_KEY,
};
use crate::error::TemplateError;

/// How one `key: value` entry of an attribute bag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `children`: ordered list of child templates.
    Children,
    /// `html`: text content.
    Html,
    /// `style`: style attribute.
    Style,
    /// Nested child template `{key: value}`.
    Child,
    /// Plain attribute.
    Attribute,
}

/// Whether a bag key is written as a selector (`div.x`, `#main`) rather than
/// an attribute name.
pub fn is_selector_key(key: &str) -> bool {
    key.contains(|c| c == '.' || c == '#')
}

/// Classify a bag entry. First match wins: reserved keys, then nested
/// objects/lists, then selector-shaped keys, then plain attributes.
pub fn classify_entry(key: &str, value: &Json) -> EntryKind {
    match key {
        CHILDREN_KEY => EntryKind::Children,
        HTML_KEY => EntryKind::Html,
        STYLE_KEY => EntryKind::Style,
        _ if value.is_object() || value.is_array() => EntryKind::Child,
        _ if is_selector_key(key) => EntryKind::Child,
        _ => EntryKind::Attribute,
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "a list",
        Json::Object(_) => "an object",
    }
}

impl<N> Template<N> {
    /// Convert a JSON template object (`{"selector": value}`).
    ///
    /// Objects with zero or several keys are rejected.
    pub fn from_json(json: &Json) -> Result<Self, TemplateError> {
        let map = json.as_object().ok_or(TemplateError::NotAnObject {
            found: json_kind(json),
        })?;
        let (selector, value) = single_entry(map)?;
        Ok(Template::Element(element_from_json(selector, value)?))
    }

    /// Parse a JSON string and convert it.
    pub fn from_json_str(input: &str) -> Result<Self, TemplateError> {
        let json: Json = serde_json::from_str(input)?;
        Self::from_json(&json)
    }
}

impl<'de, N> Deserialize<'de> for Template<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = Json::deserialize(deserializer)?;
        Template::from_json(&json).map_err(serde::de::Error::custom)
    }
}

fn single_entry(map: &Map<String, Json>) -> Result<(&str, &Json), TemplateError> {
    let mut entries = map.iter();
    match (entries.next(), map.len()) {
        (None, _) => Err(TemplateError::EmptyTemplate),
        (Some((key, value)), 1) => Ok((key.as_str(), value)),
        _ => Err(TemplateError::MultipleKeys {
            keys: map.keys().cloned().collect(),
        }),
    }
}

fn element_from_json<N>(selector: &str, json: &Json) -> Result<Element<N>, TemplateError> {
    let value = match json {
        Json::Object(map) => Value::Attributes(attributes_from_json(selector, map)?),
        Json::Array(items) => Value::List(list_from_json(items)?),
        scalar => Value::Text(scalar_text(scalar)),
    };
    Ok(Element {
        selector: selector.to_owned(),
        value,
    })
}

fn attributes_from_json<N>(
    selector: &str,
    map: &Map<String, Json>,
) -> Result<Attributes<N>, TemplateError> {
    let mut attrs = Attributes::new();
    for (key, value) in map {
        attrs = match classify_entry(key, value) {
            EntryKind::Children => match value {
                Json::Array(items) => attrs.children(list_from_json(items)?),
                other => {
                    return Err(TemplateError::ChildrenNotAList {
                        selector: selector.to_owned(),
                        found: json_kind(other),
                    })
                }
            },
            EntryKind::Html => attrs.html(scalar_text(value)),
            EntryKind::Style => attrs.style(scalar_text(value)),
            EntryKind::Child => attrs.child(Template::Element(element_from_json(key, value)?)),
            EntryKind::Attribute => attrs.attr(key.as_str(), attr_value(value)),
        };
    }
    Ok(attrs)
}

fn list_from_json<N>(items: &[Json]) -> Result<Vec<Template<N>>, TemplateError> {
    items.iter().map(Template::<N>::from_json).collect()
}

/// Text form of a scalar: strings verbatim, `null` empty, others as JSON.
fn scalar_text(json: &Json) -> String {
    match json {
        Json::String(s) => s.clone(),
        Json::Null => String::new(),
        other => other.to_string(),
    }
}

fn attr_value(json: &Json) -> AttrValue {
    match json {
        Json::String(s) => AttrValue::Text(s.clone()),
        Json::Number(n) => AttrValue::Number(n.clone()),
        Json::Bool(b) => AttrValue::Bool(*b),
        Json::Null => AttrValue::Null,
        other => AttrValue::Text(other.to_string()),
    }
}
