//! Tree builder: recursively turns a [`Template`] into backend nodes.
//!
//! Per element: parse the selector, create the node, set `class` then `id`,
//! then apply the value. Children are fully built before they are appended.
//! A [`Template::Node`] is returned as is, so building an already-built node
//! is a no-op.

use serde_json::Value as Json;
use tracing::trace;

use crate::backend::Backend;
use crate::error::BuildError;
use crate::selector::{Selector, DEFAULT_TAG};
use crate::template::{AttrValue, Attributes, Element, Property, Template, Value};

/// Default limit on nested element levels.
///
/// Each level costs several stack frames; 128 levels fit a default 2 MiB
/// thread stack in debug builds. Same bound as `serde_json`'s parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// ---------------------------------------------------------------------------
// BuilderConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Builder`].
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Tag used when a selector has no tag segment.
    pub default_tag: String,
    /// Maximum number of nested element levels; the root element is level one.
    pub max_depth: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuilderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default tag (builder).
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Set the nesting limit (builder).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds templates against a borrowed backend.
///
/// Holds no state between calls besides its configuration.
pub struct Builder<'b, B: Backend> {
    backend: &'b mut B,
    config: BuilderConfig,
}

type BuildResult<T, B> = Result<T, BuildError<<B as Backend>::Error>>;

impl<'b, B: Backend> Builder<'b, B> {
    /// Create a builder with the default configuration.
    pub fn new(backend: &'b mut B) -> Self {
        Self::with_config(backend, BuilderConfig::default())
    }

    /// Create a builder with the given configuration.
    pub fn with_config(backend: &'b mut B, config: BuilderConfig) -> Self {
        Self { backend, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build a template, returning the root node.
    pub fn build(&mut self, template: Template<B::Node>) -> BuildResult<B::Node, B> {
        self.build_at(template, 0)
    }

    /// Convert a JSON template and build it.
    pub fn build_json(&mut self, json: &Json) -> BuildResult<B::Node, B> {
        let template = Template::from_json(json)?;
        self.build(template)
    }

    fn build_at(&mut self, template: Template<B::Node>, depth: usize) -> BuildResult<B::Node, B> {
        match template {
            Template::Node(node) => Ok(node),
            Template::Element(element) => self.build_element(element, depth),
        }
    }

    fn build_element(
        &mut self,
        Element { selector, value }: Element<B::Node>,
        depth: usize,
    ) -> BuildResult<B::Node, B> {
        if depth >= self.config.max_depth {
            return Err(BuildError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        let selector = Selector::parse_with_default(&selector, &self.config.default_tag);
        trace!(selector = %selector, depth, value = value.kind(), "building element");

        let node = self
            .backend
            .create_element(&selector.tag)
            .map_err(BuildError::Backend)?;

        if let Some(class_name) = selector.class_name() {
            self.set_attribute(&node, "class", &AttrValue::Text(class_name))?;
        }
        if let Some(id) = selector.id {
            self.set_attribute(&node, "id", &AttrValue::Text(id))?;
        }

        match value {
            Value::Text(text) => self.set_text(&node, &text)?,
            Value::Node(child) => self.append_child(&node, &child)?,
            Value::List(items) => self.append_children(&node, items, depth)?,
            Value::Attributes(attrs) => self.apply_attributes(&node, attrs, depth)?,
        }

        Ok(node)
    }

    fn apply_attributes(
        &mut self,
        node: &B::Node,
        Attributes {
            properties,
            children,
        }: Attributes<B::Node>,
        depth: usize,
    ) -> BuildResult<(), B> {
        for property in properties {
            match property {
                Property::Attribute { name, value } => self.set_attribute(node, &name, &value)?,
                Property::Html(text) => self.set_text(node, &text)?,
                Property::Style(css) => self.set_attribute(node, "style", &AttrValue::Text(css))?,
            }
        }
        self.append_children(node, children, depth)
    }

    fn append_children(
        &mut self,
        parent: &B::Node,
        items: Vec<Template<B::Node>>,
        depth: usize,
    ) -> BuildResult<(), B> {
        for item in items {
            let child = self.build_at(item, depth + 1)?;
            self.append_child(parent, &child)?;
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &B::Node, name: &str, value: &AttrValue) -> BuildResult<(), B> {
        self.backend
            .set_attribute(node, name, value)
            .map_err(BuildError::Backend)
    }

    fn set_text(&mut self, node: &B::Node, text: &str) -> BuildResult<(), B> {
        self.backend.set_text(node, text).map_err(BuildError::Backend)
    }

    fn append_child(&mut self, parent: &B::Node, child: &B::Node) -> BuildResult<(), B> {
        self.backend
            .append_child(parent, child)
            .map_err(BuildError::Backend)
    }
}

/// Build a template with the default configuration.
pub fn build<B: Backend>(backend: &mut B, template: Template<B::Node>) -> BuildResult<B::Node, B> {
    Builder::new(backend).build(template)
}

/// Convert a JSON template and build it with the default configuration.
pub fn build_json<B: Backend>(backend: &mut B, json: &Json) -> BuildResult<B::Node, B> {
    Builder::new(backend).build_json(json)
}
