//! Recording backend: logs every capability call instead of building a tree.

use crate::backend::Backend;
use crate::template::AttrValue;

/// One call made by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create { node: usize, tag: String },
    SetAttribute { node: usize, name: String, value: String },
    SetText { node: usize, text: String },
    Append { parent: usize, child: usize },
}

/// Errors raised by [`Recorder`].
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("tag `{0}` rejected")]
    RejectedTag(String),
}

/// A [`Backend`] whose nodes are sequential integers and whose effect is a
/// list of [`Call`]s.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<Call>,
    next: usize,
    rejected: Vec<String>,
}

impl Recorder {
    /// Create a recorder that accepts every tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that fails `create_element` for the given tags.
    pub fn rejecting(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            rejected: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of elements created so far.
    pub fn created(&self) -> usize {
        self.next
    }
}

impl Backend for Recorder {
    type Node = usize;
    type Error = RecorderError;

    fn create_element(&mut self, tag: &str) -> Result<usize, RecorderError> {
        if self.rejected.iter().any(|t| t == tag) {
            return Err(RecorderError::RejectedTag(tag.to_owned()));
        }
        let node = self.next;
        self.next += 1;
        self.calls.push(Call::Create {
            node,
            tag: tag.to_owned(),
        });
        Ok(node)
    }

    fn set_attribute(
        &mut self,
        node: &usize,
        name: &str,
        value: &AttrValue,
    ) -> Result<(), RecorderError> {
        self.calls.push(Call::SetAttribute {
            node: *node,
            name: name.to_owned(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn set_text(&mut self, node: &usize, text: &str) -> Result<(), RecorderError> {
        self.calls.push(Call::SetText {
            node: *node,
            text: text.to_owned(),
        });
        Ok(())
    }

    fn append_child(&mut self, parent: &usize, child: &usize) -> Result<(), RecorderError> {
        self.calls.push(Call::Append {
            parent: *parent,
            child: *child,
        });
        Ok(())
    }
}
