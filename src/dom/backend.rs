//! [`Backend`] implementation for the in-memory [`Dom`].

use super::node::{NodeData, NodeId};
use super::tree::{Dom, DomError};
use crate::backend::Backend;
use crate::template::AttrValue;

/// Whether `tag` is an acceptable element name: an ASCII letter followed by
/// ASCII letters, digits or `-`.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl Backend for Dom {
    type Node = NodeId;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        if !is_valid_tag_name(tag) {
            return Err(DomError::InvalidTagName(tag.to_owned()));
        }
        Ok(self.insert(NodeData::new(tag)))
    }

    fn set_attribute(
        &mut self,
        node: &NodeId,
        name: &str,
        value: &AttrValue,
    ) -> Result<(), DomError> {
        let data = self.get_mut(*node).ok_or(DomError::NodeNotFound)?;
        data.set_attribute(name, value.to_string());
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), DomError> {
        Dom::set_text(self, *node, text)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        Dom::append_child(self, *parent, *child)
    }
}
