//! The node-creation capability the builder drives.
//!
//! The builder never touches a UI tree directly. It asks a [`Backend`] to
//! create elements, set attributes and text, and append children, so the
//! same templates can target the in-memory [`Dom`](crate::dom::Dom), a
//! recording backend in tests, or any other element tree.

use crate::template::AttrValue;

/// Operations a UI tree must provide to be built from templates.
pub trait Backend {
    /// Handle to a node owned by the backend.
    type Node: Clone;
    /// Failure raised by the backend, e.g. for an unknown tag name.
    type Error: std::error::Error + 'static;

    /// Create a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    /// Set an attribute. `class`, `id` and `style` arrive through here too.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &AttrValue,
    ) -> Result<(), Self::Error>;

    /// Replace the node's text content.
    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), Self::Error>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node)
        -> Result<(), Self::Error>;
}
