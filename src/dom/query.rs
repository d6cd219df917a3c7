//! Compound-selector lookup within a subtree.

use super::node::{NodeData, NodeId};
use super::tree::Dom;
use crate::selector::Selector;

/// Tag placeholder matching any element in [`Dom::select`].
const ANY_TAG: &str = "*";

impl Dom {
    /// Nodes in the subtree of `root` (inclusive) matching a compound
    /// selector such as `li.item#first`, in document order.
    ///
    /// A selector without a tag matches any tag. Segments the selector parser
    /// drops do not constrain the match.
    pub fn select(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse_with_default(selector, ANY_TAG);
        self.walk_depth_first(root)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|data| matches(data, &selector)))
            .collect()
    }
}

fn matches(data: &NodeData, selector: &Selector) -> bool {
    (selector.tag == ANY_TAG || data.tag == selector.tag)
        && selector
            .id
            .as_deref()
            .map_or(true, |id| data.id.as_deref() == Some(id))
        && selector.classes.iter().all(|class| data.has_class(class))
}
