//! The element arena and its structural operations.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

const NO_CHILDREN: &[NodeId] = &[];

/// Errors from DOM mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    #[error("invalid tag name `{0}`")]
    InvalidTagName(String),
    #[error("node does not exist")]
    NodeNotFound,
    #[error("cannot append a node to itself or to one of its descendants")]
    HierarchyRequest,
}

/// An element tree backed by a slotmap arena.
///
/// Nodes start detached; a node without a parent is the root of its own tree.
/// Child order is document order.
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
        }
    }

    /// Insert a detached node.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved. Appending a node to itself
    /// or to one of its own descendants fails with
    /// [`DomError::HierarchyRequest`].
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(DomError::NodeNotFound);
        }
        if parent == child || self.ancestors(parent).contains(&child) {
            return Err(DomError::HierarchyRequest);
        }

        self.detach(child);
        self.parent.insert(child, parent);
        if let Some(kids) = self.children.get_mut(parent) {
            kids.push(child);
        }
        Ok(())
    }

    /// Unlink a node from its parent. Its own subtree stays attached to it.
    pub fn detach(&mut self, id: NodeId) {
        let Some(old_parent) = self.parent.remove(id) else {
            return;
        };
        if let Some(siblings) = self.children.get_mut(old_parent) {
            siblings.retain(|&sibling| sibling != id);
        }
    }

    /// Replace a node's text content.
    ///
    /// The node's current children are removed from the arena together with
    /// their subtrees.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        let data = self.nodes.get_mut(id).ok_or(DomError::NodeNotFound)?;
        data.text = Some(text.to_owned());
        for child in self.children(id).to_vec() {
            self.remove(child);
        }
        Ok(())
    }

    /// Remove a node and its whole subtree, returning the node's data.
    ///
    /// `None` for a stale id.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.detach(id);

        let subtree = self.walk_depth_first(id);
        let mut removed = None;
        for node in subtree {
            self.children.remove(node);
            self.parent.remove(node);
            let data = self.nodes.remove(node);
            if node == id {
                removed = data;
            }
        }
        removed
    }

    /// The parent of a node, if it is attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of a node in document order. Empty for leaves and stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(NO_CHILDREN, Vec::as_slice)
    }

    /// Ancestors of `id`, nearest first. Does not include `id`.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&node| self.parent(node)).collect()
    }

    /// Follow a path of child indices from `id`.
    ///
    /// `dom.descendant(root, &[0, 1])` is the second child of the first child.
    pub fn descendant(&self, id: NodeId, path: &[usize]) -> Option<NodeId> {
        path.iter()
            .try_fold(id, |current, &index| self.children(current).get(index).copied())
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The subtree of `start` in document order, `start` first.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            if !self.nodes.contains_key(node) {
                continue;
            }
            order.push(node);
            pending.extend(self.children(node).iter().rev());
        }
        order
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///      ul
    ///     /  \
    ///   li    li.last
    ///   / \
    ///  a   span
    /// ```
    fn list_tree() -> (Dom, [NodeId; 5]) {
        let mut dom = Dom::new();
        let ul = dom.insert(NodeData::new("ul").with_id("menu"));
        let first = dom.insert(NodeData::new("li"));
        let last = dom.insert(NodeData::new("li").with_class("last"));
        let link = dom.insert(NodeData::new("a").with_attribute("href", "/"));
        let label = dom.insert(NodeData::new("span").with_text("home"));
        dom.append_child(ul, first).unwrap();
        dom.append_child(ul, last).unwrap();
        dom.append_child(first, link).unwrap();
        dom.append_child(first, label).unwrap();
        (dom, [ul, first, last, link, label])
    }

    #[test]
    fn insert_is_detached() {
        let mut dom = Dom::new();
        let id = dom.insert(NodeData::new("p"));
        assert_eq!(dom.parent(id), None);
        assert!(dom.children(id).is_empty());
    }

    #[test]
    fn append_links_both_directions() {
        let (dom, [ul, first, last, link, label]) = list_tree();
        assert_eq!(dom.children(ul), &[first, last]);
        assert_eq!(dom.children(first), &[link, label]);
        assert_eq!(dom.parent(link), Some(first));
        assert_eq!(dom.parent(ul), None);
    }

    #[test]
    fn append_moves_attached_child() {
        let (mut dom, [ul, first, last, link, _]) = list_tree();
        dom.append_child(last, link).unwrap();
        assert_eq!(dom.parent(link), Some(last));
        assert!(!dom.children(first).contains(&link));
        assert_eq!(dom.ancestors(link), vec![last, ul]);
    }

    #[test]
    fn append_rejects_cycles() {
        let (mut dom, [ul, first, _, link, _]) = list_tree();
        assert_eq!(dom.append_child(first, first), Err(DomError::HierarchyRequest));
        assert_eq!(dom.append_child(link, ul), Err(DomError::HierarchyRequest));
        assert_eq!(dom.parent(ul), None);
    }

    #[test]
    fn append_rejects_stale_ids() {
        let mut dom = Dom::new();
        let p = dom.insert(NodeData::new("p"));
        let gone = dom.insert(NodeData::new("span"));
        dom.remove(gone);
        assert_eq!(dom.append_child(p, gone), Err(DomError::NodeNotFound));
    }

    #[test]
    fn detach_keeps_subtree() {
        let (mut dom, [ul, first, last, link, label]) = list_tree();
        dom.detach(first);
        dom.detach(first);
        assert_eq!(dom.parent(first), None);
        assert_eq!(dom.children(ul), &[last]);
        assert_eq!(dom.children(first), &[link, label]);
        assert_eq!(dom.len(), 5);
    }

    #[test]
    fn set_text_drops_replaced_subtrees() {
        let (mut dom, [ul, first, last, link, label]) = list_tree();
        dom.set_text(ul, "empty").unwrap();
        assert_eq!(dom.get(ul).unwrap().text.as_deref(), Some("empty"));
        assert!(dom.children(ul).is_empty());
        for gone in [first, last, link, label] {
            assert!(dom.get(gone).is_none());
        }
        assert_eq!(dom.len(), 1);
    }

    #[test]
    fn repeated_set_text_does_not_grow_arena() {
        let mut dom = Dom::new();
        let div = dom.insert(NodeData::new("div"));
        for round in 0..3 {
            let child = dom.insert(NodeData::new("b"));
            dom.append_child(div, child).unwrap();
            dom.set_text(div, &round.to_string()).unwrap();
        }
        assert_eq!(dom.len(), 1);
    }

    #[test]
    fn ancestors_nearest_first() {
        let (dom, [ul, first, _, _, label]) = list_tree();
        assert_eq!(dom.ancestors(label), vec![first, ul]);
        assert!(dom.ancestors(ul).is_empty());
    }

    #[test]
    fn descendant_path() {
        let (dom, [ul, first, _, _, label]) = list_tree();
        assert_eq!(dom.descendant(ul, &[]), Some(ul));
        assert_eq!(dom.descendant(ul, &[0]), Some(first));
        assert_eq!(dom.descendant(ul, &[0, 1]), Some(label));
        assert_eq!(dom.descendant(ul, &[1, 0]), None);
    }

    #[test]
    fn remove_subtree_returns_root_data() {
        let (mut dom, [ul, first, last, link, label]) = list_tree();
        let removed = dom.remove(first).unwrap();
        assert_eq!(removed.tag, "li");
        assert!(dom.get(link).is_none());
        assert!(dom.get(label).is_none());
        assert_eq!(dom.children(ul), &[last]);
        assert_eq!(dom.len(), 2);
        assert!(dom.remove(first).is_none());
    }

    #[test]
    fn walk_depth_first_is_document_order() {
        let (dom, [ul, first, last, link, label]) = list_tree();
        assert_eq!(dom.walk_depth_first(ul), vec![ul, first, link, label, last]);
        assert_eq!(dom.walk_depth_first(first), vec![first, link, label]);
    }
}
