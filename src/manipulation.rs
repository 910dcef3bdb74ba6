use indextree::NodeError;

use crate::access::NodeEdge;
use crate::error::Error;
use crate::xmlnodes::{Node, XmlNodes};
use crate::xmlvalue::Attributes;

/// ## Manipulation
///
/// Children are kept in order. A node has at most one parent; attaching a
/// node that already has a parent moves it. Removing a node removes its
/// whole subtree.
impl XmlNodes {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If `child` is attached elsewhere it is moved. Fails if `child` is
    /// `parent` or one of its ancestors, or if it has been removed.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let a = nodes.new_node("a");
    /// let b = nodes.new_node("b");
    /// nodes.append(a, b)?;
    /// assert_eq!(nodes.first_child(a), Some(b));
    /// assert!(nodes.append(b, a).is_err());
    /// # Ok::<(), xmlnodes::Error>(())
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new child with the given name and return it.
    ///
    /// Fails if `parent` has been removed.
    pub fn add_child(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        self.add_child_with(parent, name, "", Attributes::new())
    }

    /// Append a new child with name, value and attributes and return it,
    /// so you can continue to modify it.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.new_root();
    /// let item = nodes.add_child_with(root, "item", "", Default::default())?;
    /// nodes.add_child_with(item, "price", "10", Default::default())?;
    /// assert_eq!(nodes.children_count(item), 1);
    /// # Ok::<(), xmlnodes::Error>(())
    /// ```
    pub fn add_child_with(
        &mut self,
        parent: Node,
        name: &str,
        value: &str,
        attributes: Attributes,
    ) -> Result<Node, Error> {
        self.check_alive(parent)?;
        let child = self.new_node_with(name, value, attributes);
        self.append(parent, child)?;
        Ok(child)
    }

    /// Append a deep copy of `node` to `parent`, returning the copy.
    ///
    /// `node` itself is left untouched, so it may be `parent` itself.
    pub fn add_child_copy(&mut self, parent: Node, node: Node) -> Result<Node, Error> {
        self.check_alive(parent)?;
        let copy = self.clone_node(node)?;
        self.append(parent, copy)?;
        Ok(copy)
    }

    /// Create a detached deep copy of a node and its descendants.
    ///
    /// Fails if `node` has been removed.
    pub fn clone_node(&mut self, node: Node) -> Result<Node, Error> {
        self.check_alive(node)?;
        let edges = self.traverse(node).collect::<Vec<_>>();
        let mut stack: Vec<Node> = Vec::new();
        let mut top = None;
        for edge in edges {
            match edge {
                NodeEdge::Start(original) => {
                    let element = self.element(original).clone();
                    let copy = self.new_element_node(element);
                    if let Some(&parent) = stack.last() {
                        self.append(parent, copy)?;
                    }
                    stack.push(copy);
                }
                NodeEdge::End(_) => {
                    top = stack.pop();
                }
            }
        }
        top.ok_or(Error::NodeError(NodeError::Removed))
    }

    pub(crate) fn check_alive(&self, node: Node) -> Result<(), Error> {
        if self.is_removed(node) {
            Err(Error::NodeError(NodeError::Removed))
        } else {
            Ok(())
        }
    }

    /// Remove a node and its descendants.
    pub fn remove(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    /// Remove the child at a one-based position. `0` removes the first
    /// child, like `1`. Out of range positions are ignored.
    ///
    /// Note that this differs from [`XmlNodes::child_by_index`], which
    /// is zero-based.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<p><a></a><b></b></p>").unwrap();
    /// let p = nodes.first_child(root).unwrap();
    /// nodes.remove_child_by_index(p, 2);
    /// assert_eq!(nodes.children_count(p), 1);
    /// nodes.remove_child_by_index(p, 5);
    /// assert_eq!(nodes.children_count(p), 1);
    /// ```
    pub fn remove_child_by_index(&mut self, parent: Node, position: usize) {
        let index = position.saturating_sub(1);
        if let Some(child) = self.child_by_index(parent, index) {
            self.remove(child);
        }
    }

    /// Remove the `occurrence`-th child named `name`, counting from 1.
    /// `0` is treated as `1`. Does nothing if there is no such child.
    pub fn remove_child_by_name(&mut self, parent: Node, name: &str, occurrence: usize) {
        if let Some(child) = self.child_by_name(parent, name, occurrence) {
            self.remove(child);
        }
    }

    /// Remove all children of a node.
    pub fn clear_children(&mut self, node: Node) {
        let children = self.children(node).collect::<Vec<_>>();
        for child in children {
            self.remove(child);
        }
    }

    /// Replace all children of a node with the given nodes, in order.
    ///
    /// The old children are removed. The new children are moved if they
    /// are attached elsewhere.
    pub fn set_children(&mut self, node: Node, children: &[Node]) -> Result<(), Error> {
        self.clear_children(node);
        for child in children {
            self.append(node, *child)?;
        }
        Ok(())
    }
}
