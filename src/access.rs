use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::xmlnodes::{Node, XmlNodes};

/// Node edges.
///
/// Used by [`XmlNodes::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node, i.e. its opening tag.
    Start(Node),
    /// The end edge of a node, i.e. its closing tag.
    End(Node),
}

/// ## Read-only access
///
/// Two indexing conventions are in use:
///
/// - [`XmlNodes::child_by_index`] takes a zero-based direct index.
/// - [`XmlNodes::child_by_name`], [`XmlNodes::remove_child_by_index`] and
///   [`XmlNodes::remove_child_by_name`] take a one-based count, where `0`
///   is treated as `1`.
impl XmlNodes {
    /// Check whether a node has been removed.
    ///
    /// This stays true for a stale handle even after its slot in the arena
    /// is reused by a new node.
    pub fn is_removed(&self, node: Node) -> bool {
        node.get().is_removed(self.arena())
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if the node is not attached to a parent.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<p>Example</p>").unwrap();
    /// let p = nodes.first_child(root).unwrap();
    /// assert_eq!(nodes.parent(p), Some(root));
    /// assert_eq!(nodes.parent(root), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the children of this node, in order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Number of children.
    pub fn children_count(&self, node: Node) -> usize {
        self.children(node).count()
    }

    /// Whether the node has any children.
    pub fn has_children(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }

    /// Get first child.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get a child by zero-based position.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<p><a></a><b></b></p>").unwrap();
    /// let p = nodes.first_child(root).unwrap();
    /// let b = nodes.child_by_index(p, 1).unwrap();
    /// assert_eq!(nodes.name(b), "b");
    /// assert_eq!(nodes.child_by_index(p, 2), None);
    /// ```
    pub fn child_by_index(&self, node: Node, index: usize) -> Option<Node> {
        self.children(node).nth(index)
    }

    /// Get the `occurrence`-th child named `name`, counting from 1.
    ///
    /// An `occurrence` of `0` is treated as `1`. Returns [`None`] if
    /// there are fewer matching children.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<p><b>1</b><c></c><b>2</b></p>").unwrap();
    /// let p = nodes.first_child(root).unwrap();
    /// let second = nodes.child_by_name(p, "b", 2).unwrap();
    /// assert_eq!(nodes.value(second), "2");
    /// assert_eq!(nodes.child_by_name(p, "b", 3), None);
    /// ```
    pub fn child_by_name(&self, node: Node, name: &str, occurrence: usize) -> Option<Node> {
        let skip = occurrence.max(1) - 1;
        self.children(node)
            .filter(|child| self.name(*child) == name)
            .nth(skip)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one,
    /// in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse the node and its descendants in document order, yielding
    /// a start and an end edge for each node.
    ///
    /// ```rust
    /// use xmlnodes::{NodeEdge, XmlNodes};
    ///
    /// let mut nodes = XmlNodes::new();
    /// let root = nodes.parse("<a><b></b></a>").unwrap();
    /// let a = nodes.first_child(root).unwrap();
    /// let b = nodes.first_child(a).unwrap();
    /// let edges = nodes.traverse(a).collect::<Vec<_>>();
    /// assert_eq!(
    ///     edges,
    ///     vec![
    ///         NodeEdge::Start(a),
    ///         NodeEdge::Start(b),
    ///         NodeEdge::End(b),
    ///         NodeEdge::End(a),
    ///     ]
    /// );
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}
