use indextree::{Arena, NodeId};

use crate::xmlvalue::Element;

pub(crate) type NodeArena = Arena<Element>;

/// A node in the XML tree.
/// This is a lightweight value and can be copied.
///
/// A `Node` is only meaningful together with the [`XmlNodes`] that created
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `XmlNodes` struct owns all node data in your program. It lets you
/// build, access and manipulate one or more trees.
///
/// Parents own their children: removing a node removes its whole
/// subtree. Node handles stay valid while the tree grows.
///
/// `XmlNodes` is implemented in several sections focusing on different
/// aspects of creating, accessing, manipulating, parsing and serializing
/// trees.
pub struct XmlNodes {
    pub(crate) arena: NodeArena,
}

impl XmlNodes {
    /// Create a new, empty `XmlNodes`.
    pub fn new() -> Self {
        XmlNodes {
            arena: NodeArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    /// The element data of a node.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        self.arena[node.get()].get()
    }

    /// Mutable access to the element data of a node.
    #[inline]
    pub fn element_mut(&mut self, node: Node) -> &mut Element {
        self.arena[node.get()].get_mut()
    }

    /// The name of a node.
    pub fn name(&self, node: Node) -> &str {
        self.element(node).name()
    }

    /// Set the name of a node.
    pub fn set_name<S: Into<String>>(&mut self, node: Node, name: S) {
        self.element_mut(node).set_name(name);
    }

    /// The value of a node.
    pub fn value(&self, node: Node) -> &str {
        self.element(node).value()
    }

    /// Set the value of a node.
    pub fn set_value<S: Into<String>>(&mut self, node: Node, value: S) {
        self.element_mut(node).set_value(value);
    }

    /// Get an attribute of a node, or `""` if it isn't set.
    pub fn attribute(&self, node: Node, key: &str) -> &str {
        self.element(node).attribute(key)
    }

    /// Set an attribute of a node.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, node: Node, key: K, value: V) {
        self.element_mut(node).set_attribute(key, value);
    }

    /// Remove all attributes of a node.
    pub fn clear_attributes(&mut self, node: Node) {
        self.element_mut(node).clear_attributes();
    }
}

impl Default for XmlNodes {
    fn default() -> Self {
        Self::new()
    }
}
