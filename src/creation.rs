use crate::xmlnodes::{Node, XmlNodes};
use crate::xmlvalue::{Attributes, Element, ROOT_NODE_NAME};

/// ## Creation
///
/// Nodes are created detached. Attach them with
/// [`XmlNodes::append`], or use [`XmlNodes::add_child`] to create and
/// attach in one go.
impl XmlNodes {
    pub(crate) fn new_element_node(&mut self, element: Element) -> Node {
        Node::new(self.arena.new_node(element))
    }

    /// Create a new node with a name and nothing else.
    ///
    /// An empty name is replaced by
    /// [`EMPTY_NODE_NAME`](crate::EMPTY_NODE_NAME).
    pub fn new_node(&mut self, name: &str) -> Node {
        self.new_node_with(name, "", Attributes::new())
    }

    /// Create a new node with name, value and attributes.
    pub fn new_node_with(&mut self, name: &str, value: &str, attributes: Attributes) -> Node {
        self.new_element_node(Element::new(
            name.to_string(),
            value.to_string(),
            attributes,
        ))
    }

    /// Create a synthetic root, named [`ROOT_NODE_NAME`].
    pub fn new_root(&mut self) -> Node {
        self.new_node(ROOT_NODE_NAME)
    }
}
