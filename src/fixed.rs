//! A fixed representation of a tree of nodes.
//!
//! Trees in [`XmlNodes`] are mutable, but it is useful to have a plain
//! data representation of a node that you can create, store and compare
//! separately. Turn it into nodes by calling [`Element::build`], and get it
//! back from nodes with [`Element::from_node`].
//!
//! Example:
//!
//! ```rust
//! use xmlnodes::fixed;
//!
//! let fixed_element = fixed::Element {
//!     name: "foo".to_string(),
//!     value: "Example".to_string(),
//!     attributes: vec![("x".to_string(), "1".to_string())],
//!     children: vec![],
//! };
//!
//! let mut nodes = xmlnodes::XmlNodes::new();
//! let node = fixed_element.build(&mut nodes)?;
//! assert_eq!(nodes.to_string(node), "<foo x=\"1\">Example</foo>\n");
//! assert_eq!(fixed::Element::from_node(&nodes, node), fixed_element);
//! # Ok::<(), xmlnodes::Error>(())
//! ```

use crate::error::Error;
use crate::xmlnodes::{Node, XmlNodes};
use crate::xmlvalue::Attributes;

/// A fixed representation of a node.
///
/// Attributes are kept sorted by name by [`Element::from_node`], so two
/// fixed elements built from equivalent trees compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Name of the node
    pub name: String,
    /// Value of the node
    pub value: String,
    /// Attributes
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Element>,
}

impl Element {
    /// Turn a fixed element into a detached node.
    pub fn build(&self, nodes: &mut XmlNodes) -> Result<Node, Error> {
        let attributes = self.attributes.iter().cloned().collect::<Attributes>();
        let node = nodes.new_node_with(&self.name, &self.value, attributes);
        for child in &self.children {
            let child = child.build(nodes)?;
            nodes.append(node, child)?;
        }
        Ok(node)
    }

    /// Take a fixed snapshot of a node and its descendants.
    pub fn from_node(nodes: &XmlNodes, node: Node) -> Self {
        let element = nodes.element(node);
        Element {
            name: element.name().to_string(),
            value: element.value().to_string(),
            attributes: element
                .sorted_attributes()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: nodes
                .children(node)
                .map(|child| Element::from_node(nodes, child))
                .collect(),
        }
    }
}
