//! Proptest support
//!
//! Generate arbitrary trees as [`fixed::Element`](crate::fixed::Element)
//! values that survive a serialize and parse round trip: leaf values
//! contain no `<`, attribute values contain no `"`, `\`, `<` or `>`, and
//! nodes with children have an empty value.
//!
//! This can be enabled by adding the `proptest` feature to your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmlnodes = { version = "0.1", features = ["proptest"] }
//! ```

use proptest::prelude::*;

use crate::fixed::Element;

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const VALUE: &str = "[^<]*";
const ATTRIBUTE_VALUE: &str = "[^<>\"\\\\]*";

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE, 0..3)
        .prop_map(|attributes| {
            attributes
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect()
        })
}

/// Generate a node without children.
pub fn arb_leaf() -> impl Strategy<Value = Element> {
    (prop::sample::select(ELEMENT_NAMES), VALUE, arb_attributes()).prop_map(
        |(name, value, attributes)| Element {
            name: name.to_string(),
            value,
            attributes,
            children: vec![],
        },
    )
}

/// Generate a tree of nodes.
///
/// Example:
///
/// ```notrust
/// use proptest::prelude::*;
/// use xmlnodes::proptest::arb_element;
/// use xmlnodes::XmlNodes;
///
/// proptest! {
///   #[test]
///   fn test_can_serialize_parse(element in arb_element()) {
///     let mut nodes = XmlNodes::new();
///     let node = element.build(&mut nodes).unwrap();
///     let serialized = nodes.to_string(node);
///     prop_assert!(nodes.parse(&serialized).is_ok());
///   }
/// }
/// ```
pub fn arb_element() -> impl Strategy<Value = Element> {
    arb_leaf().prop_recursive(
        6,  // levels deep
        64, // maximum size of 64 nodes
        5,  // up to 5 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_attributes(),
                prop::collection::vec(inner, 1..5),
            )
                .prop_map(|(name, attributes, children)| Element {
                    name: name.to_string(),
                    value: String::new(),
                    attributes,
                    children,
                })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xmlnodes::XmlNodes;

    proptest! {
        #[test]
        fn test_leaf_round_trip(fixed in arb_leaf()) {
            let mut nodes = XmlNodes::new();
            let node = fixed.build(&mut nodes).unwrap();
            let serialized = nodes.to_string(node);
            let root = nodes.parse(&serialized);
            prop_assert!(root.is_ok(), "Cannot parse: {:?}", serialized);
            let root = root.unwrap();
            prop_assert_eq!(nodes.children_count(root), 1);
            let parsed = nodes.first_child(root).unwrap();
            prop_assert_eq!(Element::from_node(&nodes, parsed), fixed);
        }
    }

    proptest! {
        #[test]
        fn test_tree_round_trip(fixed in arb_element()) {
            let mut nodes = XmlNodes::new();
            let node = fixed.build(&mut nodes).unwrap();
            let serialized = nodes.to_string(node);
            let root = nodes.parse(&serialized);
            prop_assert!(root.is_ok(), "Cannot parse: {:?}", serialized);
            let root = root.unwrap();
            let parsed = nodes.first_child(root).unwrap();
            prop_assert_eq!(Element::from_node(&nodes, parsed), fixed);
        }
    }

    proptest! {
        #[test]
        fn test_serialization_stable(fixed in arb_element()) {
            let mut nodes = XmlNodes::new();
            let node = fixed.build(&mut nodes).unwrap();
            let first = nodes.to_string(node);
            let root = nodes.parse(&first).unwrap();
            let second = nodes.document_to_string(root);
            let root = nodes.parse(&second).unwrap();
            let third = nodes.document_to_string(root);
            prop_assert_eq!(&second, &third);
            prop_assert_eq!(first, second);
        }
    }
}
