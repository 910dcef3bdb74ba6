#![forbid(unsafe_code)]

//! A small in-memory XML node tree.
//!
//! `xmlnodes` keeps trees of named nodes in an arena owned by
//! [`XmlNodes`]. Each node has a name, a text value, a set of attributes
//! and an ordered list of children. Only leaf nodes carry a value.
//!
//! It reads and writes a compact XML dialect with comma-separated
//! attributes and no self-closing tags:
//!
//! ```rust
//! use xmlnodes::XmlNodes;
//!
//! let mut nodes = XmlNodes::new();
//! let root = nodes.parse(r#"<book id="1",lang="en"><title>Dune</title></book>"#)?;
//! let book = nodes.child_by_name(root, "book", 1).unwrap();
//! assert_eq!(nodes.attribute(book, "lang"), "en");
//!
//! let title = nodes.child_by_name(book, "title", 1).unwrap();
//! nodes.set_value(title, "Dune Messiah");
//!
//! assert_eq!(
//!     nodes.document_to_string(root),
//!     "<book id=\"1\", lang=\"en\">\n\t<title>Dune Messiah</title>\n</book>\n"
//! );
//! # Ok::<(), xmlnodes::Error>(())
//! ```
//!
//! Namespaces, entities, comments, processing instructions, CDATA and DTDs
//! are not supported.

mod access;
mod creation;
mod encoding;
mod error;
mod fileio;
pub mod fixed;
mod manipulation;
mod parse;
mod serialize;
mod tag;
mod xmlnodes;
mod xmlvalue;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use access::NodeEdge;
pub use error::{Error, ParseError};
pub use serialize::{Output, Parameters};
pub use xmlnodes::{Node, XmlNodes};
pub use xmlvalue::{Attributes, Element, EMPTY_NODE_NAME, ROOT_NODE_NAME};
