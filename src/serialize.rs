use std::io::Write;

use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::access::NodeEdge;
use crate::error::Error;
use crate::xmlnodes::{Node, XmlNodes};

/// Serialization parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Indentation written once per nesting level in front of start tags,
    /// and in front of end tags of nodes with children.
    pub indentation: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            indentation: "\t".to_string(),
        }
    }
}

/// Output of serialization.
///
/// Each item represents a piece of the serialized text. You can use this
/// information for customized serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output<'a> {
    /// Start tag open, i.e. `<foo`, at the given nesting depth.
    StartTagOpen { name: &'a str, depth: usize },
    /// Attribute, i.e. ` foo="bar"`. Every attribute but the first is
    /// preceded by a comma.
    Attribute {
        name: &'a str,
        value: &'a str,
        first: bool,
    },
    /// Start tag close, `>`, followed by a newline if children follow.
    StartTagClose { has_children: bool },
    /// The value of a node without children.
    Value(&'a str),
    /// End tag, i.e. `</foo>`, followed by a newline. Only indented if the
    /// node has children.
    EndTag {
        name: &'a str,
        depth: usize,
        has_children: bool,
    },
}

impl Output<'_> {
    fn render(&self, parameters: &Parameters, out: &mut String) {
        match self {
            Output::StartTagOpen { name, depth } => {
                indent(parameters, *depth, out);
                out.push('<');
                out.push_str(name);
            }
            Output::Attribute { name, value, first } => {
                if !first {
                    out.push(',');
                }
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
            Output::StartTagClose { has_children } => {
                out.push('>');
                if *has_children {
                    out.push('\n');
                }
            }
            Output::Value(value) => out.push_str(value),
            Output::EndTag {
                name,
                depth,
                has_children,
            } => {
                if *has_children {
                    indent(parameters, *depth, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push_str(">\n");
            }
        }
    }
}

fn indent(parameters: &Parameters, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(&parameters.indentation);
    }
}

/// Serialization outputs for a node and its descendants, depth first.
///
/// Attributes come out sorted by name.
pub(crate) fn gen_outputs(nodes: &XmlNodes, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        let mut depth = 0;
        for edge in nodes.traverse(node) {
            match edge {
                NodeEdge::Start(current) => {
                    let element = nodes.element(current);
                    let has_children = nodes.has_children(current);
                    yield_!(Output::StartTagOpen {
                        name: element.name(),
                        depth,
                    });
                    for (index, (name, value)) in
                        element.sorted_attributes().into_iter().enumerate()
                    {
                        yield_!(Output::Attribute {
                            name,
                            value,
                            first: index == 0,
                        });
                    }
                    yield_!(Output::StartTagClose { has_children });
                    if !has_children {
                        yield_!(Output::Value(element.value()));
                    }
                    depth += 1;
                }
                NodeEdge::End(current) => {
                    depth -= 1;
                    yield_!(Output::EndTag {
                        name: nodes.name(current),
                        depth,
                        has_children: nodes.has_children(current),
                    });
                }
            }
        }
    })
    .into_iter()
}

/// ## Serialization
///
/// The output uses the same dialect that [`XmlNodes::parse`] reads:
///
/// ```text
/// <a x="1", y="2">
/// 	<b>value</b>
/// </a>
/// ```
///
/// A node with children never has its value written. There is no
/// self-closing tag syntax.
impl XmlNodes {
    /// Iterator over the serialization outputs of a node.
    pub fn outputs(&self, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
        gen_outputs(self, node)
    }

    /// Serialize a node, including its own tag, to a string.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<a><b>1</b></a>").unwrap();
    /// let a = nodes.first_child(root).unwrap();
    /// assert_eq!(nodes.to_string(a), "<a>\n\t<b>1</b>\n</a>\n");
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        self.to_string_with(&Parameters::default(), node)
    }

    /// Serialize a node to a string with the given parameters.
    pub fn to_string_with(&self, parameters: &Parameters, node: Node) -> String {
        let mut out = String::new();
        for output in gen_outputs(self, node) {
            output.render(parameters, &mut out);
        }
        out
    }

    /// Serialize the children of a document root, without the root's own
    /// tag.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse("<a>1</a><b>2</b>").unwrap();
    /// assert_eq!(nodes.document_to_string(root), "<a>1</a>\n<b>2</b>\n");
    /// ```
    pub fn document_to_string(&self, root: Node) -> String {
        self.document_to_string_with(&Parameters::default(), root)
    }

    /// Serialize the children of a document root with the given
    /// parameters.
    pub fn document_to_string_with(&self, parameters: &Parameters, root: Node) -> String {
        self.children(root)
            .map(|child| self.to_string_with(parameters, child))
            .collect()
    }

    /// Serialize a node to a writer.
    pub fn write(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        self.write_with(&Parameters::default(), node, w)
    }

    /// Serialize a node to a writer with the given parameters.
    pub fn write_with(
        &self,
        parameters: &Parameters,
        node: Node,
        w: &mut impl Write,
    ) -> Result<(), Error> {
        w.write_all(self.to_string_with(parameters, node).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xmlvalue::Attributes;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    fn serialize(
        #[values(
            ("leaf", "<a>hello</a>"),
            ("empty_leaf", "<a></a>"),
            ("nested", "<a><b></b></a>"),
            ("siblings", "<a><b>1</b><c>2</c></a>"),
            ("deep", "<a><b><c><d>x</d></c></b></a>"),
            ("attributes", r#"<a z="3",x="1",y="2"><b k="v">t</b></a>"#),
            ("escaped_quote", r#"<a x="say \"hi\"">v</a>"#),
            ("parent_value_dropped", "<a>text<b>1</b></a>"),
        )]
        value: (&str, &str),
    ) {
        let (name, xml) = value;
        let mut nodes = XmlNodes::new();
        let root = nodes.parse(xml).unwrap();
        let output = nodes.document_to_string(root);
        assert_snapshot!(name, output, xml);
    }

    #[test]
    fn test_leaf_inline() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node_with("a", "hello", Attributes::new());
        assert_eq!(nodes.to_string(a), "<a>hello</a>\n");
    }

    #[test]
    fn test_attributes_joined_by_comma() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node_with("a", "v", Attributes::new());
        nodes.set_attribute(a, "y", "2");
        nodes.set_attribute(a, "x", "1");
        assert_eq!(nodes.to_string(a), "<a x=\"1\", y=\"2\">v</a>\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node("a");
        let b = nodes.add_child(a, "b").unwrap();
        nodes.add_child_with(b, "c", "x", Attributes::new()).unwrap();
        nodes.add_child(a, "d").unwrap();
        assert_eq!(
            nodes.to_string(a),
            "<a>\n\t<b>\n\t\t<c>x</c>\n\t</b>\n\t<d></d>\n</a>\n"
        );
    }

    #[test]
    fn test_value_ignored_with_children() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node_with("a", "ignored", Attributes::new());
        nodes.add_child(a, "b").unwrap();
        assert_eq!(nodes.to_string(a), "<a>\n\t<b></b>\n</a>\n");
    }

    #[test]
    fn test_root_serializes_its_name() {
        let mut nodes = XmlNodes::new();
        let root = nodes.parse("<a>1</a>").unwrap();
        assert_eq!(
            nodes.to_string(root),
            "<__ROOT__>\n\t<a>1</a>\n</__ROOT__>\n"
        );
        assert_eq!(nodes.document_to_string(root), "<a>1</a>\n");
    }

    #[test]
    fn test_custom_indentation() {
        let mut nodes = XmlNodes::new();
        let root = nodes.parse("<a><b><c>1</c></b></a>").unwrap();
        let parameters = Parameters {
            indentation: "  ".to_string(),
        };
        assert_eq!(
            nodes.document_to_string_with(&parameters, root),
            "<a>\n  <b>\n    <c>1</c>\n  </b>\n</a>\n"
        );
    }

    #[test]
    fn test_outputs() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node("a");
        nodes.set_attribute(a, "x", "1");
        nodes.add_child_with(a, "b", "v", Attributes::new()).unwrap();
        let outputs = nodes.outputs(a).collect::<Vec<_>>();
        assert_eq!(
            outputs,
            vec![
                Output::StartTagOpen { name: "a", depth: 0 },
                Output::Attribute {
                    name: "x",
                    value: "1",
                    first: true
                },
                Output::StartTagClose { has_children: true },
                Output::StartTagOpen { name: "b", depth: 1 },
                Output::StartTagClose {
                    has_children: false
                },
                Output::Value("v"),
                Output::EndTag {
                    name: "b",
                    depth: 1,
                    has_children: false
                },
                Output::EndTag {
                    name: "a",
                    depth: 0,
                    has_children: true
                },
            ]
        );
    }

    #[test]
    fn test_write() {
        let mut nodes = XmlNodes::new();
        let a = nodes.new_node_with("a", "1", Attributes::new());
        let mut buf = Vec::new();
        nodes.write(a, &mut buf).unwrap();
        assert_eq!(buf, b"<a>1</a>\n");
    }
}
