use tracing::{debug, trace};

use crate::error::{Error, ParseError};
use crate::tag::parse_tag;
use crate::xmlnodes::{Node, XmlNodes};
use crate::xmlvalue::EMPTY_NODE_NAME;

/// Elements opened but not yet closed during a parse, innermost last.
///
/// The synthetic root sits below the stack and cannot be popped.
struct OpenNodes {
    root: Node,
    stack: Vec<Node>,
    peak: usize,
}

impl OpenNodes {
    fn new(root: Node) -> Self {
        OpenNodes {
            root,
            stack: Vec::new(),
            peak: 0,
        }
    }

    fn current(&self) -> Node {
        self.stack.last().copied().unwrap_or(self.root)
    }

    fn push(&mut self, node: Node) {
        self.stack.push(node);
        self.peak = self.peak.max(self.stack.len());
    }

    fn pop(&mut self) {
        self.stack.pop();
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest nesting reached so far.
    fn peak(&self) -> usize {
        self.peak
    }
}

struct Builder<'a> {
    nodes: &'a mut XmlNodes,
    text: &'a str,
    root: Node,
    open: OpenNodes,
    in_opening_tag: bool,
    pending_value: &'a str,
}

impl<'a> Builder<'a> {
    fn new(nodes: &'a mut XmlNodes, text: &'a str) -> Self {
        let root = nodes.new_root();
        Builder {
            nodes,
            text,
            root,
            open: OpenNodes::new(root),
            in_opening_tag: false,
            pending_value: "",
        }
    }

    fn build(&mut self) -> Result<(), Error> {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut position = 0;
        while let Some(&c) = bytes.get(position) {
            match c {
                b'<' => position = self.tag(position)?,
                b'>' if self.in_opening_tag => position = self.leaf_text(position),
                _ => position += 1,
            }
        }
        if self.open.depth() > 0 {
            return Err(ParseError::UnclosedElement {
                name: self.nodes.name(self.open.current()).to_string(),
            }
            .into());
        }
        trace!(peak_depth = self.open.peak(), "document built");
        Ok(())
    }

    /// Handle a tag starting at `start`. Returns the position of its `>`.
    fn tag(&mut self, start: usize) -> Result<usize, Error> {
        let text = self.text;
        let interior_start = start + 1;
        let end = text[interior_start..]
            .find('>')
            .map(|offset| interior_start + offset)
            .ok_or(ParseError::UnclosedTag { position: start })?;
        let interior = &text[interior_start..end];
        match interior.strip_prefix('/') {
            Some(name) => self.close(name.trim(), start)?,
            None => self.open(interior)?,
        }
        Ok(end)
    }

    fn open(&mut self, interior: &str) -> Result<(), Error> {
        let (name, attributes) = parse_tag(interior);
        let node = self
            .nodes
            .add_child_with(self.open.current(), name, "", attributes)?;
        self.open.push(node);
        self.in_opening_tag = true;
        trace!(name, depth = self.open.depth(), "open element");
        Ok(())
    }

    fn close(&mut self, name: &str, position: usize) -> Result<(), Error> {
        let current = self.open.current();
        let expected = self.nodes.name(current);
        // `<>` opened an element under the placeholder name
        let stored = if name.is_empty() { EMPTY_NODE_NAME } else { name };
        if self.open.depth() == 0 || expected != stored {
            return Err(ParseError::MismatchedCloseTag {
                expected: expected.to_string(),
                found: name.to_string(),
                position,
            }
            .into());
        }
        if !self.nodes.has_children(current) {
            let value = std::mem::take(&mut self.pending_value);
            self.nodes.set_value(current, value);
        }
        self.open.pop();
        self.in_opening_tag = false;
        trace!(name, depth = self.open.depth(), "close element");
        Ok(())
    }

    /// Capture the text after the `>` at `gt` up to the next `<`. Returns
    /// the position of that `<` or the end of the input.
    fn leaf_text(&mut self, gt: usize) -> usize {
        let text = self.text;
        let start = gt + 1;
        let end = text[start..]
            .find('<')
            .map_or(text.len(), |offset| start + offset);
        self.pending_value = &text[start..end];
        end
    }
}

/// ## Parsing
impl XmlNodes {
    /// Parse text into a new tree and return its synthetic root.
    ///
    /// The top-level elements of the text become children of the root,
    /// which is named [`ROOT_NODE_NAME`](crate::ROOT_NODE_NAME). More than
    /// one top-level element is accepted.
    ///
    /// Parsing is all-or-nothing: on error nothing is left in the tree.
    /// Malformed text is reported as [`Error::Parse`]; use
    /// [`Error::parse_error`] to get at the details.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.parse(r#"<a x="1"><b>hello</b></a>"#)?;
    /// let a = nodes.first_child(root).unwrap();
    /// assert_eq!(nodes.attribute(a, "x"), "1");
    /// let b = nodes.first_child(a).unwrap();
    /// assert_eq!(nodes.value(b), "hello");
    /// # Ok::<(), xmlnodes::Error>(())
    /// ```
    pub fn parse(&mut self, text: &str) -> Result<Node, Error> {
        let mut builder = Builder::new(self, text);
        let root = builder.root;
        match builder.build() {
            Ok(()) => Ok(root),
            Err(e) => {
                debug!(error = %e, "parse failed");
                self.remove(root);
                Err(e)
            }
        }
    }

    /// Replace the children of `node` with the top-level elements parsed
    /// from `text`, and clear its value.
    ///
    /// If the text is malformed the error is returned and `node` is left
    /// without children. Fails without touching the tree if `node` has been
    /// removed.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let root = nodes.new_root();
    /// assert!(nodes.from_string(root, "<a></b>").is_err());
    /// assert_eq!(nodes.children_count(root), 0);
    /// ```
    pub fn from_string(&mut self, node: Node, text: &str) -> Result<(), Error> {
        self.check_alive(node)?;
        self.set_value(node, "");
        self.clear_children(node);
        let parsed = self.parse(text)?;
        let children = self.children(parsed).collect::<Vec<_>>();
        let moved = children
            .into_iter()
            .try_for_each(|child| self.append(node, child));
        self.remove(parsed);
        moved
    }
}
