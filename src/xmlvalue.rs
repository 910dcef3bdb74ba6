use ahash::AHashMap;

/// Name given to the synthetic root that anchors a parsed document.
pub const ROOT_NODE_NAME: &str = "__ROOT__";

/// Name given to a node created with an empty name.
pub const EMPTY_NODE_NAME: &str = "__UNNAMED__";

/// A map of attribute name to attribute value.
///
/// Iteration order is unspecified.
pub type Attributes = AHashMap<String, String>;

/// The data carried by every node in the tree.
///
/// Access it using [`XmlNodes::element`](crate::XmlNodes::element) or
/// mutably using [`XmlNodes::element_mut`](crate::XmlNodes::element_mut).
///
/// The value is only meaningful if the node has no children; the
/// serializer ignores it otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) attributes: Attributes,
}

fn non_empty_name(name: String) -> String {
    if name.is_empty() {
        EMPTY_NODE_NAME.to_string()
    } else {
        name
    }
}

impl Element {
    pub(crate) fn new(name: String, value: String, attributes: Attributes) -> Self {
        Element {
            name: non_empty_name(name),
            value,
            attributes,
        }
    }

    /// The name of the element.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let node = nodes.new_node("");
    /// assert_eq!(nodes.element(node).name(), xmlnodes::EMPTY_NODE_NAME);
    /// ```
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name. An empty name is replaced by [`EMPTY_NODE_NAME`].
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = non_empty_name(name.into());
    }

    /// The text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the text value.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Get an attribute value, or the empty string if it isn't set.
    ///
    /// A missing attribute cannot be told apart from one set to `""`; use
    /// [`Element::get_attribute`] if the difference matters.
    ///
    /// ```rust
    /// let mut nodes = xmlnodes::XmlNodes::new();
    /// let node = nodes.new_node("a");
    /// let element = nodes.element_mut(node);
    /// assert_eq!(element.attribute("x"), "");
    /// element.set_attribute("x", "");
    /// assert_eq!(element.attribute("x"), "");
    /// ```
    pub fn attribute(&self, key: &str) -> &str {
        self.get_attribute(key).unwrap_or("")
    }

    /// Get an attribute value if it is set.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    /// Remove all attributes.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Replace all attributes.
    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    /// Attributes sorted by name.
    pub(crate) fn sorted_attributes(&self) -> Vec<(&str, &str)> {
        let mut attributes = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        attributes.sort_unstable_by(|a, b| a.0.cmp(b.0));
        attributes
    }
}
