//! Arena-backed DOM tree consumed by the renderer.
//!
//! Nodes live in a single vector and refer to each other by [`NodeId`].
//! Each node records its parent and its ordered children; the next sibling
//! is found by scanning the parent's child list, so the tree holds no
//! reference cycles. Any parser can build a [`Tree`] through
//! [`Tree::append_element`] and [`Tree::append_text`].

use indexmap::IndexMap;

use crate::utilities::is_block;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root element is always allocated first.
    pub const ROOT: NodeId = NodeId(0);
}

/// Element payload: lowercase tag name and attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag_name: String,
    pub attrs: IndexMap<String, String>,
}

impl Element {
    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(name)
            .or_else(|| self.attrs.get(&name.to_lowercase()))
            .map(String::as_str)
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Raw character data, entities already decoded.
    Text(String),
    Element(Element),
}

/// A single node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Tag name for elements, `None` for text.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(element) => Some(element.tag_name.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }
}

/// An ordered, rooted tree of [`Node`]s.
///
/// The tree is built once per conversion and is never mutated by the
/// renderer. Ids handed out by one tree must not be used with another.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree whose root is an element with the given tag.
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Element(Element {
                    tag_name: root_tag.to_lowercase(),
                    attrs: IndexMap::new(),
                }),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree owns at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append an element as the last child of `parent`.
    ///
    /// Tag and attribute names are lowercased so the renderer only ever
    /// sees lowercase names, whichever parser built the tree.
    pub fn append_element<'a, I>(&mut self, parent: NodeId, tag_name: &str, attrs: I) -> NodeId
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attrs = attrs
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value.to_string()))
            .collect();
        self.push(
            parent,
            NodeKind::Element(Element {
                tag_name: tag_name.to_lowercase(),
                attrs,
            }),
        )
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    // Panics on an out-of-range parent before anything is written, so the
    // arena is never left with a half-attached node.
    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes[parent.0].children.push(id);
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Get only element children
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.node(*child).is_element())
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).tag_name()
    }

    /// Get an attribute value by name; `None` for text nodes.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).as_element()?.attr(name)
    }

    /// Siblings that follow `id` under the same parent, in document order.
    pub fn following_siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let siblings = match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &[],
        };
        let start = siblings
            .iter()
            .position(|sibling| *sibling == id)
            .map_or(siblings.len(), |pos| pos + 1);
        siblings[start..].iter().copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.following_siblings(id).next()
    }

    /// Next sibling that is an element, skipping text in between.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.following_siblings(id)
            .find(|sibling| self.node(*sibling).is_element())
    }

    /// Whether `id` is the final element inside a block-level parent.
    ///
    /// True iff no element sibling follows `id` and the parent's tag is in
    /// the block-level set. Block renderings drop their trailing newlines
    /// in that position.
    pub fn is_last_child_of_block_level_element(&self, id: NodeId) -> bool {
        if self.next_element_sibling(id).is_some() {
            return false;
        }
        self.parent(id)
            .and_then(|parent| self.tag_name(parent))
            .is_some_and(is_block)
    }
}

#[cfg(test)]
impl Tree {
    /// Concatenated raw text of `id` and its descendants.
    pub(crate) fn text_content(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element(_) => self
                .children(id)
                .iter()
                .map(|child| self.text_content(*child))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_attrs() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    #[test]
    fn test_create_element() {
        let mut tree = Tree::new("HTML");
        let div = tree.append_element(tree.root(), "DIV", no_attrs());
        assert!(tree.node(div).is_element());
        assert_eq!(tree.tag_name(div), Some("div"));
        assert_eq!(tree.tag_name(tree.root()), Some("html"));
        assert_eq!(tree.parent(div), Some(tree.root()));
    }

    #[test]
    fn test_create_text() {
        let mut tree = Tree::new("html");
        let text = tree.append_text(tree.root(), "Hello World");
        assert!(tree.node(text).is_text());
        assert_eq!(tree.tag_name(text), None);
        assert_eq!(tree.text_content(text), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let mut tree = Tree::new("html");
        let a = tree.append_element(
            tree.root(),
            "a",
            vec![("HREF", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(tree.attr(a, "href"), Some("https://example.com"));
        assert_eq!(tree.attr(a, "Title"), Some("Example"));
        assert_eq!(tree.attr(a, "class"), None);
    }

    #[test]
    fn test_children_and_siblings() {
        let mut tree = Tree::new("div");
        let root = tree.root();
        let first = tree.append_text(root, "Hello");
        let span = tree.append_element(root, "span", no_attrs());
        let last = tree.append_text(root, "World");

        assert_eq!(tree.children(root), &[first, span, last]);
        assert_eq!(tree.element_children(root).collect::<Vec<_>>(), vec![span]);
        assert_eq!(tree.next_sibling(first), Some(span));
        assert_eq!(tree.next_sibling(last), None);
        assert_eq!(tree.next_sibling(root), None);
        assert_eq!(tree.next_element_sibling(first), Some(span));
        assert_eq!(tree.next_element_sibling(span), None);
    }

    #[test]
    fn test_text_content() {
        let mut tree = Tree::new("div");
        let root = tree.root();
        tree.append_text(root, "Hello ");
        let span = tree.append_element(root, "span", no_attrs());
        tree.append_text(span, "World");

        assert_eq!(tree.text_content(root), "Hello World");
    }

    #[test]
    fn test_foreign_parent_leaves_tree_untouched() {
        let mut tree = Tree::new("html");
        let mut other = Tree::new("html");
        let p = other.append_element(other.root(), "p", no_attrs());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            tree.append_text(p, "x");
        }));
        assert!(result.is_err());
        assert_eq!(tree.len(), 1);
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_last_child_ignores_trailing_text() {
        let mut tree = Tree::new("html");
        let div = tree.append_element(tree.root(), "div", no_attrs());
        let first = tree.append_element(div, "p", no_attrs());
        let second = tree.append_element(div, "p", no_attrs());
        tree.append_text(div, "  trailing  ");

        assert!(!tree.is_last_child_of_block_level_element(first));
        assert!(tree.is_last_child_of_block_level_element(second));
    }

    #[test]
    fn test_last_child_requires_block_parent() {
        let mut tree = Tree::new("html");
        let span = tree.append_element(tree.root(), "span", no_attrs());
        let inner = tree.append_element(span, "p", no_attrs());
        let top = tree.append_element(tree.root(), "p", no_attrs());

        assert!(!tree.is_last_child_of_block_level_element(inner));
        assert!(!tree.is_last_child_of_block_level_element(top));
        assert!(!tree.is_last_child_of_block_level_element(tree.root()));
    }
}
