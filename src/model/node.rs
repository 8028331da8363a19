use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identifier of a piece of content registered outside of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        ContentId(value.to_owned())
    }
}

impl From<String> for ContentId {
    fn from(value: String) -> Self {
        ContentId(value)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The axis a layout node splits its area along.
///
/// Horizontal splits place their children side by side (left, right);
/// vertical splits stack them (top, bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// One of the two child positions of a layout node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("proportion entries must be finite and positive, got [{0}, {1}]")]
pub struct ProportionError(pub f64, pub f64);

/// Relative sizes of a layout node's two children.
///
/// Only the ratio between the two entries matters. Both are always finite and
/// strictly positive; there is no way to construct (or deserialize) anything
/// else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Proportion([f64; 2]);

impl Proportion {
    pub const EVEN: Proportion = Proportion([1.0, 1.0]);

    pub fn new(first: f64, second: f64) -> Result<Self, ProportionError> {
        let valid = |p: f64| p.is_finite() && p > 0.0;
        if valid(first) && valid(second) {
            Ok(Proportion([first, second]))
        } else {
            Err(ProportionError(first, second))
        }
    }

    pub fn get(self, slot: Slot) -> f64 {
        self.0[slot.index()]
    }

    /// The fraction of the parent's resizable extent given to `slot`.
    pub fn share(self, slot: Slot) -> f64 {
        self.get(slot) / (self.0[0] + self.0[1])
    }
}

impl Default for Proportion {
    fn default() -> Self {
        Proportion::EVEN
    }
}

impl TryFrom<[f64; 2]> for Proportion {
    type Error = ProportionError;

    fn try_from([first, second]: [f64; 2]) -> Result<Self, Self::Error> {
        Proportion::new(first, second)
    }
}

impl From<Proportion> for [f64; 2] {
    fn from(value: Proportion) -> Self {
        value.0
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}

/// Position of a node, as the sequence of slots leading to it from the root.
///
/// The empty path addresses the root itself. Nodes have no identity beyond
/// their position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<Slot>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn child(&self, slot: Slot) -> NodePath {
        let mut slots = self.0.clone();
        slots.push(slot);
        NodePath(slots)
    }
}

impl FromIterator<Slot> for NodePath {
    fn from_iter<T: IntoIterator<Item = Slot>>(iter: T) -> Self {
        NodePath(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Slot; N]> for NodePath {
    fn from(slots: [Slot; N]) -> Self {
        NodePath(slots.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for slot in &self.0 {
            write!(f, "/{}", slot.index())?;
        }
        Ok(())
    }
}

/// A node of the layout tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Content(ContentNode),
    Layout(LayoutNode),
}

/// A leaf, bound to externally registered content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub entry: ContentId,
}

/// A split of its area between two children.
///
/// Either child slot may be empty while an edit is in progress; a normalized
/// tree never contains a layout node with fewer than two children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub direction: Direction,
    #[serde(default)]
    pub children: [Option<Rc<Node>>; 2],
    #[serde(default)]
    pub proportion: Proportion,
}

impl LayoutNode {
    pub fn new(
        direction: Direction,
        children: [Option<Rc<Node>>; 2],
        proportion: Proportion,
    ) -> Self {
        LayoutNode { direction, children, proportion }
    }

    pub fn child(&self, slot: Slot) -> Option<&Node> {
        self.children[slot.index()].as_deref()
    }

    /// A copy of this node with one slot replaced. The other child is shared.
    pub fn with_child(&self, slot: Slot, child: Option<Rc<Node>>) -> LayoutNode {
        let mut children = self.children.clone();
        children[slot.index()] = child;
        LayoutNode { children, ..self.clone() }
    }

    pub fn with_proportion(&self, proportion: Proportion) -> LayoutNode {
        LayoutNode { proportion, ..self.clone() }
    }
}

impl Node {
    pub fn content(entry: impl Into<ContentId>) -> Node {
        Node::Content(ContentNode { entry: entry.into() })
    }

    pub fn split(direction: Direction, proportion: Proportion, first: Node, second: Node) -> Node {
        Node::Layout(LayoutNode::new(
            direction,
            [Some(Rc::new(first)), Some(Rc::new(second))],
            proportion,
        ))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Node::Content(_))
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Node::Layout(_))
    }

    pub fn as_content(&self) -> Option<&ContentNode> {
        match self {
            Node::Content(content) => Some(content),
            Node::Layout(_) => None,
        }
    }

    pub fn as_layout(&self) -> Option<&LayoutNode> {
        match self {
            Node::Layout(layout) => Some(layout),
            Node::Content(_) => None,
        }
    }

    /// The node at `path`, if the path leads to a live node.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let mut node = self;
        for &slot in path.slots() {
            node = node.as_layout()?.child(slot)?;
        }
        Some(node)
    }

    /// Every leaf in the subtree along with its path, in pre-order.
    pub fn leaves(&self) -> Vec<(NodePath, &ContentId)> {
        fn visit<'a>(node: &'a Node, path: NodePath, out: &mut Vec<(NodePath, &'a ContentId)>) {
            match node {
                Node::Content(content) => out.push((path, &content.entry)),
                Node::Layout(layout) => {
                    for slot in Slot::BOTH {
                        if let Some(child) = layout.child(slot) {
                            visit(child, path.child(slot), out);
                        }
                    }
                }
            }
        }
        let mut out = Vec::new();
        visit(self, NodePath::root(), &mut out);
        out
    }

    pub fn entries(&self) -> Vec<&ContentId> {
        self.leaves().into_iter().map(|(_, entry)| entry).collect()
    }

    /// The path of the first leaf (in pre-order) bound to `entry`.
    pub fn find(&self, entry: &ContentId) -> Option<NodePath> {
        self.leaves().into_iter().find(|(_, e)| *e == entry).map(|(path, _)| path)
    }

    /// Whether every layout node in the subtree has two live children.
    pub fn is_normalized(&self) -> bool {
        match self {
            Node::Content(_) => true,
            Node::Layout(layout) => layout
                .children
                .iter()
                .all(|child| child.as_deref().is_some_and(Node::is_normalized)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} does not address a child slot")]
pub struct PathNotFound(pub NodePath);

/// Replaces whatever occupies `path` (possibly an empty slot) with
/// `replacement`, rebuilding each ancestor on the way back up.
///
/// Subtrees off the path are shared with `root`. The result is not
/// normalized.
pub fn replace_at(
    root: &Rc<Node>,
    path: &NodePath,
    replacement: Option<Rc<Node>>,
) -> Result<Option<Rc<Node>>, PathNotFound> {
    fn rebuild(
        node: &Rc<Node>,
        path: &[Slot],
        replacement: Option<Rc<Node>>,
    ) -> Option<Option<Rc<Node>>> {
        let Some((&slot, rest)) = path.split_first() else {
            return Some(replacement);
        };
        let layout = node.as_layout()?;
        let child = if rest.is_empty() {
            replacement
        } else {
            rebuild(layout.children[slot.index()].as_ref()?, rest, replacement)?
        };
        Some(Some(Rc::new(Node::Layout(layout.with_child(slot, child)))))
    }
    rebuild(root, path.slots(), replacement).ok_or_else(|| PathNotFound(path.clone()))
}

/// Renders the tree for debug output.
pub fn draw_tree(root: Option<&Node>) -> String {
    struct Drawing<'a>(&'a Node);

    impl fmt::Display for Drawing<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ascii_tree::write_tree(f, &ascii(Some(self.0), NodePath::root()))
        }
    }

    match root {
        Some(root) => Drawing(root).to_string(),
        None => "(empty)\n".to_owned(),
    }
}

fn ascii(node: Option<&Node>, path: NodePath) -> ascii_tree::Tree {
    match node {
        None => ascii_tree::Tree::Leaf(vec![format!("{path} (empty)")]),
        Some(Node::Content(content)) => {
            ascii_tree::Tree::Leaf(vec![format!("{path} {}", content.entry)])
        }
        Some(Node::Layout(layout)) => {
            let desc = format!("{path} {:?} {}", layout.direction, layout.proportion);
            let children = Slot::BOTH
                .into_iter()
                .map(|slot| ascii(layout.child(slot), path.child(slot)))
                .collect();
            ascii_tree::Tree::Node(desc, children)
        }
    }
}
