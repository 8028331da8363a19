use std::rc::Rc;

use super::node::{LayoutNode, Node};

/// Collapses every layout node with fewer than two live children.
///
/// Children are normalized first, so collapses cascade upward: a layout node
/// left with a single child is replaced by that child (dropping its own
/// direction and proportion), and one left with none disappears. Subtrees that
/// need no changes are returned as-is, so normalizing a normalized tree hands
/// back the same allocation.
pub fn shrink(node: Option<Rc<Node>>) -> Option<Rc<Node>> {
    let node = node?;
    let Node::Layout(layout) = &*node else {
        return Some(node);
    };
    let [first, second] = layout.children.clone().map(shrink);
    match (first, second) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (first, second) => {
            let unchanged = same(&first, &layout.children[0]) && same(&second, &layout.children[1]);
            if unchanged {
                return Some(node);
            }
            Some(Rc::new(Node::Layout(LayoutNode::new(
                layout.direction,
                [first, second],
                layout.proportion,
            ))))
        }
    }
}

fn same(a: &Option<Rc<Node>>, b: &Option<Rc<Node>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
