//! The layout tree and the operations on it that don't depend on a gesture.
//!
//! Trees are persistent snapshots: every edit produces a new root that shares
//! unchanged subtrees with the old one through [`Rc`][std::rc::Rc].

mod node;
mod shrink;
mod size;

pub use node::{
    ContentId, ContentNode, Direction, LayoutNode, Node, NodePath, PathNotFound, Proportion,
    ProportionError, Slot, draw_tree, replace_at,
};
pub use shrink::shrink;
pub use size::{LeafFrame, calculate_layout, frame_at, leaf_at};
