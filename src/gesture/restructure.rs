use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};
use crate::model::{
    ContentId, ContentNode, Direction, LayoutNode, Node, NodePath, Proportion, Slot, replace_at,
    shrink,
};

/// The edge of a leaf that content was dropped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPosition {
    Top,
    Right,
    Bottom,
    Left,
}

impl DropPosition {
    /// The direction of the split a drop on this edge creates.
    pub fn direction(self) -> Direction {
        match self {
            DropPosition::Left | DropPosition::Right => Direction::Horizontal,
            DropPosition::Top | DropPosition::Bottom => Direction::Vertical,
        }
    }

    /// The slot the dropped content lands in.
    pub fn incoming_slot(self) -> Slot {
        match self {
            DropPosition::Left | DropPosition::Top => Slot::First,
            DropPosition::Right | DropPosition::Bottom => Slot::Second,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestructureError {
    #[error("no node at {0}")]
    NotFound(NodePath),
    #[error("node at {0} is not content")]
    NotContent(NodePath),
    #[error("cannot drop {0} onto itself")]
    DropOnSelf(NodePath),
}

/// The subtree that replaces `target` when `entry` is dropped on its
/// `position` edge.
pub fn drop_onto(target: &ContentNode, entry: ContentId, position: DropPosition) -> LayoutNode {
    let incoming = Some(Rc::new(Node::content(entry)));
    let existing = Some(Rc::new(Node::Content(target.clone())));
    let children = match position.incoming_slot() {
        Slot::First => [incoming, existing],
        Slot::Second => [existing, incoming],
    };
    LayoutNode::new(position.direction(), children, Proportion::EVEN)
}

fn content_at<'a>(root: &'a Node, path: &NodePath) -> Result<&'a ContentNode, RestructureError> {
    root.get(path)
        .ok_or_else(|| RestructureError::NotFound(path.clone()))?
        .as_content()
        .ok_or_else(|| RestructureError::NotContent(path.clone()))
}

/// Drops `entry` onto the leaf at `path`, returning the new root.
///
/// The result is already normalized if `root` was.
pub fn drop_at(
    root: &Rc<Node>,
    path: &NodePath,
    entry: ContentId,
    position: DropPosition,
) -> Result<Rc<Node>, RestructureError> {
    let target = content_at(root, path)?;
    let replacement = Rc::new(Node::Layout(drop_onto(target, entry, position)));
    replace_at(root, path, Some(replacement))
        .ok()
        .flatten()
        .ok_or_else(|| RestructureError::NotFound(path.clone()))
}

/// Empties the slot holding the leaf at `path`.
///
/// The result is not normalized; pass it through [`shrink`] before
/// installing it. Picking out a root leaf leaves no tree at all.
pub fn pick_out(root: &Rc<Node>, path: &NodePath) -> Result<Option<Rc<Node>>, RestructureError> {
    content_at(root, path)?;
    replace_at(root, path, None).map_err(|e| RestructureError::NotFound(e.0))
}

/// Moves the leaf at `source` onto the `position` edge of the leaf at
/// `target`, returning the normalized result.
pub fn move_entry(
    root: &Rc<Node>,
    source: &NodePath,
    target: &NodePath,
    position: DropPosition,
) -> Result<Option<Rc<Node>>, RestructureError> {
    let entry = content_at(root, source)?.entry.clone();
    content_at(root, target)?;
    if source == target {
        return Err(RestructureError::DropOnSelf(source.clone()));
    }
    // Both are leaves, so neither path passes through the other and the
    // source is still where it was after the drop.
    let dropped = drop_at(root, target, entry, position)?;
    Ok(shrink(pick_out(&dropped, source)?))
}

/// Classifies a pointer over a leaf's `rect` as a drop on one of its edges.
///
/// A point within `edge_fraction` of the width from the left or right edge
/// targets that edge; otherwise one within `edge_fraction` of the height from
/// the top or bottom does. Anything else, including points outside the rect,
/// is not a drop.
pub fn detect_drop_position(rect: Rect, point: Point, edge_fraction: f64) -> Option<DropPosition> {
    if !rect.contains(point) {
        return None;
    }
    let x = point.x - rect.origin.x;
    let y = point.y - rect.origin.y;
    let (w, h) = (rect.size.width, rect.size.height);
    if x < w * edge_fraction {
        Some(DropPosition::Left)
    } else if x > w * (1.0 - edge_fraction) {
        Some(DropPosition::Right)
    } else if y < h * edge_fraction {
        Some(DropPosition::Top)
    } else if y > h * (1.0 - edge_fraction) {
        Some(DropPosition::Bottom)
    } else {
        None
    }
}
