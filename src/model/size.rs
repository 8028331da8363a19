use serde::{Deserialize, Serialize};

use super::node::{ContentId, Direction, Node, NodePath, Proportion, Slot};
use crate::geometry::{Point, Rect, Round, Size};

/// Where a leaf ends up on the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeafFrame {
    pub entry: ContentId,
    pub path: NodePath,
    pub frame: Rect,
}

/// Lays out every leaf of `root` inside `frame`.
///
/// Each split gives `handle_extent` along its axis to the resize handle
/// between its children and divides the rest according to its proportion.
/// Empty slots receive space but produce no frame.
pub fn calculate_layout(root: &Node, frame: Rect, handle_extent: f64) -> Vec<LeafFrame> {
    let mut frames = vec![];
    apply(root, NodePath::root(), frame, handle_extent, &mut frames);
    frames
}

fn apply(node: &Node, path: NodePath, rect: Rect, handle_extent: f64, frames: &mut Vec<LeafFrame>) {
    match node {
        Node::Content(content) => frames.push(LeafFrame {
            entry: content.entry.clone(),
            path,
            frame: rect,
        }),
        Node::Layout(layout) => {
            let rects = split_rect(rect, layout.direction, layout.proportion, handle_extent);
            for slot in Slot::BOTH {
                if let Some(child) = layout.child(slot) {
                    apply(child, path.child(slot), rects[slot.index()], handle_extent, frames);
                }
            }
        }
    }
}

/// The frame of the node (or empty slot) at `path`.
pub fn frame_at(root: &Node, path: &NodePath, frame: Rect, handle_extent: f64) -> Option<Rect> {
    let mut node = root;
    let mut rect = frame;
    for (depth, &slot) in path.slots().iter().enumerate() {
        let layout = node.as_layout()?;
        rect = split_rect(rect, layout.direction, layout.proportion, handle_extent)[slot.index()];
        match layout.child(slot) {
            Some(child) => node = child,
            // An empty slot still has a frame, but nothing lies below it.
            None if depth + 1 == path.slots().len() => return Some(rect),
            None => return None,
        }
    }
    Some(rect)
}

/// The leaf whose frame contains `point`.
pub fn leaf_at(
    root: &Node,
    frame: Rect,
    handle_extent: f64,
    point: Point,
) -> Option<(NodePath, Rect)> {
    calculate_layout(root, frame, handle_extent)
        .into_iter()
        .find(|leaf| leaf.frame.contains(point))
        .map(|leaf| (leaf.path, leaf.frame))
}

/// Divides `rect` between two children along `direction`.
fn split_rect(
    rect: Rect,
    direction: Direction,
    proportion: Proportion,
    handle_extent: f64,
) -> [Rect; 2] {
    let extent = rect.size.along(direction);
    let handle = handle_extent.clamp(0.0, extent.max(0.0));
    let first_extent = (extent - handle) * proportion.share(Slot::First);
    match direction {
        Direction::Horizontal => {
            let first = Rect::new(rect.origin, Size::new(first_extent, rect.size.height)).round();
            let x = first.max().x + handle;
            let second = Rect::new(
                Point::new(x, rect.origin.y),
                Size::new(rect.max().x - x, rect.size.height),
            )
            .round();
            [first, second]
        }
        Direction::Vertical => {
            let first = Rect::new(rect.origin, Size::new(rect.size.width, first_extent)).round();
            let y = first.max().y + handle;
            let second = Rect::new(
                Point::new(rect.origin.x, y),
                Size::new(rect.size.width, rect.max().y - y),
            )
            .round();
            [first, second]
        }
    }
}
