//! Pure engines behind the interactive edits: dragging a split's handle, and
//! dragging a leaf's content onto another leaf or out of the tree.

mod resize;
mod restructure;

pub use resize::{ResizeError, ResizeGesture};
pub use restructure::{
    DropPosition, RestructureError, detect_drop_position, drop_at, drop_onto, move_entry, pick_out,
};
