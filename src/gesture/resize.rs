use thiserror::Error;

use crate::model::{LayoutNode, Proportion, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResizeError {
    #[error("cannot resize from proportion [{0}, {1}]")]
    DegenerateProportion(f64, f64),
    #[error("container extent {container} leaves no room after a handle of {handle}")]
    EmptyContainer { container: f64, handle: f64 },
    #[error("minimum fraction must be in (0, 1], got {0}")]
    InvalidMinFraction(f64),
    #[error("minimum fraction {0} leaves no proportion the handle can be dragged to")]
    UnusableMinFraction(f64),
    #[error("displacement must be finite, got {0}")]
    NonFiniteDisplacement(f64),
}

/// A drag of the handle between a layout node's two children.
///
/// All measurements are taken once at [`begin`][Self::begin] and every update
/// is computed from them and the total displacement since the drag started,
/// so updates never accumulate rounding error. Dropping the gesture discards
/// it; [`commit`][Self::commit] yields the value to install in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    start: Proportion,
    /// Extent along the split axis available to the two children.
    total: f64,
    /// Extent of each child when the drag started.
    base: [f64; 2],
    min_extent: f64,
    current: Option<Proportion>,
}

impl ResizeGesture {
    /// Starts a drag on `node`'s handle.
    ///
    /// `min_fraction` is the smallest share of the resizable extent either
    /// child may be dragged down to. A fraction of 1, or one so small that the
    /// pinned proportion overflows, fails with
    /// [`UnusableMinFraction`][ResizeError::UnusableMinFraction].
    pub fn begin(
        node: &LayoutNode,
        container_extent: f64,
        handle_extent: f64,
        min_fraction: f64,
    ) -> Result<ResizeGesture, ResizeError> {
        let start = node.proportion;
        let [p0, p1] = [start.get(Slot::First), start.get(Slot::Second)];
        let sum = p0 + p1;
        if !(sum.is_finite() && sum > 0.0) {
            return Err(ResizeError::DegenerateProportion(p0, p1));
        }
        let total = container_extent - handle_extent;
        if !(total.is_finite() && total > 0.0) {
            return Err(ResizeError::EmptyContainer {
                container: container_extent,
                handle: handle_extent,
            });
        }
        if !(min_fraction > 0.0 && min_fraction <= 1.0) {
            return Err(ResizeError::InvalidMinFraction(min_fraction));
        }
        let min_extent = total * min_fraction;
        let pinned = (total - min_extent) / min_extent;
        if !(pinned.is_finite() && pinned > 0.0) {
            return Err(ResizeError::UnusableMinFraction(min_fraction));
        }
        Ok(ResizeGesture {
            start,
            total,
            base: [total * p0 / sum, total * p1 / sum],
            min_extent,
            current: None,
        })
    }

    /// Moves the handle to `displacement` from where the drag started and
    /// returns the resulting live proportion.
    ///
    /// A child dragged to or below the minimum extent stops there and the
    /// other takes the rest. The result is scaled so the smaller side is 1.
    pub fn update(&mut self, displacement: f64) -> Result<Proportion, ResizeError> {
        if !displacement.is_finite() {
            return Err(ResizeError::NonFiniteDisplacement(displacement));
        }
        let min = self.min_extent;
        let w0 = self.base[0] + displacement;
        let w1 = self.base[1] - displacement;
        let (first, second) = if w0 <= min {
            (1.0, (self.total - min) / min)
        } else if w1 <= min {
            ((self.total - min) / min, 1.0)
        } else {
            let smaller = w0.min(w1);
            (w0 / smaller, w1 / smaller)
        };
        let proportion = Proportion::new(first, second)
            .map_err(|e| ResizeError::DegenerateProportion(e.0, e.1))?;
        self.current = Some(proportion);
        Ok(proportion)
    }

    /// The proportion the node had when the drag started.
    pub fn start(&self) -> Proportion {
        self.start
    }

    /// The last value computed by [`update`][Self::update].
    pub fn current(&self) -> Option<Proportion> {
        self.current
    }

    /// Ends the drag, yielding the proportion to install, if the handle ever
    /// moved.
    pub fn commit(self) -> Option<Proportion> {
        self.current
    }
}
