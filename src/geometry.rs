use serde::{Deserialize, Serialize};

use crate::model::Direction;

#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// The extent of this size along the split axis of `direction`.
    pub fn along(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    pub fn min(&self) -> Point {
        self.origin
    }

    pub fn max(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width,
            y: self.origin.y + self.size.height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x <= point.x && point.x < max.x && min.y <= point.y && point.y < max.y
    }
}

pub trait Round {
    fn round(&self) -> Self;
}

impl Round for Rect {
    fn round(&self) -> Self {
        // Round each corner to pixel boundaries, then use that to calculate the size.
        let min_rounded = self.min().round();
        let max_rounded = self.max().round();
        Rect {
            origin: min_rounded,
            size: Size {
                width: max_rounded.x - min_rounded.x,
                height: max_rounded.y - min_rounded.y,
            },
        }
    }
}

impl Round for Point {
    fn round(&self) -> Self {
        Point {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}
