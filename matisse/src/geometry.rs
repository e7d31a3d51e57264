// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integral surface geometry.

use kurbo::Point;

/// The dimensions of a surface or of a shape's bounding box, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    /// Create a new extent.
    pub const fn new(width: u32, height: u32) -> Extent {
        Extent { width, height }
    }

    /// Create an extent with equal width and height.
    pub const fn square(side: u32) -> Extent {
        Extent::new(side, side)
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale both dimensions by `factor`, rounding halves away from zero.
    ///
    /// A dimension never scales below one pixel.
    pub fn scale(self, factor: f64) -> Extent {
        Extent::new(scale_dim(self.width, factor), scale_dim(self.height, factor))
    }

    /// The center of a box of this extent anchored at the origin.
    ///
    /// Each coordinate is the floor of the half dimension, so a 3x3 box is
    /// centered on its middle pixel.
    pub const fn center(self) -> Point {
        Point::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

fn scale_dim(dim: u32, factor: f64) -> u32 {
    // max also turns a NaN product into the one pixel floor.
    (dim as f64 * factor).round().max(1.0) as u32
}

/// Normalize a clockwise `start`/`end` pair of degrees to a sweep in
/// `0.0..=360.0`.
///
/// Angles measure from the 3 o'clock position and grow clockwise. An end
/// angle behind the start wraps through a full turn; equal angles mean a
/// degenerate zero sweep, while pairs exactly a turn apart mean a full one.
pub fn arc_sweep(start: f64, end: f64) -> f64 {
    let sweep = (end - start).rem_euclid(360.0);
    if sweep.is_nan() {
        0.0
    } else if sweep == 0.0 && end != start {
        360.0
    } else {
        sweep
    }
}

/// The device pixel nearest to a continuous point.
///
/// Rounds halves away from zero, the same rule [`Extent::scale`] uses, so
/// continuous inputs land on stable pixels.
pub fn device_pixel(p: Point) -> (i64, i64) {
    (p.x.round() as i64, p.y.round() as i64)
}
