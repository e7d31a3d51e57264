// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fundamental drawing trait.

use kurbo::Point;

use crate::{Capabilities, Color, Error, Extent, Font};

/// A chainable set of primitive drawing operations bound to one surface.
///
/// Every method draws immediately and hands the same drawer back, so calls
/// chain with `?`. A drawer mutably borrows its surface for the whole
/// drawing session; the borrow checker rules out drawing on a surface that
/// no longer exists.
///
/// Angles are measured in degrees from the 3 o'clock position and grow
/// clockwise, matching the y-down pixel coordinate space. Thickness is in
/// device pixels, and a thickness of zero means the thinnest representable
/// stroke, one pixel. Filling and outline thickness are independent: a
/// filled shape still strokes its boundary at the requested thickness.
///
/// Shapes reaching past the surface are clipped; degenerate inputs (a
/// zero-length line, an empty bounding box, a zero sweep) draw their limit
/// form rather than failing.
pub trait Drawer {
    /// The fixed capabilities of this backend.
    fn capabilities(&self) -> Capabilities;

    /// Draw a straight line from `from` to `to`, both endpoints covered.
    ///
    /// The stroke extends symmetrically to each side of the ideal segment.
    /// A zero-length line renders as a single stamped point.
    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Draw an open elliptical arc.
    ///
    /// The ellipse fits the `size` bounding box centered at `center`; the
    /// arc sweeps clockwise from `start` to `end` degrees. Arcs are never
    /// filled, and a zero sweep renders as the single start point.
    fn arc(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Draw an arc whose endpoints are joined by a straight segment.
    ///
    /// The closed region between the arc and its chord can be filled. A
    /// full-turn sweep is the whole ellipse.
    #[allow(clippy::too_many_arguments)]
    fn chord(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Draw an arc closed by two radii back to `center`, forming a wedge.
    ///
    /// A zero sweep renders as the line from the center to the start point.
    #[allow(clippy::too_many_arguments)]
    fn pie_slice(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Draw the full ellipse fitting the `size` bounding box at `center`.
    fn ellipse(
        &mut self,
        center: Point,
        size: Extent,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Draw a circle of the given diameter.
    fn circle(
        &mut self,
        center: Point,
        diameter: u32,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        self.ellipse(center, Extent::square(diameter), color, fill, thickness)
    }

    /// Draw a closed polygon through `points`.
    ///
    /// The last point joins back to the first; the vertices need not be
    /// convex or ordered. Fewer than three points is invalid input.
    fn polygon(
        &mut self,
        points: &[Point],
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Color the single device pixel nearest to `point`.
    fn dot(&mut self, point: Point, color: Color) -> Result<&mut Self, Error>;

    /// Draw an axis-aligned rectangle with opposite corners `a` and `b`.
    ///
    /// The corners may be given in any order.
    fn rectangle(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error>;

    /// Render `body` in the face, size, and color carried by `font`.
    ///
    /// The top left corner of the laid-out text is anchored at `position`
    /// and the whole run is rotated `angle` degrees counter-clockwise about
    /// that anchor.
    fn text(
        &mut self,
        body: &str,
        font: &Font,
        position: Point,
        angle: f64,
    ) -> Result<&mut Self, Error>;
}
