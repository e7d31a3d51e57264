// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pixel surface abstraction.

use crate::{Color, Drawer, Extent};

/// A fixed-size grid of pixels that a [`Drawer`] mutates in place.
///
/// A surface owns its pixel storage. [`drawer`](Surface::drawer) borrows
/// the surface mutably for the length of a drawing session, so at most one
/// drawer exists per surface at a time and it cannot outlive the surface.
pub trait Surface {
    /// The drawer bound to this surface type.
    type Drawer<'a>: Drawer
    where
        Self: 'a;

    /// The fixed dimensions of this surface.
    fn extent(&self) -> Extent;

    /// Read one pixel as a straight-alpha color, or `None` outside the
    /// surface.
    fn pixel(&self, x: u32, y: u32) -> Option<Color>;

    /// Overwrite one pixel, without blending.
    ///
    /// Out-of-bounds coordinates are ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Begin a drawing session against this surface.
    fn drawer(&mut self) -> Self::Drawer<'_>;
}
