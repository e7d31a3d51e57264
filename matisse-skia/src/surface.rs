// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pixel surface backed by a tiny-skia pixmap.

use matisse::{Color, Error, Extent, Surface};
use tiny_skia::Pixmap;

use crate::convert;
use crate::draw::SkiaDrawer;

/// A surface rendering through tiny-skia.
///
/// The pixmap stores premultiplied RGBA; [`pixel`](Surface::pixel) hands
/// back straight-alpha colors.
pub struct SkiaSurface {
    pixmap: Pixmap,
}

impl SkiaSurface {
    /// Create a surface filled with `background`.
    ///
    /// An extent with a zero dimension is invalid input.
    pub fn new(extent: Extent, background: Color) -> Result<SkiaSurface, Error> {
        let mut pixmap = Pixmap::new(extent.width, extent.height).ok_or(Error::InvalidInput)?;
        pixmap.fill(convert::to_color(background));
        Ok(SkiaSurface { pixmap })
    }

    /// The dimensions of this surface.
    pub fn extent(&self) -> Extent {
        Extent::new(self.pixmap.width(), self.pixmap.height())
    }

    /// The underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Mutable access to the underlying pixmap.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

impl Surface for SkiaSurface {
    type Drawer<'a> = SkiaDrawer<'a>;

    fn extent(&self) -> Extent {
        self.extent()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let extent = self.extent();
        // Pixmap::pixel bounds-checks only the flattened index, so an
        // overflowing x would read from the next row.
        if x >= extent.width || y >= extent.height {
            return None;
        }
        self.pixmap.pixel(x, y).map(|px| {
            let c = px.demultiply();
            Color::rgba8(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        let extent = self.extent();
        if x >= extent.width || y >= extent.height {
            return;
        }
        let (r, g, b, a) = color.as_rgba8();
        let px = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
        let idx = (y as usize * extent.width as usize + x as usize) * 4;
        self.pixmap.data_mut()[idx..idx + 4]
            .copy_from_slice(&[px.red(), px.green(), px.blue(), px.alpha()]);
    }

    fn drawer(&mut self) -> SkiaDrawer<'_> {
        SkiaDrawer::new(self)
    }
}
