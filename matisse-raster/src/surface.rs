// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An owned straight-alpha RGBA pixel buffer.

use matisse::{Color, Error, Extent, Surface};

use crate::draw::RasterDrawer;

/// A software-rasterized pixel surface.
///
/// Pixels are stored row major as straight-alpha RGBA bytes, the layout
/// [`data`](RasterSurface::data) exposes directly.
pub struct RasterSurface {
    extent: Extent,
    data: Vec<u8>,
}

impl RasterSurface {
    /// Create a surface filled with `background`.
    ///
    /// An extent with a zero dimension is invalid input.
    pub fn new(extent: Extent, background: Color) -> Result<RasterSurface, Error> {
        if extent.is_empty() {
            return Err(Error::InvalidInput);
        }
        let (r, g, b, a) = background.as_rgba8();
        let data = [r, g, b, a].repeat(extent.width as usize * extent.height as usize);
        Ok(RasterSurface { extent, data })
    }

    /// The dimensions of this surface.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The raw pixel bytes, row major RGBA.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Source-over blend one pixel; out-of-bounds coordinates are ignored.
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.extent.width as i64 || y >= self.extent.height as i64 {
            return;
        }
        let idx = (y as usize * self.extent.width as usize + x as usize) * 4;
        let (sr, sg, sb, sa) = color.as_rgba8();
        match sa {
            255 => self.data[idx..idx + 4].copy_from_slice(&[sr, sg, sb, 255]),
            0 => {}
            _ => {
                let dst = &mut self.data[idx..idx + 4];
                let sa = sa as u32;
                let da = dst[3] as u32;
                let out_a = sa + da * (255 - sa) / 255;
                if out_a == 0 {
                    dst.copy_from_slice(&[0, 0, 0, 0]);
                    return;
                }
                for c in 0..3 {
                    let s = [sr, sg, sb][c] as u32;
                    let d = dst[c] as u32;
                    dst[c] = ((s * sa * 255 + d * da * (255 - sa)) / (255 * out_a)) as u8;
                }
                dst[3] = out_a as u8;
            }
        }
    }

    /// Blend an inclusive horizontal run of pixels, clipped to the surface.
    pub(crate) fn blend_span(&mut self, y: i64, x0: i64, x1: i64, color: Color) {
        if y < 0 || y >= self.extent.height as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.extent.width as i64 - 1);
        for x in x0..=x1 {
            self.blend_pixel(x, y, color);
        }
    }
}

impl Surface for RasterSurface {
    type Drawer<'a> = RasterDrawer<'a>;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.extent.width || y >= self.extent.height {
            return None;
        }
        let idx = (y as usize * self.extent.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Color::rgba8(px[0], px[1], px[2], px[3]))
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.extent.width || y >= self.extent.height {
            return;
        }
        let idx = (y as usize * self.extent.width as usize + x as usize) * 4;
        let (r, g, b, a) = color.as_rgba8();
        self.data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    fn drawer(&mut self) -> RasterDrawer<'_> {
        RasterDrawer::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_fills_every_pixel() {
        let c = Color::rgb8(1, 2, 3);
        let surface = RasterSurface::new(Extent::new(4, 3), c).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(surface.pixel(x, y), Some(c));
            }
        }
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 3), None);
    }

    #[test]
    fn zero_extent_is_invalid() {
        assert!(RasterSurface::new(Extent::new(0, 4), Color::WHITE).is_err());
        assert!(RasterSurface::new(Extent::new(4, 0), Color::WHITE).is_err());
    }

    #[test]
    fn opaque_blend_replaces() {
        let mut surface = RasterSurface::new(Extent::new(2, 2), Color::WHITE).unwrap();
        surface.blend_pixel(1, 1, Color::rgb8(0, 10, 20));
        assert_eq!(surface.pixel(1, 1), Some(Color::rgb8(0, 10, 20)));
    }

    #[test]
    fn translucent_blend_mixes_toward_source() {
        let mut surface = RasterSurface::new(Extent::new(1, 1), Color::BLACK).unwrap();
        surface.blend_pixel(0, 0, Color::rgba8(255, 255, 255, 128));
        let (r, g, b, a) = surface.pixel(0, 0).unwrap().as_rgba8();
        assert_eq!(a, 255);
        assert!(r == g && g == b);
        assert!((126..=130).contains(&r), "mixed channel {r}");
    }

    #[test]
    fn blending_out_of_bounds_is_ignored() {
        let mut surface = RasterSurface::new(Extent::new(2, 2), Color::BLACK).unwrap();
        surface.blend_pixel(-1, 0, Color::WHITE);
        surface.blend_pixel(0, 57, Color::WHITE);
        surface.blend_span(0, -10, 10, Color::WHITE);
        assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(surface.pixel(1, 0), Some(Color::WHITE));
        assert_eq!(surface.pixel(0, 1), Some(Color::BLACK));
    }
}
