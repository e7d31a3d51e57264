// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple representation of color

/// A datatype representing color.
///
/// Currently this is only a 32 bit RGBA value, but it will likely
/// extend to some form of wide-gamut colorspace, and in the meantime
/// is useful for giving programs proper type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Rgba32(u32),
}

impl Color {
    /// Create a color from a 32-bit rgba value (alpha as least significant byte).
    pub const fn rgba32(rgba: u32) -> Color {
        Color::Rgba32(rgba)
    }

    /// Create a color from a 24-bit rgb value (red most significant, blue least).
    pub const fn rgb24(rgb: u32) -> Color {
        Color::rgba32((rgb << 8) | 0xff)
    }

    /// Create a color from three 8-bit channel values, fully opaque.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgba8(r, g, b, 0xff)
    }

    /// Create a color from four 8-bit channel values.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::rgba32(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create a color from four floating point values, each in the range 0.0 to 1.0.
    ///
    /// The interpretation is the same as rgba32, and no greater precision is
    /// (currently) assumed.
    pub fn rgba<F: Into<f64>>(r: F, g: F, b: F, a: F) -> Color {
        let r = (r.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        let g = (g.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        let b = (b.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        let a = (a.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | a)
    }

    /// Create a color from three floating point values, each in the range 0.0 to 1.0.
    ///
    /// The interpretation is the same as rgb24, and no greater precision is
    /// (currently) assumed.
    pub fn rgb<F: Into<f64>>(r: F, g: F, b: F) -> Color {
        let r = (r.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        let g = (g.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        let b = (b.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | 0xff)
    }

    /// Change just the alpha value of a color.
    ///
    /// The `a` value represents alpha in the range 0.0 to 1.0.
    pub fn with_alpha(self, a: impl Into<f64>) -> Color {
        let a = (a.into().clamp(0.0, 1.0) * 255.0).round() as u32;
        Color::rgba32((self.as_rgba32() & !0xff) | a)
    }

    /// Convert a color value to a 32-bit rgba value.
    pub const fn as_rgba32(self) -> u32 {
        match self {
            Color::Rgba32(rgba) => rgba,
        }
    }

    /// Convert a color value to its four 8-bit channels.
    pub const fn as_rgba8(self) -> (u8, u8, u8, u8) {
        let rgba = self.as_rgba32();
        (
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        )
    }

    /// Opaque white.
    pub const WHITE: Color = Color::rgba32(0xff_ff_ff_ff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba32(0x00_00_00_ff);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba32(0x00_00_00_00);
}
