// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing colors from palette specifications.

use crate::{Color, Error};

/// An RGB palette that turns hexadecimal specifications into [`Color`]s.
///
/// A palette is an explicit value handed to the code that needs it; there is
/// no process-wide palette state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Palette;

impl Palette {
    /// Create a new RGB palette.
    pub const fn new() -> Palette {
        Palette
    }

    /// Parse a fully opaque color from a hex specification.
    ///
    /// Both the shorthand `"f00"` and the full `"ff0000"` forms are accepted,
    /// with or without a leading `#`.
    pub fn color(&self, spec: &str) -> Result<Color, Error> {
        self.color_with_alpha(spec, 100)
    }

    /// Parse a color, with opacity given as a percentage in `0..=100`.
    pub fn color_with_alpha(&self, spec: &str, alpha: u8) -> Result<Color, Error> {
        if alpha > 100 {
            return Err(Error::InvalidInput);
        }
        let hex = spec.strip_prefix('#').unwrap_or(spec).as_bytes();
        let (r, g, b) = match hex {
            [r, g, b] => (
                hex_digit(*r)? * 0x11,
                hex_digit(*g)? * 0x11,
                hex_digit(*b)? * 0x11,
            ),
            [r1, r0, g1, g0, b1, b0] => (
                hex_digit(*r1)? << 4 | hex_digit(*r0)?,
                hex_digit(*g1)? << 4 | hex_digit(*g0)?,
                hex_digit(*b1)? << 4 | hex_digit(*b0)?,
            ),
            _ => return Err(Error::InvalidInput),
        };
        let a = ((alpha as u32 * 255 + 50) / 100) as u8;
        Ok(Color::rgba8(r, g, b, a))
    }
}

fn hex_digit(b: u8) -> Result<u8, Error> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(Error::InvalidInput),
    }
}
