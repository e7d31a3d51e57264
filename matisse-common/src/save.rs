// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use matisse::{Color, Error, Surface};
use png::{ColorType, Encoder};

/// Save a surface to an RGBA PNG file.
pub fn save_png<S: Surface, P: AsRef<Path>>(surface: &S, path: P) -> Result<(), Error> {
    let extent = surface.extent();
    let mut data = Vec::with_capacity(extent.width as usize * extent.height as usize * 4);
    for y in 0..extent.height {
        for x in 0..extent.width {
            let color = surface.pixel(x, y).unwrap_or(Color::TRANSPARENT);
            let (r, g, b, a) = color.as_rgba8();
            data.extend_from_slice(&[r, g, b, a]);
        }
    }
    let file = BufWriter::new(File::create(path).map_err(Into::<Box<_>>::into)?);
    let mut encoder = Encoder::new(file, extent.width, extent.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .write_header()
        .map_err(Into::<Box<_>>::into)?
        .write_image_data(&data)
        .map_err(Into::<Box<_>>::into)?;
    Ok(())
}
