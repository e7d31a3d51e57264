// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing samples for testing backends
//!
//! Each picture draws through the [`Drawer`] trait only, so any backend can
//! replay it onto a surface created with the picture's size and background.

use crate::{Color, Drawer, Error, Extent};

mod picture_0;
mod picture_1;
mod picture_2;
mod picture_3;

/// The total number of samples in this module.
pub const SAMPLE_COUNT: usize = 4;

/// Return a specific sample for drawing.
pub fn get<D: Drawer>(number: usize) -> SamplePicture<D> {
    match number {
        0 => SamplePicture::new(picture_0::SIZE, picture_0::BACKGROUND, picture_0::draw),
        1 => SamplePicture::new(picture_1::SIZE, picture_1::BACKGROUND, picture_1::draw),
        2 => SamplePicture::new(picture_2::SIZE, picture_2::BACKGROUND, picture_2::draw),
        3 => SamplePicture::new(picture_3::SIZE, picture_3::BACKGROUND, picture_3::draw),
        _ => panic!("No sample #{} exists", number),
    }
}

/// A pointer to a sample drawing and associated info.
pub struct SamplePicture<D> {
    draw_f: fn(&mut D) -> Result<(), Error>,
    size: Extent,
    background: Color,
}

impl<D: Drawer> SamplePicture<D> {
    fn new(
        size: Extent,
        background: Color,
        draw_f: fn(&mut D) -> Result<(), Error>,
    ) -> SamplePicture<D> {
        SamplePicture {
            draw_f,
            size,
            background,
        }
    }

    /// The size of the surface this sample expects.
    pub fn size(&self) -> Extent {
        self.size
    }

    /// The background the surface should be created with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Draw the sample through the given drawer.
    pub fn draw(&self, drawer: &mut D) -> Result<(), Error> {
        (self.draw_f)(drawer)
    }
}
