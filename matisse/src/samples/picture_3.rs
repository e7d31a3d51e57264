// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A filled chord next to a filled pie slice with the same geometry

use crate::kurbo::Point;
use crate::{Color, Drawer, Error, Extent};

pub const SIZE: Extent = Extent::new(400, 300);
pub const BACKGROUND: Color = Color::BLACK;

const RED: Color = Color::rgb8(255, 0, 0);
const BLUE: Color = Color::rgb8(0, 0, 255);

/// The arc geometry both shapes share, offset to their own centers.
pub const ARC_SIZE: Extent = Extent::new(160, 160);
pub const ARC_START: f64 = 45.0;
pub const ARC_END: f64 = 135.0;
pub const CHORD_CENTER: Point = Point::new(100.0, 150.0);
pub const PIE_CENTER: Point = Point::new(300.0, 150.0);

pub fn draw<D: Drawer>(d: &mut D) -> Result<(), Error> {
    d.chord(CHORD_CENTER, ARC_SIZE, ARC_START, ARC_END, RED, true, 1)?
        .pie_slice(PIE_CENTER, ARC_SIZE, ARC_START, ARC_END, BLUE, true, 1)?;
    Ok(())
}
