// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A smiley face built from a chord and two ellipses

use crate::kurbo::Point;
use crate::{Color, Drawer, Error, Extent};

pub const SIZE: Extent = Extent::new(400, 300);
pub const BACKGROUND: Color = Color::BLACK;

const WHITE: Color = Color::WHITE;

pub fn draw<D: Drawer>(d: &mut D) -> Result<(), Error> {
    // The mouth is the lower half of an ellipse, left open.
    d.chord(
        Point::new(200.0, 200.0),
        Extent::new(200, 150),
        0.0,
        180.0,
        WHITE,
        false,
        1,
    )?
    .ellipse(Point::new(125.0, 100.0), Extent::new(50, 50), WHITE, false, 1)?
    .ellipse(Point::new(275.0, 100.0), Extent::new(50, 50), WHITE, true, 1)?;
    Ok(())
}
