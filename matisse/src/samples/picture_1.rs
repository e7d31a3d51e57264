// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One large filled polygon

use crate::kurbo::Point;
use crate::{Color, Drawer, Error, Extent};

pub const SIZE: Extent = Extent::new(400, 300);
pub const BACKGROUND: Color = Color::BLACK;

pub fn draw<D: Drawer>(d: &mut D) -> Result<(), Error> {
    let corners = [
        Point::new(50.0, 20.0),
        Point::new(350.0, 20.0),
        Point::new(350.0, 280.0),
        Point::new(50.0, 280.0),
    ];
    d.polygon(&corners, Color::WHITE, true, 1)?;
    Ok(())
}
