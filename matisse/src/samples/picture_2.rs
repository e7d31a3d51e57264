// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A short column of single dots

use crate::kurbo::Point;
use crate::{Color, Drawer, Error, Extent};

pub const SIZE: Extent = Extent::new(400, 300);
pub const BACKGROUND: Color = Color::BLACK;

pub fn draw<D: Drawer>(d: &mut D) -> Result<(), Error> {
    for y in 150..154 {
        d.dot(Point::new(200.0, y as f64), Color::WHITE)?;
    }
    Ok(())
}
