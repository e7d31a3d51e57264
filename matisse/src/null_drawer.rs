// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawer that does nothing.

use kurbo::Point;

use crate::{Capabilities, Color, Drawer, Error, Extent, Font};

/// A drawer that doesn't draw.
///
/// This is useful largely for doc tests and as a stand-in when exercising
/// code that is generic over [`Drawer`], but is made public in case it
/// might come in handy.
#[derive(Default)]
pub struct NullDrawer;

impl NullDrawer {
    pub fn new() -> NullDrawer {
        NullDrawer
    }
}

impl Drawer for NullDrawer {
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn line(
        &mut self,
        _from: Point,
        _to: Point,
        _color: Color,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn arc(
        &mut self,
        _center: Point,
        _size: Extent,
        _start: f64,
        _end: f64,
        _color: Color,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn chord(
        &mut self,
        _center: Point,
        _size: Extent,
        _start: f64,
        _end: f64,
        _color: Color,
        _fill: bool,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn pie_slice(
        &mut self,
        _center: Point,
        _size: Extent,
        _start: f64,
        _end: f64,
        _color: Color,
        _fill: bool,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn ellipse(
        &mut self,
        _center: Point,
        _size: Extent,
        _color: Color,
        _fill: bool,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn polygon(
        &mut self,
        points: &[Point],
        _color: Color,
        _fill: bool,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        if points.len() < 3 {
            return Err(Error::InvalidInput);
        }
        Ok(self)
    }

    fn dot(&mut self, _point: Point, _color: Color) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn rectangle(
        &mut self,
        _a: Point,
        _b: Point,
        _color: Color,
        _fill: bool,
        _thickness: u32,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }

    fn text(
        &mut self,
        _body: &str,
        _font: &Font,
        _position: Point,
        _angle: f64,
    ) -> Result<&mut Self, Error> {
        Ok(self)
    }
}
