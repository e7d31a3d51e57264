// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer bound to a tiny-skia surface.

use kurbo::{Arc, BezPath, Ellipse, Point, Rect, Shape, Vec2};
use matisse::{arc_sweep, device_pixel, text, Capabilities, Color, Drawer, Error, Extent, Font};
use tiny_skia::{FillRule, LineCap, Stroke, Transform};

use crate::convert;
use crate::surface::SkiaSurface;

/// A [`Drawer`] rendering antialiased paths into a [`SkiaSurface`].
pub struct SkiaDrawer<'a> {
    surface: &'a mut SkiaSurface,
}

/// Path geometry addresses pixel centers; tiny-skia puts those at half
/// coordinates.
fn pixel_center() -> Transform {
    Transform::from_translate(0.5, 0.5)
}

fn arc_path(center: Point, rx: f64, ry: f64, start: f64, sweep: f64) -> BezPath {
    let start_rad = start.to_radians();
    let arc = Arc {
        center,
        radii: Vec2::new(rx, ry),
        start_angle: start_rad,
        sweep_angle: sweep.to_radians(),
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.move_to(Point::new(
        center.x + rx * start_rad.cos(),
        center.y + ry * start_rad.sin(),
    ));
    arc.to_cubic_beziers(0.1, |p1, p2, p| path.curve_to(p1, p2, p));
    path
}

impl<'a> SkiaDrawer<'a> {
    pub(crate) fn new(surface: &'a mut SkiaSurface) -> SkiaDrawer<'a> {
        SkiaDrawer { surface }
    }

    fn fill_path(&mut self, path: &BezPath, color: Color, rule: FillRule) {
        if let Some(path) = convert::to_path(path) {
            self.surface.pixmap_mut().fill_path(
                &path,
                &convert::paint(color, true),
                rule,
                pixel_center(),
                None,
            );
        }
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, thickness: u32, cap: LineCap) {
        if let Some(path) = convert::to_path(path) {
            let stroke = Stroke {
                width: thickness.max(1) as f32,
                line_cap: cap,
                ..Default::default()
            };
            self.surface.pixmap_mut().stroke_path(
                &path,
                &convert::paint(color, true),
                &stroke,
                pixel_center(),
                None,
            );
        }
    }

    /// Color the exact pixel cells of an integer rectangle, no antialiasing.
    fn fill_cells(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        if let Some(rect) = tiny_skia::Rect::from_ltrb(
            x0 as f32,
            y0 as f32,
            (x1 + 1) as f32,
            (y1 + 1) as f32,
        ) {
            self.surface.pixmap_mut().fill_rect(
                rect,
                &convert::paint(color, false),
                Transform::identity(),
                None,
            );
        }
    }

    fn stamp(&mut self, x: i64, y: i64, thickness: u32, color: Color) {
        let t = thickness.max(1) as i64;
        let lo = (t - 1) / 2;
        let hi = t / 2;
        self.fill_cells(x - lo, y - lo, x + hi, y + hi, color);
    }

    fn ellipse_shape(
        &mut self,
        center: Point,
        size: Extent,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        if rx <= 0.0 && ry <= 0.0 {
            return self.dot(center, color);
        }
        if rx <= 0.0 || ry <= 0.0 {
            // A flat ellipse collapses to its axis line.
            let d = Vec2::new(rx, ry);
            return self.line(center - d, center + d, color, thickness);
        }
        let path = Ellipse::new(center, Vec2::new(rx, ry), 0.0).to_path(0.1);
        if fill {
            self.fill_path(&path, color, FillRule::Winding);
        }
        if !fill || thickness > 1 {
            self.stroke_path(&path, color, thickness, LineCap::Butt);
        }
        Ok(self)
    }
}

impl Drawer for SkiaDrawer<'_> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            antialiasing: true,
            emulated_thick_outlines: false,
        }
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "line {} {} -> {} {} thickness {}", from.x, from.y, to.x, to.y, thickness);
        if !from.is_finite() || !to.is_finite() {
            return Ok(self);
        }
        let (x0, y0) = device_pixel(from);
        let (x1, y1) = device_pixel(to);
        if x0 == x1 && y0 == y1 {
            self.stamp(x0, y0, thickness, color);
            return Ok(self);
        }
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        // Square caps keep both endpoint pixels covered, as the raster
        // backend does.
        self.stroke_path(&path, color, thickness, LineCap::Square);
        Ok(self)
    }

    fn arc(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "arc {} {} {}x{} {}..{}", center.x, center.y, size.width, size.height, start, end);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            let p = arc_point(center, rx, ry, start);
            return self.line(p, p, color, thickness);
        }
        if sweep >= 360.0 {
            return self.ellipse_shape(center, size, color, false, thickness);
        }
        let path = arc_path(center, rx, ry, start, sweep);
        self.stroke_path(&path, color, thickness, LineCap::Butt);
        Ok(self)
    }

    fn chord(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "chord {} {} {}x{} {}..{} fill {}", center.x, center.y, size.width, size.height, start, end, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            let p = arc_point(center, rx, ry, start);
            return self.line(p, p, color, thickness);
        }
        if sweep >= 360.0 {
            return self.ellipse_shape(center, size, color, fill, thickness);
        }
        let mut path = arc_path(center, rx, ry, start, sweep);
        path.close_path();
        if fill {
            self.fill_path(&path, color, FillRule::EvenOdd);
        }
        self.stroke_path(&path, color, thickness, LineCap::Butt);
        Ok(self)
    }

    fn pie_slice(
        &mut self,
        center: Point,
        size: Extent,
        start: f64,
        end: f64,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "pie_slice {} {} {}x{} {}..{} fill {}", center.x, center.y, size.width, size.height, start, end, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            return self.line(center, arc_point(center, rx, ry, start), color, thickness);
        }
        if sweep >= 360.0 {
            return self.ellipse_shape(center, size, color, fill, thickness);
        }
        let start_rad = start.to_radians();
        let arc = Arc {
            center,
            radii: Vec2::new(rx, ry),
            start_angle: start_rad,
            sweep_angle: sweep.to_radians(),
            x_rotation: 0.0,
        };
        let mut path = BezPath::new();
        path.move_to(center);
        path.line_to(Point::new(
            center.x + rx * start_rad.cos(),
            center.y + ry * start_rad.sin(),
        ));
        arc.to_cubic_beziers(0.1, |p1, p2, p| path.curve_to(p1, p2, p));
        path.close_path();
        if fill {
            self.fill_path(&path, color, FillRule::EvenOdd);
        }
        self.stroke_path(&path, color, thickness, LineCap::Butt);
        Ok(self)
    }

    fn ellipse(
        &mut self,
        center: Point,
        size: Extent,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "ellipse {} {} {}x{} fill {}", center.x, center.y, size.width, size.height, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        self.ellipse_shape(center, size, color, fill, thickness)
    }

    fn polygon(
        &mut self,
        points: &[Point],
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "polygon {} points fill {}", points.len(), fill);
        if points.len() < 3 {
            return Err(Error::InvalidInput);
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Ok(self);
        }
        let mut path = BezPath::new();
        path.move_to(points[0]);
        for p in &points[1..] {
            path.line_to(*p);
        }
        path.close_path();
        if fill {
            self.fill_path(&path, color, FillRule::EvenOdd);
        }
        self.stroke_path(&path, color, thickness, LineCap::Butt);
        Ok(self)
    }

    fn dot(&mut self, point: Point, color: Color) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "dot {} {}", point.x, point.y);
        if !point.is_finite() {
            return Ok(self);
        }
        let (x, y) = device_pixel(point);
        self.fill_cells(x, y, x, y, color);
        Ok(self)
    }

    fn rectangle(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "rectangle {} {} -> {} {} fill {}", a.x, a.y, b.x, b.y, fill);
        if !a.is_finite() || !b.is_finite() {
            return Ok(self);
        }
        let rect = Rect::from_points(a, b);
        let (x0, y0) = device_pixel(rect.origin());
        let (x1, y1) = device_pixel(Point::new(rect.x1, rect.y1));
        if x0 == x1 || y0 == y1 {
            return self.line(
                Point::new(x0 as f64, y0 as f64),
                Point::new(x1 as f64, y1 as f64),
                color,
                thickness,
            );
        }
        if fill {
            self.fill_cells(x0, y0, x1, y1, color);
        }
        if !fill || thickness > 1 {
            let mut path = BezPath::new();
            path.move_to(Point::new(x0 as f64, y0 as f64));
            path.line_to(Point::new(x1 as f64, y0 as f64));
            path.line_to(Point::new(x1 as f64, y1 as f64));
            path.line_to(Point::new(x0 as f64, y1 as f64));
            path.close_path();
            self.stroke_path(&path, color, thickness, LineCap::Butt);
        }
        Ok(self)
    }

    fn text(
        &mut self,
        body: &str,
        font: &Font,
        position: Point,
        angle: f64,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "skia", "text {:?} at {} {} angle {}", body, position.x, position.y, angle);
        if !position.is_finite() {
            return Ok(self);
        }
        let outlines = text::glyph_outlines(font, body, position, angle)?;
        self.fill_path(&outlines, font.color(), FillRule::Winding);
        Ok(self)
    }
}

fn arc_point(center: Point, rx: f64, ry: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    Point::new(center.x + rx * rad.cos(), center.y + ry * rad.sin())
}
