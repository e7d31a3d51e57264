// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer bound to a raster surface.

use kurbo::{BezPath, PathEl, Point, Rect};
use matisse::{
    arc_sweep, device_pixel, text, Capabilities, Color, Drawer, Error, Extent, Font,
};

use crate::scan::{self, FillRule};
use crate::surface::RasterSurface;

/// A [`Drawer`] writing whole-pixel spans into a [`RasterSurface`].
pub struct RasterDrawer<'a> {
    surface: &'a mut RasterSurface,
}

impl<'a> RasterDrawer<'a> {
    pub(crate) fn new(surface: &'a mut RasterSurface) -> RasterDrawer<'a> {
        RasterDrawer { surface }
    }

    fn stroke_polyline(&mut self, pts: &[Point], color: Color, thickness: u32) {
        for pair in pts.windows(2) {
            scan::stroke_line(self.surface, pair[0], pair[1], color, thickness);
        }
    }

    fn ellipse_shape(
        &mut self,
        center: Point,
        size: Extent,
        color: Color,
        fill: bool,
        thickness: u32,
    ) {
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        if fill {
            scan::fill_ellipse(self.surface, center, rx, ry, color);
        }
        if thickness > 1 {
            scan::ring_ellipse(self.surface, center, rx, ry, thickness, color);
        } else if !fill {
            // A filled ellipse at thickness one already covers exactly the
            // outline pixels.
            scan::outline_ellipse(self.surface, center, rx, ry, color);
        }
    }
}

impl Drawer for RasterDrawer<'_> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            antialiasing: false,
            emulated_thick_outlines: true,
        }
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "raster", "line {} {} -> {} {} thickness {}", from.x, from.y, to.x, to.y, thickness);
        scan::stroke_line(self.surface, from, to, color, thickness);
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
        log::debug!(target: "raster", "arc {} {} {}x{} {}..{}", center.x, center.y, size.width, size.height, start, end);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            let p = scan::arc_point(center, rx, ry, start);
            scan::stroke_line(self.surface, p, p, color, thickness);
        } else if sweep >= 360.0 {
            self.ellipse_shape(center, size, color, false, thickness);
        } else {
            let pts = scan::arc_points(center, rx, ry, start, sweep);
            self.stroke_polyline(&pts, color, thickness);
        }
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
        log::debug!(target: "raster", "chord {} {} {}x{} {}..{} fill {}", center.x, center.y, size.width, size.height, start, end, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            let p = scan::arc_point(center, rx, ry, start);
            scan::stroke_line(self.surface, p, p, color, thickness);
        } else if sweep >= 360.0 {
            self.ellipse_shape(center, size, color, fill, thickness);
        } else {
            let pts = scan::arc_points(center, rx, ry, start, sweep);
            if fill {
                scan::fill_loops(self.surface, &[&pts], color, FillRule::EvenOdd);
            }
            self.stroke_polyline(&pts, color, thickness);
            scan::stroke_line(self.surface, pts[pts.len() - 1], pts[0], color, thickness);
        }
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
        log::debug!(target: "raster", "pie_slice {} {} {}x{} {}..{} fill {}", center.x, center.y, size.width, size.height, start, end, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        let rx = size.width as f64 / 2.0;
        let ry = size.height as f64 / 2.0;
        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            let p = scan::arc_point(center, rx, ry, start);
            scan::stroke_line(self.surface, center, p, color, thickness);
        } else if sweep >= 360.0 {
            self.ellipse_shape(center, size, color, fill, thickness);
        } else {
            let pts = scan::arc_points(center, rx, ry, start, sweep);
            if fill {
                let mut wedge = Vec::with_capacity(pts.len() + 1);
                wedge.push(center);
                wedge.extend_from_slice(&pts);
                scan::fill_loops(self.surface, &[&wedge], color, FillRule::EvenOdd);
            }
            self.stroke_polyline(&pts, color, thickness);
            scan::stroke_line(self.surface, center, pts[0], color, thickness);
            scan::stroke_line(self.surface, center, pts[pts.len() - 1], color, thickness);
        }
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
        log::debug!(target: "raster", "ellipse {} {} {}x{} fill {}", center.x, center.y, size.width, size.height, fill);
        if !center.is_finite() {
            return Ok(self);
        }
        self.ellipse_shape(center, size, color, fill, thickness.max(1));
        Ok(self)
    }

    fn polygon(
        &mut self,
        points: &[Point],
        color: Color,
        fill: bool,
        thickness: u32,
    ) -> Result<&mut Self, Error> {
        log::debug!(target: "raster", "polygon {} points fill {}", points.len(), fill);
        if points.len() < 3 {
            return Err(Error::InvalidInput);
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Ok(self);
        }
        if fill {
            scan::fill_loops(self.surface, &[points], color, FillRule::EvenOdd);
        }
        // Boundary strokes restore the pixels half-open filling leaves out
        // and carry the requested thickness.
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            scan::stroke_line(self.surface, points[i], next, color, thickness);
        }
        Ok(self)
    }

    fn dot(&mut self, point: Point, color: Color) -> Result<&mut Self, Error> {
        log::debug!(target: "raster", "dot {} {}", point.x, point.y);
        if !point.is_finite() {
            return Ok(self);
        }
        let (x, y) = device_pixel(point);
        self.surface.blend_pixel(x, y, color);
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
        log::debug!(target: "raster", "rectangle {} {} -> {} {} fill {}", a.x, a.y, b.x, b.y, fill);
        if !a.is_finite() || !b.is_finite() {
            return Ok(self);
        }
        let rect = Rect::from_points(a, b);
        let (x0, y0) = device_pixel(rect.origin());
        let (x1, y1) = device_pixel(Point::new(rect.x1, rect.y1));
        if fill {
            for y in y0..=y1 {
                self.surface.blend_span(y, x0, x1, color);
            }
        }
        if thickness > 1 || !fill {
            let corners = [
                Point::new(x0 as f64, y0 as f64),
                Point::new(x1 as f64, y0 as f64),
                Point::new(x1 as f64, y1 as f64),
                Point::new(x0 as f64, y1 as f64),
            ];
            for i in 0..4 {
                scan::stroke_line(self.surface, corners[i], corners[(i + 1) % 4], color, thickness);
            }
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
        log::debug!(target: "raster", "text {:?} at {} {} angle {}", body, position.x, position.y, angle);
        if !position.is_finite() {
            return Ok(self);
        }
        let outlines = text::glyph_outlines(font, body, position, angle)?;
        let loops = flatten_loops(&outlines);
        let loop_refs: Vec<&[Point]> = loops.iter().map(|l| l.as_slice()).collect();
        scan::fill_loops(self.surface, &loop_refs, font.color(), FillRule::NonZero);
        Ok(self)
    }
}

/// Flatten curves into closed point loops for the scanline filler.
fn flatten_loops(path: &BezPath) -> Vec<Vec<Point>> {
    let mut loops: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    kurbo::flatten(path, 0.1, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() > 2 {
                loops.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            current.push(p);
        }
        PathEl::LineTo(p) => current.push(p),
        PathEl::ClosePath => {
            if current.len() > 2 {
                loops.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
        _ => {}
    });
    if current.len() > 2 {
        loops.push(current);
    }
    loops
}
