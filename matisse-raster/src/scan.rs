// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline primitives shared by the shape rasterizers.
//!
//! Rows are sampled at integer pixel centers. Filled regions use half-open
//! coverage on both axes so that shapes sharing an edge never double-fill,
//! and strokes are stamped along Bresenham walks so that endpoints are
//! always covered.

use kurbo::Point;
use matisse::{device_pixel, Color};

use crate::surface::RasterSurface;

/// A fill rule for resolving winding numbers.
#[derive(Clone, Copy, PartialEq)]
pub(crate) enum FillRule {
    /// Fill everything with a non-zero winding number.
    NonZero,
    /// Fill everything with an odd winding number.
    EvenOdd,
}

struct Edge {
    top_y: f64,
    bot_y: f64,
    top_x: f64,
    // dx per unit dy
    slope: f64,
    winding: i32,
}

/// Fill a set of closed loops under the given rule.
///
/// Each loop is implicitly closed from its last point back to its first.
/// Non-finite vertices drop the edges touching them.
pub(crate) fn fill_loops(
    surface: &mut RasterSurface,
    loops: &[&[Point]],
    color: Color,
    rule: FillRule,
) {
    let mut edges = Vec::new();
    for pts in loops {
        let n = pts.len();
        if n < 2 {
            continue;
        }
        for i in 0..n {
            let a = pts[i];
            let b = pts[(i + 1) % n];
            if !a.is_finite() || !b.is_finite() || a.y == b.y {
                continue;
            }
            let (top, bot, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
            edges.push(Edge {
                top_y: top.y,
                bot_y: bot.y,
                top_x: top.x,
                slope: (bot.x - top.x) / (bot.y - top.y),
                winding,
            });
        }
    }
    if edges.is_empty() {
        return;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for e in &edges {
        y_min = y_min.min(e.top_y);
        y_max = y_max.max(e.bot_y);
    }
    let rows = surface.extent().height as i64;
    let y_start = (y_min.ceil() as i64).max(0);
    let y_end = (y_max.floor() as i64).min(rows - 1);

    let mut crossings: Vec<(f64, i32)> = Vec::new();
    for y in y_start..=y_end {
        let sy = y as f64;
        crossings.clear();
        for e in &edges {
            // Half-open vertical coverage so shared vertices count once.
            if e.top_y <= sy && sy < e.bot_y {
                crossings.push((e.top_x + (sy - e.top_y) * e.slope, e.winding));
            }
        }
        if crossings.is_empty() {
            continue;
        }
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));
        match rule {
            FillRule::EvenOdd => {
                for pair in crossings.chunks(2) {
                    if let [(xa, _), (xb, _)] = pair {
                        span_between(surface, y, *xa, *xb, color);
                    }
                }
            }
            FillRule::NonZero => {
                let mut winding = 0;
                let mut span_start = 0.0;
                for (x, w) in &crossings {
                    if winding == 0 {
                        span_start = *x;
                    }
                    winding += w;
                    if winding == 0 {
                        span_between(surface, y, span_start, *x, color);
                    }
                }
            }
        }
    }
}

/// Blend the pixels whose centers lie in the half-open interval `[xa, xb)`.
fn span_between(surface: &mut RasterSurface, y: i64, xa: f64, xb: f64, color: Color) {
    let x0 = xa.ceil() as i64;
    let x1 = (xb.ceil() as i64) - 1;
    if x0 <= x1 {
        surface.blend_span(y, x0, x1, color);
    }
}

/// Stroke a straight segment of the given thickness, endpoints covered.
///
/// The stroke walks the Bresenham line and stamps `thickness` pixels
/// perpendicular to the major axis at every step; a zero-length segment
/// stamps a thickness-sized square.
pub(crate) fn stroke_line(
    surface: &mut RasterSurface,
    from: Point,
    to: Point,
    color: Color,
    thickness: u32,
) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }
    let t = thickness.max(1) as i64;
    let lo = (t - 1) / 2;
    let hi = t / 2;
    let (x0, y0) = device_pixel(from);
    let (x1, y1) = device_pixel(to);
    if x0 == x1 && y0 == y1 {
        for yy in (y0 - lo)..=(y0 + hi) {
            surface.blend_span(yy, x0 - lo, x0 + hi, color);
        }
        return;
    }

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if steep {
            surface.blend_span(y, x - lo, x + hi, color);
        } else {
            for yy in (y - lo)..=(y + hi) {
                surface.blend_pixel(x, yy, color);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// The point at `deg` degrees on the ellipse around `center`.
pub(crate) fn arc_point(center: Point, rx: f64, ry: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    Point::new(center.x + rx * rad.cos(), center.y + ry * rad.sin())
}

/// Sample an arc as a polyline at roughly one pixel per step.
pub(crate) fn arc_points(center: Point, rx: f64, ry: f64, start: f64, sweep: f64) -> Vec<Point> {
    let start_rad = start.to_radians();
    let sweep_rad = sweep.to_radians();
    let r_max = rx.abs().max(ry.abs()).max(1.0);
    let steps = (sweep_rad.abs() * r_max).ceil().clamp(2.0, 8192.0) as usize;
    let mut pts = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let theta = start_rad + sweep_rad * (i as f64 / steps as f64);
        pts.push(Point::new(
            center.x + rx * theta.cos(),
            center.y + ry * theta.sin(),
        ));
    }
    pts
}

/// The inclusive pixel span of the ellipse on the row sampled at `y`, or
/// `None` when the row misses the ellipse.
pub(crate) fn ellipse_span(center: Point, rx: f64, ry: f64, y: i64) -> Option<(i64, i64)> {
    if !center.is_finite() || !rx.is_finite() || !ry.is_finite() {
        return None;
    }
    if ry <= 0.0 {
        // Degenerate: a flat run on the center row.
        if y == center.y.round() as i64 {
            return Some((
                (center.x - rx.max(0.0)).round() as i64,
                (center.x + rx.max(0.0)).round() as i64,
            ));
        }
        return None;
    }
    let dy = y as f64 - center.y;
    let frac = 1.0 - (dy / ry) * (dy / ry);
    if frac < 0.0 {
        return None;
    }
    let hw = rx.max(0.0) * frac.sqrt();
    Some(((center.x - hw).round() as i64, (center.x + hw).round() as i64))
}

/// Fill the whole ellipse, boundary pixels included.
pub(crate) fn fill_ellipse(
    surface: &mut RasterSurface,
    center: Point,
    rx: f64,
    ry: f64,
    color: Color,
) {
    let rows = surface.extent().height as i64;
    let y0 = ((center.y - ry).round() as i64).max(0);
    let y1 = ((center.y + ry).round() as i64).min(rows - 1);
    for y in y0..=y1 {
        if let Some((x0, x1)) = ellipse_span(center, rx, ry, y) {
            surface.blend_span(y, x0, x1, color);
        }
    }
}

/// Draw the one-pixel ellipse outline.
///
/// Combines a row pass and a transposed column pass so nearly flat parts of
/// the curve stay connected; pixels are deduplicated so each is blended
/// once.
pub(crate) fn outline_ellipse(
    surface: &mut RasterSurface,
    center: Point,
    rx: f64,
    ry: f64,
    color: Color,
) {
    let rows = surface.extent().height as i64;
    let cols = surface.extent().width as i64;
    let mut pixels: Vec<(i64, i64)> = Vec::new();
    let y0 = ((center.y - ry).round() as i64).max(0);
    let y1 = ((center.y + ry).round() as i64).min(rows - 1);
    for y in y0..=y1 {
        if let Some((xa, xb)) = ellipse_span(center, rx, ry, y) {
            pixels.push((xa, y));
            pixels.push((xb, y));
        }
    }
    let transposed = Point::new(center.y, center.x);
    let x0 = ((center.x - rx).round() as i64).max(0);
    let x1 = ((center.x + rx).round() as i64).min(cols - 1);
    for x in x0..=x1 {
        if let Some((ya, yb)) = ellipse_span(transposed, ry, rx, x) {
            pixels.push((x, ya));
            pixels.push((x, yb));
        }
    }
    pixels.sort_unstable();
    pixels.dedup();
    for (x, y) in pixels {
        surface.blend_pixel(x, y, color);
    }
}

/// Draw a thick unfilled ellipse as a ring.
///
/// The ring spans the outer ellipse at `r + t/2` down to the inner one at
/// `r - t/2`, keeping the inner boundary pixels and leaving the strict
/// interior untouched. When the inner radius vanishes the ring collapses to
/// a filled ellipse.
pub(crate) fn ring_ellipse(
    surface: &mut RasterSurface,
    center: Point,
    rx: f64,
    ry: f64,
    thickness: u32,
    color: Color,
) {
    let half = thickness as f64 / 2.0;
    let (orx, ory) = (rx + half, ry + half);
    let (irx, iry) = (rx - half, ry - half);
    if irx <= 0.0 || iry <= 0.0 {
        fill_ellipse(surface, center, orx, ory, color);
        return;
    }
    let rows = surface.extent().height as i64;
    let y0 = ((center.y - ory).round() as i64).max(0);
    let y1 = ((center.y + ory).round() as i64).min(rows - 1);
    for y in y0..=y1 {
        let Some((ox0, ox1)) = ellipse_span(center, orx, ory, y) else {
            continue;
        };
        match ellipse_span(center, irx, iry, y) {
            Some((ix0, ix1)) if ox0 < ix0 && ix1 < ox1 && ix0 < ix1 => {
                surface.blend_span(y, ox0, ix0, color);
                surface.blend_span(y, ix1, ox1, color);
            }
            _ => surface.blend_span(y, ox0, ox1, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matisse::{Extent, Surface};

    fn surface(w: u32, h: u32) -> RasterSurface {
        RasterSurface::new(Extent::new(w, h), Color::BLACK).unwrap()
    }

    fn is_white(s: &RasterSurface, x: u32, y: u32) -> bool {
        s.pixel(x, y) == Some(Color::WHITE)
    }

    #[test]
    fn fill_square_covers_half_open_extent() {
        let mut s = surface(10, 10);
        let square = vec![
            Point::new(2.0, 2.0),
            Point::new(6.0, 2.0),
            Point::new(6.0, 6.0),
            Point::new(2.0, 6.0),
        ];
        fill_loops(&mut s, &[&square], Color::WHITE, FillRule::EvenOdd);
        // Rows and columns 2..6 are inside, the far edge is not.
        assert!(is_white(&s, 2, 2));
        assert!(is_white(&s, 5, 5));
        assert!(!is_white(&s, 6, 2));
        assert!(!is_white(&s, 2, 6));
        assert!(!is_white(&s, 1, 2));
    }

    #[test]
    fn nonzero_keeps_overlap_even_odd_drops_it() {
        let a = vec![
            Point::new(1.0, 1.0),
            Point::new(7.0, 1.0),
            Point::new(7.0, 7.0),
            Point::new(1.0, 7.0),
        ];
        // Same orientation, nested inside `a`.
        let b = vec![
            Point::new(3.0, 3.0),
            Point::new(5.0, 3.0),
            Point::new(5.0, 5.0),
            Point::new(3.0, 5.0),
        ];
        let mut even = surface(9, 9);
        fill_loops(&mut even, &[&a, &b], Color::WHITE, FillRule::EvenOdd);
        assert!(!is_white(&even, 4, 4));
        assert!(is_white(&even, 2, 4));

        let mut nonzero = surface(9, 9);
        fill_loops(&mut nonzero, &[&a, &b], Color::WHITE, FillRule::NonZero);
        assert!(is_white(&nonzero, 4, 4));
        assert!(is_white(&nonzero, 2, 4));
    }

    #[test]
    fn stroke_covers_both_endpoints() {
        let mut s = surface(32, 24);
        stroke_line(
            &mut s,
            Point::new(5.0, 5.0),
            Point::new(25.0, 14.0),
            Color::WHITE,
            1,
        );
        assert!(is_white(&s, 5, 5));
        assert!(is_white(&s, 25, 14));
        assert!(!is_white(&s, 4, 5));
        assert!(!is_white(&s, 26, 14));
    }

    #[test]
    fn zero_length_stroke_stamps_one_square() {
        let mut s = surface(8, 8);
        stroke_line(
            &mut s,
            Point::new(3.0, 3.0),
            Point::new(3.0, 3.0),
            Color::WHITE,
            1,
        );
        let lit: usize = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| is_white(&s, x, y))
            .count();
        assert_eq!(lit, 1);
        assert!(is_white(&s, 3, 3));
    }

    #[test]
    fn thick_stroke_is_centered_on_the_segment() {
        let mut s = surface(20, 12);
        stroke_line(
            &mut s,
            Point::new(2.0, 6.0),
            Point::new(17.0, 6.0),
            Color::WHITE,
            4,
        );
        // Width 4 spans one pixel up, two down from the center row.
        for y in 5..=8 {
            assert!(is_white(&s, 10, y), "row {y}");
        }
        assert!(!is_white(&s, 10, 4));
        assert!(!is_white(&s, 10, 9));
    }

    #[test]
    fn ellipse_span_is_symmetric() {
        let center = Point::new(10.0, 10.0);
        let (x0, x1) = ellipse_span(center, 5.0, 5.0, 10).unwrap();
        assert_eq!((x0, x1), (5, 15));
        let top = ellipse_span(center, 5.0, 5.0, 5).unwrap();
        assert_eq!(top, (10, 10));
        assert!(ellipse_span(center, 5.0, 5.0, 4).is_none());
    }

    #[test]
    fn outline_does_not_touch_the_interior() {
        let mut s = surface(21, 21);
        outline_ellipse(&mut s, Point::new(10.0, 10.0), 8.0, 8.0, Color::WHITE);
        assert!(is_white(&s, 2, 10));
        assert!(is_white(&s, 18, 10));
        assert!(is_white(&s, 10, 2));
        assert!(is_white(&s, 10, 18));
        assert!(!is_white(&s, 10, 10));
        assert!(!is_white(&s, 12, 12));
    }

    #[test]
    fn ring_leaves_interior_untouched() {
        let mut s = surface(41, 41);
        ring_ellipse(&mut s, Point::new(20.0, 20.0), 12.0, 12.0, 6, Color::WHITE);
        // Band from roughly r - 3 to r + 3 on the center row.
        assert!(is_white(&s, 20 - 15, 20));
        assert!(is_white(&s, 20 - 12, 20));
        assert!(is_white(&s, 20 - 9, 20));
        // Interior and center stay black.
        assert!(!is_white(&s, 20 - 7, 20));
        assert!(!is_white(&s, 20, 20));
        // Outside the outer radius stays black.
        assert!(!is_white(&s, 20 - 17, 20));
    }

    #[test]
    fn thin_ring_collapses_to_a_filled_disc() {
        let mut s = surface(21, 21);
        ring_ellipse(&mut s, Point::new(10.0, 10.0), 2.0, 2.0, 8, Color::WHITE);
        assert!(is_white(&s, 10, 10));
        assert!(is_white(&s, 10 + 5, 10));
        assert!(!is_white(&s, 10 + 8, 10));
    }

    #[test]
    fn oversized_radii_clamp_to_the_surface() {
        // An unclamped walk over a 4e9 radius would iterate billions of
        // rows; only the six on-surface rows may be visited.
        let center = Point::new(4.0, 3.0);
        let huge = 4.0e9;

        let mut filled = surface(8, 6);
        fill_ellipse(&mut filled, center, huge, huge, Color::WHITE);
        for y in 0..6 {
            for x in 0..8 {
                assert!(is_white(&filled, x, y), "fill pixel ({x}, {y})");
            }
        }

        // The boundary of an ellipse this large passes nowhere near the
        // surface, so outline and ring leave it untouched.
        let mut outlined = surface(8, 6);
        outline_ellipse(&mut outlined, center, huge, huge, Color::WHITE);
        let mut ringed = surface(8, 6);
        ring_ellipse(&mut ringed, center, huge, huge, 3, Color::WHITE);
        for y in 0..6 {
            for x in 0..8 {
                assert!(!is_white(&outlined, x, y), "outline pixel ({x}, {y})");
                assert!(!is_white(&ringed, x, y), "ring pixel ({x}, {y})");
            }
        }
    }
}
