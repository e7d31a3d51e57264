// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-backend agreement on the operations that promise to be
//! pixel-exact everywhere: dots, axis-aligned fills, and capability
//! reporting. Curved strokes may differ between backends and are not
//! compared here.

use matisse::kurbo::Point;
use matisse::samples;
use matisse::{Color, Drawer, Extent, Surface};
use matisse_raster::{RasterDrawer, RasterSurface};
use matisse_skia::{SkiaDrawer, SkiaSurface};

fn snapshot<S: Surface>(surface: &S) -> Vec<Color> {
    let extent = surface.extent();
    (0..extent.height)
        .flat_map(|y| (0..extent.width).map(move |x| (x, y)))
        .map(|(x, y)| surface.pixel(x, y).unwrap())
        .collect()
}

#[test]
fn capabilities_describe_each_backend() {
    let mut raster = RasterSurface::new(Extent::new(1, 1), Color::BLACK).unwrap();
    let caps = raster.drawer().capabilities();
    assert!(!caps.antialiasing);
    assert!(caps.emulated_thick_outlines);

    let mut skia = SkiaSurface::new(Extent::new(1, 1), Color::BLACK).unwrap();
    let caps = skia.drawer().capabilities();
    assert!(caps.antialiasing);
    assert!(!caps.emulated_thick_outlines);
}

#[test]
fn dots_and_rectangles_agree_exactly() {
    fn draw<D: Drawer>(d: &mut D) {
        d.dot(Point::new(2.0, 2.0), Color::WHITE)
            .unwrap()
            .dot(Point::new(23.0, 15.0), Color::rgb8(0, 255, 0))
            .unwrap()
            .rectangle(Point::new(5.0, 4.0), Point::new(12.0, 9.0), Color::rgb8(255, 0, 0), true, 1)
            .unwrap()
            .rectangle(Point::new(-3.0, 12.0), Point::new(30.0, 14.0), Color::WHITE, true, 1)
            .unwrap();
    }

    let extent = Extent::new(24, 16);
    let mut raster = RasterSurface::new(extent, Color::BLACK).unwrap();
    draw(&mut raster.drawer());
    let mut skia = SkiaSurface::new(extent, Color::BLACK).unwrap();
    draw(&mut skia.drawer());

    assert_eq!(snapshot(&raster), snapshot(&skia));
}

#[test]
fn filled_shape_interiors_agree() {
    let extent = Extent::new(60, 60);
    let mut raster = RasterSurface::new(extent, Color::BLACK).unwrap();
    raster
        .drawer()
        .circle(Point::new(30.0, 30.0), 40, Color::WHITE, true, 1)
        .unwrap();
    let mut skia = SkiaSurface::new(extent, Color::BLACK).unwrap();
    skia.drawer()
        .circle(Point::new(30.0, 30.0), 40, Color::WHITE, true, 1)
        .unwrap();

    // Pixels well away from the boundary match; the boundary itself is
    // backend-specific.
    for (x, y) in [(30, 30), (20, 25), (40, 38), (30, 12), (12, 30)] {
        assert_eq!(raster.pixel(x, y), Some(Color::WHITE), "inside {x} {y}");
        assert_eq!(skia.pixel(x, y), Some(Color::WHITE), "inside {x} {y}");
    }
    for (x, y) in [(2, 2), (57, 2), (2, 57), (57, 57), (30, 4)] {
        assert_eq!(raster.pixel(x, y), Some(Color::BLACK), "outside {x} {y}");
        assert_eq!(skia.pixel(x, y), Some(Color::BLACK), "outside {x} {y}");
    }
}

#[test]
fn every_sample_renders_on_both_backends() {
    for number in 0..samples::SAMPLE_COUNT {
        let sample = samples::get::<RasterDrawer>(number);
        let mut surface = RasterSurface::new(sample.size(), sample.background()).unwrap();
        sample.draw(&mut surface.drawer()).unwrap();

        let sample = samples::get::<SkiaDrawer>(number);
        let mut surface = SkiaSurface::new(sample.size(), sample.background()).unwrap();
        sample.draw(&mut surface.drawer()).unwrap();
    }
}
