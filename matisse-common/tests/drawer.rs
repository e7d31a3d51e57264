// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance tests for the drawer contract, run against the selected
//! backend.

use kurbo::Point;
use matisse_common::*;

fn surface(width: u32, height: u32) -> BackendSurface {
    BackendSurface::new(Extent::new(width, height), Color::BLACK).unwrap()
}

fn snapshot(surface: &BackendSurface) -> Vec<Color> {
    let extent = surface.extent();
    (0..extent.height)
        .flat_map(|y| (0..extent.width).map(move |x| (x, y)))
        .map(|(x, y)| surface.pixel(x, y).unwrap())
        .collect()
}

fn ink_count(surface: &BackendSurface) -> usize {
    snapshot(surface)
        .iter()
        .filter(|c| **c != Color::BLACK)
        .count()
}

#[test]
fn every_operation_chains_on_the_same_drawer() {
    let mut surface = surface(64, 64);
    let mut drawer = surface.drawer();
    let first: *const _ = &drawer;
    let last: *const _ = drawer
        .line(Point::new(4.0, 4.0), Point::new(60.0, 4.0), Color::WHITE, 1)
        .unwrap()
        .arc(
            Point::new(32.0, 32.0),
            Extent::new(20, 20),
            0.0,
            90.0,
            Color::WHITE,
            1,
        )
        .unwrap()
        .chord(
            Point::new(32.0, 32.0),
            Extent::new(20, 20),
            180.0,
            270.0,
            Color::WHITE,
            false,
            1,
        )
        .unwrap()
        .pie_slice(
            Point::new(32.0, 32.0),
            Extent::new(20, 20),
            45.0,
            135.0,
            Color::WHITE,
            true,
            1,
        )
        .unwrap()
        .circle(Point::new(16.0, 48.0), 10, Color::WHITE, false, 1)
        .unwrap()
        .ellipse(Point::new(48.0, 48.0), Extent::new(12, 8), Color::WHITE, true, 1)
        .unwrap()
        .polygon(
            &[
                Point::new(2.0, 60.0),
                Point::new(10.0, 52.0),
                Point::new(18.0, 60.0),
            ],
            Color::WHITE,
            true,
            1,
        )
        .unwrap()
        .rectangle(Point::new(40.0, 2.0), Point::new(60.0, 12.0), Color::WHITE, false, 1)
        .unwrap()
        .dot(Point::new(32.0, 60.0), Color::WHITE)
        .unwrap();
    assert!(std::ptr::eq(first, last));
    assert!(ink_count(&surface) > 0);
}

#[test]
fn thickness_zero_draws_like_thickness_one() {
    let ops: [fn(&mut BackendDrawer, u32); 3] = [
        |d, t| {
            d.line(Point::new(2.0, 12.0), Point::new(21.0, 12.0), Color::WHITE, t)
                .unwrap();
        },
        |d, t| {
            d.rectangle(Point::new(4.0, 4.0), Point::new(18.0, 16.0), Color::WHITE, false, t)
                .unwrap();
        },
        |d, t| {
            d.circle(Point::new(12.0, 12.0), 16, Color::WHITE, false, t)
                .unwrap();
        },
    ];
    for op in ops {
        let mut zero = surface(24, 24);
        op(&mut zero.drawer(), 0);
        let mut one = surface(24, 24);
        op(&mut one.drawer(), 1);
        assert_eq!(snapshot(&zero), snapshot(&one));
        assert!(ink_count(&one) > 0);
    }
}

#[test]
fn rectangle_accepts_any_corner_order() {
    let corners = [
        (Point::new(3.0, 4.0), Point::new(14.0, 10.0)),
        (Point::new(14.0, 10.0), Point::new(3.0, 4.0)),
        (Point::new(14.0, 4.0), Point::new(3.0, 10.0)),
        (Point::new(3.0, 10.0), Point::new(14.0, 4.0)),
    ];
    let mut images = corners.iter().map(|&(a, b)| {
        let mut s = surface(20, 20);
        s.drawer().rectangle(a, b, Color::WHITE, true, 1).unwrap();
        snapshot(&s)
    });
    let reference = images.next().unwrap();
    assert!(reference.iter().any(|c| *c == Color::WHITE));
    assert!(images.all(|image| image == reference));
}

#[test]
fn out_of_bounds_geometry_clips() {
    let mut s = surface(16, 16);
    s.drawer()
        .line(Point::new(-40.0, -40.0), Point::new(60.0, 60.0), Color::WHITE, 3)
        .unwrap()
        .circle(Point::new(8.0, 8.0), 300, Color::WHITE, false, 1)
        .unwrap()
        .rectangle(Point::new(-10.0, 5.0), Point::new(30.0, 9.0), Color::WHITE, true, 1)
        .unwrap()
        .dot(Point::new(500.0, 500.0), Color::WHITE)
        .unwrap();
    assert!(ink_count(&s) > 0);
    // The filled rectangle reaches the surface edge without wrapping.
    assert_eq!(s.pixel(0, 7), Some(Color::WHITE));
    assert_eq!(s.pixel(15, 7), Some(Color::WHITE));
}

#[test]
fn polygon_rejects_too_few_points() {
    let mut s = surface(10, 10);
    let mut drawer = s.drawer();
    let two = [Point::new(1.0, 1.0), Point::new(8.0, 8.0)];
    assert!(matches!(
        drawer.polygon(&two, Color::WHITE, false, 1),
        Err(Error::InvalidInput)
    ));
    assert!(matches!(
        drawer.polygon(&[], Color::WHITE, true, 1),
        Err(Error::InvalidInput)
    ));
    // The drawer stays usable after a rejected call.
    drawer.dot(Point::new(5.0, 5.0), Color::WHITE).unwrap();
    assert_eq!(s.pixel(5, 5), Some(Color::WHITE));
}

#[test]
fn degenerate_shapes_collapse_to_points_and_lines() {
    let mut s = surface(20, 20);
    s.drawer()
        .ellipse(Point::new(10.0, 10.0), Extent::new(0, 0), Color::WHITE, true, 1)
        .unwrap();
    assert_eq!(ink_count(&s), 1);
    assert_eq!(s.pixel(10, 10), Some(Color::WHITE));

    // A zero sweep arc is the single point where it would have started.
    let mut s = surface(20, 20);
    s.drawer()
        .arc(Point::new(10.0, 10.0), Extent::new(12, 12), 90.0, 90.0, Color::WHITE, 1)
        .unwrap();
    assert_eq!(ink_count(&s), 1);
    assert_eq!(s.pixel(10, 16), Some(Color::WHITE));

    let mut s = surface(20, 20);
    s.drawer()
        .line(Point::new(5.0, 5.0), Point::new(5.0, 5.0), Color::WHITE, 1)
        .unwrap();
    assert_eq!(ink_count(&s), 1);
    assert_eq!(s.pixel(5, 5), Some(Color::WHITE));
}

#[test]
fn non_finite_geometry_is_ignored() {
    let mut s = surface(12, 12);
    s.drawer()
        .line(Point::new(f64::NAN, 2.0), Point::new(8.0, 8.0), Color::WHITE, 1)
        .unwrap()
        .dot(Point::new(f64::INFINITY, 3.0), Color::WHITE)
        .unwrap()
        .ellipse(
            Point::new(f64::NAN, f64::NAN),
            Extent::new(6, 6),
            Color::WHITE,
            true,
            1,
        )
        .unwrap()
        .polygon(
            &[
                Point::new(1.0, 1.0),
                Point::new(f64::NEG_INFINITY, 2.0),
                Point::new(4.0, 4.0),
            ],
            Color::WHITE,
            true,
            1,
        )
        .unwrap();
    assert_eq!(ink_count(&s), 0);
}

#[test]
fn opaque_dots_are_stable_under_repetition() {
    let mut once = surface(8, 8);
    once.drawer().dot(Point::new(3.0, 3.0), Color::WHITE).unwrap();
    let mut twice = surface(8, 8);
    twice
        .drawer()
        .dot(Point::new(3.0, 3.0), Color::WHITE)
        .unwrap()
        .dot(Point::new(3.0, 3.0), Color::WHITE)
        .unwrap();
    assert_eq!(snapshot(&once), snapshot(&twice));
    assert_eq!(ink_count(&once), 1);
}
