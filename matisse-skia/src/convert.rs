// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between matisse vocabulary and tiny-skia types.

use kurbo::{BezPath, PathEl};
use matisse::Color;

/// Convert a bezier path, or `None` when the path has no usable segments.
pub(crate) fn to_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

pub(crate) fn to_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.as_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

pub(crate) fn paint(color: Color, anti_alias: bool) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint {
        anti_alias,
        ..Default::default()
    };
    paint.set_color(to_color(color));
    paint
}
