// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph layout shared by the backends.
//!
//! Text is turned into filled vector outlines here, once, so that every
//! backend renders the same shapes with its own fill machinery.

use cosmic_text::fontdb::{Database, Source};
use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use kurbo::{Affine, BezPath, Point};

use crate::{Error, Font};

/// Lay out `body` in `font` and return the glyph outlines as one path.
///
/// The top left corner of the layout box lands on `position` and the whole
/// run is rotated `angle` degrees counter-clockwise about that anchor.
/// Outlines are closed contours meant to be filled with the non-zero rule.
///
/// Returns [`Error::FontLoadingFailed`] when the font's bytes do not parse
/// as a face.
pub fn glyph_outlines(
    font: &Font,
    body: &str,
    position: Point,
    angle: f64,
) -> Result<BezPath, Error> {
    let mut db = Database::new();
    db.load_font_source(Source::Binary(font.data().clone()));
    let family = match db.faces().next() {
        Some(face) => face.families.first().map(|(name, _)| name.clone()),
        None => return Err(Error::FontLoadingFailed),
    };
    let mut font_system = FontSystem::new_with_locale_and_db("en".to_string(), db);
    let mut swash_cache = SwashCache::new();

    let size = font.size() as f32;
    let metrics = Metrics::new(size, size * 1.2);
    let mut buffer = Buffer::new(&mut font_system, metrics);
    let mut attrs = Attrs::new().cache_key_flags(CacheKeyFlags::DISABLE_HINTING);
    if let Some(name) = &family {
        attrs = attrs.family(Family::Name(name));
    }
    buffer.set_text(&mut font_system, body, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(&mut font_system, false);

    let mut path = BezPath::new();
    for run in buffer.layout_runs() {
        for glyph in run.glyphs.iter() {
            let physical = glyph.physical((0.0, 0.0), 1.0);
            let glyph_x = (glyph.x + glyph.font_size * glyph.x_offset) as f64;
            let glyph_y = (run.line_y + glyph.y - glyph.font_size * glyph.y_offset) as f64;
            // Font outlines have y pointing up; flip while translating into
            // the y-down layout space.
            let place = |x: f32, y: f32| Point::new(glyph_x + x as f64, glyph_y - y as f64);
            if let Some(commands) =
                swash_cache.get_outline_commands(&mut font_system, physical.cache_key)
            {
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path.move_to(place(p.x, p.y)),
                        Command::LineTo(p) => path.line_to(place(p.x, p.y)),
                        Command::QuadTo(ctrl, end) => {
                            path.quad_to(place(ctrl.x, ctrl.y), place(end.x, end.y))
                        }
                        Command::CurveTo(c1, c2, end) => path.curve_to(
                            place(c1.x, c1.y),
                            place(c2.x, c2.y),
                            place(end.x, end.y),
                        ),
                        Command::Close => path.close_path(),
                    }
                }
            }
        }
    }

    path.apply_affine(Affine::translate(position.to_vec2()) * Affine::rotate(-angle.to_radians()));
    Ok(path)
}
