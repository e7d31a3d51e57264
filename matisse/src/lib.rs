// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D primitive-drawing abstraction.

pub use kurbo;

/// Glyph layout shared by the backends.
pub mod text;

mod capability;
mod color;
mod drawer;
mod error;
mod font;
mod geometry;
mod null_drawer;
mod palette;
mod surface;

#[cfg(feature = "samples")]
pub mod samples;

pub use crate::capability::*;
pub use crate::color::*;
pub use crate::drawer::*;
pub use crate::error::*;
pub use crate::font::*;
pub use crate::geometry::*;
pub use crate::null_drawer::*;
pub use crate::palette::*;
pub use crate::surface::*;
