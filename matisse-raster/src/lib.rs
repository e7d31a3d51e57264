// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic scanline rasterizer backend for matisse.
//!
//! Every shape resolves to whole-pixel spans sampled at pixel centers, with
//! no antialiasing, so identical drawing programs produce identical buffers
//! on every platform. Thick unfilled curves are emulated by compositing
//! nested outlines; the drawer reports this in its capabilities.

mod draw;
mod scan;
mod surface;

pub use crate::draw::RasterDrawer;
pub use crate::surface::RasterSurface;
