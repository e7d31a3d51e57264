// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An antialiased matisse backend over tiny-skia.
//!
//! Shapes are rasterized as vector paths with antialiased coverage. Dots
//! and axis-aligned solid fills are drawn as exact pixel cells so that
//! programs relying on precise placement agree with the deterministic
//! raster backend.

mod convert;
mod draw;
mod surface;

pub use crate::draw::SkiaDrawer;
pub use crate::surface::SkiaSurface;
