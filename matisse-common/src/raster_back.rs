// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support for the deterministic raster back-end.

#[doc(hidden)]
pub use matisse_raster::*;

/// The surface type for the selected backend.
pub type BackendSurface = RasterSurface;

/// The drawer type for the selected backend.
///
/// This type matches `BackendSurface::Drawer`.
pub type BackendDrawer<'a> = RasterDrawer<'a>;
