// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A matisse backend appropriate for the common case.
//!
//! This crate reexports the [matisse crate][matisse], alongside one of its
//! backends selected through cargo features. It also exposes [kurbo][], which
//! defines the shape and curve types the drawing operations take.
//!
//! The intention of this crate is to provide a single dependency that handles
//! the common matisse use-case. If you have more complicated needs (such as
//! comparing backends side by side) you should depend on crates such as
//! [matisse][] and [matisse-raster][] directly.
//!
//! [matisse]: https://crates.io/crates/matisse
//! [kurbo]: https://crates.io/crates/kurbo
//! [matisse-raster]: https://crates.io/crates/matisse-raster

pub use matisse::*;

#[doc(hidden)]
pub use matisse::kurbo;

#[cfg(any(feature = "raster", not(feature = "skia")))]
#[path = "raster_back.rs"]
mod backend;

#[cfg(all(feature = "skia", not(feature = "raster")))]
#[path = "skia_back.rs"]
mod backend;

#[doc(hidden)]
pub use backend::*;

mod save;

pub use save::save_png;
