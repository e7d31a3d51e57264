// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend capability reporting.

/// The rendering characteristics of a [`Drawer`](crate::Drawer) backend.
///
/// Every backend draws every primitive, but not always by the same means.
/// Callers that care how a result was produced can branch on this record
/// instead of probing pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Capabilities {
    /// Shape boundaries are antialiased rather than hard edged.
    pub antialiasing: bool,
    /// Thick unfilled curves are emulated by compositing nested outlines
    /// rather than stroked natively.
    pub emulated_thick_outlines: bool,
}
