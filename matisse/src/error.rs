// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common error type for matisse operations.

use std::fmt;

/// An error that can occur while drawing 2D graphics.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input to a drawing operation was out of range, such as a polygon
    /// with fewer than three vertices or a font size that is not positive.
    InvalidInput,
    /// The backend cannot perform the requested operation.
    NotSupported,
    /// The font file does not exist.
    MissingFont,
    /// The font file exists but its contents could not be read or parsed.
    FontLoadingFailed,
    /// A failure in the underlying backend.
    BackendError(Box<dyn std::error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInput => write!(f, "Invalid input"),
            Error::NotSupported => write!(f, "Option not supported"),
            Error::MissingFont => write!(f, "A font could not be found"),
            Error::FontLoadingFailed => write!(f, "Failed to load the requested font"),
            Error::BackendError(e) => {
                write!(f, "Backend error: ")?;
                e.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        Error::BackendError(e)
    }
}
