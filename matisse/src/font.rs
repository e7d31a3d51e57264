// Copyright 2026 the Matisse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font handles for text drawing.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{Color, Error};

/// A font face loaded from a file, at a fixed size and color.
///
/// The file is read eagerly so that a missing path fails at load time;
/// parsing the face is deferred to the first text operation, which reports
/// [`Error::FontLoadingFailed`] when the bytes are not a usable font.
#[derive(Clone)]
pub struct Font {
    data: Arc<Vec<u8>>,
    path: PathBuf,
    size: f64,
    color: Color,
}

impl Font {
    /// Load a font file at the given point size.
    ///
    /// Returns [`Error::InvalidInput`] for a size that is not a positive
    /// finite number, [`Error::MissingFont`] when no file exists at `path`,
    /// and [`Error::FontLoadingFailed`] when the file cannot be read.
    pub fn load(path: impl AsRef<Path>, size: f64, color: Color) -> Result<Font, Error> {
        let path = path.as_ref();
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidInput);
        }
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingFont,
            _ => Error::FontLoadingFailed,
        })?;
        Ok(Font {
            data: Arc::new(data),
            path: path.to_owned(),
            size,
            color,
        })
    }

    /// The path the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The point size text in this font is drawn at.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The color text in this font is drawn in.
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Font")
            .field("path", &self.path)
            .field("size", &self.size)
            .field("color", &self.color)
            .field("bytes", &self.data.len())
            .finish()
    }
}
