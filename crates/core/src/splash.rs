//! PI1 splash image.
//!
//! Layout: a 2-byte resolution word (ignored), 16 big-endian palette words,
//! then one full surface of raw planar pixels. Trailing bytes (some files
//! carry colour-cycling data) are ignored.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::palette::Palette;
use crate::surface::Surface;
use crate::types::{PALETTE_SIZE, SURFACE_BYTES};

/// Resolution word.
pub const PI1_HEADER_BYTES: usize = 2;

/// 16 colour words.
pub const PI1_PALETTE_BYTES: usize = PALETTE_SIZE * 2;

/// Header, palette and pixel block.
pub const PI1_BYTES: usize = PI1_HEADER_BYTES + PI1_PALETTE_BYTES + SURFACE_BYTES;

#[derive(Debug, Error)]
pub enum SplashError {
    #[error("failed to read splash image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("splash image is truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// A decoded splash image: its own palette plus a ready-to-present surface.
#[derive(Debug, Clone)]
pub struct SplashImage {
    pub palette: Palette,
    pub surface: Surface,
}

impl SplashImage {
    pub fn parse(data: &[u8]) -> Result<Self, SplashError> {
        if data.len() < PI1_BYTES {
            return Err(SplashError::Truncated {
                expected: PI1_BYTES,
                actual: data.len(),
            });
        }

        let palette_start = PI1_HEADER_BYTES;
        let pixels_start = palette_start + PI1_PALETTE_BYTES;

        let palette = Palette::from_be_bytes(&data[palette_start..pixels_start]).ok_or(
            SplashError::Truncated {
                expected: PI1_BYTES,
                actual: data.len(),
            },
        )?;

        let mut surface = Surface::new();
        surface.load_raw(&data[pixels_start..PI1_BYTES]);

        Ok(Self { palette, surface })
    }

    /// Read at most one image worth of bytes from `path` and decode it.
    pub fn load(path: &Path) -> Result<Self, SplashError> {
        let io_err = |source| SplashError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let mut data = Vec::with_capacity(PI1_BYTES);
        file.take(PI1_BYTES as u64)
            .read_to_end(&mut data)
            .map_err(io_err)?;

        Self::parse(&data)
    }
}
