//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the crop and the destination) and the
//! [`backend`](super::backend) (which does the actual pixel work).
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1–100, default 95). Clamped on construction.
//! - [`CropParams`]: Full specification for a crop: source, output path, rect, quality.

use super::calculations::CropRect;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
///
/// The field is private so every value passes through the clamp in [`Quality::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    /// Quality used for every crop this tool writes.
    pub const CROP_DEFAULT: Quality = Quality(95);

    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The value as an encoder byte. Lossless: the value never exceeds 100.
    pub fn as_u8(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::CROP_DEFAULT
    }
}

/// Parameters for a single crop-and-encode operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rect: CropRect,
    pub quality: Quality,
}
