//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the cropper needs:
//! identify (read dimensions) and crop (decode, cut, encode, write).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording mock in this module.

use super::params::CropParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can go wrong cropping a single file.
#[derive(Error, Debug)]
pub enum CropError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to write {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, CropError>;

    /// Decode `params.source`, cut out `params.rect`, and encode it to `params.output`.
    fn crop(&self, params: &CropParams) -> Result<(), CropError>;
}
