//! Image processing in pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Square crop** | `compute_square_rect` + `DynamicImage::crop_imm` |
//! | **Encode** | JPEG at quality 95, lossless codecs for the rest |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{CropError, Dimensions, ImageBackend};
pub use calculations::{CropRect, compute_square_rect};
pub use operations::{CropOutcome, crop_and_save, crop_and_save_with, plan_crop};
pub use params::{CropParams, Quality};
pub use rust_backend::RustBackend;
