//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::CropError;

/// A crop rectangle in pixel coordinates, origin at the top-left corner.
///
/// `right` and `bottom` are exclusive, so `right - left` is the crop width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Edge length of a square rect. Only meaningful when `width() == height()`.
    pub fn side(&self) -> u32 {
        self.width()
    }
}

/// Calculate the centered square crop for an image of the given size.
///
/// The side of the square is the shorter edge. The leftover margin on the
/// longer edge is split with floor division, so an odd margin leaves the
/// extra pixel on the trailing (right/bottom) edge.
///
/// # Examples
/// ```
/// # use square_crop::imaging::compute_square_rect;
/// // 200x100 landscape → 100px square starting 50px in
/// let rect = compute_square_rect(200, 100).unwrap();
/// assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (50, 0, 150, 100));
///
/// // 101x100 → the single spare column is dropped from the right
/// let rect = compute_square_rect(101, 100).unwrap();
/// assert_eq!((rect.left, rect.right), (0, 100));
/// ```
pub fn compute_square_rect(width: u32, height: u32) -> Result<CropRect, CropError> {
    if width == 0 || height == 0 {
        return Err(CropError::InvalidDimension { width, height });
    }

    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;

    Ok(CropRect {
        left,
        top,
        right: left + side,
        bottom: top + side,
    })
}
