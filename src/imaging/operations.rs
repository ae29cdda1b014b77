//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a policy, compute parameters, and call the backend.

use super::backend::{CropError, Dimensions, ImageBackend};
use super::calculations::compute_square_rect;
use super::params::{CropParams, Quality};
use crate::naming::{OutputPolicy, resolve_output_path};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, CropError>;

/// What a successful crop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutcome {
    pub output: PathBuf,
    pub original: Dimensions,
    pub side: u32,
}

/// Plan a crop without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_crop(source: &Path, dims: Dimensions, policy: &OutputPolicy) -> Result<CropParams> {
    let rect = compute_square_rect(dims.width, dims.height)?;
    Ok(CropParams {
        source: source.to_path_buf(),
        output: resolve_output_path(source, policy),
        rect,
        quality: Quality::CROP_DEFAULT,
    })
}

/// Crop `source` to a centered square and write it where `policy` says.
///
/// A missing source is reported as [`CropError::NotFound`] without touching
/// the backend.
pub fn crop_and_save(
    backend: &impl ImageBackend,
    source: &Path,
    policy: &OutputPolicy,
) -> Result<CropOutcome> {
    crop_and_save_with(backend, source, policy, |_| {})
}

/// Like [`crop_and_save`], calling `on_identified` once the source dimensions
/// are known and before any pixels are decoded.
pub fn crop_and_save_with(
    backend: &impl ImageBackend,
    source: &Path,
    policy: &OutputPolicy,
    on_identified: impl FnOnce(Dimensions),
) -> Result<CropOutcome> {
    if !source.exists() {
        return Err(CropError::NotFound(source.to_path_buf()));
    }

    let original = backend.identify(source)?;
    on_identified(original);

    let params = plan_crop(source, original, policy)?;
    debug!(
        source = %source.display(),
        output = %params.output.display(),
        rect = ?params.rect,
        "cropping"
    );
    backend.crop(&params)?;

    Ok(CropOutcome {
        output: params.output,
        original,
        side: params.rect.side(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::calculations::CropRect;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn plan_crop_uses_suffix_path_and_fixed_quality() {
        let params = plan_crop(
            Path::new("images/diego.webp"),
            dims(200, 100),
            &OutputPolicy::NewFileWithSuffix,
        )
        .unwrap();

        assert_eq!(params.output, PathBuf::from("images/diego_square.webp"));
        assert_eq!(params.quality.value(), 95);
        assert_eq!(
            params.rect,
            CropRect {
                left: 50,
                top: 0,
                right: 150,
                bottom: 100
            }
        );
    }

    #[test]
    fn plan_crop_replace_targets_source() {
        let params = plan_crop(
            Path::new("images/diego.webp"),
            dims(100, 100),
            &OutputPolicy::ReplaceOriginal,
        )
        .unwrap();
        assert_eq!(params.output, PathBuf::from("images/diego.webp"));
    }

    #[test]
    fn plan_crop_rejects_empty_image() {
        let result = plan_crop(
            Path::new("empty.png"),
            dims(0, 0),
            &OutputPolicy::NewFileWithSuffix,
        );
        assert!(matches!(result, Err(CropError::InvalidDimension { .. })));
    }

    #[test]
    fn crop_and_save_missing_source_skips_backend() {
        let backend = MockBackend::new();
        let result = crop_and_save(
            &backend,
            Path::new("/definitely/not/here.jpg"),
            &OutputPolicy::NewFileWithSuffix,
        );

        assert!(matches!(result, Err(CropError::NotFound(_))));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn crop_and_save_identifies_then_crops() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("portrait.jpg");
        std::fs::write(&source, b"placeholder").unwrap();
        let source_str = source.to_str().unwrap();

        let backend = MockBackend::with_dimensions(vec![(source_str, dims(600, 800))]);
        let mut seen = None;
        let outcome = crop_and_save_with(
            &backend,
            &source,
            &OutputPolicy::NewFileWithSuffix,
            |d| seen = Some(d),
        )
        .unwrap();

        assert_eq!(seen, Some(dims(600, 800)));
        assert_eq!(outcome.side, 600);
        assert_eq!(outcome.original, dims(600, 800));
        assert_eq!(outcome.output, tmp.path().join("portrait_square.jpg"));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == source_str));
        assert!(matches!(
            &ops[1],
            RecordedOp::Crop {
                rect: CropRect { top: 100, bottom: 700, .. },
                quality: 95,
                ..
            }
        ));
    }

    #[test]
    fn crop_and_save_propagates_encode_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("a.png");
        std::fs::write(&source, b"placeholder").unwrap();
        let output = tmp.path().join("locked.png");

        let backend = MockBackend::with_dimensions(vec![(source.to_str().unwrap(), dims(4, 4))])
            .fail_writes_to(output.to_str().unwrap());
        let result = crop_and_save(&backend, &source, &OutputPolicy::ExplicitPath(output));

        assert!(matches!(result, Err(CropError::Encode { .. })));
    }
}
