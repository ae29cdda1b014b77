//! Pure Rust image processing backend built on the `image` crate.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `ImageReader` with content sniffing |
//! | Crop | `DynamicImage::crop_imm` |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → everything else | `DynamicImage::save_with_format` (lossless encoders) |

use super::backend::{CropError, Dimensions, ImageBackend};
use super::params::{CropParams, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Extensions the cropper can read and write, with the format they map to.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("gif", ImageFormat::Gif),
    ("bmp", ImageFormat::Bmp),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, e: impl std::fmt::Display) -> CropError {
    CropError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn encode_error(path: &Path, e: impl std::fmt::Display) -> CropError {
    CropError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Open an image and sniff its format from the content, falling back to the extension.
///
/// Anything that exists but cannot be read as an image (a directory, an
/// unreadable file) is a decode error.
fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, CropError> {
    ImageReader::open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CropError::NotFound(path.to_path_buf()),
            _ => decode_error(path, e),
        })?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, CropError> {
    open_reader(path)?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Resolve the output format from the destination's extension.
fn output_format(path: &Path) -> Result<ImageFormat, CropError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    PHOTO_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| encode_error(path, format!("Unsupported output format: {ext:?}")))
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), CropError> {
    match output_format(path)? {
        ImageFormat::Jpeg => save_jpeg(img, path, quality),
        format => img
            .save_with_format(path, format)
            .map_err(|e| encode_error(path, e)),
    }
}

/// Encode as baseline JPEG at the requested quality.
///
/// JPEG has no alpha channel and no 16-bit mode, so anything other than
/// 8-bit gray or RGB is flattened to RGB8 first.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), CropError> {
    let flattened;
    let img = match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        other => {
            flattened = DynamicImage::ImageRgb8(other.to_rgb8());
            &flattened
        }
    };

    let file = std::fs::File::create(path).map_err(|e| encode_error(path, e))?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.as_u8());
    img.write_with_encoder(encoder)
        .map_err(|e| encode_error(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, CropError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<(), CropError> {
        // Fail on an unwritable format before paying for the decode
        output_format(&params.output)?;

        let img = load_image(&params.source)?;
        let rect = params.rect;
        if rect.right > img.width() || rect.bottom > img.height() {
            return Err(decode_error(
                &params.source,
                format!(
                    "crop {}x{}+{}+{} exceeds decoded size {}x{}",
                    rect.width(),
                    rect.height(),
                    rect.left,
                    rect.top,
                    img.width(),
                    img.height()
                ),
            ));
        }

        let cropped = img.crop_imm(rect.left, rect.top, rect.width(), rect.height());
        save_image(&cropped, &params.output, params.quality)
    }
}
