//! Destination naming for cropped images.
//!
//! Every crop is written according to an [`OutputPolicy`]. The default keeps
//! the original untouched and writes a sibling file with `_square` inserted
//! before the extension:
//!
//! - `images/diego.webp` → `images/diego_square.webp`
//! - `IMG_0042.JPG` → `IMG_0042_square.JPG`
//! - `scans/contact-sheet` → `scans/contact-sheet_square`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Marker inserted between the stem and the extension of suffix files.
pub const SQUARE_SUFFIX: &str = "_square";

/// Where a cropped image is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Write `{stem}_square{.ext}` next to the source.
    #[default]
    NewFileWithSuffix,
    /// Overwrite the source file.
    ReplaceOriginal,
    /// Write to exactly this path.
    ExplicitPath(PathBuf),
}

impl OutputPolicy {
    /// Whether this policy leaves the source file as it was.
    pub fn preserves_original(&self) -> bool {
        !matches!(self, OutputPolicy::ReplaceOriginal)
    }
}

/// Compute the destination for a crop of `source` under `policy`.
///
/// Pure path arithmetic; nothing is checked on disk.
pub fn resolve_output_path(source: &Path, policy: &OutputPolicy) -> PathBuf {
    match policy {
        OutputPolicy::ReplaceOriginal => source.to_path_buf(),
        OutputPolicy::ExplicitPath(path) => path.clone(),
        OutputPolicy::NewFileWithSuffix => suffixed_path(source),
    }
}

fn suffixed_path(source: &Path) -> PathBuf {
    let mut name: OsString = source.file_stem().unwrap_or_default().to_os_string();
    name.push(SQUARE_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}
