//! CLI output formatting.
//!
//! Console output is for people, not parsers. A run looks like:
//!
//! ```text
//! Cropping 3 image(s) to square (1:1 aspect ratio)...
//!
//! Processing diego.webp: 1200x900
//!   Saved as diego_square.webp: 900x900
//! Error: File not found: images/rocio.webp
//! Processing julian.webp: 640x960
//!   Saved as julian_square.webp: 640x640
//!
//! Done! Saved 2 of 3 image(s) (1 failed).
//!
//! Note: Original files were preserved. New files have '_square' suffix.
//! To replace originals, run with --replace flag or manually rename the files.
//! ```
//!
//! # Architecture
//!
//! Each piece has a `format_*` function (returns `Vec<String>`) for
//! testability and, where it is printed as a unit, a `print_*` wrapper that
//! writes to stdout. Format functions are pure and do no I/O.

use crate::batch::{BatchReport, CropEvent};
use crate::imaging::CropError;
use crate::naming::{OutputPolicy, SQUARE_SUFFIX};
use std::path::Path;

/// Display name for a path: its final component, or the whole path if it has none.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Usage text shown when the program is run without arguments.
pub fn format_usage(program: &str) -> Vec<String> {
    vec![
        format!("Usage: {program} <image1> <image2> ..."),
        String::new(),
        "Options:".to_string(),
        "  --replace        Replace original files instead of creating new ones".to_string(),
        "  -o, --output     Write the single input image to this path".to_string(),
        String::new(),
        "Example:".to_string(),
        format!("  {program} images/diego.webp images/rocio.webp images/julian.webp"),
        format!("  {program} --replace images/diego.webp"),
    ]
}

/// Header printed before any file is touched.
pub fn format_batch_header(count: usize) -> Vec<String> {
    vec![
        format!("Cropping {count} image(s) to square (1:1 aspect ratio)..."),
        String::new(),
    ]
}

/// Format a single progress event as display lines.
pub fn format_crop_event(event: &CropEvent<'_>) -> Vec<String> {
    match event {
        CropEvent::Identified { source, dimensions } => vec![format!(
            "Processing {}: {}x{}",
            display_name(source),
            dimensions.width,
            dimensions.height
        )],
        CropEvent::Saved { outcome, .. } => vec![format!(
            "  Saved as {}: {}x{}",
            display_name(&outcome.output),
            outcome.side,
            outcome.side
        )],
        CropEvent::Failed { source, error } => match error {
            CropError::NotFound(_) => vec![format!("Error: File not found: {}", source.display())],
            other => vec![format!("Error processing {}: {}", source.display(), other)],
        },
    }
}

/// Closing summary plus, when originals were kept, a reminder of how to replace them.
pub fn format_batch_summary(report: &BatchReport) -> Vec<String> {
    let mut lines = vec![String::new()];

    let failed = report.failed();
    if failed == 0 {
        lines.push(format!(
            "Done! Saved {} of {} image(s).",
            report.saved(),
            report.total()
        ));
    } else {
        lines.push(format!(
            "Done! Saved {} of {} image(s) ({} failed).",
            report.saved(),
            report.total(),
            failed
        ));
    }

    match &report.policy {
        OutputPolicy::ReplaceOriginal => {}
        OutputPolicy::NewFileWithSuffix => {
            lines.push(String::new());
            lines.push(format!(
                "Note: Original files were preserved. New files have '{SQUARE_SUFFIX}' suffix."
            ));
            lines.push(
                "To replace originals, run with --replace flag or manually rename the files."
                    .to_string(),
            );
        }
        OutputPolicy::ExplicitPath(_) => {
            lines.push(String::new());
            lines.push("Note: Original file was preserved.".to_string());
        }
    }

    lines
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_usage(program: &str) {
    print_lines(format_usage(program));
}

pub fn print_batch_header(count: usize) {
    print_lines(format_batch_header(count));
}

pub fn print_crop_event(event: &CropEvent<'_>) {
    print_lines(format_crop_event(event));
}

pub fn print_batch_summary(report: &BatchReport) {
    print_lines(format_batch_summary(report));
}
