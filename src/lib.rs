//! # Square Crop
//!
//! Crop photos to a centered 1:1 square. The longer edge is trimmed equally
//! from both sides, and the result is written next to the original with a
//! `_square` suffix, over the original with `--replace`, or to an explicit
//! path with `--output`.
//!
//! # Flow
//!
//! ```text
//! argv ──clap──► Cli ──CropConfig::from_args──► CropConfig
//!                                                   │
//!               for each path, in order:            ▼
//!   identify → compute_square_rect → resolve_output_path → decode/crop/encode
//!                                                   │
//!                                                   ▼
//!                              FileOutcome … → BatchReport → summary
//! ```
//!
//! Files are independent: a missing or corrupt input is reported and skipped,
//! and the rest of the batch still runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Crop geometry, the [`ImageBackend`](imaging::ImageBackend) trait, and the `image`-crate backend |
//! | [`naming`] | [`OutputPolicy`](naming::OutputPolicy) and destination path derivation |
//! | [`config`] | Validated, immutable run configuration built from CLI arguments |
//! | [`batch`] | Sequential per-file processing with typed outcomes |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Floor-Division Centering
//!
//! When the margin to trim is odd, the leading edge gets the smaller half.
//! A 101x100 image is cropped to columns `0..100`. This matches the output of
//! the long-standing script this tool replaces, pixel for pixel.
//!
//! ## No Resampling
//!
//! The square is cut, never scaled: its side is the shorter edge of the
//! input. JPEG output is re-encoded at quality 95; the other supported
//! formats are written losslessly.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
