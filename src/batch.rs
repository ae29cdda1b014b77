//! Sequential batch cropping.
//!
//! Each input path is cropped independently, strictly in the order given.
//! A failure on one file is recorded as a [`FileOutcome::Failed`] and the
//! batch moves on; nothing is retried and nothing aborts the run.
//!
//! Progress is reported through [`CropEvent`]s so the caller decides how to
//! display it (see [`output::format_crop_event`](crate::output::format_crop_event)).

use crate::config::CropConfig;
use crate::imaging::{CropError, CropOutcome, Dimensions, ImageBackend, crop_and_save_with};
use crate::naming::OutputPolicy;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Progress notification emitted while a batch runs.
#[derive(Debug)]
pub enum CropEvent<'a> {
    /// Source dimensions were read; pixels are about to be decoded.
    Identified {
        source: &'a Path,
        dimensions: Dimensions,
    },
    Saved {
        source: &'a Path,
        outcome: &'a CropOutcome,
    },
    Failed {
        source: &'a Path,
        error: &'a CropError,
    },
}

/// Per-file result.
#[derive(Debug)]
pub enum FileOutcome {
    Saved {
        source: PathBuf,
        outcome: CropOutcome,
    },
    Failed {
        source: PathBuf,
        error: CropError,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Saved { source, .. } | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FileOutcome::Saved { .. })
    }
}

/// Aggregated results of a batch, one outcome per input in input order.
#[derive(Debug)]
pub struct BatchReport {
    pub policy: OutputPolicy,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.saved()
    }
}

/// Crop every path in `config`, reporting progress to `on_event`.
pub fn run_batch(
    backend: &impl ImageBackend,
    config: &CropConfig,
    mut on_event: impl FnMut(&CropEvent<'_>),
) -> BatchReport {
    let policy = config.policy();
    let mut outcomes = Vec::with_capacity(config.paths().len());

    for source in config.iter_paths() {
        let result = crop_and_save_with(backend, source, policy, |dimensions| {
            on_event(&CropEvent::Identified { source, dimensions })
        });

        let outcome = match result {
            Ok(outcome) => {
                info!(source = %source.display(), output = %outcome.output.display(), side = outcome.side, "saved");
                on_event(&CropEvent::Saved {
                    source,
                    outcome: &outcome,
                });
                FileOutcome::Saved {
                    source: source.to_path_buf(),
                    outcome,
                }
            }
            Err(error) => {
                warn!(source = %source.display(), %error, "skipping");
                on_event(&CropEvent::Failed {
                    source,
                    error: &error,
                });
                FileOutcome::Failed {
                    source: source.to_path_buf(),
                    error,
                }
            }
        };
        outcomes.push(outcome);
    }

    BatchReport {
        policy: policy.clone(),
        outcomes,
    }
}
