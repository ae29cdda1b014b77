//! Run configuration.
//!
//! Command-line arguments are parsed in two phases. `clap` first splits flags
//! from positional paths (so `--replace` may appear anywhere), then
//! [`CropConfig::from_args`] validates the combination and freezes it into an
//! immutable config. Nothing touches the filesystem until a valid
//! [`CropConfig`] exists.
//!
//! ```text
//! square-crop a.jpg --replace b.png   → paths [a.jpg, b.png], ReplaceOriginal
//! square-crop -o avatar.jpg me.png    → paths [me.png], ExplicitPath(avatar.jpg)
//! square-crop --replace               → ConfigError::NoPaths
//! ```

use crate::naming::OutputPolicy;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No image files specified")]
    NoPaths,
    #[error("--output names a single file but {0} images were given")]
    OutputNeedsSinglePath(usize),
    #[error("--output must not be empty")]
    EmptyOutputPath,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropConfig {
    paths: Vec<PathBuf>,
    policy: OutputPolicy,
}

impl CropConfig {
    /// Build a config from already-separated flags and positionals.
    pub fn from_args(
        paths: Vec<PathBuf>,
        replace: bool,
        output: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if paths.is_empty() {
            return Err(ConfigError::NoPaths);
        }

        let policy = match output {
            Some(path) if path.as_os_str().is_empty() => return Err(ConfigError::EmptyOutputPath),
            Some(_) if paths.len() > 1 => {
                return Err(ConfigError::OutputNeedsSinglePath(paths.len()));
            }
            Some(path) => OutputPolicy::ExplicitPath(path),
            None if replace => OutputPolicy::ReplaceOriginal,
            None => OutputPolicy::NewFileWithSuffix,
        };

        Ok(Self { paths, policy })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn policy(&self) -> &OutputPolicy {
        &self.policy
    }

    /// Iterate paths in the order they were given.
    pub fn iter_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
