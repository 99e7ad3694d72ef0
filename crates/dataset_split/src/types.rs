//! Core types and error definitions for dataset_split.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type SplitResult<T> = Result<T, SplitError>;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("required directory not found: {path}")]
    MissingDirectory { path: PathBuf },
    #[error("no .jpg images found in {path}")]
    NoInputData { path: PathBuf },
    #[error("no image has a matching label file under {path}")]
    NoValidPairs { path: PathBuf },
    #[error("train_ratio must be strictly between 0 and 1, got {ratio}")]
    InvalidTrainRatio { ratio: f64 },
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One image file and its same-stem label file. Both paths exist at
/// indexing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub image: PathBuf,
    pub label: PathBuf,
}

/// Immutable configuration for one split invocation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Dataset root containing the images and labels subdirectories.
    pub dataset_dir: PathBuf,
    pub images_subdir: String,
    pub labels_subdir: String,
    /// Output root for the `{train,val}/{images,labels}` tree.
    pub output_dir: PathBuf,
    /// Fraction of valid pairs assigned to train; strictly inside (0, 1).
    pub train_ratio: f64,
    /// Seed for the shuffle; same seed + same inputs = same split.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from("dataset"),
            images_subdir: "images".to_string(),
            labels_subdir: "labels".to_string(),
            output_dir: PathBuf::from("dataset_split"),
            train_ratio: 0.8,
            seed: 42,
        }
    }
}

impl SplitConfig {
    pub fn images_dir(&self) -> PathBuf {
        self.dataset_dir.join(&self.images_subdir)
    }

    pub fn labels_dir(&self) -> PathBuf {
        self.dataset_dir.join(&self.labels_subdir)
    }
}

/// Outcome of a completed split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    pub total: usize,
    pub train: usize,
    pub val: usize,
    /// Image file names that had no matching label and were excluded.
    pub skipped: Vec<String>,
    pub output_root: PathBuf,
}

/// Sidecar written into the output root so a split can be reproduced from
/// its artifact alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitManifest {
    /// Source dataset root as a UTF-8 string.
    pub dataset_dir: String,
    pub images_subdir: String,
    pub labels_subdir: String,
    pub train_ratio: f64,
    pub seed: u64,
    pub total: usize,
    pub train: usize,
    pub val: usize,
}

pub const MANIFEST_FILE_NAME: &str = "split_manifest.json";

impl SplitManifest {
    pub fn save(&self, path: &Path) -> SplitResult<()> {
        let data = serde_json::to_vec_pretty(self).map_err(|e| SplitError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, data).map_err(|e| SplitError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn load(path: &Path) -> SplitResult<Self> {
        let raw = fs::read(path).map_err(|e| SplitError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_slice(&raw).map_err(|e| SplitError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
