//! Indexing image files against their label files.

use crate::types::{SamplePair, SplitError, SplitResult};
use std::fs;
use std::path::Path;

/// Valid pairs in sorted filename order, plus the image names that had to
/// be excluded for lack of a label.
#[derive(Debug, Clone)]
pub struct PairIndex {
    pub pairs: Vec<SamplePair>,
    pub missing_labels: Vec<String>,
}

fn is_jpg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg"))
        .unwrap_or(false)
}

/// Enumerate `.jpg` files under `images_dir` and pair each with
/// `<labels_dir>/<stem>.txt`. Images without a label are recorded in
/// `missing_labels` rather than failing the index.
///
/// Results are sorted by file name before being returned so the pair order
/// does not depend on directory enumeration order.
pub fn index_pairs(images_dir: &Path, labels_dir: &Path) -> SplitResult<PairIndex> {
    if !images_dir.is_dir() {
        return Err(SplitError::MissingDirectory {
            path: images_dir.to_path_buf(),
        });
    }
    if !labels_dir.is_dir() {
        return Err(SplitError::MissingDirectory {
            path: labels_dir.to_path_buf(),
        });
    }

    let mut images = Vec::new();
    let entries = fs::read_dir(images_dir).map_err(|e| SplitError::Io {
        path: images_dir.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| SplitError::Io {
            path: images_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_jpg(&path) {
            images.push(path);
        }
    }
    if images.is_empty() {
        return Err(SplitError::NoInputData {
            path: images_dir.to_path_buf(),
        });
    }
    images.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    let mut pairs = Vec::with_capacity(images.len());
    let mut missing_labels = Vec::new();
    for image in images {
        let Some(stem) = image.file_stem() else {
            continue;
        };
        let mut label_name = stem.to_os_string();
        label_name.push(".txt");
        let label = labels_dir.join(&label_name);
        if label.is_file() {
            pairs.push(SamplePair { image, label });
        } else {
            missing_labels.push(
                image
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }
    }
    if pairs.is_empty() {
        return Err(SplitError::NoValidPairs {
            path: labels_dir.to_path_buf(),
        });
    }

    Ok(PairIndex {
        pairs,
        missing_labels,
    })
}
