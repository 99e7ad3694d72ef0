//! Seeded shuffle, partition, and copy into the output tree.

use crate::pairs::index_pairs;
use crate::types::{
    SamplePair, SplitConfig, SplitError, SplitManifest, SplitResult, SplitSummary,
    MANIFEST_FILE_NAME,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

/// The train/val partition of a valid-pair set. Disjoint; together they
/// hold every input pair exactly once.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub train: Vec<SamplePair>,
    pub val: Vec<SamplePair>,
}

/// Shuffle `pairs` with a seeded RNG and slice off the first
/// `floor(total * train_ratio)` as train. The shuffle is the only
/// randomized step in the whole operation.
pub fn plan_split(
    mut pairs: Vec<SamplePair>,
    train_ratio: f64,
    seed: u64,
) -> SplitResult<SplitPlan> {
    if !(train_ratio > 0.0 && train_ratio < 1.0) {
        return Err(SplitError::InvalidTrainRatio { ratio: train_ratio });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    pairs.shuffle(&mut rng);
    let train_count = (pairs.len() as f64 * train_ratio).floor() as usize;
    let val = pairs.split_off(train_count);
    Ok(SplitPlan { train: pairs, val })
}

fn copy_into(pairs: &[SamplePair], images_dir: &Path, labels_dir: &Path) -> SplitResult<()> {
    for pair in pairs {
        for (src, dest_dir) in [(&pair.image, images_dir), (&pair.label, labels_dir)] {
            let Some(name) = src.file_name() else {
                continue;
            };
            let dest = dest_dir.join(name);
            fs::copy(src, &dest).map_err(|e| SplitError::Io {
                path: src.clone(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Run a full split: index pairs, plan the partition, copy both subsets
/// into `output/{train,val}/{images,labels}`, and write the manifest.
///
/// Existing output directories are reused and same-named files are
/// overwritten; source files are never touched. Copies are not rolled back
/// if a later copy fails.
pub fn run_split(config: &SplitConfig) -> SplitResult<SplitSummary> {
    if !(config.train_ratio > 0.0 && config.train_ratio < 1.0) {
        return Err(SplitError::InvalidTrainRatio {
            ratio: config.train_ratio,
        });
    }

    let index = index_pairs(&config.images_dir(), &config.labels_dir())?;
    let total = index.pairs.len();
    let plan = plan_split(index.pairs, config.train_ratio, config.seed)?;

    let train_images = config.output_dir.join("train").join("images");
    let train_labels = config.output_dir.join("train").join("labels");
    let val_images = config.output_dir.join("val").join("images");
    let val_labels = config.output_dir.join("val").join("labels");
    for dir in [&train_images, &train_labels, &val_images, &val_labels] {
        fs::create_dir_all(dir).map_err(|e| SplitError::Io {
            path: dir.clone(),
            source: e,
        })?;
    }

    copy_into(&plan.train, &train_images, &train_labels)?;
    copy_into(&plan.val, &val_images, &val_labels)?;

    let manifest = SplitManifest {
        dataset_dir: config.dataset_dir.display().to_string(),
        images_subdir: config.images_subdir.clone(),
        labels_subdir: config.labels_subdir.clone(),
        train_ratio: config.train_ratio,
        seed: config.seed,
        total,
        train: plan.train.len(),
        val: plan.val.len(),
    };
    manifest.save(&config.output_dir.join(MANIFEST_FILE_NAME))?;

    Ok(SplitSummary {
        total,
        train: plan.train.len(),
        val: plan.val.len(),
        skipped: index.missing_labels,
        output_root: config.output_dir.clone(),
    })
}
