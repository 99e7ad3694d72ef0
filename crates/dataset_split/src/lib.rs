//! Train/val splitting for image + label capture datasets.
//!
//! Takes a dataset root holding `images/` and `labels/` subdirectories,
//! pairs every `.jpg` image with its same-stem `.txt` label, shuffles the
//! valid pairs with a seeded RNG, and copies the two partitions into a
//! `{train,val}/{images,labels}` output tree ready for detector training.

pub mod descriptor;
pub mod pairs;
pub mod split;
pub mod types;

// Re-export public API
pub use descriptor::{write_data_yaml, DatasetDescriptor, DATA_YAML_NAME};
pub use pairs::{index_pairs, PairIndex};
pub use split::{plan_split, run_split, SplitPlan};
pub use types::{
    SamplePair, SplitConfig, SplitError, SplitManifest, SplitResult, SplitSummary,
    MANIFEST_FILE_NAME,
};
