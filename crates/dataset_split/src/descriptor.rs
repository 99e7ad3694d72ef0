//! YOLO `data.yaml` dataset descriptor.

use crate::types::{SplitError, SplitResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_YAML_NAME: &str = "data.yaml";

/// What the trainer needs to know about a split output tree: where the
/// train/val images live (relative to the tree root) and the class names.
#[derive(Debug, Clone)]
pub struct DatasetDescriptor {
    pub train_images: String,
    pub val_images: String,
    pub class_names: Vec<String>,
}

impl Default for DatasetDescriptor {
    fn default() -> Self {
        Self {
            train_images: "train/images".to_string(),
            val_images: "val/images".to_string(),
            class_names: vec!["target".to_string()],
        }
    }
}

impl DatasetDescriptor {
    pub fn with_class_names(class_names: Vec<String>) -> Self {
        Self {
            class_names,
            ..Self::default()
        }
    }
}

fn yaml_single_quoted(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

/// Write `data.yaml` into `output_root` and return the written path.
pub fn write_data_yaml(
    output_root: &Path,
    descriptor: &DatasetDescriptor,
) -> SplitResult<PathBuf> {
    let mut yaml = String::new();
    yaml.push_str(&format!("path: {}\n", output_root.display()));
    yaml.push_str(&format!("train: {}\n", descriptor.train_images));
    yaml.push_str(&format!("val: {}\n", descriptor.val_images));
    yaml.push_str(&format!("nc: {}\n", descriptor.class_names.len()));
    yaml.push_str("names:\n");
    for (id, name) in descriptor.class_names.iter().enumerate() {
        yaml.push_str(&format!("  {}: {}\n", id, yaml_single_quoted(name)));
    }
    let path = output_root.join(DATA_YAML_NAME);
    fs::write(&path, yaml).map_err(|e| SplitError::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_doubles_single_quotes() {
        assert_eq!(yaml_single_quoted("target"), "'target'");
        assert_eq!(yaml_single_quoted("it's"), "'it''s'");
    }
}
