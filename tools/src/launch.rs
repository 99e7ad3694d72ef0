//! Argument assembly for the external detector CLI.
//!
//! The trainer and exporter are black boxes; these builders only translate
//! our configuration into their `key=value` argument convention.

use std::path::{Path, PathBuf};

/// One training launch: dataset descriptor, starting weights, and the
/// knobs the trainer accepts.
#[derive(Debug, Clone)]
pub struct TrainSpec {
    pub data_yaml: PathBuf,
    pub weights: PathBuf,
    pub epochs: u32,
    pub image_size: u32,
    pub batch: u32,
    pub patience: u32,
    pub single_cls: bool,
    pub extra_args: Vec<String>,
}

pub fn trainer_args(spec: &TrainSpec) -> Vec<String> {
    let mut args = vec![
        "detect".to_string(),
        "train".to_string(),
        format!("data={}", spec.data_yaml.display()),
        format!("model={}", spec.weights.display()),
        format!("epochs={}", spec.epochs),
        format!("imgsz={}", spec.image_size),
        format!("batch={}", spec.batch),
        format!("patience={}", spec.patience),
        "save=True".to_string(),
    ];
    if spec.single_cls {
        args.push("single_cls=True".to_string());
    }
    args.extend(spec.extra_args.iter().cloned());
    args
}

pub fn export_args(weights: &Path, format: &str, extra_args: &[String]) -> Vec<String> {
    let mut args = vec![
        "export".to_string(),
        format!("model={}", weights.display()),
        format!("format={format}"),
    ];
    args.extend(extra_args.iter().cloned());
    args
}
