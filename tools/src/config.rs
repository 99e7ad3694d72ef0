use std::path::{Path, PathBuf};

use gimbal_control::GimbalCalibration;
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "pantilt-tools.toml";

#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// External detector CLI used by the train/export launchers.
    pub yolo_bin: PathBuf,
    pub dataset_root: PathBuf,
    pub split_root: PathBuf,
    pub weights_path: PathBuf,
    pub class_names: Vec<String>,
    pub training_args: Vec<String>,
    pub export_args: Vec<String>,
    pub gimbal: GimbalCalibration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            yolo_bin: PathBuf::from("yolo"),
            dataset_root: PathBuf::from("dataset"),
            split_root: PathBuf::from("dataset_split"),
            weights_path: PathBuf::from("yolo11n.pt"),
            class_names: vec!["target".to_string()],
            training_args: Vec::new(),
            export_args: Vec::new(),
            gimbal: GimbalCalibration::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ToolConfigFile {
    yolo_bin: Option<String>,
    dataset_root: Option<String>,
    split_root: Option<String>,
    weights_path: Option<String>,
    class_names: Option<Vec<String>>,
    training: Option<ArgSection>,
    export: Option<ArgSection>,
    gimbal: Option<GimbalSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ArgSection {
    args: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct GimbalSection {
    pan_stop_offset: Option<f32>,
    pitch_stop_offset: Option<f32>,
}

impl ToolConfig {
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("PANTILT_TOOLS_CONFIG") {
            let cfg = Self::from_path(Path::new(&path)).unwrap_or_default();
            cfg.warn_if_invalid();
            return cfg;
        }
        let cfg = Self::from_path(Path::new(DEFAULT_CONFIG_NAME)).unwrap_or_default();
        cfg.warn_if_invalid();
        cfg
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let raw = std::fs::read_to_string(path).ok()?;
        let file: ToolConfigFile = toml::from_str(&raw).ok()?;
        Some(Self::from_file(file))
    }

    fn from_file(file: ToolConfigFile) -> Self {
        ToolConfig {
            yolo_bin: file
                .yolo_bin
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("yolo")),
            dataset_root: file
                .dataset_root
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("dataset")),
            split_root: file
                .split_root
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("dataset_split")),
            weights_path: file
                .weights_path
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("yolo11n.pt")),
            class_names: file
                .class_names
                .filter(|names| !names.is_empty())
                .unwrap_or_else(|| vec!["target".to_string()]),
            training_args: file.training.and_then(|t| t.args).unwrap_or_default(),
            export_args: file.export.and_then(|e| e.args).unwrap_or_default(),
            gimbal: {
                let section = file.gimbal.unwrap_or_default();
                let defaults = GimbalCalibration::default();
                GimbalCalibration {
                    pan_stop_offset: section
                        .pan_stop_offset
                        .unwrap_or(defaults.pan_stop_offset),
                    pitch_stop_offset: section
                        .pitch_stop_offset
                        .unwrap_or(defaults.pitch_stop_offset),
                }
            },
        }
    }

    fn warn_if_invalid(&self) {
        if self.yolo_bin.as_os_str().is_empty() {
            eprintln!("tools config: yolo_bin is empty; train/export launchers will fail");
        }
        if self.class_names.iter().any(|n| n.trim().is_empty()) {
            eprintln!("tools config: class_names contains an empty name");
        }
    }
}

fn expand_path(raw: &str) -> PathBuf {
    let mut out = raw.to_string();
    if let Some(stripped) = out.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME") {
            out = format!("{home}{stripped}");
        }
    }
    PathBuf::from(expand_env(&out))
}

fn expand_env(input: &str) -> String {
    let mut out = String::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() && bytes[i + 1] == b'{' {
            if let Some(end) = input[i + 2..].find('}') {
                let key = &input[i + 2..i + 2 + end];
                if let Ok(val) = std::env::var(key) {
                    out.push_str(&val);
                } else {
                    out.push_str(&format!("${{{}}}", key));
                }
                i += end + 3;
                continue;
            }
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}
