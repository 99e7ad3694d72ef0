use std::fs;
use std::path::PathBuf;

use pantilt_tools::ToolConfig;

fn write_temp_config(tag: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "pantilt-tools-test-{}-{}.toml",
        tag,
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn loads_minimal_config() {
    let path = write_temp_config("minimal", "yolo_bin = \"yolo\"\n");
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.yolo_bin, PathBuf::from("yolo"));
    assert_eq!(cfg.split_root, PathBuf::from("dataset_split"));
    assert_eq!(cfg.class_names, vec!["target".to_string()]);
    let _ = fs::remove_file(&path);
}

#[test]
fn loads_sections_and_overrides() {
    let path = write_temp_config(
        "sections",
        "dataset_root = \"captures\"\nweights_path = \"weights/start.pt\"\nclass_names = [\"cat\", \"dog\"]\n\n[training]\nargs = [\"device=0\"]\n\n[export]\nargs = [\"half=True\"]\n",
    );
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.dataset_root, PathBuf::from("captures"));
    assert_eq!(cfg.weights_path, PathBuf::from("weights/start.pt"));
    assert_eq!(cfg.class_names, vec!["cat".to_string(), "dog".to_string()]);
    assert_eq!(cfg.training_args, vec!["device=0".to_string()]);
    assert_eq!(cfg.export_args, vec!["half=True".to_string()]);
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_yields_none() {
    let path = PathBuf::from("definitely-not-a-real-config.toml");
    assert!(ToolConfig::from_path(&path).is_none());
}

#[test]
fn gimbal_section_merges_over_defaults() {
    let path = write_temp_config("gimbal", "[gimbal]\npan_stop_offset = 0.02\n");
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert!((cfg.gimbal.pan_stop_offset - 0.02).abs() < 1e-6);
    assert!((cfg.gimbal.pitch_stop_offset + 0.08).abs() < 1e-6);
    let _ = fs::remove_file(&path);
}

#[test]
fn empty_class_names_fall_back_to_default() {
    let path = write_temp_config("classes", "class_names = []\n");
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.class_names, vec!["target".to_string()]);
    let _ = fs::remove_file(&path);
}
