use pantilt_tools::{export_args, trainer_args, TrainSpec};
use std::path::{Path, PathBuf};

fn spec() -> TrainSpec {
    TrainSpec {
        data_yaml: PathBuf::from("dataset_split/data.yaml"),
        weights: PathBuf::from("yolo11n.pt"),
        epochs: 100,
        image_size: 640,
        batch: 16,
        patience: 20,
        single_cls: true,
        extra_args: Vec::new(),
    }
}

#[test]
fn trainer_args_carry_the_full_spec() {
    let args = trainer_args(&spec());
    assert_eq!(
        args,
        vec![
            "detect",
            "train",
            "data=dataset_split/data.yaml",
            "model=yolo11n.pt",
            "epochs=100",
            "imgsz=640",
            "batch=16",
            "patience=20",
            "save=True",
            "single_cls=True",
        ]
    );
}

#[test]
fn multi_class_omits_single_cls() {
    let mut s = spec();
    s.single_cls = false;
    let args = trainer_args(&s);
    assert!(!args.iter().any(|a| a.starts_with("single_cls")));
}

#[test]
fn extra_args_come_last() {
    let mut s = spec();
    s.extra_args = vec!["device=0".to_string(), "workers=2".to_string()];
    let args = trainer_args(&s);
    assert_eq!(&args[args.len() - 2..], ["device=0", "workers=2"]);
}

#[test]
fn export_args_name_weights_and_format() {
    let args = export_args(Path::new("best.pt"), "onnx", &[]);
    assert_eq!(args, vec!["export", "model=best.pt", "format=onnx"]);

    let args = export_args(Path::new("best.pt"), "onnx", &["half=True".to_string()]);
    assert_eq!(args.last().map(String::as_str), Some("half=True"));
}
