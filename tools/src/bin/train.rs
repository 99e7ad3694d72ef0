use anyhow::Context;
use clap::Parser;
use dataset_split::{write_data_yaml, DatasetDescriptor, DATA_YAML_NAME};
use pantilt_tools::{trainer_args, ToolConfig, TrainSpec};
use std::path::PathBuf;
use std::process::Command;

#[derive(Parser, Debug)]
#[command(
    name = "train",
    about = "Launch the external detector trainer over a split dataset"
)]
struct Args {
    /// Dataset descriptor; defaults to <split_root>/data.yaml.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Pretrained weights handed to the trainer.
    #[arg(long)]
    weights: Option<PathBuf>,
    #[arg(long, default_value_t = 100)]
    epochs: u32,
    /// Training image size.
    #[arg(long, default_value_t = 640)]
    imgsz: u32,
    #[arg(long, default_value_t = 16)]
    batch: u32,
    /// Early-stop patience in epochs.
    #[arg(long, default_value_t = 20)]
    patience: u32,
    /// Collapse all classes into one.
    #[arg(long, default_value_t = true)]
    single_cls: bool,
    /// Power the machine off after a successful run.
    #[arg(long, default_value_t = false)]
    shutdown: bool,
    /// Extra key=value args forwarded to the trainer verbatim.
    #[arg(last = true)]
    extra: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = ToolConfig::load();

    let data_yaml = args
        .data
        .unwrap_or_else(|| cfg.split_root.join(DATA_YAML_NAME));
    if !data_yaml.exists() {
        // Recover the descriptor if the split tree is there without one.
        let root = data_yaml.parent().unwrap_or(cfg.split_root.as_path());
        if !root.join("train").join("images").is_dir() {
            anyhow::bail!(
                "dataset descriptor {} not found and {} holds no train/images; run split_dataset first",
                data_yaml.display(),
                root.display()
            );
        }
        let descriptor = DatasetDescriptor::with_class_names(cfg.class_names.clone());
        let written = write_data_yaml(root, &descriptor)?;
        println!("Wrote missing descriptor {}", written.display());
    }

    let mut extra_args = cfg.training_args.clone();
    extra_args.extend(args.extra.iter().cloned());
    let spec = TrainSpec {
        data_yaml,
        weights: args.weights.unwrap_or_else(|| cfg.weights_path.clone()),
        epochs: args.epochs,
        image_size: args.imgsz,
        batch: args.batch,
        patience: args.patience,
        single_cls: args.single_cls,
        extra_args,
    };

    println!(
        "Launching {} with data={} model={}",
        cfg.yolo_bin.display(),
        spec.data_yaml.display(),
        spec.weights.display()
    );
    let status = Command::new(&cfg.yolo_bin)
        .args(trainer_args(&spec))
        .status()
        .with_context(|| format!("launching trainer {}", cfg.yolo_bin.display()))?;
    if !status.success() {
        anyhow::bail!("trainer exited with {status}");
    }
    println!("Training completed.");

    if args.shutdown {
        println!("Shutting down.");
        let status = Command::new("systemctl")
            .arg("poweroff")
            .status()
            .context("issuing poweroff")?;
        if !status.success() {
            anyhow::bail!("poweroff exited with {status}");
        }
    }
    Ok(())
}
