use anyhow::Context;
use clap::Parser;
use dataset_split::{run_split, write_data_yaml, DatasetDescriptor, SplitConfig};
use pantilt_tools::ToolConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "split_dataset",
    about = "Split an images+labels dataset into train/val trees"
)]
struct Args {
    /// Dataset root containing the images and labels subdirectories.
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Name of the images subdirectory.
    #[arg(long, default_value = "images")]
    images_subdir: String,
    /// Name of the labels subdirectory.
    #[arg(long, default_value = "labels")]
    labels_subdir: String,
    /// Output root for the train/val tree.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Fraction of valid pairs assigned to train.
    #[arg(long, default_value_t = 0.8)]
    train_ratio: f64,
    /// Shuffle seed; the same seed over the same inputs reproduces the split.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Skip writing the data.yaml descriptor into the output root.
    #[arg(long, default_value_t = false)]
    no_descriptor: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = ToolConfig::load();

    let config = SplitConfig {
        dataset_dir: args.dataset.unwrap_or_else(|| cfg.dataset_root.clone()),
        images_subdir: args.images_subdir,
        labels_subdir: args.labels_subdir,
        output_dir: args.output.unwrap_or_else(|| cfg.split_root.clone()),
        train_ratio: args.train_ratio,
        seed: args.seed,
    };

    let summary = run_split(&config)
        .with_context(|| format!("splitting {}", config.dataset_dir.display()))?;
    for name in &summary.skipped {
        eprintln!("Warning: no label file found for {name}");
    }
    println!(
        "Split {} pairs: train={} val={} (ratio={}, seed={})",
        summary.total, summary.train, summary.val, config.train_ratio, config.seed
    );

    if !args.no_descriptor {
        let descriptor = DatasetDescriptor::with_class_names(cfg.class_names.clone());
        let path = write_data_yaml(&summary.output_root, &descriptor)?;
        println!("Wrote descriptor {}", path.display());
    }
    println!("Output saved to {}", summary.output_root.display());
    Ok(())
}
