use anyhow::Context;
use clap::Parser;
use pantilt_tools::{export_args, ToolConfig};
use std::path::PathBuf;
use std::process::Command;

#[derive(Parser, Debug)]
#[command(
    name = "export_model",
    about = "Export trained detector weights to an interchange format"
)]
struct Args {
    /// Weights to export; defaults to the configured weights path.
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Target format understood by the exporter.
    #[arg(long, default_value = "onnx")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = ToolConfig::load();

    let weights = args.weights.unwrap_or_else(|| cfg.weights_path.clone());
    let status = Command::new(&cfg.yolo_bin)
        .args(export_args(&weights, &args.format, &cfg.export_args))
        .status()
        .with_context(|| format!("launching exporter {}", cfg.yolo_bin.display()))?;
    if !status.success() {
        anyhow::bail!("exporter exited with {status}");
    }
    println!("Exported {} to {}", weights.display(), args.format);
    Ok(())
}
