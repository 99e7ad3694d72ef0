use clap::Parser;
use gimbal_control::{Gimbal, ServoBank};
use pantilt_tools::ToolConfig;
use std::io;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "gimbal_sweep",
    about = "Exercise the pan/pitch gimbal: full forward, full reverse, stop"
)]
struct Args {
    /// Pause between sweep phases, in seconds.
    #[arg(long, default_value_t = 1.0)]
    pause_secs: f64,
    /// Override the pan stop offset.
    #[arg(long)]
    pan_offset: Option<f32>,
    /// Override the pitch stop offset.
    #[arg(long)]
    pitch_offset: Option<f32>,
}

/// Stand-in bank used when no driver board is wired up; prints each write
/// so the command stream can be inspected.
struct ConsoleBank;

impl ServoBank for ConsoleBank {
    fn set_throttle(&mut self, channel: u8, throttle: f32) -> io::Result<()> {
        println!("channel {channel} throttle {throttle:+.2}");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = ToolConfig::load();

    let mut calibration = cfg.gimbal;
    if let Some(offset) = args.pan_offset {
        calibration.pan_stop_offset = offset;
    }
    if let Some(offset) = args.pitch_offset {
        calibration.pitch_stop_offset = offset;
    }

    let mut gimbal = Gimbal::new(Box::new(ConsoleBank), calibration);
    gimbal.sweep(Duration::from_secs_f64(args.pause_secs))?;
    println!("Sweep complete.");
    Ok(())
}
