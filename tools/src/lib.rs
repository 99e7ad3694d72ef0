pub mod config;
pub mod launch;

pub use config::ToolConfig;
pub use launch::{export_args, trainer_args, TrainSpec};
