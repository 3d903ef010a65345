// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::config;
use crate::trajectory::TrajectoryParameters;

#[derive(Parser, Debug, Clone)]
#[command(name = "bounce-keyframes")]
#[command(about = "Bouncing-ball keyframe generator", long_about = None)]
pub struct Cli {
    /// JSON file with trajectory parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial drop height
    #[arg(long)]
    pub start_height: Option<f64>,

    /// Gravity magnitude
    #[arg(long)]
    pub gravity: Option<f64>,

    /// Coefficient of restitution, in (0, 1)
    #[arg(long)]
    pub restitution: Option<f64>,

    /// Sub-steps (and keyframes) per second
    #[arg(long)]
    pub sample_rate: Option<f64>,

    /// Apex height at which the ball comes to rest
    #[arg(long)]
    pub stop_height: Option<f64>,

    /// Ground contact duration in seconds
    #[arg(long)]
    pub contact_time: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Play the trajectory back in real time as a text height bar
    #[arg(long, default_value = "false", conflicts_with_all = ["format", "output", "quiet"])]
    pub play: bool,

    /// Suppress console output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Keyframes,
}

impl Cli {
    /// Apply command-line overrides on top of `base`
    pub fn merge_into(&self, base: TrajectoryParameters) -> TrajectoryParameters {
        TrajectoryParameters {
            start_height: self.start_height.unwrap_or(base.start_height),
            gravity: self.gravity.unwrap_or(base.gravity),
            restitution: self.restitution.unwrap_or(base.restitution),
            sample_rate: self.sample_rate.unwrap_or(base.sample_rate),
            stop_height: self.stop_height.unwrap_or(base.stop_height),
            contact_time: self.contact_time.unwrap_or(base.contact_time),
        }
    }

    /// Defaults, then the config file, then flags; validated as a whole
    pub fn resolve(&self) -> Result<TrajectoryParameters> {
        let base = match &self.config {
            Some(path) => config::load(path)?,
            None => TrajectoryParameters::default(),
        };
        let params = self.merge_into(base);
        params.validate().context("Invalid trajectory parameters")?;
        Ok(params)
    }
}
