pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod math;
pub mod trajectory;

pub use error::{BounceError, Result};
pub use trajectory::{generate, BounceSample, Trajectory, TrajectoryParameters};
