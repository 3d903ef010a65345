mod generator;
mod params;
mod sample;

pub use generator::{generate, BounceGenerator};
pub use params::{TrajectoryParameters, DEFAULT_CONTACT_TIME, DEFAULT_GRAVITY};
pub use sample::{BounceSample, Flight, Phase, Trajectory};
