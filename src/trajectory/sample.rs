use serde::Serialize;

use super::params::TrajectoryParameters;
use crate::animation::Keyframe;
use crate::math::apex_height;

/// One point of the height curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BounceSample {
    pub time: f64,
    pub height: f64,
}

impl BounceSample {
    pub fn new(time: f64, height: f64) -> Self {
        Self { time, height }
    }
}

/// Bounce state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Freefall,
    Contact,
}

/// One airborne arc, recorded when it lands. Flight 0 is the initial drop from rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Flight {
    pub launch_time: f64,
    pub landing_time: f64,
    pub peak_height: f64,
}

impl Flight {
    pub fn airtime(&self) -> f64 {
        self.landing_time - self.launch_time
    }
}

/// Finished bounce curve, ready to hand to an animation player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    parameters: TrajectoryParameters,
    samples: Vec<BounceSample>,
    flights: Vec<Flight>,
    final_launch_speed: f64,
}

impl Trajectory {
    pub(crate) fn new(
        parameters: TrajectoryParameters,
        samples: Vec<BounceSample>,
        flights: Vec<Flight>,
        final_launch_speed: f64,
    ) -> Self {
        Self {
            parameters,
            samples,
            flights,
            final_launch_speed,
        }
    }

    pub fn parameters(&self) -> &TrajectoryParameters {
        &self.parameters
    }

    pub fn samples(&self) -> &[BounceSample] {
        &self.samples
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the last sample
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    /// Number of ground contacts
    pub fn bounce_count(&self) -> usize {
        self.flights.len()
    }

    /// Apex implied by the launch speed after the last contact
    pub fn final_peak(&self) -> f64 {
        apex_height(self.final_launch_speed, self.parameters.gravity)
    }

    /// Samples as engine keyframes, `frame = time * sample_rate`
    pub fn keyframes(&self) -> Vec<Keyframe> {
        let rate = self.parameters.sample_rate;
        self.samples
            .iter()
            .map(|s| Keyframe::new(s.time * rate, s.height))
            .collect()
    }
}
