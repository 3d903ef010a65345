use std::iter::FusedIterator;

use log::{debug, trace};

use super::params::TrajectoryParameters;
use super::sample::{BounceSample, Flight, Phase, Trajectory};
use crate::error::Result;
use crate::math::{apex_height, fall_time, flight_time, freefall_step, launch_speed};

/// Streaming bounce state machine.
///
/// Alternates between free fall, integrated at `1 / sample_rate`, and a fixed-length
/// ground contact. Each contact scales the launch speed by the restitution. The
/// stream ends once the apex implied by the launch speed is at or below `stop_height`.
#[derive(Debug, Clone)]
pub struct BounceGenerator {
    params: TrajectoryParameters,
    dt: f64,
    phase: Phase,
    time: f64,
    height: f64,
    velocity: f64,
    launch_speed: f64,
    launch_time: f64,
    bounce_start: f64,
    peak: f64,
    emitted_rest: bool,
    flights: Vec<Flight>,
}

impl BounceGenerator {
    /// Validates `params` and positions the ball at rest at `start_height`
    pub fn new(params: &TrajectoryParameters) -> Result<Self> {
        params.validate()?;

        let g = params.gravity;
        Ok(Self {
            params: *params,
            dt: params.time_step(),
            phase: Phase::Freefall,
            time: 0.0,
            height: params.start_height,
            velocity: 0.0,
            launch_speed: launch_speed(params.start_height, g),
            launch_time: 0.0,
            // The drop starts at the apex, half-way through a full arc
            bounce_start: -fall_time(params.start_height, g),
            peak: params.start_height,
            emitted_rest: false,
            flights: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apex height implied by the current launch speed
    pub fn peak_height(&self) -> f64 {
        self.peak
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Package every sample this generator produced, in order, with its flights
    pub(crate) fn finish(self, samples: Vec<BounceSample>) -> Trajectory {
        Trajectory::new(self.params, samples, self.flights, self.launch_speed)
    }

    fn step_freefall(&mut self) {
        let g = self.params.gravity;
        let (height, velocity) = freefall_step(self.height, self.velocity, g, self.dt);

        if height < 0.0 {
            // Land analytically instead of at the sub-step boundary
            let landing = (self.bounce_start + flight_time(self.peak, g)).max(self.time);
            self.flights.push(Flight {
                launch_time: self.launch_time,
                landing_time: landing,
                peak_height: self.peak,
            });
            trace!(
                "contact {} at t={:.4}s after peak {:.4}",
                self.flights.len(),
                landing,
                self.peak
            );

            self.time = landing;
            self.height = 0.0;
            self.velocity = 0.0;
            self.bounce_start = landing + self.params.contact_time;
            self.phase = Phase::Contact;
        } else {
            self.time += self.dt;
            self.height = height;
            self.velocity = velocity;
        }
    }

    fn step_contact(&mut self) {
        self.time += self.params.contact_time;
        self.launch_speed *= self.params.restitution;
        self.velocity = self.launch_speed;
        self.height = 0.0;
        self.launch_time = self.time;
        self.phase = Phase::Freefall;
    }
}

impl Iterator for BounceGenerator {
    type Item = BounceSample;

    fn next(&mut self) -> Option<BounceSample> {
        if !self.emitted_rest {
            self.emitted_rest = true;
            return Some(BounceSample::new(self.time, self.height));
        }

        if self.peak <= self.params.stop_height {
            return None;
        }

        match self.phase {
            Phase::Freefall => self.step_freefall(),
            Phase::Contact => self.step_contact(),
        }
        self.peak = apex_height(self.launch_speed, self.params.gravity);

        Some(BounceSample::new(self.time, self.height))
    }
}

impl FusedIterator for BounceGenerator {}

/// Run the bounce state machine to completion.
///
/// Fails before producing any sample if a parameter is out of range.
pub fn generate(params: &TrajectoryParameters) -> Result<Trajectory> {
    debug!("generating bounce trajectory: {:?}", params);

    let mut generator = BounceGenerator::new(params)?;
    let samples: Vec<BounceSample> = generator.by_ref().collect();
    let trajectory = generator.finish(samples);

    debug!(
        "trajectory: {} samples, {} bounces, {:.3}s",
        trajectory.len(),
        trajectory.bounce_count(),
        trajectory.duration()
    );
    Ok(trajectory)
}
