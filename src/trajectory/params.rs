use serde::{Deserialize, Serialize};

use crate::error::{BounceError, Result};

/// Standard gravity, as a positive magnitude
pub const DEFAULT_GRAVITY: f64 = 9.81;
/// Ground dwell added at every contact (seconds)
pub const DEFAULT_CONTACT_TIME: f64 = 0.1;

/// Physical inputs of a bounce trajectory.
///
/// `restitution` must stay strictly below 1: the apex shrinks by `restitution²`
/// per contact and generation stops only once it reaches `stop_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryParameters {
    /// Drop height above the ground (ground = 0)
    pub start_height: f64,
    /// Gravitational acceleration magnitude
    pub gravity: f64,
    /// Fraction of impact speed kept after each contact, in (0, 1)
    pub restitution: f64,
    /// Integration sub-steps per second, also the keyframe frame rate
    pub sample_rate: f64,
    /// Apex height at which the ball is considered at rest
    pub stop_height: f64,
    /// Fixed duration of each ground contact
    pub contact_time: f64,
}

impl Default for TrajectoryParameters {
    fn default() -> Self {
        Self {
            start_height: 1.0,
            gravity: DEFAULT_GRAVITY,
            restitution: 0.9,
            sample_rate: 30.0,
            stop_height: 0.01,
            contact_time: DEFAULT_CONTACT_TIME,
        }
    }
}

impl TrajectoryParameters {
    pub fn new(start_height: f64, gravity: f64, restitution: f64, sample_rate: f64, stop_height: f64) -> Self {
        Self {
            start_height,
            gravity,
            restitution,
            sample_rate,
            stop_height,
            contact_time: DEFAULT_CONTACT_TIME,
        }
    }

    pub fn with_start_height(mut self, start_height: f64) -> Self {
        self.start_height = start_height;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_stop_height(mut self, stop_height: f64) -> Self {
        self.stop_height = stop_height;
        self
    }

    pub fn with_contact_time(mut self, contact_time: f64) -> Self {
        self.contact_time = contact_time;
        self
    }

    /// Integration sub-step in seconds
    pub fn time_step(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Check every precondition, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("start_height", self.start_height),
            ("gravity", self.gravity),
            ("restitution", self.restitution),
            ("sample_rate", self.sample_rate),
            ("stop_height", self.stop_height),
            ("contact_time", self.contact_time),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(BounceError::invalid(name, value, "must be a finite number"));
            }
        }

        let positive = [
            ("start_height", self.start_height),
            ("gravity", self.gravity),
            ("sample_rate", self.sample_rate),
            ("stop_height", self.stop_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(BounceError::invalid(name, value, "must be greater than 0"));
            }
        }

        if self.restitution <= 0.0 || self.restitution >= 1.0 {
            return Err(BounceError::invalid(
                "restitution",
                self.restitution,
                "must lie strictly between 0 and 1",
            ));
        }

        if self.contact_time < 0.0 {
            return Err(BounceError::invalid(
                "contact_time",
                self.contact_time,
                "must not be negative",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TrajectoryParameters::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let params = TrajectoryParameters::default()
            .with_start_height(3.0)
            .with_restitution(0.5)
            .with_contact_time(0.0);
        assert_eq!(params.start_height, 3.0);
        assert_eq!(params.restitution, 0.5);
        assert_eq!(params.contact_time, 0.0);
        assert_eq!(params.gravity, DEFAULT_GRAVITY);
    }

    #[test]
    fn time_step_is_inverse_rate() {
        let params = TrajectoryParameters::default().with_sample_rate(60.0);
        assert!((params.time_step() - 1.0 / 60.0).abs() < 1e-15);
    }

    #[test]
    fn rejects_nan() {
        let err = TrajectoryParameters::default()
            .with_gravity(f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "gravity");
    }

    #[test]
    fn rejects_restitution_of_one() {
        let err = TrajectoryParameters::default()
            .with_restitution(1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "restitution");
    }
}
