use std::fmt;

use serde::Serialize;

use crate::animation::Keyframe;
use crate::trajectory::{BounceSample, Flight, Trajectory, TrajectoryParameters};

#[derive(Serialize)]
struct TrajectoryDocument<'a> {
    parameters: &'a TrajectoryParameters,
    duration: f64,
    bounces: usize,
    flights: &'a [Flight],
    samples: &'a [BounceSample],
}

/// Full trajectory as pretty-printed JSON
pub fn to_json(trajectory: &Trajectory) -> serde_json::Result<String> {
    let document = TrajectoryDocument {
        parameters: trajectory.parameters(),
        duration: trajectory.duration(),
        bounces: trajectory.bounce_count(),
        flights: trajectory.flights(),
        samples: trajectory.samples(),
    };
    serde_json::to_string_pretty(&document)
}

/// `[{ "frame": .., "value": .. }]` key array for an engine animation
pub fn keyframes_json(trajectory: &Trajectory) -> serde_json::Result<String> {
    let keys: Vec<Keyframe> = trajectory.keyframes();
    serde_json::to_string_pretty(&keys)
}

/// Human-readable flight table
pub fn summary(trajectory: &Trajectory) -> String {
    Summary(trajectory).to_string()
}

/// Flight table view of a trajectory
pub struct Summary<'a>(pub &'a Trajectory);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trajectory = self.0;
        let params = trajectory.parameters();

        writeln!(
            f,
            "Drop from {:.3} m, g = {:.2} m/s², restitution {:.3}, {} Hz",
            params.start_height, params.gravity, params.restitution, params.sample_rate
        )?;
        writeln!(
            f,
            "Samples: {}, bounces: {}, duration: {:.3} s",
            trajectory.len(),
            trajectory.bounce_count(),
            trajectory.duration()
        )?;
        writeln!(f, "{:>6} {:>10} {:>10} {:>10}", "flight", "launch", "landing", "peak")?;
        for (i, flight) in trajectory.flights().iter().enumerate() {
            writeln!(
                f,
                "{:>6} {:>10.4} {:>10.4} {:>10.4}",
                i, flight.launch_time, flight.landing_time, flight.peak_height
            )?;
        }
        writeln!(
            f,
            "final peak {:.5} m (stop at {:.5} m)",
            trajectory.final_peak(),
            params.stop_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::generate;

    #[test]
    fn json_contains_sections() {
        let trajectory = generate(&TrajectoryParameters::default()).unwrap();
        let json = to_json(&trajectory).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["bounces"], trajectory.bounce_count());
        assert_eq!(
            value["samples"].as_array().map(|a| a.len()),
            Some(trajectory.len())
        );
        assert_eq!(value["parameters"]["restitution"], 0.9);
    }

    #[test]
    fn keyframes_round_trip_frames() {
        let trajectory = generate(&TrajectoryParameters::default()).unwrap();
        let json = keyframes_json(&trajectory).unwrap();
        let keys: Vec<Keyframe> = serde_json::from_str(&json).unwrap();
        assert_eq!(keys, trajectory.keyframes());
        assert_eq!(keys[0], Keyframe::new(0.0, 1.0));
    }

    #[test]
    fn summary_lists_every_flight() {
        let trajectory = generate(&TrajectoryParameters::default().with_restitution(0.5)).unwrap();
        let text = summary(&trajectory);
        let rows = text.lines().filter(|l| l.trim_start().starts_with(char::is_numeric)).count();
        assert_eq!(rows, trajectory.flights().len());
        assert!(text.ends_with("m)\n"), "footer should close the table");
    }

    #[test]
    fn summary_view_matches_function() {
        let trajectory = generate(&TrajectoryParameters::default()).unwrap();
        assert_eq!(format!("{}", Summary(&trajectory)), summary(&trajectory));
    }
}
