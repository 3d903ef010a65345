use serde::{Deserialize, Serialize};

use crate::trajectory::Trajectory;

/// Engine-style animation key: a frame index and the value at that frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: f64,
    pub value: f64,
}

impl Keyframe {
    pub fn new(frame: f64, value: f64) -> Self {
        Self { frame, value }
    }
}

/// Linearly interpolated scalar track
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    frame_rate: f64,
    keys: Vec<Keyframe>,
}

impl KeyframeTrack {
    pub fn new(frame_rate: f64, keys: Vec<Keyframe>) -> Self {
        Self { frame_rate, keys }
    }

    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self::new(trajectory.parameters().sample_rate, trajectory.keyframes())
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Length in seconds
    pub fn duration(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.frame / self.frame_rate)
    }

    /// Value at `time` seconds, held constant outside the key range
    pub fn value_at(&self, time: f64) -> f64 {
        let frame = time * self.frame_rate;

        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if frame <= first.frame {
            return first.value;
        }
        if frame >= last.frame {
            return last.value;
        }

        // First key strictly after `frame`; bounds above guarantee 0 < upper < len
        let upper = self.keys.partition_point(|k| k.frame <= frame);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.frame - a.frame;
        if span <= 0.0 {
            return b.value;
        }
        let t = (frame - a.frame) / span;
        a.value + (b.value - a.value) * t
    }
}
