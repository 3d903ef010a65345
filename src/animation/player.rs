use glam::Vec3;

use super::track::KeyframeTrack;

/// What happens when playback reaches the last key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Wrap back to the first key
    Cycle,
    /// Hold the last key
    #[default]
    Constant,
}

/// Drives a height track over time and writes it into a target's `y`
#[derive(Debug, Clone)]
pub struct Player {
    track: KeyframeTrack,
    loop_mode: LoopMode,
    elapsed: f64,
}

impl Player {
    pub fn new(track: KeyframeTrack, loop_mode: LoopMode) -> Self {
        Self {
            track,
            loop_mode,
            elapsed: 0.0,
        }
    }

    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Playback position in seconds, already wrapped for `Cycle`
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance playback by `delta` seconds
    pub fn tick(&mut self, delta: f64) {
        let duration = self.track.duration();
        self.elapsed += delta.max(0.0);

        match self.loop_mode {
            LoopMode::Cycle if duration > 0.0 => {
                self.elapsed %= duration;
            }
            LoopMode::Cycle => self.elapsed = 0.0,
            LoopMode::Constant => self.elapsed = self.elapsed.min(duration),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.loop_mode == LoopMode::Constant && self.elapsed >= self.track.duration()
    }

    /// Progress through the track [0, 1]
    pub fn progress(&self) -> f64 {
        let duration = self.track.duration();
        if duration > 0.0 {
            (self.elapsed / duration).min(1.0)
        } else {
            1.0
        }
    }

    pub fn height(&self) -> f64 {
        self.track.value_at(self.elapsed)
    }

    /// Write the current height into the target's vertical coordinate
    pub fn apply(&self, target: &mut Vec3) {
        target.y = self.height() as f32;
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}
