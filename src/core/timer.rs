use std::time::Duration;

/// Longest idle sleep between gate polls, in seconds
const MAX_IDLE: f64 = 0.05;

/// Fixed-rate gate: accumulates wall time and reports how many whole
/// frames at `hz` are due, so playback emits one sample per keyframe slot.
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f64,
    accumulator: f64,
    max_frames: u32,
}

impl FixedHz {
    pub fn new(hz: f64) -> Self {
        Self::with_max_frames(hz, u32::MAX)
    }

    /// Cap the frames reported per tick so a stalled caller does not burst
    pub fn with_max_frames(hz: f64, max_frames: u32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
            max_frames,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Add `delta` seconds, returns number of frames due
    pub fn tick(&mut self, delta: f64) -> u32 {
        self.accumulator += delta;

        let due = (self.accumulator / self.interval).floor();
        let frames = due.min(self.max_frames as f64) as u32;
        if due > self.max_frames as f64 {
            // Drop the backlog we refused to report
            self.accumulator = 0.0;
        } else {
            self.accumulator -= frames as f64 * self.interval;
        }
        frames
    }

    /// How long a polling loop may sleep before the next check
    pub fn idle(&self) -> Duration {
        Duration::from_secs_f64((self.interval * 0.5).min(MAX_IDLE))
    }

    /// Fraction of the next frame already accumulated
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_rate() {
        let mut timer = FixedHz::new(60.0);

        assert_eq!(timer.tick(0.01), 0);
        assert_eq!(timer.tick(0.01), 1); // ~0.02s >= 1/60
        assert_eq!(timer.tick(0.001), 0);
    }

    #[test]
    fn reports_multiple_frames() {
        let mut timer = FixedHz::new(10.0);
        assert_eq!(timer.tick(0.35), 3);
        assert!((timer.alpha() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn idle_is_half_interval() {
        let timer = FixedHz::new(30.0);
        assert!((timer.idle().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn idle_is_capped_for_tiny_rates() {
        let timer = FixedHz::new(1e-21);
        assert_eq!(timer.idle(), Duration::from_secs_f64(MAX_IDLE));
    }

    #[test]
    fn caps_burst_and_drops_backlog() {
        let mut timer = FixedHz::with_max_frames(10.0, 2);
        assert_eq!(timer.tick(1.0), 2);
        assert_eq!(timer.alpha(), 0.0);
    }
}
