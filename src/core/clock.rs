use std::time::Instant;

/// Wall clock for real-time playback, with an optional speed multiplier
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    time_scale: f64,
}

impl Clock {
    /// Create clock running at real speed, starting now
    pub fn new() -> Self {
        Self::with_time_scale(1.0)
    }

    /// Create clock whose deltas are multiplied by `time_scale`
    pub fn with_time_scale(time_scale: f64) -> Self {
        Self {
            last_tick: Instant::now(),
            time_scale: time_scale.max(0.0),
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Scaled seconds since the previous tick
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        delta * self.time_scale
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009, "delta too small: {}", delta);
    }

    #[test]
    fn paused_clock_reports_zero() {
        let mut clock = Clock::with_time_scale(0.0);
        thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn negative_scale_is_clamped() {
        assert_eq!(Clock::with_time_scale(-2.0).time_scale(), 0.0);
    }
}
