//! Closed-form helpers for vertical motion under constant gravity.
//! `g` is always a positive magnitude pulling toward height 0.

/// Apex height reached by a body launched straight up at `speed`
pub fn apex_height(speed: f64, g: f64) -> f64 {
    0.5 * speed * speed / g
}

/// Launch speed needed to reach `height` (also the impact speed when dropped from it)
pub fn launch_speed(height: f64, g: f64) -> f64 {
    (2.0 * g * height).sqrt()
}

/// Time to fall from rest at `height` down to 0
pub fn fall_time(height: f64, g: f64) -> f64 {
    (2.0 * height / g).sqrt()
}

/// Full ground-to-ground time of an arc whose apex is `peak`
pub fn flight_time(peak: f64, g: f64) -> f64 {
    2.0 * fall_time(peak, g)
}

/// One exact kinematic sub-step, returns (height, velocity).
/// Velocity is positive upward.
pub fn freefall_step(height: f64, velocity: f64, g: f64, dt: f64) -> (f64, f64) {
    let next_height = height + velocity * dt - 0.5 * g * dt * dt;
    let next_velocity = velocity - g * dt;
    (next_height, next_velocity)
}

/// Ground contacts until the apex falls to `stop` or below.
/// Each contact scales the apex by `restitution²`.
pub fn expected_bounce_count(start: f64, stop: f64, restitution: f64) -> u32 {
    if start <= stop {
        return 0;
    }
    let ratio = (stop / start).ln() / (restitution * restitution).ln();
    ratio.ceil().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.81;

    #[test]
    fn apex_and_launch_speed_are_inverse() {
        let v = launch_speed(2.5, G);
        assert!((apex_height(v, G) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn flight_time_is_twice_fall_time() {
        let t = fall_time(1.0, G);
        assert!((t - 0.4515).abs() < 1e-3);
        assert!((flight_time(1.0, G) - 2.0 * t).abs() < 1e-12);
    }

    #[test]
    fn freefall_step_pulls_down() {
        let (h, v) = freefall_step(1.0, 0.0, G, 0.1);
        assert!(h < 1.0, "height should drop under gravity");
        assert!(v < 0.0, "velocity should point down");
        assert!((h - (1.0 - 0.5 * G * 0.01)).abs() < 1e-12);
    }

    #[test]
    fn freefall_step_rising_body_slows() {
        let (h, v) = freefall_step(0.0, 3.0, G, 0.05);
        assert!(h > 0.0);
        assert!(v < 3.0 && v > 0.0);
    }

    #[test]
    fn expected_bounce_count_reference() {
        // ln(0.01) / ln(0.81) = 21.86
        assert_eq!(expected_bounce_count(1.0, 0.01, 0.9), 22);
        assert_eq!(expected_bounce_count(0.005, 0.01, 0.9), 0);
    }
}
