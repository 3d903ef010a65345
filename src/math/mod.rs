mod ballistics;

pub use ballistics::{
    apex_height, expected_bounce_count, fall_time, flight_time, freefall_step, launch_speed,
};
