//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and step size (`G`, `dt`),
//! - number of frames to run,
//! - viewport size (rendering only, never used by the physics),
//! - degenerate separation threshold and optional trail window

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub frame_count: u64, // ticks to run, one frame each
    pub size: f64, // viewport width/height in simulation units
    pub min_distance: f64, // gravity skipped at or below this separation
    pub trail_limit: Option<usize>, // None keeps full trails
}
