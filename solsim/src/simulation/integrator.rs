//! Fixed-step time integrator for the sun-and-planets system
//!
//! Forward (explicit) Euler: every velocity is kicked from the pre-tick
//! positions, then every position is drifted with the kicked velocity.

use super::forces::SunGravity;
use super::params::Parameters;
use super::states::System;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub skipped_gravity: Vec<usize>, // bodies left without a velocity update
}

/// Advance the system by one step of `params.dt`
///
/// Runs the full gravity pass before the full drift pass, so all bodies see the
/// same attractor state. Updates `sys.t` in-place.
pub fn euler_integrator(sys: &mut System, gravity: &SunGravity, params: &Parameters) -> StepReport {
    let dt = params.dt;

    // Kick: v_n+1 = v_n + dt * a(x_n)
    let skipped_gravity = sys.apply_gravity(gravity, dt);

    // Drift: x_n+1 = x_n + dt * v_n+1, trail gets x_n
    sys.update_bodies(dt);

    sys.t += dt;

    StepReport { skipped_gravity }
}
