//! Core state types for the sun-and-planets simulation.
//!
//! - `Body`   – mass, position, velocity and trail of past positions
//! - `System` – one fixed attractor (the sun) plus the orbiting bodies
//!
//! The system also carries the current simulation time `t`.

use std::collections::VecDeque;

use nalgebra::Vector2;
use tracing::warn;

use super::forces::SunGravity;
use crate::error::GravityError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub trail: VecDeque<NVec2>, // past positions, oldest first
}

impl Body {
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            m,
            trail: VecDeque::new(),
        }
    }

    /// Record the current position in the trail, then advance position by one step
    /// x_n+1 = x_n + dt * v
    ///
    /// With `trail_limit` set, the oldest trail points are dropped so at most
    /// `trail_limit` remain.
    pub fn drift(&mut self, dt: f64, trail_limit: Option<usize>) {
        self.trail.push_back(self.x);
        if let Some(limit) = trail_limit {
            while self.trail.len() > limit {
                self.trail.pop_front();
            }
        }
        self.x += self.v * dt;
    }

    /// Kick the velocity with the attractor's pull over one step
    /// v_n+1 = v_n + dt * a
    ///
    /// Returns the acceleration that was applied. On degenerate separation the
    /// velocity is left untouched.
    pub fn apply_gravity_from(&mut self, attractor: &Body, gravity: &SunGravity, dt: f64) -> Result<NVec2, GravityError> {
        let a = gravity.acceleration(self, attractor)?;
        self.v += a * dt;
        Ok(a)
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub sun: Body, // fixed attractor, never moved by gravity
    pub bodies: Vec<Body>, // orbiting bodies, in insertion order
    pub t: f64, // time
    pub trail_limit: Option<usize>, // None keeps full trails
}

impl System {
    pub fn new(sun: Body) -> Self {
        Self {
            sun,
            bodies: Vec::new(),
            t: 0.0,
            trail_limit: None,
        }
    }

    pub fn with_trail_limit(mut self, trail_limit: Option<usize>) -> Self {
        self.trail_limit = trail_limit;
        self
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Apply the sun's gravity to every orbiting body.
    /// Returns the indices of bodies whose update was skipped.
    pub fn apply_gravity(&mut self, gravity: &SunGravity, dt: f64) -> Vec<usize> {
        let sun = &self.sun;
        let mut skipped = Vec::new();

        for (i, body) in self.bodies.iter_mut().enumerate() {
            if let Err(err) = body.apply_gravity_from(sun, gravity, dt) {
                warn!(body = i, t = self.t, "{err}");
                skipped.push(i);
            }
        }
        skipped
    }

    /// Drift every orbiting body by one step
    pub fn update_bodies(&mut self, dt: f64) {
        let limit = self.trail_limit;
        for body in self.bodies.iter_mut() {
            body.drift(dt, limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_records_position_before_moving() {
        let mut b = Body::new(1.0, NVec2::new(1.0, 2.0), NVec2::new(3.0, -4.0));
        b.drift(0.5, None);

        assert_eq!(b.trail.len(), 1);
        assert_eq!(b.trail[0], NVec2::new(1.0, 2.0));
        assert_eq!(b.x, NVec2::new(2.5, 0.0));
    }

    #[test]
    fn trail_limit_keeps_most_recent_points() {
        let mut b = Body::new(1.0, NVec2::zeros(), NVec2::new(1.0, 0.0));
        for _ in 0..5 {
            b.drift(1.0, Some(2));
        }

        let trail: Vec<NVec2> = b.trail.iter().copied().collect();
        assert_eq!(trail, vec![NVec2::new(3.0, 0.0), NVec2::new(4.0, 0.0)]);
        assert_eq!(b.x, NVec2::new(5.0, 0.0));
    }

    #[test]
    fn sun_is_not_moved_by_a_tick() {
        let sun = Body::new(1e8, NVec2::new(10.0, -10.0), NVec2::new(1.0, 1.0));
        let mut sys = System::new(sun.clone());
        sys.add_body(Body::new(1.0, NVec2::new(100.0, 0.0), NVec2::zeros()));

        let gravity = SunGravity { G: 1.0, min_distance: 0.0 };
        sys.apply_gravity(&gravity, 0.1);
        sys.update_bodies(0.1);

        assert_eq!(sys.sun, sun);
    }
}
