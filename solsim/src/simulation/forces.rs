//! Force law for the sun-and-planets system
//!
//! Only the attractor pulls on the orbiting bodies. Planets do not pull on
//! each other and nothing pulls on the attractor.

use crate::error::GravityError;
use crate::simulation::states::{Body, NVec2};

/// Newtonian inverse-square gravity from a single attractor
///
/// `min_distance` is the separation at or below which the pull is treated as
/// degenerate and not applied. At the default of `0.0` only exact overlap
/// (and separations whose square underflows) is rejected.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct SunGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // degenerate separation threshold
}

impl SunGravity {
    /// Acceleration of `body` due to `attractor`
    pub fn acceleration(&self, body: &Body, attractor: &Body) -> Result<NVec2, GravityError> {
        // Displacement from the body to the attractor; the pull is along +d
        let d = attractor.x - body.x;

        // Separation |d| and its square
        let r = d.norm();
        let r2 = r * r;

        if !(r > self.min_distance) || !(r2 > 0.0) || !r2.is_finite() {
            return Err(GravityError::DegenerateSeparation {
                distance: r,
                min_distance: self.min_distance,
            });
        }

        // Unit direction toward the attractor
        let r_hat = d / r;

        // |F| = G * m * M / r^2
        let f = self.G * body.m * attractor.m / r2;

        // F = |F| * r_hat, then a = F / m
        // a works out to G * M / r^2 * r_hat, but goes through the body's mass
        let force = r_hat * f;
        let a = force / body.m;

        // Overflow in G * m * M or in the division by r^2 shows up here
        if !a.iter().all(|c| c.is_finite()) {
            return Err(GravityError::NonFiniteAcceleration { distance: r });
        }
        Ok(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gravity() -> SunGravity {
        SunGravity { G: 1.0, min_distance: 0.0 }
    }

    #[test]
    fn points_toward_attractor() {
        let sun = Body::new(1e6, NVec2::zeros(), NVec2::zeros());
        let planet = Body::new(1.0, NVec2::new(0.0, 50.0), NVec2::zeros());

        let a = gravity().acceleration(&planet, &sun).unwrap();
        assert!(a.y < 0.0);
        assert!(a.x.abs() < 1e-12);
    }

    #[test]
    fn overlap_is_degenerate() {
        let sun = Body::new(1e6, NVec2::new(3.0, 4.0), NVec2::zeros());
        let planet = Body::new(1.0, NVec2::new(3.0, 4.0), NVec2::zeros());

        let err = gravity().acceleration(&planet, &sun).unwrap_err();
        assert_eq!(err, GravityError::DegenerateSeparation { distance: 0.0, min_distance: 0.0 });
    }

    #[test]
    fn inside_min_distance_is_degenerate() {
        let sun = Body::new(1e6, NVec2::zeros(), NVec2::zeros());
        let planet = Body::new(1.0, NVec2::new(0.5, 0.0), NVec2::zeros());
        let g = SunGravity { G: 1.0, min_distance: 1.0 };

        assert!(g.acceleration(&planet, &sun).is_err());
    }

    #[test]
    fn overflow_near_attractor_is_rejected() {
        let sun = Body::new(1e8, NVec2::zeros(), NVec2::zeros());
        let planet = Body::new(1e3, NVec2::new(1e-150, 0.0), NVec2::zeros());

        let err = gravity().acceleration(&planet, &sun).unwrap_err();
        assert!(matches!(err, GravityError::NonFiniteAcceleration { .. }));
    }

    #[test]
    fn overflow_from_huge_masses_is_rejected() {
        let sun = Body::new(1e300, NVec2::zeros(), NVec2::zeros());
        let mut planet = Body::new(1e300, NVec2::new(1.0, 0.0), NVec2::new(2.0, 3.0));

        let err = planet.apply_gravity_from(&sun, &gravity(), 0.5).unwrap_err();
        assert_eq!(err, GravityError::NonFiniteAcceleration { distance: 1.0 });
        assert_eq!(planet.v, NVec2::new(2.0, 3.0));
    }
}
