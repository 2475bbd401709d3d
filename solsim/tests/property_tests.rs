//! Property-based tests for the vector math and the integrator
//!
//! These use proptest to check invariants over randomly generated states
//! instead of a handful of hand-picked ones.

use proptest::prelude::*;
use solsim::{Body, NVec2, Parameters, SunGravity, System, euler_integrator};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4
}

fn vec2() -> impl Strategy<Value = NVec2> {
    (coord(), coord()).prop_map(|(x, y)| NVec2::new(x, y))
}

fn close(a: NVec2, b: NVec2, tol: f64) -> bool {
    (a - b).norm() <= tol * (1.0 + a.norm().max(b.norm()))
}

fn params(dt: f64) -> Parameters {
    Parameters {
        G: 1.0,
        dt,
        frame_count: 0,
        size: 1.0,
        min_distance: 0.0,
        trail_limit: None,
    }
}

proptest! {
    /// (a + b) - b == a
    #[test]
    fn add_then_sub_is_identity(a in vec2(), b in vec2()) {
        prop_assert!(close((a + b) - b, a, 1e-12));
    }

    /// (a * k) / k == a for k != 0
    #[test]
    fn scale_then_divide_is_identity(a in vec2(), k in prop_oneof![-1.0e3..-1.0e-3, 1.0e-3..1.0e3]) {
        prop_assert!(close((a * k) / k, a, 1e-12));
    }

    /// Operators leave their operands untouched
    #[test]
    fn operators_do_not_mutate(a in vec2(), b in vec2(), k in 1.0..10.0f64) {
        let (a0, b0) = (a, b);
        let _ = a + b;
        let _ = a - b;
        let _ = a * k;
        let _ = a / k;
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    /// After t ticks the trail holds exactly the t pre-move positions
    #[test]
    fn trail_length_matches_ticks(x in vec2(), v in vec2(), ticks in 0usize..60) {
        prop_assume!(x.norm() > 1.0);
        let mut sys = System::new(Body::new(1e6, NVec2::zeros(), NVec2::zeros()));
        sys.add_body(Body::new(1.0, x, v));
        let p = params(0.01);
        let gravity = SunGravity { G: p.G, min_distance: p.min_distance };

        let mut before = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            before.push(sys.bodies[0].x);
            euler_integrator(&mut sys, &gravity, &p);
        }

        prop_assert_eq!(sys.bodies[0].trail.len(), ticks);
        prop_assert!(sys.bodies[0].trail.iter().copied().eq(before.into_iter()));
    }

    /// Bodies of different mass at the same state get the same velocity kick
    #[test]
    fn kick_independent_of_mass(x in vec2(), v in vec2(), m1 in 1.0e-3..1.0e9f64, m2 in 1.0e-3..1.0e9f64) {
        prop_assume!(x.norm() > 1.0);
        let sun = Body::new(1e8, NVec2::zeros(), NVec2::zeros());
        let gravity = SunGravity { G: 1.0, min_distance: 0.0 };

        let mut a = Body::new(m1, x, v);
        let mut b = Body::new(m2, x, v);
        a.apply_gravity_from(&sun, &gravity, 0.5).unwrap();
        b.apply_gravity_from(&sun, &gravity, 0.5).unwrap();

        prop_assert!(close(a.v, b.v, 1e-9));
    }
}
