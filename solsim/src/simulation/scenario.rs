//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the sun and planets at t = 0)
//! - the force law (`SunGravity`)
//! - render settings for the gnuplot sink (`RenderConfig`)

use crate::configuration::config::{BodyConfig, RenderConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::forces::SunGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, the current system state and the gravity law.
/// Every value in it has passed validation.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: SunGravity,
    pub render: RenderConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !p_cfg.G.is_finite() || p_cfg.G < 0.0 {
            return Err(ConfigError::InvalidGravitationalConstant(p_cfg.G));
        }
        if !p_cfg.dt.is_finite() || p_cfg.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(p_cfg.dt));
        }
        if p_cfg.frame_count < 0 {
            return Err(ConfigError::NegativeFrameCount(p_cfg.frame_count));
        }
        if !p_cfg.size.is_finite() || p_cfg.size <= 0.0 {
            return Err(ConfigError::InvalidSize(p_cfg.size));
        }
        if !p_cfg.min_distance.is_finite() || p_cfg.min_distance < 0.0 {
            return Err(ConfigError::InvalidMinDistance(p_cfg.min_distance));
        }
        if p_cfg.trail_limit == Some(0) {
            return Err(ConfigError::ZeroTrailLimit);
        }

        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            frame_count: p_cfg.frame_count as u64,
            size: p_cfg.size,
            min_distance: p_cfg.min_distance,
            trail_limit: p_cfg.trail_limit,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let sun = build_body("sun", &cfg.sun)?;
        let mut system = System::new(sun).with_trail_limit(parameters.trail_limit);
        for (i, bc) in cfg.planets.iter().enumerate() {
            system.add_body(build_body(&format!("planet {i}"), bc)?);
        }

        let gravity = SunGravity {
            G: parameters.G,
            min_distance: parameters.min_distance,
        };

        Ok(Self {
            parameters,
            system,
            gravity,
            render: cfg.render,
        })
    }
}

fn build_body(name: &str, bc: &BodyConfig) -> Result<Body, ConfigError> {
    let finite = |field: &str, vals: &[f64]| {
        if vals.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::NonFinite { field: format!("{name}.{field}") })
        }
    };
    finite("x", &bc.x)?;
    finite("v", &bc.v)?;
    finite("m", &[bc.m])?;

    if bc.m <= 0.0 {
        return Err(ConfigError::NonPositiveMass { body: name.to_string(), mass: bc.m });
    }

    Ok(Body::new(bc.m, NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1])))
}
