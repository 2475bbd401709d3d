//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state of the sun and of each planet
//! - [`RenderConfig`]     – optional gnuplot output settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The bundled `scenarios/solar_system.yaml`, trimmed to one planet:
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   dt: 0.5                 # fixed step size
//!   frame_count: 250        # ticks to simulate, one frame each
//!   size: 10000.0           # viewport width/height (rendering only)
//!   min_distance: 0.0       # optional, gravity skipped at or below this separation
//!   trail_limit: ~          # optional, keep only the newest N trail points
//!
//! sun:
//!   x: [ 0.0, 0.0 ]
//!   v: [ 0.0, 0.0 ]
//!   m: 1.0e8
//!
//! planets:
//!   - x: [ -2000.0, -2000.0 ]
//!     v: [ 80.0, -50.0 ]
//!     m: 1.0e3
//!
//! render:                   # optional, every field has a default
//!   output: "Multi_Planet_Sim.gif"
//!   width: 800
//!   height: 800
//!   delay: 10
//!   title: "Multi-Planet Simulation"
//! ```
//!
//! Validation happens when the scenario is built, see
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,           // gravitational constant
    pub dt: f64,          // time step size
    pub frame_count: i64, // number of ticks; negative values are rejected at build time
    pub size: f64,        // viewport width/height
    #[serde(default)]
    pub min_distance: f64, // degenerate separation threshold
    #[serde(default)]
    pub trail_limit: Option<usize>, // trail window, unbounded when absent
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // Initial position in simulation units
    pub v: [f64; 2], // Initial velocity in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Gnuplot animation settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub output: PathBuf, // animated gif written by gnuplot
    pub width: u32,      // image width in pixels
    pub height: u32,     // image height in pixels
    pub delay: u32,      // delay between frames, in 1/100 s
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("Multi_Planet_Sim.gif"),
            width: 800,
            height: 800,
            delay: 10,
            title: "Multi-Planet Simulation".to_string(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub sun: BodyConfig,              // The fixed attractor
    #[serde(default)]
    pub planets: Vec<BodyConfig>,     // Orbiting bodies, in system order
    #[serde(default)]
    pub render: RenderConfig,         // Output settings for the gnuplot sink
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_default() {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
parameters:
  G: 1.0
  dt: 0.5
  frame_count: 3
  size: 100.0
sun:
  x: [0.0, 0.0]
  v: [0.0, 0.0]
  m: 10.0
"#,
        )
        .unwrap();

        assert!(cfg.planets.is_empty());
        assert_eq!(cfg.render, RenderConfig::default());
        assert_eq!(cfg.parameters.min_distance, 0.0);
        assert_eq!(cfg.parameters.trail_limit, None);
    }

    #[test]
    fn vectors_need_two_components() {
        let res = ScenarioConfig::from_yaml_str(
            r#"
parameters: { G: 1.0, dt: 0.5, frame_count: 3, size: 100.0 }
sun: { x: [0.0, 0.0, 0.0], v: [0.0, 0.0], m: 10.0 }
"#,
        );

        assert!(matches!(res, Err(ConfigError::Yaml(_))));
    }
}
