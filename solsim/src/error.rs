//! Error types for the simulation library
//!
//! - [`ConfigError`]  – a scenario that cannot be turned into a valid run
//! - [`GravityError`] – a single gravity update that had to be skipped
//! - [`SinkError`]    – the rendering side failed to accept a frame

use std::io;

use thiserror::Error;

/// Rejected scenario configuration, raised while building a `Scenario`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{body} has non-positive mass {mass}")]
    NonPositiveMass { body: String, mass: f64 },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("frame count must not be negative, got {0}")]
    NegativeFrameCount(i64),

    #[error("gravitational constant must be finite and non-negative, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("viewport size must be positive and finite, got {0}")]
    InvalidSize(f64),

    #[error("minimum distance must be finite and non-negative, got {0}")]
    InvalidMinDistance(f64),

    #[error("trail limit must be at least 1 when set")]
    ZeroTrailLimit,

    #[error("{field} is not a finite number")]
    NonFinite { field: String },

    #[error("failed to read scenario file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Gravity could not be applied to a body this tick
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GravityError {
    #[error("separation {distance} from the attractor is within {min_distance}; gravity skipped")]
    DegenerateSeparation { distance: f64, min_distance: f64 },

    #[error("acceleration at separation {distance} overflowed; gravity skipped")]
    NonFiniteAcceleration { distance: f64 },
}

/// The frame consumer failed
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to start renderer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),

    #[error("sink is already closed")]
    Closed,
}
