pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::SunGravity;
pub use simulation::params::Parameters;
pub use simulation::integrator::{euler_integrator, StepReport};
pub use simulation::frame::{Frame, FrameSnapshot};
pub use simulation::scenario::Scenario;
pub use simulation::driver::{Simulation, RunState, RunSummary, CancelToken};

pub use configuration::config::{ParametersConfig, BodyConfig, RenderConfig, ScenarioConfig};

pub use visualization::sink::{FrameSink, NullSink, FrameRecorder};
pub use visualization::gnuplot::GnuplotSink;

pub use error::{ConfigError, GravityError, SinkError};
