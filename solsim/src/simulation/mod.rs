pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod frame;
pub mod scenario;
pub mod driver;
