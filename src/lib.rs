pub mod simulation;
pub mod persistence;
pub mod configuration;
pub mod error;

pub use simulation::vector::{Vec3, NVec3};
pub use simulation::states::Body;
pub use simulation::engine::{Engine, G_STANDARD};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::euler_step;
pub use simulation::diagnostics::Diagnostics;

pub use persistence::{Format, LoadReport};
pub use persistence::records::BodyRecord;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use error::SimError;
