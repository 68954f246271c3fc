//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario is an initial body set plus the run parameters:
//!
//! - [`ParametersConfig`] – gravitational constant, step size, step count
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.674e-11     # optional, defaults to the standard constant
//!   h0: 1.0          # fixed step size in seconds
//!   steps: 10        # number of steps to run
//!
//! bodies:
//!   - id: "a"
//!     mass: 1.0e10
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!   - id: "b"
//!     mass: 1.0e10
//!     position: [100.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//! ```
//!
//! Vector lists must have exactly three entries; that is checked while
//! parsing, so a bad list fails the whole file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::engine::{Engine, G_STANDARD};
use crate::simulation::vector::Vec3;

fn default_steps() -> usize {
    1
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default)]
    pub G: Option<f64>, // gravitational constant, G_STANDARD when absent
    pub h0: f64, // time step size, > 0
    #[serde(default = "default_steps")]
    pub steps: usize, // number of steps for a run
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub id: String, // unique id
    pub mass: f64, // > 0
    pub position: Vec3, // initial position [x, y, z]
    #[serde(default)]
    pub velocity: Vec3, // initial velocity [x, y, z], zero when absent
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // run parameters
    pub bodies: Vec<BodyConfig>, // initial bodies, in listing order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Build an engine holding every configured body
    /// Fails on a non-positive step size, duplicate ids or bad masses.
    pub fn build_engine(&self) -> Result<Engine, SimError> {
        let p = &self.parameters;
        if !(p.h0 > 0.0) {
            return Err(SimError::validation(format!("time step h0 must be positive, got {}", p.h0)));
        }

        let mut engine = Engine::with_gravity(p.G.unwrap_or(G_STANDARD));
        for bc in &self.bodies {
            engine.add_body(&bc.id, bc.mass, bc.position, bc.velocity)?;
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BODY: &str = r#"
parameters:
  G: 6.674e-11
  h0: 1.0
  steps: 3
bodies:
  - id: "a"
    mass: 1.0e10
    position: [0.0, 0.0, 0.0]
  - id: "b"
    mass: 1.0e10
    position: [100.0, 0.0, 0.0]
    velocity: [0.0, 1.0, 0.0]
"#;

    #[test]
    fn scenario_builds_engine_in_order() {
        let cfg = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();
        assert_eq!(cfg.parameters.steps, 3);

        let engine = cfg.build_engine().unwrap();
        assert_eq!(engine.gravitational_constant(), 6.674e-11);
        let ids: Vec<_> = engine.list_bodies().map(|b| b.id()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(engine.get_body("a").unwrap().velocity(), Vec3::zeros());
        assert_eq!(engine.get_body("b").unwrap().velocity(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn scenario_defaults_g_and_steps() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters:\n  h0: 0.5\nbodies:\n  - id: x\n    mass: 2.0\n    position: [1, 2, 3]\n",
        )
        .unwrap();
        assert_eq!(cfg.parameters.steps, 1);
        assert_eq!(cfg.build_engine().unwrap().gravitational_constant(), G_STANDARD);
    }

    #[test]
    fn scenario_rejects_two_component_position() {
        let err = ScenarioConfig::from_yaml_str(
            "parameters:\n  h0: 1.0\nbodies:\n  - id: x\n    mass: 1.0\n    position: [1, 2]\n",
        );
        assert!(matches!(err, Err(SimError::Scenario(_))));
    }

    #[test]
    fn scenario_rejects_non_positive_step_and_duplicates() {
        let zero_step = ScenarioConfig::from_yaml_str(
            "parameters:\n  h0: 0.0\nbodies: []\n",
        )
        .unwrap();
        assert!(matches!(zero_step.build_engine(), Err(SimError::Validation(_))));

        let dup = ScenarioConfig::from_yaml_str(
            "parameters:\n  h0: 1.0\nbodies:\n  - {id: x, mass: 1.0, position: [0, 0, 0]}\n  - {id: x, mass: 2.0, position: [1, 0, 0]}\n",
        )
        .unwrap();
        assert!(matches!(dup.build_engine(), Err(SimError::DuplicateId(id)) if id == "x"));
    }
}
