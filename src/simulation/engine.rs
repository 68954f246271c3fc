//! Runtime engine: the keyed body collection plus the gravitational constant
//!
//! Bodies live in a `Vec` in insertion order (listing and export order) with a
//! `HashMap` index from id to slot. G is fixed when the engine is built.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::SimError;
use crate::persistence::{self, Format, LoadReport};
use crate::simulation::diagnostics::Diagnostics;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_step;
use crate::simulation::states::Body;
use crate::simulation::vector::Vec3;

/// Standard gravitational constant in m^3 kg^-1 s^-2
pub const G_STANDARD: f64 = 6.67430e-11;

#[derive(Debug, Clone)]
pub struct Engine {
    bodies: Vec<Body>, // insertion ordered
    index: HashMap<String, usize>, // id -> slot in `bodies`
    G: f64, // gravitational constant
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine using [`G_STANDARD`]
    pub fn new() -> Self {
        Self::with_gravity(G_STANDARD)
    }

    /// Engine with a caller-chosen G (tests use non-physical values)
    pub fn with_gravity(g: f64) -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            G: g,
        }
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.G
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Register a new body
    /// Fails without touching the collection if the id is taken or mass <= 0
    pub fn add_body(
        &mut self,
        id: &str,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<&Body, SimError> {
        if self.index.contains_key(id) {
            warn!(id, "rejected body: id already exists");
            return Err(SimError::DuplicateId(id.to_string()));
        }

        let body = Body::new(id, mass, position, velocity).map_err(|e| {
            warn!(id, error = %e, "rejected body");
            e
        })?;

        let slot = self.bodies.len();
        self.index.insert(body.id.clone(), slot);
        self.bodies.push(body);
        info!(id, "body added");

        Ok(&self.bodies[slot])
    }

    pub fn get_body(&self, id: &str) -> Option<&Body> {
        self.index.get(id).map(|&slot| &self.bodies[slot])
    }

    /// Bodies in insertion order
    pub fn list_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Net gravitational force on every body, from the current state
    /// Every id is present; isolated or coincident bodies map to zero.
    pub fn compute_net_forces(&self) -> HashMap<String, Vec3> {
        let mut out = vec![Vec3::zeros(); self.bodies.len()];
        self.gravity().accumulate_forces(&self.bodies, &mut out);

        self.bodies
            .iter()
            .zip(out)
            .map(|(b, f)| (b.id.clone(), f))
            .collect()
    }

    /// Advance the whole system by `dt` (assumed > 0) and report diagnostics
    pub fn step(&mut self, dt: f64) -> Diagnostics {
        let gravity = self.gravity();
        euler_step(&mut self.bodies, &gravity, dt);

        let diagnostics = self.diagnostics();
        info!(
            dt,
            kinetic = diagnostics.kinetic,
            potential = diagnostics.potential,
            momentum = %diagnostics.momentum,
            "simulation step"
        );
        diagnostics
    }

    /// Energy and momentum totals for the current state
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::measure(&self.bodies, self.G)
    }

    /// Write every body to `path`
    /// Returns how many bodies were written; 0 means no file was created.
    pub fn save(&self, path: impl AsRef<Path>, format: Format) -> Result<usize, SimError> {
        persistence::save(&self.bodies, path.as_ref(), format)
    }

    /// Replace the whole collection with the contents of `path`
    /// The current bodies are kept if the file cannot be read or decoded.
    pub fn load(&mut self, path: impl AsRef<Path>, format: Format) -> Result<LoadReport, SimError> {
        let (bodies, skipped) = persistence::load(path.as_ref(), format)?;
        self.replace_bodies(bodies);

        let report = LoadReport {
            loaded: self.bodies.len(),
            skipped,
        };
        info!(
            path = %path.as_ref().display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "simulation loaded"
        );
        Ok(report)
    }

    /// Swap in a new collection; a repeated id overwrites the earlier entry
    /// in place, so the last occurrence wins but keeps the first slot.
    fn replace_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies.clear();
        self.index.clear();

        for body in bodies {
            match self.index.get(&body.id) {
                Some(&slot) => self.bodies[slot] = body,
                None => {
                    self.index.insert(body.id.clone(), self.bodies.len());
                    self.bodies.push(body);
                }
            }
        }
    }

    fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity { G: self.G }
    }
}
