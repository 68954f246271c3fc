//! Core state type for the N-body simulation.
//!
//! A `Body` is a named point mass with position `x` and velocity `v`.
//! Mass is checked once, on construction, and never changes afterwards.
//! Fields are crate-private: only the engine's integration pass moves a body.

use std::fmt;

use crate::error::SimError;
use crate::persistence::records::BodyRecord;
use crate::simulation::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) id: String, // unique key inside an engine
    pub(crate) m: f64, // mass, > 0
    pub(crate) x: Vec3, // position
    pub(crate) v: Vec3, // velocity
}

impl Body {
    /// Create a body, rejecting non-positive (or NaN) mass
    pub fn new(id: impl Into<String>, mass: f64, position: Vec3, velocity: Vec3) -> Result<Self, SimError> {
        let id = id.into();
        if !(mass > 0.0) {
            return Err(SimError::validation(format!(
                "mass of body '{id}' must be greater than zero, got {mass}"
            )));
        }
        Ok(Self {
            id,
            m: mass,
            x: position,
            v: velocity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> Vec3 {
        self.x
    }

    pub fn velocity(&self) -> Vec3 {
        self.v
    }

    /// Kick: v <- v + (F / m) * dt
    pub(crate) fn apply_force(&mut self, force: Vec3, dt: f64) {
        let a = force.scale(1.0 / self.m);
        self.v = self.v.add(a.scale(dt));
    }

    /// Drift: x <- x + v * dt, with whatever velocity the body has right now
    pub(crate) fn drift(&mut self, dt: f64) {
        self.x = self.x.add(self.v.scale(dt));
    }

    /// K = 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.v.magnitude();
        0.5 * self.m * speed * speed
    }

    /// U = -G * m1 * m2 / |x1 - x2|
    ///
    /// Coincident bodies give `f64::NEG_INFINITY`.
    pub fn potential_energy_with(&self, other: &Body, g: f64) -> f64 {
        let distance = self.x.sub(other.x).magnitude();
        if distance == 0.0 {
            return f64::NEG_INFINITY;
        }
        -g * (self.m * other.m) / distance
    }

    /// p = m * v
    pub fn momentum(&self) -> Vec3 {
        self.v.scale(self.m)
    }

    pub fn to_record(&self) -> BodyRecord {
        BodyRecord {
            id: self.id.clone(),
            mass: self.m,
            position: self.x.to_array().to_vec(),
            velocity: self.v.to_array().to_vec(),
        }
    }

    /// Rebuild a body from its on-disk record
    /// Fails on non-positive mass or position/velocity lists that are not 3 long
    pub fn from_record(record: BodyRecord) -> Result<Self, SimError> {
        let position = Vec3::from_slice(&record.position)?;
        let velocity = Vec3::from_slice(&record.velocity)?;
        Body::new(record.id, record.mass, position, velocity)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "   Mass: {:.2e} kg", self.m)?;
        writeln!(f, "   Position: {} m", self.x)?;
        write!(f, "   Velocity: {} m/s", self.v)
    }
}
