//! Immutable 3D vector used for positions, velocities and forces
//!
//! `Vec3` wraps an nalgebra `NVec3` but only exposes named operations that
//! return new values, so nothing downstream can mutate a vector in place.
//! In scenario files it is a plain `[x, y, z]` list; deserialization goes
//! through [`Vec3::from_slice`] and therefore rejects any other length.

use std::fmt;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Vec3(NVec3);

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NVec3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(NVec3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Self(self.0 + other.0)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Self(self.0 - other.0)
    }

    /// `v * s`
    pub fn scale(self, s: f64) -> Vec3 {
        Self(self.0 * s)
    }

    /// `s * v`, same result as [`Vec3::scale`]
    pub fn scaled_by(s: f64, v: Vec3) -> Vec3 {
        v.scale(s)
    }

    /// Euclidean norm sqrt(x² + y² + z²)
    pub fn magnitude(self) -> f64 {
        self.0.norm()
    }

    /// Unit vector along `self`
    /// A vector of exactly zero length maps to the zero vector instead of NaN
    pub fn normalize(self) -> Vec3 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vec3::zeros();
        }
        Self(self.0 / mag)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Build from a list of exactly three components
    pub fn from_slice(data: &[f64]) -> Result<Vec3, SimError> {
        match data {
            [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
            _ => Err(SimError::validation(format!(
                "a vector needs exactly 3 components, got {}",
                data.len()
            ))),
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::zeros()
    }
}

impl TryFrom<Vec<f64>> for Vec3 {
    type Error = SimError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Vec3::from_slice(&data)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2e}, {:.2e}, {:.2e})", self.0.x, self.0.y, self.0.z)
    }
}
