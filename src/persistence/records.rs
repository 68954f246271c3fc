//! On-disk shape of a single body, shared by both file formats.
//!
//! Position and velocity stay plain lists here so a wrong-length entry only
//! fails its own record when it is turned back into a `Body`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub id: String,
    #[serde(rename = "masa")]
    pub mass: f64,
    #[serde(rename = "posicion")]
    pub position: Vec<f64>,
    #[serde(rename = "velocidad")]
    pub velocity: Vec<f64>,
}
