//! Energy and momentum totals reported after each step.
//!
//! These are measured, never stored. Explicit Euler does not conserve them,
//! so drift between steps is expected.

use std::fmt;

use crate::simulation::states::Body;
use crate::simulation::vector::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub kinetic: f64, // sum of 0.5 m v^2
    pub potential: f64, // sum over unique pairs of -G m1 m2 / r
    pub momentum: Vec3, // sum of m v
}

impl Diagnostics {
    pub fn measure(bodies: &[Body], g: f64) -> Self {
        let kinetic = bodies.iter().map(Body::kinetic_energy).sum();

        let mut potential = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                potential += bi.potential_energy_with(bj, g);
            }
        }

        let momentum = bodies
            .iter()
            .fold(Vec3::zeros(), |acc, b| acc.add(b.momentum()));

        Self {
            kinetic,
            potential,
            momentum,
        }
    }

    /// K + U
    pub fn total_energy(&self) -> f64 {
        self.kinetic + self.potential
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total kinetic energy: {:.4e} J", self.kinetic)?;
        writeln!(f, "Total potential energy: {:.4e} J", self.potential)?;
        write!(f, "Total linear momentum: {} kg·m/s", self.momentum)
    }
}
