//! Force contributor for the n-body engine
//!
//! Direct O(n^2) Newtonian gravity without softening. Each unordered pair is
//! visited once and Newton's third law gives the partner's force for free.

use crate::simulation::states::Body;
use crate::simulation::vector::Vec3;

/// Point-mass Newtonian gravity
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Accumulate net forces on all bodies into `out`
    /// - `out[i]` is reset to zero first, then gets the sum over every partner
    /// - pairs at exactly zero separation contribute nothing
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [Vec3]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = Vec3::zeros();
        }

        let n = bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // r points from i to j, so i is pulled along +r and j along -r
                let r = bj.x.sub(bi.x);
                let distance = r.magnitude();

                // Coincident bodies: no defined direction, skip the pair
                if distance == 0.0 {
                    continue;
                }

                // |F| = G * mi * mj / d^2
                let magnitude = self.G * bi.m * bj.m / (distance * distance);
                let f_ij = r.normalize().scale(magnitude);
                let f_ji = f_ij.scale(-1.0);

                out[i] = out[i].add(f_ij);
                out[j] = out[j].add(f_ji);
            }
        }
    }
}
