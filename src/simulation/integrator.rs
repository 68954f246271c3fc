//! Fixed-step explicit Euler integrator for the N-body system
//!
//! One force evaluation per step. Velocities are kicked with the forces from
//! the start of the step, then positions drift with the *new* velocities.

use super::forces::NewtonianGravity;
use super::states::Body;
use super::vector::Vec3;

/// Advance `bodies` by one step of size `dt`
/// All forces come from a single snapshot taken before any body is touched.
pub fn euler_step(bodies: &mut [Body], gravity: &NewtonianGravity, dt: f64) {
    let n = bodies.len();

    // F_n from x_n, for every body, before any update
    let mut forces = vec![Vec3::zeros(); n];
    gravity.accumulate_forces(bodies, &mut forces);

    // Kick: v_n+1 = v_n + dt * F_n / m
    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        b.apply_force(*f, dt);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.drift(dt);
    }
}
