pub mod vector;
pub mod states;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
