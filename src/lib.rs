//! Pendulum library
//!
//! A mathematical pendulum integrated with fixed-step ODE solvers, plus the
//! configuration and trajectory output used by the `pendulum` binary.

pub mod cli;
pub mod config;
pub mod distribution;
pub mod error;
pub mod physics;
pub mod prelude;
pub mod trajectory;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use error::PendulumError;
pub use physics::{
    integrators,
    math::{PhaseState, Point, Scalar},
    pendulum::{Pendulum, PendulumParameters},
};
