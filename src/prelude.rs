//! Pendulum prelude module
//!
//! Re-exports the types and traits most code needs to drive a simulation.

pub use crate::config::SimulationConfig;
pub use crate::distribution::GaussianField;
pub use crate::error::PendulumError;
pub use crate::physics::integrators::{Integrator, IntegratorRegistry, OdeSystem};
pub use crate::physics::math::{PhaseState, Point, Scalar};
pub use crate::physics::pendulum::{Pendulum, PendulumParameters};
pub use crate::physics::phase_space::{EnergyGrid, Motion, separatrix_energy};
pub use crate::trajectory::{Frame, Trajectory};
