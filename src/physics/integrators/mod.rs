//! Numerical integration methods for the pendulum's equations of motion
//!
//! Every integrator advances a [`PhaseState`] by one fixed time step using the
//! right-hand side supplied by an [`OdeSystem`]. General-purpose methods
//! (explicit Euler, Heun, the Runge-Kutta family) treat the state as an opaque
//! first-order system. Symplectic methods (symplectic Euler, velocity Verlet,
//! PEFRL) treat it as a mechanical `(position, velocity)` pair: they assume
//! d(angle)/dt equals the angular velocity and read the acceleration from the
//! `angular_velocity` component of the derivative.

use crate::physics::math::{PhaseState, Scalar};
use std::fmt;

pub mod explicit_euler;
pub mod heun;
pub mod pefrl;
pub mod registry;
pub mod runge_kutta;
pub mod symplectic_euler;
pub mod velocity_verlet;

pub use explicit_euler::ExplicitEuler;
pub use heun::Heun;
pub use pefrl::Pefrl;
pub use registry::IntegratorRegistry;
pub use runge_kutta::{RungeKuttaFourthOrder, RungeKuttaSecondOrderMidpoint};
pub use symplectic_euler::SymplecticEuler;
pub use velocity_verlet::VelocityVerlet;

/// Name of the integrator used when none is configured
pub const DEFAULT_INTEGRATOR: &str = "rk4";

/// Right-hand side of a first-order system of ODEs in phase space
pub trait OdeSystem {
    /// Time derivative of `state` at time `t`
    fn derivatives(&self, state: PhaseState, t: Scalar) -> PhaseState;
}

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Create a boxed clone of this integrator
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance `state` from `t` to `t + dt`
    ///
    /// # Arguments
    /// * `state` - Mutable reference to the phase-space state
    /// * `system` - Right-hand side of the equations of motion
    /// * `t` - Time at the start of the step
    /// * `dt` - Time step (may be negative to integrate backwards)
    fn step(&self, state: &mut PhaseState, system: &dyn OdeSystem, t: Scalar, dt: Scalar);

    /// Get the order of convergence of this integrator
    fn convergence_order(&self) -> usize;

    /// Get the canonical name of this integrator
    fn name(&self) -> &'static str;

    /// Get alternative names that resolve to this integrator
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integrator({})", self.name())
    }
}

impl<F> OdeSystem for F
where
    F: Fn(PhaseState, Scalar) -> PhaseState,
{
    fn derivatives(&self, state: PhaseState, t: Scalar) -> PhaseState {
        self(state, t)
    }
}
