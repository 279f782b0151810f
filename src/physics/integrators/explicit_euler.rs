//! Explicit Euler integration method (forward Euler)
//!
//! WARNING: This integrator is provided primarily for educational and comparison purposes.
//! On the pendulum its energy grows steadily, so a released pendulum slowly
//! swings higher until it eventually starts to rotate.

use super::{Integrator, OdeSystem};
use crate::physics::math::{PhaseState, Scalar};

/// Explicit Euler integrator (forward Euler method)
///
/// The simplest possible numerical integration method: both coordinates are
/// advanced with the derivative evaluated at the start of the step.
///
/// # Algorithm
///
/// ```text
/// y(t+dt) = y(t) + f(y(t), t) * dt
/// ```
///
/// For the pendulum this means the angle is advanced with the OLD angular
/// velocity, which is the difference from symplectic Euler.
///
/// # Mathematical Properties
///
/// - **Order of accuracy**: O(dt) global error
/// - **Derivative evaluations**: 1 per timestep
/// - **Symplectic**: No, phase space area grows every step
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PhaseState, system: &dyn OdeSystem, t: Scalar, dt: Scalar) {
        let derivative = system.derivatives(*state, t);
        *state = *state + derivative * dt;
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["forward_euler"]
    }
}
