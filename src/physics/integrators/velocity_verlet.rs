//! Velocity Verlet integration method

use super::{Integrator, OdeSystem};
use crate::physics::math::{PhaseState, Scalar};

/// Velocity Verlet integrator
///
/// A second-order symplectic integrator that provides excellent energy conservation
/// for Hamiltonian systems like the pendulum. It is written in kick-drift-kick form,
/// which needs no history: the acceleration at the end of one step is recomputed
/// at the start of the next.
///
/// The algorithm:
/// 1. Half kick: ω(t+dt/2) = ω(t) + 0.5*α(t)*dt
/// 2. Drift: φ(t+dt) = φ(t) + ω(t+dt/2)*dt
/// 3. Half kick: ω(t+dt) = ω(t+dt/2) + 0.5*α(t+dt)*dt
#[derive(Debug, Copy, Clone, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PhaseState, system: &dyn OdeSystem, t: Scalar, dt: Scalar) {
        let acceleration = system.derivatives(*state, t).angular_velocity;
        let half_velocity = state.angular_velocity + acceleration * (0.5 * dt);

        state.angle += half_velocity * dt;

        let drifted = PhaseState::new(state.angle, half_velocity);
        let new_acceleration = system.derivatives(drifted, t + dt).angular_velocity;
        state.angular_velocity = half_velocity + new_acceleration * (0.5 * dt);
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "velocity_verlet"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["verlet"]
    }
}
