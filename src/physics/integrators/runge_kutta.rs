//! Runge-Kutta integration methods

use super::{Integrator, OdeSystem};
use crate::physics::math::{PhaseState, Scalar};

/// Second-order Runge-Kutta method (Midpoint method)
///
/// This is a 2-stage, 2nd order accurate integrator that evaluates
/// the derivative at the midpoint of the timestep.
///
/// Algorithm:
/// - k1 = f(y, t)
/// - k2 = f(y + k1*dt/2, t + dt/2)
/// - y_new = y + k2*dt
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaSecondOrderMidpoint;

impl Integrator for RungeKuttaSecondOrderMidpoint {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PhaseState, system: &dyn OdeSystem, t: Scalar, dt: Scalar) {
        let half_dt = 0.5 * dt;

        let k1 = system.derivatives(*state, t);
        let k2 = system.derivatives(*state + k1 * half_dt, t + half_dt);

        *state = *state + k2 * dt;
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "rk2_midpoint"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["midpoint", "rk2"]
    }
}

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// A classic multi-stage integrator that provides fourth-order accuracy
/// by combining four intermediate evaluations of the derivative. This is
/// the default integrator for [`Pendulum::evolve`](crate::physics::pendulum::Pendulum::evolve).
///
/// The RK4 algorithm:
/// 1. k1 = f(y, t)
/// 2. k2 = f(y + k1*dt/2, t + dt/2)
/// 3. k3 = f(y + k2*dt/2, t + dt/2)
/// 4. k4 = f(y + k3*dt, t + dt)
/// 5. y(t+dt) = y(t) + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaFourthOrder;

impl Integrator for RungeKuttaFourthOrder {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PhaseState, system: &dyn OdeSystem, t: Scalar, dt: Scalar) {
        let half_dt = 0.5 * dt;

        let k1 = system.derivatives(*state, t);
        let k2 = system.derivatives(*state + k1 * half_dt, t + half_dt);
        let k3 = system.derivatives(*state + k2 * half_dt, t + half_dt);
        let k4 = system.derivatives(*state + k3 * dt, t + dt);

        *state = *state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
    }

    fn convergence_order(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "rk4"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["runge_kutta", "runge_kutta_4"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rk4_constant_acceleration() {
        let rk4 = RungeKuttaFourthOrder;
        let mut state = PhaseState::new(1.0, 1.0);
        let gravity = |s: PhaseState, _: Scalar| PhaseState::new(s.angular_velocity, -9.81);
        let dt = 0.01;

        rk4.step(&mut state, &gravity, 0.0, dt);

        // Constant acceleration is integrated exactly
        assert!((state.angular_velocity - (1.0 - 0.0981)).abs() < 1e-12);
        assert!(
            (state.angle - (1.0 + 0.01 - 0.0004905)).abs() < 1e-12,
            "Angle should match RK4 result, got {:?}",
            state
        );
    }

    #[test]
    fn test_rk4_exponential_growth() {
        // dy/dt = y over one step of 0.1 against e^0.1
        let rk4 = RungeKuttaFourthOrder;
        let growth = |s: PhaseState, _: Scalar| PhaseState::new(s.angle, 0.0);
        let mut state = PhaseState::new(1.0, 0.0);

        rk4.step(&mut state, &growth, 0.0, 0.1);

        assert!((state.angle - 0.1_f64.exp()).abs() < 1e-6);
    }

    #[test]
    fn test_rk2_midpoint_step() {
        let integrator = RungeKuttaSecondOrderMidpoint;
        let mut state = PhaseState::new(0.0, 1.0);
        let gravity = |s: PhaseState, _: Scalar| PhaseState::new(s.angular_velocity, -9.81);

        integrator.step(&mut state, &gravity, 0.0, 0.01);

        // Verify movement occurred
        assert!(state.angle > 0.0);
        assert!(state.angular_velocity < 1.0);
    }
}
