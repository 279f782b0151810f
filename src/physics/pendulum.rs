//! Mathematical pendulum modelled with Lagrangian dynamics
//!
//! ```text
//!   origin
//!    |\
//!    | \
//!    |  \ L
//!    |φ  \
//!    |    \
//!          O M
//! ```
//!
//! The state is the pair `(φ, ω = dφ/dt)`. Its phase space is a cylinder:
//! the angle is periodic, so [`Pendulum::evolve`] keeps it on `[-π, π]`.

use crate::error::PendulumError;
use crate::physics::integrators::{Integrator, OdeSystem, RungeKuttaFourthOrder};
use crate::physics::math::{PI, PhaseState, Point, Scalar, wrap_angle};
use tracing::trace;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: Scalar = 9.81;

/// Largest internal step taken by [`Pendulum::evolve`] unless configured otherwise
pub const DEFAULT_MAX_STEP: Scalar = 0.01;

/// Physical constants of a pendulum, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    /// Rod length in m
    pub length: Scalar,
    /// Bob mass in kg
    pub mass: Scalar,
    /// Gravitational acceleration in m/s²
    pub gravity: Scalar,
    /// Suspension point
    pub origin: Point,
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            length: 1.0,
            mass: 1.0,
            gravity: STANDARD_GRAVITY,
            origin: Point::ZERO,
        }
    }
}

impl PendulumParameters {
    /// Reject non-physical constants (zero, negative, or non-finite)
    pub fn validate(&self) -> Result<(), PendulumError> {
        PendulumError::check_positive("length", self.length)?;
        PendulumError::check_positive("mass", self.mass)?;
        PendulumError::check_positive("gravity", self.gravity)?;
        if !self.origin.is_finite() {
            return Err(PendulumError::InvalidParameter {
                name: "origin",
                value: if self.origin.x.is_finite() {
                    self.origin.y
                } else {
                    self.origin.x
                },
            });
        }
        Ok(())
    }
}

/// A single mathematical pendulum
///
/// Only [`evolve`](Self::evolve) changes the angle and angular velocity; the
/// physical constants, integrator and step size are fixed at construction.
/// The pendulum holds no rendering state: drawing code reads
/// [`position`](Self::position) and [`energy`](Self::energy) each frame.
#[derive(Debug, Clone)]
pub struct Pendulum {
    angle: Scalar,
    angular_velocity: Scalar,
    length: Scalar,
    mass: Scalar,
    gravity: Scalar,
    origin: Point,
    integrator: Box<dyn Integrator>,
    max_step: Scalar,
}

impl Default for Pendulum {
    /// Inverted and at rest, 1 m long, 1 kg, standard gravity, suspended at the origin
    fn default() -> Self {
        let parameters = PendulumParameters::default();
        Self {
            angle: PI,
            angular_velocity: 0.0,
            length: parameters.length,
            mass: parameters.mass,
            gravity: parameters.gravity,
            origin: parameters.origin,
            integrator: Box::new(RungeKuttaFourthOrder),
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

impl Pendulum {
    /// Create a pendulum from an initial state and its physical constants
    ///
    /// Fails if any constant is not finite and positive, or if the initial
    /// state is not finite.
    pub fn new(
        angle: Scalar,
        angular_velocity: Scalar,
        parameters: PendulumParameters,
    ) -> Result<Self, PendulumError> {
        parameters.validate()?;
        let state = PhaseState::new(angle, angular_velocity);
        if !state.is_finite() {
            return Err(PendulumError::NonFiniteState {
                angle,
                angular_velocity,
            });
        }

        Ok(Self {
            angle,
            angular_velocity,
            length: parameters.length,
            mass: parameters.mass,
            gravity: parameters.gravity,
            origin: parameters.origin,
            ..Self::default()
        })
    }

    /// Replace the integrator used by [`evolve`](Self::evolve)
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Set the largest internal step taken by [`evolve`](Self::evolve)
    pub fn with_max_step(mut self, max_step: Scalar) -> Result<Self, PendulumError> {
        PendulumError::check_positive("max_step", max_step)?;
        self.max_step = max_step;
        Ok(self)
    }

    #[inline]
    pub fn angle(&self) -> Scalar {
        self.angle
    }

    #[inline]
    pub fn angular_velocity(&self) -> Scalar {
        self.angular_velocity
    }

    #[inline]
    pub fn state(&self) -> PhaseState {
        PhaseState::new(self.angle, self.angular_velocity)
    }

    #[inline]
    pub fn length(&self) -> Scalar {
        self.length
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn gravity(&self) -> Scalar {
        self.gravity
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn parameters(&self) -> PendulumParameters {
        PendulumParameters {
            length: self.length,
            mass: self.mass,
            gravity: self.gravity,
            origin: self.origin,
        }
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    pub fn max_step(&self) -> Scalar {
        self.max_step
    }

    /// Position of the bob (the free end of the rod)
    pub fn bob(&self) -> Point {
        self.origin
            + Point::new(
                self.length * self.angle.sin(),
                -self.length * self.angle.cos(),
            )
    }

    /// The rod as a drawable segment: `([x_origin, x_bob], [y_origin, y_bob])`
    pub fn position(&self) -> ([Scalar; 2], [Scalar; 2]) {
        let bob = self.bob();
        ([self.origin.x, bob.x], [self.origin.y, bob.y])
    }

    /// Total mechanical energy (kinetic + potential) of an arbitrary state
    pub fn hamiltonian(&self, angle: Scalar, angular_velocity: Scalar) -> Scalar {
        let kinetic = 0.5 * self.mass * self.length.powi(2) * angular_velocity.powi(2);
        let potential = -self.mass * self.gravity * self.length * angle.cos();
        kinetic + potential
    }

    /// Total mechanical energy of the current state
    pub fn energy(&self) -> Scalar {
        self.hamiltonian(self.angle, self.angular_velocity)
    }

    /// Advance the state from time `t1` to `t2`
    ///
    /// The interval is split into equal sub-steps no longer than the configured
    /// maximum step. `t2 < t1` integrates backwards and `t1 == t2` is a no-op.
    /// After every sub-step the angle is wrapped once back onto `[-π, π]`.
    ///
    /// The number of sub-steps grows with `|t2 - t1| / max_step`, so a huge
    /// but finite interval takes correspondingly long to return.
    ///
    /// On error the state is left unchanged.
    pub fn evolve(&mut self, t1: Scalar, t2: Scalar) -> Result<(), PendulumError> {
        let span = t2 - t1;
        if !span.is_finite() {
            return Err(PendulumError::InvalidInterval { t1, t2 });
        }

        let steps = (span.abs() / self.max_step).ceil() as usize;
        if steps == 0 {
            return Ok(());
        }

        let mut state = self.state();
        let dt = span / steps as Scalar;
        for i in 0..steps {
            let t = t1 + dt * i as Scalar;
            self.integrator.step(&mut state, &*self, t, dt);
            state.angle = wrap_angle(state.angle);
        }

        if !state.is_finite() {
            return Err(PendulumError::NonFiniteState {
                angle: state.angle,
                angular_velocity: state.angular_velocity,
            });
        }

        self.angle = state.angle;
        self.angular_velocity = state.angular_velocity;

        trace!(
            t1,
            t2,
            steps,
            angle = self.angle,
            angular_velocity = self.angular_velocity,
            "evolved pendulum"
        );
        Ok(())
    }
}

impl OdeSystem for Pendulum {
    /// `(dφ/dt, dω/dt) = (ω, -G·sin(φ)/L)`
    ///
    /// The angular acceleration is exactly zero at the inverted equilibrium
    /// `|φ| == π`. The system is autonomous, so `t` is ignored.
    fn derivatives(&self, state: PhaseState, _t: Scalar) -> PhaseState {
        let angular_acceleration = if state.angle.abs() == PI {
            0.0
        } else {
            -self.gravity * state.angle.sin() / self.length
        };
        PhaseState::new(state.angular_velocity, angular_acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::{ExplicitEuler, SymplecticEuler};

    fn pendulum(angle: Scalar, angular_velocity: Scalar) -> Pendulum {
        Pendulum::new(angle, angular_velocity, PendulumParameters::default()).unwrap()
    }

    #[test]
    fn test_default_is_inverted_at_rest() {
        let pendulum = Pendulum::default();
        assert_eq!(pendulum.angle(), PI);
        assert_eq!(pendulum.angular_velocity(), 0.0);
        assert_eq!(pendulum.length(), 1.0);
        assert_eq!(pendulum.mass(), 1.0);
        assert_eq!(pendulum.gravity(), 9.81);
        assert_eq!(pendulum.origin(), Point::ZERO);
        assert_eq!(pendulum.integrator().name(), "rk4");
        assert_eq!(pendulum.max_step(), DEFAULT_MAX_STEP);
    }

    #[test]
    fn test_rejects_non_physical_parameters() {
        for (name, parameters) in [
            (
                "length",
                PendulumParameters {
                    length: 0.0,
                    ..Default::default()
                },
            ),
            (
                "mass",
                PendulumParameters {
                    mass: -1.0,
                    ..Default::default()
                },
            ),
            (
                "gravity",
                PendulumParameters {
                    gravity: Scalar::NAN,
                    ..Default::default()
                },
            ),
        ] {
            match Pendulum::new(0.0, 0.0, parameters) {
                Err(PendulumError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected invalid {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite_state() {
        let result = Pendulum::new(Scalar::INFINITY, 0.0, PendulumParameters::default());
        assert!(matches!(result, Err(PendulumError::NonFiniteState { .. })));
    }

    #[test]
    fn test_rejects_bad_max_step() {
        assert!(Pendulum::default().with_max_step(0.0).is_err());
        assert!(Pendulum::default().with_max_step(-0.1).is_err());
        assert_eq!(
            Pendulum::default().with_max_step(0.001).unwrap().max_step(),
            0.001
        );
    }

    #[test]
    fn test_position_hanging_down() {
        let pendulum = pendulum(0.0, 0.0);
        assert_eq!(pendulum.position(), ([0.0, 0.0], [0.0, -1.0]));
    }

    #[test]
    fn test_position_uses_origin() {
        let parameters = PendulumParameters {
            length: 2.0,
            origin: Point::new(1.0, 3.0),
            ..Default::default()
        };
        let pendulum = Pendulum::new(PI / 2.0, 0.0, parameters).unwrap();
        let (xs, ys) = pendulum.position();

        assert_eq!(xs[0], 1.0);
        assert_eq!(ys[0], 3.0);
        assert!((xs[1] - 3.0).abs() < 1e-12);
        assert!((ys[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_hamiltonian_terms() {
        let parameters = PendulumParameters {
            length: 2.0,
            mass: 3.0,
            gravity: 10.0,
            ..Default::default()
        };
        let pendulum = Pendulum::new(0.0, 0.0, parameters).unwrap();

        // Potential only: -M G L cos(0)
        assert_eq!(pendulum.hamiltonian(0.0, 0.0), -60.0);
        // Kinetic adds 0.5 M L² ω²
        assert_eq!(pendulum.hamiltonian(PI / 2.0, 1.0).round(), 6.0);
        assert_eq!(pendulum.energy(), pendulum.hamiltonian(0.0, 0.0));
    }

    #[test]
    fn test_derivatives_singular_guard() {
        let pendulum = Pendulum::default();
        for velocity in [-3.0, 0.0, 2.5] {
            let up = pendulum.derivatives(PhaseState::new(PI, velocity), 0.0);
            let down = pendulum.derivatives(PhaseState::new(-PI, velocity), 7.0);
            assert_eq!(up, PhaseState::new(velocity, 0.0));
            assert_eq!(down, PhaseState::new(velocity, 0.0));
        }
    }

    #[test]
    fn test_derivatives_restoring_force() {
        let pendulum = pendulum(0.0, 0.0);
        let derivative = pendulum.derivatives(PhaseState::new(PI / 2.0, 1.5), 0.0);
        assert_eq!(derivative.angle, 1.5);
        assert!((derivative.angular_velocity + 9.81).abs() < 1e-12);
    }

    #[test]
    fn test_evolve_zero_interval_is_noop() {
        let mut pendulum = pendulum(0.3, -0.2);
        pendulum.evolve(1.0, 1.0).unwrap();
        assert_eq!(pendulum.state(), PhaseState::new(0.3, -0.2));
    }

    #[test]
    fn test_evolve_backwards_retraces() {
        let mut pendulum = pendulum(0.5, 0.0);
        pendulum.evolve(0.0, 0.7).unwrap();
        pendulum.evolve(0.7, 0.0).unwrap();

        assert!((pendulum.angle() - 0.5).abs() < 1e-6);
        assert!(pendulum.angular_velocity().abs() < 1e-6);
    }

    #[test]
    fn test_evolve_rejects_non_finite_interval() {
        let mut pendulum = pendulum(0.5, 0.0);
        let result = pendulum.evolve(0.0, Scalar::NAN);
        assert!(matches!(result, Err(PendulumError::InvalidInterval { .. })));
        assert_eq!(pendulum.state(), PhaseState::new(0.5, 0.0));
    }

    #[test]
    fn test_evolve_wraps_rotating_pendulum() {
        // Fast enough to go over the top
        let mut pendulum = pendulum(3.0, 10.0);
        pendulum.evolve(0.0, 0.05).unwrap();

        assert!(pendulum.angle() < 0.0, "angle should wrap, got {}", pendulum.angle());
        assert!(pendulum.angle() >= -PI);
    }

    #[test]
    fn test_evolve_wraps_over_long_intervals() {
        let mut pendulum = pendulum(0.0, 10.0);

        for second in 0..5 {
            let t = second as Scalar;
            pendulum.evolve(t, t + 1.0).unwrap();
            assert!(
                (-PI..=PI).contains(&pendulum.angle()),
                "angle {} escaped after {} s",
                pendulum.angle(),
                second + 1
            );
        }
    }

    #[test]
    fn test_evolve_uses_configured_integrator() {
        let mut rk4 = pendulum(1.0, 0.0);
        let mut euler = pendulum(1.0, 0.0).with_integrator(Box::new(ExplicitEuler));
        let mut symplectic = pendulum(1.0, 0.0).with_integrator(Box::new(SymplecticEuler));
        let initial_energy = rk4.energy();

        for pendulum in [&mut rk4, &mut euler, &mut symplectic] {
            pendulum.evolve(0.0, 5.0).unwrap();
        }

        let drift = |p: &Pendulum| ((p.energy() - initial_energy) / initial_energy).abs();
        assert!(drift(&rk4) < 1e-6);
        assert!(drift(&euler) > drift(&symplectic));
    }
}
