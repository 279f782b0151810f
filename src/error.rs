//! Error type shared by the library modules

use crate::physics::math::Scalar;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PendulumError {
    /// A physical constant was zero, negative or not finite
    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: Scalar },

    /// The phase-space state is not finite, either as given or after integration
    #[error("non-finite pendulum state: angle = {angle}, angular velocity = {angular_velocity}")]
    NonFiniteState {
        angle: Scalar,
        angular_velocity: Scalar,
    },

    #[error("invalid time interval: [{t1}, {t2}]")]
    InvalidInterval { t1: Scalar, t2: Scalar },

    #[error("Unknown integrator: '{name}'. Available integrators: {available}. Aliases: {aliases}")]
    UnknownIntegrator {
        name: String,
        available: String,
        aliases: String,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

impl PendulumError {
    /// Check that `value` is finite and strictly positive
    pub(crate) fn check_positive(name: &'static str, value: Scalar) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}
