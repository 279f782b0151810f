//! Numeric types and phase-space arithmetic shared by the physics modules

use std::ops::{Add, Mul};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D point type for the suspension point and rod endpoints
pub type Point = bevy_math::DVec2;

pub const PI: Scalar = std::f64::consts::PI;
pub const TAU: Scalar = std::f64::consts::TAU;

/// A point in the pendulum's phase space
///
/// The same type doubles as the time derivative of a state: when returned
/// from [`OdeSystem::derivatives`](super::integrators::OdeSystem::derivatives),
/// `angle` holds d(angle)/dt and `angular_velocity` holds the angular
/// acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseState {
    /// Angle from the downward vertical, in radians
    pub angle: Scalar,
    /// Angular velocity, in radians per second
    pub angular_velocity: Scalar,
}

impl PhaseState {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(angle: Scalar, angular_velocity: Scalar) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.angular_velocity.is_finite()
    }
}

impl Add for PhaseState {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.angle + rhs.angle,
            self.angular_velocity + rhs.angular_velocity,
        )
    }
}

impl Mul<Scalar> for PhaseState {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        Self::new(self.angle * rhs, self.angular_velocity * rhs)
    }
}

impl From<(Scalar, Scalar)> for PhaseState {
    fn from((angle, angular_velocity): (Scalar, Scalar)) -> Self {
        Self::new(angle, angular_velocity)
    }
}

impl From<PhaseState> for (Scalar, Scalar) {
    fn from(state: PhaseState) -> Self {
        (state.angle, state.angular_velocity)
    }
}

/// Bring an angle back onto `[-π, π]` by a single shift of `2π`.
///
/// Only one shift is applied, so the input is expected to lie within one
/// period of the canonical range, which holds after a single evolution step.
#[inline]
pub fn wrap_angle(angle: Scalar) -> Scalar {
    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}

/// `count` evenly spaced samples from `start` to `end`, both included
pub fn linspace(start: Scalar, end: Scalar, count: usize) -> Vec<Scalar> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as Scalar;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as Scalar
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_inside_range_is_untouched() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), -PI);
        assert_eq!(wrap_angle(1.234), 1.234);
    }

    #[test]
    fn test_wrap_angle_shifts_once() {
        assert!((wrap_angle(PI + 0.5) - (-PI + 0.5)).abs() < 1e-12);
        assert!((wrap_angle(-PI - 0.5) - (PI - 0.5)).abs() < 1e-12);

        // A single shift is all that is applied
        let far = 3.0 * PI + 0.1;
        assert!((wrap_angle(far) - (far - TAU)).abs() < 1e-12);
    }

    #[test]
    fn test_phase_state_arithmetic() {
        let a = PhaseState::new(1.0, 2.0);
        let b = PhaseState::new(0.5, -1.0);
        assert_eq!(a + b, PhaseState::new(1.5, 1.0));
        assert_eq!(a * 2.0, PhaseState::new(2.0, 4.0));
        assert_eq!(<(Scalar, Scalar)>::from(a), (1.0, 2.0));
    }

    #[test]
    fn test_linspace_endpoints() {
        let samples = linspace(-1.0, 1.0, 5);
        assert_eq!(samples, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(3.0, 4.0, 0).is_empty());
    }
}
