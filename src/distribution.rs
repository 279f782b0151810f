//! Gaussian distribution field over phase space
//!
//! A normalised bivariate Gaussian in `(x, p)` with independent axes, used as
//! an initial distribution of states. All parameters live in an immutable
//! [`GaussianField`] value.

use crate::error::PendulumError;
use crate::physics::math::{Scalar, TAU};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianField {
    /// Centre along x
    pub x0: Scalar,
    /// Centre along p
    pub p0: Scalar,
    pub sigma_x: Scalar,
    pub sigma_p: Scalar,
}

impl Default for GaussianField {
    fn default() -> Self {
        Self {
            x0: -4.0,
            p0: 3.0,
            sigma_x: 0.1,
            sigma_p: 0.1,
        }
    }
}

impl GaussianField {
    pub fn new(
        x0: Scalar,
        p0: Scalar,
        sigma_x: Scalar,
        sigma_p: Scalar,
    ) -> Result<Self, PendulumError> {
        let field = Self {
            x0,
            p0,
            sigma_x,
            sigma_p,
        };
        field.validate()?;
        Ok(field)
    }

    /// Widths must be finite and positive, centres finite
    pub fn validate(&self) -> Result<(), PendulumError> {
        PendulumError::check_positive("sigma_x", self.sigma_x)?;
        PendulumError::check_positive("sigma_p", self.sigma_p)?;
        for (name, value) in [("x0", self.x0), ("p0", self.p0)] {
            if !value.is_finite() {
                return Err(PendulumError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Normalisation constant `1 / (2π σx σp)`, which is also the peak density
    pub fn normalization(&self) -> Scalar {
        1.0 / (TAU * self.sigma_x * self.sigma_p)
    }

    /// Probability density at `(x, p)`
    pub fn density(&self, x: Scalar, p: Scalar) -> Scalar {
        let dx = x - self.x0;
        let dp = p - self.p0;
        let exponent = dx * dx / (2.0 * self.sigma_x * self.sigma_x)
            + dp * dp / (2.0 * self.sigma_p * self.sigma_p);
        self.normalization() * (-exponent).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_at_centre() {
        let field = GaussianField::default();
        let peak = field.density(-4.0, 3.0);

        assert!((peak - 1.0 / (TAU * 0.01)).abs() < 1e-9);
        assert!(field.density(-3.9, 3.0) < peak);
        assert!(field.density(-4.0, 3.1) < peak);
    }

    #[test]
    fn test_one_sigma_falloff() {
        let field = GaussianField::new(0.0, 0.0, 0.5, 2.0).unwrap();
        let ratio = field.density(0.5, 0.0) / field.density(0.0, 0.0);
        assert!((ratio - (-0.5_f64).exp()).abs() < 1e-12);

        let ratio = field.density(0.0, -2.0) / field.density(0.0, 0.0);
        assert!((ratio - (-0.5_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_integrates_to_one() {
        let field = GaussianField::new(1.0, -1.0, 0.3, 0.2).unwrap();
        let h = 0.01;
        let mut total = 0.0;
        for i in -300..=300 {
            for j in -200..=200 {
                let x = field.x0 + i as Scalar * h;
                let p = field.p0 + j as Scalar * h;
                total += field.density(x, p) * h * h;
            }
        }
        assert!((total - 1.0).abs() < 1e-3, "total probability {total}");
    }

    #[test]
    fn test_rejects_bad_widths() {
        assert!(GaussianField::new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(GaussianField::new(0.0, 0.0, 1.0, -1.0).is_err());
        assert!(GaussianField::new(Scalar::NAN, 0.0, 1.0, 1.0).is_err());
    }
}
