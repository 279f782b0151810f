//! Energy landscape of the pendulum over its phase space
//!
//! Level sets of the Hamiltonian are the trajectories of the pendulum, so a
//! grid of energy samples is all a plotting front end needs to draw the
//! phase portrait as contours.

use crate::error::PendulumError;
use crate::physics::math::{Scalar, linspace};
use crate::physics::pendulum::Pendulum;
use std::ops::RangeInclusive;

/// Energy of the trajectory through the inverted equilibrium, `M·G·L`
///
/// Below it the pendulum swings back and forth, above it the pendulum rotates.
pub fn separatrix_energy(pendulum: &Pendulum) -> Scalar {
    pendulum.mass() * pendulum.gravity() * pendulum.length()
}

/// Qualitative kind of motion a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Hanging at the stable equilibrium
    Rest,
    /// Oscillating about the bottom without going over the top
    Libration,
    /// On the separatrix: creeping towards the inverted equilibrium
    Separatrix,
    /// Going all the way around
    Rotation,
}

impl Motion {
    /// Classify the pendulum's current state
    ///
    /// `tolerance` is relative to [`separatrix_energy`] and decides how close
    /// the energy has to be to a boundary level to count as on it.
    pub fn classify(pendulum: &Pendulum, tolerance: Scalar) -> Self {
        let separatrix = separatrix_energy(pendulum);
        let band = tolerance.abs() * separatrix;
        let energy = pendulum.energy();

        if energy <= -separatrix + band {
            Motion::Rest
        } else if (energy - separatrix).abs() <= band {
            Motion::Separatrix
        } else if energy < separatrix {
            Motion::Libration
        } else {
            Motion::Rotation
        }
    }
}

/// Hamiltonian sampled on a regular `(angle, angular velocity)` grid
///
/// Samples are stored row-major: each row holds one angular velocity and
/// runs across all angles.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    angles: Vec<Scalar>,
    angular_velocities: Vec<Scalar>,
    energies: Vec<Scalar>,
}

impl EnergyGrid {
    pub fn sample(
        pendulum: &Pendulum,
        angle_range: RangeInclusive<Scalar>,
        velocity_range: RangeInclusive<Scalar>,
        columns: usize,
        rows: usize,
    ) -> Result<Self, PendulumError> {
        if columns < 2 || rows < 2 {
            return Err(PendulumError::InvalidGrid(format!(
                "need at least 2x2 samples, got {columns}x{rows}"
            )));
        }
        let bounds = [
            angle_range.start(),
            angle_range.end(),
            velocity_range.start(),
            velocity_range.end(),
        ];
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(PendulumError::InvalidGrid(format!(
                "ranges must be finite, got {angle_range:?} and {velocity_range:?}"
            )));
        }

        let angles = linspace(*angle_range.start(), *angle_range.end(), columns);
        let angular_velocities =
            linspace(*velocity_range.start(), *velocity_range.end(), rows);
        let energies = angular_velocities
            .iter()
            .flat_map(|&velocity| {
                angles
                    .iter()
                    .map(move |&angle| pendulum.hamiltonian(angle, velocity))
            })
            .collect();

        Ok(Self {
            angles,
            angular_velocities,
            energies,
        })
    }

    pub fn columns(&self) -> usize {
        self.angles.len()
    }

    pub fn rows(&self) -> usize {
        self.angular_velocities.len()
    }

    pub fn angles(&self) -> &[Scalar] {
        &self.angles
    }

    pub fn angular_velocities(&self) -> &[Scalar] {
        &self.angular_velocities
    }

    pub fn energies(&self) -> &[Scalar] {
        &self.energies
    }

    pub fn energy(&self, column: usize, row: usize) -> Option<Scalar> {
        if column >= self.columns() {
            return None;
        }
        self.energies.get(row * self.columns() + column).copied()
    }

    pub fn min(&self) -> Scalar {
        self.energies.iter().copied().fold(Scalar::INFINITY, Scalar::min)
    }

    pub fn max(&self) -> Scalar {
        self.energies
            .iter()
            .copied()
            .fold(Scalar::NEG_INFINITY, Scalar::max)
    }
}
