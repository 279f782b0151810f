//! Frame-by-frame sampling of a pendulum's motion
//!
//! A [`Trajectory`] plays the role of an animation loop: each frame it calls
//! [`Pendulum::evolve`] over one frame interval and records what a renderer
//! would draw.

use crate::error::PendulumError;
use crate::physics::math::{Point, Scalar};
use crate::physics::pendulum::Pendulum;
use std::fmt::Write;

/// Column names matching [`Frame::to_csv_row`]
pub const CSV_HEADER: &str = "time,angle,angular_velocity,x,y,energy";

/// Snapshot of the pendulum at one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub time: Scalar,
    pub angle: Scalar,
    pub angular_velocity: Scalar,
    /// Position of the bob
    pub bob: Point,
    pub energy: Scalar,
}

impl Frame {
    pub fn capture(time: Scalar, pendulum: &Pendulum) -> Self {
        Self {
            time,
            angle: pendulum.angle(),
            angular_velocity: pendulum.angular_velocity(),
            bob: pendulum.bob(),
            energy: pendulum.energy(),
        }
    }

    pub fn to_csv_row(&self, precision: usize) -> String {
        let mut row = String::new();
        for (i, value) in [
            self.time,
            self.angle,
            self.angular_velocity,
            self.bob.x,
            self.bob.y,
            self.energy,
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                row.push(',');
            }
            // Writing into a String cannot fail
            let _ = write!(row, "{value:.precision$}");
        }
        row
    }
}

/// Iterator over the frames of a simulation run
///
/// Yields the initial state at `t = 0` followed by one frame per
/// `frame_dt` until `duration` (rounded to a whole number of frames).
/// Stops after the first integration error.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pendulum: Pendulum,
    frame_dt: Scalar,
    frame_count: usize,
    next_frame: usize,
    failed: bool,
}

impl Trajectory {
    pub fn new(
        pendulum: Pendulum,
        frame_dt: Scalar,
        duration: Scalar,
    ) -> Result<Self, PendulumError> {
        PendulumError::check_positive("frame_dt", frame_dt)?;
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(PendulumError::InvalidParameter {
                name: "duration",
                value: duration,
            });
        }

        Ok(Self {
            pendulum,
            frame_dt,
            frame_count: (duration / frame_dt).round() as usize + 1,
            next_frame: 0,
            failed: false,
        })
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    /// Total number of frames including the initial one
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn time_of(&self, frame: usize) -> Scalar {
        frame as Scalar * self.frame_dt
    }
}

impl Iterator for Trajectory {
    type Item = Result<Frame, PendulumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_frame >= self.frame_count {
            return None;
        }

        let frame = self.next_frame;
        self.next_frame += 1;
        let time = self.time_of(frame);

        if frame > 0 {
            if let Err(e) = self.pendulum.evolve(self.time_of(frame - 1), time) {
                self.failed = true;
                return Some(Err(e));
            }
        }

        Some(Ok(Frame::capture(time, &self.pendulum)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.failed {
            0
        } else {
            self.frame_count - self.next_frame
        };
        (0, Some(remaining))
    }
}
