//! Pendulum dynamics: state, equations of motion, and their integration

pub mod integrators;
pub mod math;
pub mod pendulum;
pub mod phase_space;
