//! Simulation scenario definition
//!
//! A scenario combines physical parameters with boundary values.

use crate::physics::TransportParameters;
use crate::error::SimulationError;
use crate::solver::boundary::DirichletBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical parameters (the process)
/// - Boundary values (source and sink)
///
/// # Design
///
/// The same scenario can be solved at different resolutions. This is the
/// "WHAT to solve" (not "HOW to solve" — that is
/// [`SolverConfiguration`](crate::solver::SolverConfiguration)).
///
/// # Examples
///
/// ```rust
/// use readi_rs::physics::TransportParameters;
/// use readi_rs::solver::{DirichletBoundaries, Scenario};
///
/// let scenario = Scenario::new(
///     TransportParameters::new(0.005, 1e-10, 2e-4),
///     DirichletBoundaries::source_sink(1.0),
/// );
/// assert!(scenario.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Physical parameters (the process)
    pub parameters: TransportParameters,

    /// Fixed boundary values
    pub boundaries: DirichletBoundaries,
}

impl Scenario {
    /// Create a scenario
    pub fn new(parameters: TransportParameters, boundaries: DirichletBoundaries) -> Self {
        Self { parameters, boundaries }
    }

    /// Verify scenario content (parameters and boundaries)
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.parameters.validate()?;
        self.boundaries.validate()
    }
}
