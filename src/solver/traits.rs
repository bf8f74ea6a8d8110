//! Numerical solver trait and types
//!
//! # Design Philosophy
//!
//! - [`Solver`] is the stable interface every numerical method implements
//! - [`SolverConfiguration`] carries the "HOW to solve" knobs and validates
//!   them before any computation
//! - [`Solution`] carries the two output sequences plus string metadata for
//!   diagnostics and reproducibility

use std::collections::HashMap;

use nalgebra::DVector;

use crate::error::SimulationError;
use crate::solver::scenario::Scenario;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a time-evolution solve
///
/// Defines the discretization independently of the physical scenario, so
/// the same scenario can be refined in time or space without touching the
/// physics.
///
/// # Examples
///
/// ```rust
/// use readi_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(
///     7200.0,  // total simulated time (s)
///     1000,    // time steps
///     50,      // spatial intervals
/// );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// Total simulated time `T` (seconds)
    pub total_time: f64,

    /// Number of time steps `Nt`
    pub time_steps: usize,

    /// Number of spatial intervals `Nx`
    pub grid_intervals: usize,
}

impl SolverConfiguration {
    /// Create a time-evolution configuration
    pub fn time_evolution(total_time: f64, time_steps: usize, grid_intervals: usize) -> Self {
        Self { total_time, time_steps, grid_intervals }
    }

    /// Time step size `dt = T / Nt`
    pub fn dt(&self) -> f64 {
        self.total_time / self.time_steps as f64
    }

    /// Validate that the configuration is numerically meaningful
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "total_time",
                value: self.total_time,
                reason: "total simulated time must be positive and finite",
            });
        }

        if self.time_steps == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "time_steps",
                value: self.time_steps as f64,
                reason: "at least one time step is required",
            });
        }

        if self.grid_intervals < 2 {
            return Err(SimulationError::InvalidParameter {
                name: "grid_intervals",
                value: self.grid_intervals as f64,
                reason: "at least 2 spatial intervals are required",
            });
        }

        Ok(())
    }
}

// =================================================================================================
// Solution
// =================================================================================================

/// Result of a completed solve
///
/// Holds the node coordinates and the concentration field after the final
/// time step. The two sequences always have the same length; index `i` in
/// one corresponds to index `i` in the other.
///
/// No per-step trajectory is retained: each step overwrites the previous
/// field, and only the final instant is meaningful output.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Node coordinates, `0` to `L` inclusive
    pub coordinates: DVector<f64>,

    /// Concentration at each node after the final step
    pub concentration: DVector<f64>,

    /// Diagnostic metadata (solver name, dt, diffusion number, ...)
    pub metadata: HashMap<String, String>,
}

impl Solution {
    /// Create a solution from the two output sequences
    ///
    /// # Panics
    ///
    /// Panics when the sequences have different lengths; a solver that
    /// produces mismatched outputs is broken, not misconfigured.
    pub fn new(coordinates: DVector<f64>, concentration: DVector<f64>) -> Self {
        assert_eq!(
            coordinates.len(),
            concentration.len(),
            "coordinate and concentration sequences must have equal length"
        );

        Self {
            coordinates,
            concentration,
            metadata: HashMap::new(),
        }
    }

    /// Number of grid nodes
    pub fn len(&self) -> usize {
        self.concentration.len()
    }

    /// True when the solution holds no nodes
    pub fn is_empty(&self) -> bool {
        self.concentration.is_empty()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for numerical solvers
///
/// # Responsibility
///
/// Applies a discretization scheme to a [`Scenario`] under a
/// [`SolverConfiguration`] and returns the final field. Implementations are
/// stateless: a solver value owns no buffers between invocations, so each
/// call is fully isolated from every other (including concurrent ones).
pub trait Solver {
    /// Run the scheme for the configured number of steps
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidParameter`] for precondition violations
    /// * [`SimulationError::Instability`] when the explicit scheme would diverge
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Solution, SimulationError>;

    /// Name of the method (used for display and metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
