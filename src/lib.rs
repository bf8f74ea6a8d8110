//! readi-rs: Reaction-Diffusion Simulation Framework
//!
//! A framework for simulating one-dimensional reaction-diffusion processes
//! using explicit finite-difference methods. Built with Rust for performance
//! and safety.
//!
//! # Architecture
//!
//! readi-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical parameters define the process (what to solve)
//!    - Numerical solvers provide the method (how to solve)
//!
//! 2. **Fail-fast Validation**
//!    - Every parameter is validated before any computation
//!    - The stability guard rejects divergent configurations up front,
//!      reporting the largest stable time step so the caller can self-correct
//!
//! # The Model
//!
//! The solved equation is diffusion with first-order decay on a bounded
//! interval `[0, L]`:
//!
//! ```text
//! ∂c/∂t = D·∂²c/∂x² − k·c
//! ```
//!
//! with fixed (Dirichlet) boundary values — a source concentration `c0` at
//! `x = 0` and a sink (`c = 0`) at `x = L` — and a uniform zero initial
//! condition. The [`FtcsSolver`](solver::FtcsSolver) advances the field with
//! the Forward-Time Central-Space scheme, which is stable only while the
//! diffusion number `alpha = D·dt/dx²` stays at or below 0.5.
//!
//! # Quick Start
//!
//! ```rust
//! use readi_rs::solve;
//!
//! # fn main() -> Result<(), readi_rs::SimulationError> {
//! // Drug diffusing 2 hours into a 5 mm tissue slab with first-order decay
//! let solution = solve(
//!     0.005,   // domain length L (m)
//!     1e-10,   // diffusion coefficient D (m²/s)
//!     2e-4,    // decay rate k (1/s)
//!     1.0,     // source concentration c0
//!     7200.0,  // total simulated time (s)
//!     50,      // spatial intervals Nx
//!     1000,    // time steps Nt
//! )?;
//!
//! assert_eq!(solution.coordinates.len(), 51);
//! assert_eq!(solution.concentration[0], 1.0);
//! assert_eq!(solution.concentration[50], 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Physical parameters (the process)
//! - [`solver`]: Grid, stability guard, boundaries, and numerical methods
//! - [`error`]: Typed simulation errors

pub mod error;
pub mod physics;
pub mod solver;

pub use error::SimulationError;

use physics::TransportParameters;
use solver::{
    DirichletBoundaries, FtcsSolver, Scenario, Solution, Solver, SolverConfiguration,
};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use readi_rs::prelude::*;
    //! ```
    pub use crate::error::SimulationError;
    pub use crate::physics::TransportParameters;
    pub use crate::solver::{
        DirichletBoundaries, FtcsSolver, Scenario, Solution, Solver, SolverConfiguration,
    };
}

/// Solve a 1D reaction-diffusion problem with the FTCS scheme.
///
/// This is the crate's single high-level operation. It builds the physical
/// parameters, the source/sink boundaries, and the solver configuration,
/// then runs [`FtcsSolver`] for exactly `time_steps` steps.
///
/// # Arguments
///
/// * `length` - Domain length `L` (must be positive and finite)
/// * `diffusion` - Diffusion coefficient `D` (must be positive and finite)
/// * `decay` - First-order decay rate `k` (must be non-negative and finite)
/// * `source_concentration` - Fixed concentration `c0` held at `x = 0`
/// * `total_time` - Total simulated time `T` (must be positive and finite)
/// * `grid_intervals` - Number of spatial intervals `Nx` (at least 2)
/// * `time_steps` - Number of time steps `Nt` (at least 1)
///
/// # Errors
///
/// * [`SimulationError::InvalidParameter`] when a precondition above is violated
/// * [`SimulationError::Instability`] when `D·(T/Nt)/(L/Nx)² > 0.5`
///
/// Both are raised before any stepping begins; no partial state is produced.
pub fn solve(
    length: f64,
    diffusion: f64,
    decay: f64,
    source_concentration: f64,
    total_time: f64,
    grid_intervals: usize,
    time_steps: usize,
) -> Result<Solution, SimulationError> {
    let parameters = TransportParameters::new(length, diffusion, decay);
    let boundaries = DirichletBoundaries::source_sink(source_concentration);
    let scenario = Scenario::new(parameters, boundaries);
    let config = SolverConfiguration::time_evolution(total_time, time_steps, grid_intervals);

    FtcsSolver::new().solve(&scenario, &config)
}
