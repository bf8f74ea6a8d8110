//! Numerical solvers
//!
//! This module provides the numerical side of the framework. A solver
//! applies a discretization scheme to the process described by the physics
//! side, within a specific scenario.
//!
//! # Core Concepts
//!
//! The architecture separates concerns into three layers:
//!
//! 1. **Scenario** ([`Scenario`]) - WHAT to solve
//!    - Physical parameters (the process)
//!    - Dirichlet boundary values (source and sink)
//!
//! 2. **Configuration** ([`SolverConfiguration`]) - HOW to solve
//!    - Total simulated time
//!    - Temporal and spatial resolution
//!
//! 3. **Solver** ([`Solver`] trait) - The numerical method
//!    - Builds the grid, runs the stability guard, advances the field
//!    - Independent of any one parameter set
//!
//! This separation allows the same scenario to be refined at different
//! resolutions, and keeps the method swappable behind a stable trait.
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait, `SolverConfiguration`, `Solution`
//! - **`grid`**: Uniform spatial grid and coordinate sequence
//! - **`stability`**: Diffusion number and the explicit-scheme stability guard
//! - **`boundary`**: Fixed-value (Dirichlet) boundary pair
//! - **`scenario`**: Problem definition (parameters + boundaries)
//! - **`methods`**: Concrete solvers ([`FtcsSolver`])
//!
//! # Workflow
//!
//! ```text
//! TransportParameters ──┐
//!                       ├─ Scenario ──┐
//! DirichletBoundaries ──┘             ├─ FtcsSolver::solve ── Solution
//!          SolverConfiguration ───────┘
//! ```
//!
//! # Stability
//!
//! The only method currently implemented is explicit, so every solve is
//! gated by the stability guard: the diffusion number `alpha = D·dt/dx²`
//! must not exceed 0.5, or the call fails before any stepping with
//! [`SimulationError::Instability`](crate::error::SimulationError::Instability).
//! This is a correctness gate, not an optimization — it cannot be skipped.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod grid;
mod methods;
mod scenario;
pub mod stability;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the interior sweep off to Rayon is a
// numerical-execution concern, not a physics concern, so it lives here.
// Within one time step every interior node reads only pre-step values, which
// makes the sweep trivially parallel; across steps the computation is
// strictly sequential.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every sweep. Relaxed ordering is sufficient: the value is a performance
// hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior nodes above which the FTCS sweep switches to
/// parallel iteration (when the crate is compiled with the `parallel`
/// feature).
///
/// Below this point the overhead of Rayon's thread-pool dispatch outweighs
/// the handful of floating-point operations each node costs.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The interior sweep uses sequential iteration when the grid contains fewer
/// interior nodes than this value, and switches to Rayon when it contains
/// more — but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use readi_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero threshold would force parallel
/// dispatch even for a three-node grid, which is never the intended
/// behaviour.
///
/// # Example
///
/// ```rust
/// use readi_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serializes tests that mutate the global threshold; the test harness runs
/// tests on multiple threads.
#[cfg(test)]
pub(crate) static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use boundary::DirichletBoundaries;
pub use grid::Grid;
pub use methods::FtcsSolver;
pub use scenario::Scenario;
pub use stability::{check_stability, diffusion_number, STABILITY_LIMIT};
pub use traits::{Solution, Solver, SolverConfiguration};

// =================================================================================================
// Tests
// =================================================================================================
