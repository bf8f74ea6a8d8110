//! Forward-Time Central-Space (FTCS) solver
//!
//! # Mathematical Background
//!
//! FTCS combines a forward (one-step) approximation of the time derivative
//! with a centered approximation of the spatial second derivative. For the
//! diffusion-decay equation `∂c/∂t = D·∂²c/∂x² − k·c` the discrete update is
//!
//! ```text
//! next[i] = current[i] + alpha·(current[i+1] − 2·current[i] + current[i−1])
//!                      − k·dt·current[i]
//! ```
//!
//! for every interior node, with `alpha = D·dt/dx²`. The update is fully
//! explicit: every right-hand-side value belongs to the previous step, so no
//! node's new value ever depends on another node's already-written new value.
//!
//! # Characteristics
//!
//! - **Order**: first-order in time O(dt), second-order in space O(dx²)
//! - **Stability**: conditional — `alpha ≤ 0.5` (checked before stepping)
//! - **Complexity**: one sweep over the interior per step
//! - **Memory**: two field buffers, swapped each step
//!
//! # Example
//!
//! ```rust
//! use readi_rs::physics::TransportParameters;
//! use readi_rs::solver::{
//!     DirichletBoundaries, FtcsSolver, Scenario, Solver, SolverConfiguration,
//! };
//!
//! # fn main() -> Result<(), readi_rs::SimulationError> {
//! let scenario = Scenario::new(
//!     TransportParameters::new(0.005, 1e-10, 2e-4),
//!     DirichletBoundaries::source_sink(1.0),
//! );
//! let config = SolverConfiguration::time_evolution(7200.0, 1000, 50);
//!
//! let solution = FtcsSolver::new().solve(&scenario, &config)?;
//! assert_eq!(solution.len(), 51);
//! # Ok(())
//! # }
//! ```

use log::debug;
use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::SimulationError;
use crate::solver::grid::Grid;
use crate::solver::stability::check_stability;
use crate::solver::{Scenario, Solution, Solver, SolverConfiguration};

// =================================================================================================
// FTCS Solver
// =================================================================================================

/// Explicit FTCS time-stepping solver
///
/// # Algorithm
///
/// 1. Validate configuration and scenario (fail fast, no partial state)
/// 2. Build the grid; compute `dt` and the diffusion number `alpha`
/// 3. Run the stability guard: reject the whole solve when `alpha > 0.5`
/// 4. For each step `n = 1..=Nt`:
///    - sweep the interior with the explicit update, reading only the
///      previous step's buffer
///    - re-apply both boundary values (boundary nodes are never produced by
///      the formula)
///    - swap the `current` and `next` buffers
/// 5. Return the final field together with the node coordinates
///
/// There is no early termination, no convergence check, and no adaptive
/// step-size control: the solver always runs exactly `Nt` steps.
///
/// The solver itself is stateless; each invocation owns its own pair of
/// buffers, so concurrent solves never alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct FtcsSolver;

impl FtcsSolver {
    /// Create a new FTCS solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use readi_rs::solver::{FtcsSolver, Solver};
    ///
    /// let solver = FtcsSolver::new();
    /// assert_eq!(solver.name(), "FTCS");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for FtcsSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Solution, SimulationError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        // ====== Step 2: Setup ======

        let parameters = &scenario.parameters;
        let grid = Grid::new(parameters.length, config.grid_intervals)?;

        // dt = T / Nt, exact real-valued division
        let dt = config.dt();

        // ====== Step 3: Stability guard ======

        // Must run before any stepping; an unstable configuration produces
        // no partial state.
        let alpha = check_stability(parameters.diffusion, dt, grid.dx())?;

        // Decay contribution per step, folded into one coefficient
        let decay_dt = parameters.decay * dt;

        debug!(
            "FTCS solve: dx = {:.3e}, dt = {:.3e}, alpha = {:.4}, steps = {}",
            grid.dx(),
            dt,
            alpha,
            config.time_steps
        );

        // ====== Step 4: Time integration ======

        // Double buffering: reads during a sweep must never observe writes
        // made in the same step. Both fields start at zero (the initial
        // condition c(x, 0) = 0).
        let points = grid.points();
        let mut current: DVector<f64> = DVector::zeros(points);
        let mut next: DVector<f64> = DVector::zeros(points);

        for _step in 0..config.time_steps {
            sweep_interior(&current, &mut next, alpha, decay_dt);

            // Boundary enforcement overrides whatever the formula would
            // have put at the edge nodes.
            next[0] = scenario.boundaries.source;
            next[points - 1] = scenario.boundaries.sink;

            std::mem::swap(&mut current, &mut next);
        }

        // ====== Step 5: Build result ======

        let mut solution = Solution::new(grid.coordinates(), current);

        solution.add_metadata("solver", self.name());
        solution.add_metadata("time steps", &config.time_steps.to_string());
        solution.add_metadata("dt", &dt.to_string());
        solution.add_metadata("alpha", &alpha.to_string());

        Ok(solution)
    }

    fn name(&self) -> &'static str {
        "FTCS"
    }
}

// =================================================================================================
// Interior sweep
// =================================================================================================

/// Apply the explicit update to every interior node.
///
/// Reads `current` only; writes `next[1..n-1]` only. The two edge slots of
/// `next` are left for the caller's boundary enforcement. Node updates are
/// independent within a step, so the sweep may run in parallel when the
/// interior is large enough.
fn sweep_interior(current: &DVector<f64>, next: &mut DVector<f64>, alpha: f64, decay_dt: f64) {
    let n = current.len();
    let src = current.as_slice();
    let interior = &mut next.as_mut_slice()[1..n - 1];

    let update = |i: usize| {
        src[i] + alpha * (src[i + 1] - 2.0 * src[i] + src[i - 1]) - decay_dt * src[i]
    };

    #[cfg(feature = "parallel")]
    if interior.len() >= crate::solver::parallel_threshold() {
        interior
            .par_iter_mut()
            .enumerate()
            .for_each(|(offset, value)| *value = update(offset + 1));
        return;
    }

    for (offset, value) in interior.iter_mut().enumerate() {
        *value = update(offset + 1);
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::TransportParameters;
    use crate::solver::DirichletBoundaries;
    use approx::assert_relative_eq;

    fn tissue_scenario() -> Scenario {
        Scenario::new(
            TransportParameters::new(0.005, 1e-10, 2e-4),
            DirichletBoundaries::source_sink(1.0),
        )
    }

    // ====== Solver creation ======

    #[test]
    fn test_solver_creation() {
        assert_eq!(FtcsSolver::new().name(), "FTCS");
        assert_eq!(FtcsSolver::default().name(), "FTCS");
    }

    // ====== Sweep semantics ======

    #[test]
    fn test_sweep_reads_only_previous_step() {
        // A delta at node 2 must spread exactly one node per step and the
        // result at node 1 must not see node 2's freshly written value.
        let current = DVector::from_vec(vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        let mut next = DVector::zeros(5);
        let alpha = 0.25;

        sweep_interior(&current, &mut next, alpha, 0.0);

        assert_eq!(next[1], 0.25); // alpha · current[2]
        assert_eq!(next[2], 0.5); // (1 − 2·alpha) · current[2]
        assert_eq!(next[3], 0.25);
        // Edge slots untouched by the sweep
        assert_eq!(next[0], 0.0);
        assert_eq!(next[4], 0.0);
    }

    #[test]
    fn test_sweep_applies_decay() {
        let current = DVector::from_vec(vec![0.0, 1.0, 1.0, 1.0, 0.0]);
        let mut next = DVector::zeros(5);

        sweep_interior(&current, &mut next, 0.0, 0.1);

        // With alpha = 0, the update is pure decay on the flat interior;
        // the uneven neighbours of nodes 1 and 3 do not matter here.
        assert_relative_eq!(next[2], 0.9, max_relative = 1e-15);
    }

    // ====== Single-step behaviour ======

    #[test]
    fn test_single_step_from_zero_field() {
        // Starting from all zeros, one step leaves the interior at zero
        // (nothing has diffused yet) and sets both boundary values.
        let solver = FtcsSolver::new();
        let config = SolverConfiguration::time_evolution(7.2, 1, 50);

        let solution = solver.solve(&tissue_scenario(), &config).unwrap();

        assert_eq!(solution.concentration[0], 1.0);
        assert_eq!(solution.concentration[50], 0.0);
        for i in 1..50 {
            assert_eq!(solution.concentration[i], 0.0);
        }
    }

    #[test]
    fn test_two_steps_spread_one_node() {
        // After the first step only the boundary holds c0; the second step
        // carries alpha·c0 into node 1.
        let solver = FtcsSolver::new();
        let config = SolverConfiguration::time_evolution(14.4, 2, 50);

        let solution = solver.solve(&tissue_scenario(), &config).unwrap();
        let alpha: f64 = solution.metadata.get("alpha").unwrap().parse().unwrap();

        assert_relative_eq!(solution.concentration[1], alpha, max_relative = 1e-12);
        assert_eq!(solution.concentration[2], 0.0);
    }

    // ====== Boundary enforcement ======

    #[test]
    fn test_boundaries_hold_after_every_step() {
        let solver = FtcsSolver::new();

        for steps in 1..=5 {
            let config = SolverConfiguration::time_evolution(7.2 * steps as f64, steps, 50);
            let solution = solver.solve(&tissue_scenario(), &config).unwrap();

            assert_eq!(solution.concentration[0], 1.0, "source after step {}", steps);
            assert_eq!(solution.concentration[50], 0.0, "sink after step {}", steps);
        }
    }

    #[test]
    fn test_nonzero_sink_value() {
        let scenario = Scenario::new(
            TransportParameters::new(0.005, 1e-10, 0.0),
            DirichletBoundaries::new(1.0, 0.25),
        );
        let config = SolverConfiguration::time_evolution(720.0, 100, 50);

        let solution = FtcsSolver::new().solve(&scenario, &config).unwrap();

        assert_eq!(solution.concentration[0], 1.0);
        assert_eq!(solution.concentration[50], 0.25);
    }

    // ====== Stability guard integration ======

    #[test]
    fn test_unstable_configuration_is_rejected() {
        let solver = FtcsSolver::new();
        // dt = 50.0001 s on the dx = 1e-4 grid: alpha just above 0.5
        let config = SolverConfiguration::time_evolution(50.0001, 1, 50);

        match solver.solve(&tissue_scenario(), &config) {
            Err(SimulationError::Instability { alpha, max_dt }) => {
                assert!(alpha > 0.5);
                assert_eq!(max_dt, 50.0);
            }
            other => panic!("expected Instability, got {:?}", other),
        }
    }

    #[test]
    fn test_marginally_stable_configuration_runs() {
        let solver = FtcsSolver::new();
        // dt = 50 s exactly: alpha = 0.5, still admissible
        let config = SolverConfiguration::time_evolution(5000.0, 100, 50);

        assert!(solver.solve(&tissue_scenario(), &config).is_ok());
    }

    // ====== Validation ordering ======

    #[test]
    fn test_invalid_configuration_fails_before_physics() {
        let solver = FtcsSolver::new();
        let config = SolverConfiguration::time_evolution(7200.0, 0, 50);

        assert!(matches!(
            solver.solve(&tissue_scenario(), &config),
            Err(SimulationError::InvalidParameter { name: "time_steps", .. })
        ));
    }

    #[test]
    fn test_invalid_scenario_is_rejected() {
        let solver = FtcsSolver::new();
        let scenario = Scenario::new(
            TransportParameters::new(0.005, 1e-10, -1.0),
            DirichletBoundaries::source_sink(1.0),
        );
        let config = SolverConfiguration::time_evolution(7200.0, 1000, 50);

        assert!(matches!(
            solver.solve(&scenario, &config),
            Err(SimulationError::InvalidParameter { name: "decay", .. })
        ));
    }

    // ====== Metadata ======

    #[test]
    fn test_solution_metadata() {
        let solver = FtcsSolver::new();
        let config = SolverConfiguration::time_evolution(7200.0, 1000, 50);

        let solution = solver.solve(&tissue_scenario(), &config).unwrap();

        assert_eq!(solution.metadata.get("solver"), Some(&"FTCS".to_string()));
        assert_eq!(solution.metadata.get("time steps"), Some(&"1000".to_string()));

        let dt: f64 = solution.metadata.get("dt").unwrap().parse().unwrap();
        assert_relative_eq!(dt, 7.2, max_relative = 1e-15);

        let alpha: f64 = solution.metadata.get("alpha").unwrap().parse().unwrap();
        assert_relative_eq!(alpha, 0.072, max_relative = 1e-12);
    }

    // ====== Parallel/sequential equivalence ======

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_sweep_matches_sequential() {
        use crate::solver::{ThresholdGuard, THRESHOLD_LOCK};

        let _lock = THRESHOLD_LOCK.lock().unwrap();
        let solver = FtcsSolver::new();
        let scenario = tissue_scenario();
        let config = SolverConfiguration::time_evolution(720.0, 100, 200);

        let sequential = solver.solve(&scenario, &config).unwrap();

        // Force the parallel path by dropping the threshold below the
        // interior size.
        let parallel = {
            let _guard = ThresholdGuard::save(1);
            solver.solve(&scenario, &config).unwrap()
        };

        assert_eq!(sequential.concentration, parallel.concentration);
    }
}
