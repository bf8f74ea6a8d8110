//! Stability guard for the explicit scheme
//!
//! # Mathematical Background
//!
//! The FTCS update writes each new interior value as a weighted sum of the
//! previous values at the node and its two neighbours:
//!
//! ```text
//! next[i] = (1 − 2·alpha − k·dt)·current[i] + alpha·(current[i+1] + current[i−1])
//! ```
//!
//! with the diffusion number `alpha = D·dt/dx²`. For `k ≥ 0` the binding
//! condition that keeps every coefficient non-negative is `alpha ≤ 0.5`;
//! beyond it the scheme amplifies error without bound (divergence and
//! node-to-node oscillation). The guard therefore runs once, before any
//! stepping, and rejects the configuration outright — it is a correctness
//! gate, not an optimization, and it cannot be skipped.

use crate::error::SimulationError;

/// Largest diffusion number the explicit scheme tolerates
pub const STABILITY_LIMIT: f64 = 0.5;

/// Diffusion number `alpha = D·dt/dx²`
///
/// Dimensionless; controls the numerical stability of the explicit scheme.
pub fn diffusion_number(diffusion: f64, dt: f64, dx: f64) -> f64 {
    diffusion * dt / (dx * dx)
}

/// Check that the requested discretization is stable.
///
/// Deterministic and side-effect-free. Returns the diffusion number on
/// success so the caller does not recompute it.
///
/// # Errors
///
/// Returns [`SimulationError::Instability`] when `alpha > 0.5`, carrying the
/// computed `alpha` and the largest stable time step `dx²/(2·D)` for the
/// current grid.
pub fn check_stability(diffusion: f64, dt: f64, dx: f64) -> Result<f64, SimulationError> {
    let alpha = diffusion_number(diffusion, dt, dx);

    if alpha > STABILITY_LIMIT {
        return Err(SimulationError::Instability {
            alpha,
            max_dt: dx * dx / (2.0 * diffusion),
        });
    }

    Ok(alpha)
}
