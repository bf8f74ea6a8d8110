//! Uniform spatial grid
//!
//! The domain `[0, L]` is divided into `Nx` equal intervals, giving `Nx + 1`
//! nodes at `x[i] = i·dx` with `dx = L / Nx`. Both divisions are exact
//! real-valued operations; no rounding or snapping is applied.

use nalgebra::DVector;

use crate::error::SimulationError;

/// Uniform 1D grid over `[0, length]`
///
/// Index `i` of the coordinate sequence corresponds to index `i` of any
/// concentration field sampled on this grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    length: f64,
    intervals: usize,
    dx: f64,
}

impl Grid {
    /// Create a grid with `intervals` equal intervals over `[0, length]`
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] when `length` is not
    /// positive and finite, or when `intervals < 2` (the scheme needs at
    /// least one interior node).
    pub fn new(length: f64, intervals: usize) -> Result<Self, SimulationError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "length",
                value: length,
                reason: "domain length must be positive and finite",
            });
        }

        if intervals < 2 {
            return Err(SimulationError::InvalidParameter {
                name: "grid_intervals",
                value: intervals as f64,
                reason: "at least 2 spatial intervals are required",
            });
        }

        Ok(Self {
            length,
            intervals,
            dx: length / intervals as f64,
        })
    }

    /// Domain length `L`
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of intervals `Nx`
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Number of nodes, `Nx + 1`
    pub fn points(&self) -> usize {
        self.intervals + 1
    }

    /// Spatial step `dx = L / Nx`
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Node coordinates `x[i] = i·dx`, `i = 0..=Nx`
    ///
    /// Each coordinate is computed directly from its index rather than by
    /// repeated addition, so rounding error does not accumulate along the
    /// sequence.
    pub fn coordinates(&self) -> DVector<f64> {
        DVector::from_fn(self.points(), |i, _| i as f64 * self.dx)
    }
}
