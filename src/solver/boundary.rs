//! Fixed-value (Dirichlet) boundary pair
//!
//! The scheme holds the field's value fixed at both ends of the domain. The
//! solver re-applies both values after every interior sweep, so boundary
//! nodes are never produced by the update formula.

use crate::error::SimulationError;

/// Dirichlet boundary values at the two ends of the domain
///
/// `source` is held at `x = 0`, `sink` at `x = L`. The canonical
/// configuration is a constant-concentration source against a perfect sink;
/// use [`source_sink`](Self::source_sink) for that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBoundaries {
    /// Fixed value at the left edge (`x = 0`)
    pub source: f64,

    /// Fixed value at the right edge (`x = L`)
    pub sink: f64,
}

impl DirichletBoundaries {
    /// Create a boundary pair with explicit values at both edges
    pub fn new(source: f64, sink: f64) -> Self {
        Self { source, sink }
    }

    /// Constant source at `x = 0`, perfect sink (`c = 0`) at `x = L`
    pub fn source_sink(source_concentration: f64) -> Self {
        Self::new(source_concentration, 0.0)
    }

    /// Validate that both boundary values are finite
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.source.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "source",
                value: self.source,
                reason: "boundary value must be finite",
            });
        }

        if !self.sink.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "sink",
                value: self.sink,
                reason: "boundary value must be finite",
            });
        }

        Ok(())
    }
}
