//! Typed simulation errors
//!
//! Two error kinds cover every failure mode of the crate:
//!
//! - [`SimulationError::InvalidParameter`]: a precondition on the physical
//!   or numerical parameters was violated. Raised before any computation.
//! - [`SimulationError::Instability`]: the explicit scheme would diverge for
//!   the requested discretization. Carries the offending diffusion number
//!   and the largest stable time step so the caller can self-correct.
//!
//! Neither error is retried internally — both are caller-configuration
//! problems, surfaced immediately and deterministically. Once stepping
//! starts there is no recoverable runtime failure.

use thiserror::Error;

/// Error type for all simulation operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A physical or numerical parameter violates its precondition.
    ///
    /// Integer counts (grid intervals, time steps) are reported through the
    /// same variant with the count cast to `f64`.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The explicit scheme would amplify error without bound.
    ///
    /// Produced by the stability guard when the diffusion number
    /// `alpha = D·dt/dx²` exceeds 0.5. `max_dt = dx²/(2·D)` is the largest
    /// time step the current grid admits.
    #[error(
        "unstable configuration: diffusion number {alpha} exceeds 0.5; \
         reduce the time step to at most {max_dt} s (or refine less in space)"
    )]
    Instability {
        /// The computed diffusion number
        alpha: f64,
        /// Largest stable time step for the current grid, in seconds
        max_dt: f64,
    },
}
