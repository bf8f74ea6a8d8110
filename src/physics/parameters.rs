//! Transport parameters for diffusion with first-order decay
//!
//! The modeled process is
//!
//! ```text
//! ∂c/∂t = D·∂²c/∂x² − k·c        on x ∈ [0, L]
//! ```
//!
//! so three constants fully describe the physics: the domain length `L`,
//! the diffusion coefficient `D`, and the decay rate `k`.

use crate::error::SimulationError;

/// Physical constants of a 1D diffusion-decay process
///
/// # Preconditions
///
/// - `length > 0` and finite
/// - `diffusion > 0` and finite
/// - `decay >= 0` and finite
///
/// Construction itself never fails; call [`validate`](Self::validate) (done
/// automatically by every solver) to enforce the preconditions before use.
///
/// # Units
///
/// Any consistent unit system works. The conventional choice is SI:
/// `length` in m, `diffusion` in m²/s, `decay` in 1/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportParameters {
    /// Domain length `L`
    pub length: f64,

    /// Diffusion coefficient `D`
    pub diffusion: f64,

    /// First-order decay rate `k`
    pub decay: f64,
}

impl TransportParameters {
    /// Create a new parameter set
    pub fn new(length: f64, diffusion: f64, decay: f64) -> Self {
        Self { length, diffusion, decay }
    }

    /// Create a purely diffusive parameter set (`k = 0`)
    pub fn diffusion_only(length: f64, diffusion: f64) -> Self {
        Self::new(length, diffusion, 0.0)
    }

    /// Validate that the parameters are physically meaningful
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "length",
                value: self.length,
                reason: "domain length must be positive and finite",
            });
        }

        if !self.diffusion.is_finite() || self.diffusion <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "diffusion",
                value: self.diffusion,
                reason: "diffusion coefficient must be positive and finite",
            });
        }

        // A negative rate would turn decay into unbounded growth.
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "decay",
                value: self.decay,
                reason: "decay rate must be non-negative and finite",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let parameters = TransportParameters::new(0.005, 1e-10, 2e-4);
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_zero_decay_is_valid() {
        let parameters = TransportParameters::diffusion_only(1.0, 1e-4);
        assert_eq!(parameters.decay, 0.0);
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_length() {
        for bad in [0.0, -0.005, f64::NAN, f64::INFINITY] {
            let parameters = TransportParameters::new(bad, 1e-10, 2e-4);
            assert!(matches!(
                parameters.validate(),
                Err(SimulationError::InvalidParameter { name: "length", .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_diffusion() {
        for bad in [0.0, -1e-10, f64::NAN] {
            let parameters = TransportParameters::new(0.005, bad, 2e-4);
            assert!(matches!(
                parameters.validate(),
                Err(SimulationError::InvalidParameter { name: "diffusion", .. })
            ));
        }
    }

    #[test]
    fn test_rejects_negative_decay() {
        let parameters = TransportParameters::new(0.005, 1e-10, -2e-4);
        assert!(matches!(
            parameters.validate(),
            Err(SimulationError::InvalidParameter { name: "decay", .. })
        ));
    }
}
