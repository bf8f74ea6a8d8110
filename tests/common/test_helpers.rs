//! Helper functions for integration tests

use nalgebra::DVector;

/// Compute relative error: |actual - expected| / |expected|
///
/// Falls back to absolute error when `expected` is (numerically) zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest absolute deviation of `field` from the linear profile that runs
/// from `left` at the first node to `right` at the last node.
///
/// With zero decay the steady state of the diffusion equation between two
/// fixed boundary values is exactly this line, which makes the deviation a
/// convergence measure for long runs.
pub fn max_deviation_from_linear(field: &DVector<f64>, left: f64, right: f64) -> f64 {
    let n = field.len();
    assert!(n >= 2, "profile needs at least two nodes");

    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let line = left * (1.0 - t) + right * t;
            (field[i] - line).abs()
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error_near_zero_expected() {
        assert_eq!(relative_error(0.5, 0.0), 0.5);
    }

    #[test]
    fn test_linear_profile_has_zero_deviation() {
        let field = DVector::from_vec(vec![1.0, 0.75, 0.5, 0.25, 0.0]);
        assert_eq!(max_deviation_from_linear(&field, 1.0, 0.0), 0.0);
    }
}
