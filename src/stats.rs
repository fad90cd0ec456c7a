//! Minimal descriptive statistics.
//!
//! The fitness function and the KPI layer both need the population variance
//! of per-doctor workloads; nothing heavier is required.

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor `n`), 0 for fewer than two values.
///
/// A single doctor carrying all the work is not "imbalanced" — imbalance only
/// exists between at least two loaded doctors.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[4.0]), 4.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_variance_small_inputs() {
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[7.0]), 0.0);
    }

    #[test]
    fn test_variance() {
        // var([2, 4]) = ((2-3)^2 + (4-3)^2) / 2 = 1
        assert!((population_variance(&[2.0, 4.0]) - 1.0).abs() < 1e-10);
        // var([1, 2, 3, 4]) = 1.25
        assert!((population_variance(&[1.0, 2.0, 3.0, 4.0]) - 1.25).abs() < 1e-10);
    }

    #[test]
    fn test_variance_uniform_is_zero() {
        assert!((population_variance(&[5.0, 5.0, 5.0])).abs() < 1e-10);
    }
}
