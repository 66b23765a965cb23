use crate::core::hour::Hour;

/// Canonical hourly solar generation distribution over a typical day, summing to 1.
///
/// Not location-dependent: the location only scales it through the monthly specific yield.
pub const GENERATION_SHAPE: [f64; Hour::N_HOURS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // night
    0.01, 0.03, 0.06, 0.09, 0.11, 0.13, // morning
    0.14, 0.13, 0.11, 0.09, 0.06, 0.03, // afternoon
    0.01, 0.0, 0.0, 0.0, 0.0, 0.0, // evening
];

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_sums_to_one() {
        assert_abs_diff_eq!(GENERATION_SHAPE.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_negative() {
        assert!(GENERATION_SHAPE.iter().all(|share| *share >= 0.0));
    }
}
