mod preset;

use serde::{Deserialize, Serialize};

pub use self::preset::ProfilePreset;
use crate::{
    core::{error::Error, hour::Hour},
    prelude::*,
};

/// Total of the hourly weights of a normalized profile.
pub const TARGET_TOTAL: f64 = 100.0;

/// Percentage share of the daily consumption per hour of the day.
///
/// An all-zero profile is legal and means «no distribution information».
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ConsumptionProfile([f64; Hour::N_HOURS]);

impl ConsumptionProfile {
    pub const fn new(weights: [f64; Hour::N_HOURS]) -> Self {
        Self(weights)
    }

    /// Same weight for every hour.
    pub const fn flat() -> Self {
        Self([TARGET_TOTAL / 24.0; Hour::N_HOURS])
    }

    pub const fn weights(&self) -> &[f64; Hour::N_HOURS] {
        &self.0
    }

    pub const fn weight(&self, hour: Hour) -> f64 {
        self.0[hour.index()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Weights scaled to sum up to 1, or the raw weights for an all-zero profile.
    pub fn shares(&self) -> [f64; Hour::N_HOURS] {
        let total = self.total();
        if total > 0.0 { self.0.map(|weight| weight / total) } else { self.0 }
    }

    /// Set the weight of the hour and redistribute the discrepancy over the other hours.
    ///
    /// The other hours absorb the difference proportionally to their current weights and are
    /// floored at zero. The result is not re-normalized after flooring, so edits that push
    /// several hours to zero may leave the total slightly off [`TARGET_TOTAL`]. When all the
    /// other hours are already zero, only the edited hour changes.
    #[allow(clippy::float_cmp, clippy::suboptimal_flops)]
    pub fn adjusted(&self, hour: Hour, new_weight: f64) -> Self {
        let mut weights = self.0;
        weights[hour.index()] = new_weight;

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return Self(weights);
        }

        // Positive when over the target:
        let discrepancy = total - TARGET_TOTAL;
        let others_total: f64 = weights
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != hour.index())
            .map(|(_, weight)| weight)
            .sum();

        if others_total > 0.0 {
            for (index, weight) in weights.iter_mut().enumerate() {
                if index != hour.index() {
                    *weight = (*weight - *weight / others_total * discrepancy).max(0.0);
                }
            }
        } else {
            debug!(%hour, new_weight, "nothing to redistribute over");
        }

        Self(weights)
    }
}

impl Default for ConsumptionProfile {
    fn default() -> Self {
        ProfilePreset::Residential.profile()
    }
}

impl TryFrom<Vec<f64>> for ConsumptionProfile {
    type Error = Error;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        let actual = weights.len();
        let weights: [f64; Hour::N_HOURS] = weights.try_into().map_err(|_| {
            Error::MalformedInput { what: "consumption profile", expected: Hour::N_HOURS, actual }
        })?;
        for weight in weights {
            Error::ensure_non_negative("profile weight", weight)?;
        }
        Ok(Self(weights))
    }
}

impl From<ConsumptionProfile> for Vec<f64> {
    fn from(profile: ConsumptionProfile) -> Self {
        profile.weights().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hour(hour: u8) -> Hour {
        Hour::try_from(hour).unwrap()
    }

    #[test]
    fn test_same_value_keeps_total() {
        for preset in [ProfilePreset::Residential, ProfilePreset::Industrial] {
            let profile = preset.profile();
            let adjusted = profile.adjusted(hour(12), profile.weight(hour(12)));
            assert_abs_diff_eq!(adjusted.total(), profile.total(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_positive_profile_sums_to_target() {
        let profile = ConsumptionProfile::flat();
        for (index, new_weight) in [(0, 0.0), (7, 25.0), (12, 10.3), (23, 4.0)] {
            let adjusted = profile.adjusted(hour(index), new_weight);
            assert_abs_diff_eq!(adjusted.total(), TARGET_TOTAL, epsilon = 1e-6);
            assert_abs_diff_eq!(adjusted.weight(hour(index)), new_weight);
        }
    }

    #[test]
    fn test_redistributes_proportionally() {
        let mut weights = [0.0; Hour::N_HOURS];
        weights[0] = 50.0;
        weights[1] = 30.0;
        weights[2] = 20.0;
        let adjusted = ConsumptionProfile::new(weights).adjusted(hour(2), 40.0);

        // 20 points over the target, taken 5:3 from the other two hours:
        assert_abs_diff_eq!(adjusted.weight(hour(0)), 37.5);
        assert_abs_diff_eq!(adjusted.weight(hour(1)), 22.5);
        assert_abs_diff_eq!(adjusted.weight(hour(2)), 40.0);
        assert_abs_diff_eq!(adjusted.total(), TARGET_TOTAL);
    }

    #[test]
    fn test_non_negative_after_many_edits() {
        let mut profile = ProfilePreset::Industrial.profile();
        for (index, new_weight) in
            [(8, 25.0), (9, 25.0), (10, 25.0), (11, 25.0), (12, 25.0), (13, 0.0), (3, 25.0)]
        {
            profile = profile.adjusted(hour(index), new_weight);
            assert!(profile.weights().iter().all(|weight| *weight >= 0.0));
        }
    }

    #[test]
    fn test_flooring_drift_is_kept() {
        // The other hours would go negative and get floored, so the total stays above the target:
        let adjusted = ConsumptionProfile::flat().adjusted(hour(0), 150.0);
        assert!(adjusted.weights().iter().skip(1).all(|weight| *weight == 0.0));
        assert_abs_diff_eq!(adjusted.total(), 150.0);
    }

    #[test]
    fn test_all_zero_profile_is_unchanged() {
        let profile = ConsumptionProfile::new([0.0; Hour::N_HOURS]);
        assert_eq!(profile.adjusted(hour(5), 0.0), profile);
    }

    #[test]
    fn test_only_edited_hour_when_others_are_zero() {
        let mut weights = [0.0; Hour::N_HOURS];
        weights[3] = 100.0;
        let adjusted = ConsumptionProfile::new(weights).adjusted(hour(3), 60.0);
        assert_abs_diff_eq!(adjusted.weight(hour(3)), 60.0);
        assert_abs_diff_eq!(adjusted.total(), 60.0);
    }

    #[test]
    fn test_does_not_mutate_the_profile() {
        let profile = ConsumptionProfile::flat();
        let _ = profile.adjusted(hour(0), 20.0);
        assert_eq!(profile, ConsumptionProfile::flat());
    }

    #[test]
    fn test_shares() {
        let shares = ConsumptionProfile::flat().shares();
        assert_abs_diff_eq!(shares.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        let shares = ConsumptionProfile::new([0.0; Hour::N_HOURS]).shares();
        assert!(shares.iter().all(|share| share.abs() < f64::EPSILON));
    }

    #[test]
    fn test_try_from_wrong_length() {
        assert!(matches!(
            ConsumptionProfile::try_from(vec![1.0; 23]),
            Err(Error::MalformedInput { expected: 24, actual: 23, .. }),
        ));
    }

    #[test]
    fn test_try_from_negative_weight() {
        let mut weights = vec![100.0 / 24.0; 24];
        weights[4] = -1.0;
        assert!(matches!(
            ConsumptionProfile::try_from(weights),
            Err(Error::InvalidParameter { name: "profile weight", .. }),
        ));
    }
}
