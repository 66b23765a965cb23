use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        DAYS_PER_MONTH,
        balance::{EnergyBalance, daily_consumption, daily_generation, hourly_balance},
        error::Error,
        profile::ConsumptionProfile,
        record::MonthlyRecord,
        result::SimulationResult,
        tariff::TariffParameters,
        yields::SolarYieldSeries,
    },
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::KilowattsPeak,
        proportions::Percentage,
        zero::Zero,
    },
};

/// Monthly energy balance and net-billing simulator.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Simulator<'a> {
    system_size: KilowattsPeak,
    monthly_consumption: KilowattHours,
    yields: &'a SolarYieldSeries,
    profile: &'a ConsumptionProfile,
    tariff: TariffParameters,
}

impl<S: simulator_builder::IsComplete> SimulatorBuilder<'_, S> {
    pub fn simulate(self) -> Result<SimulationResult, Error> {
        self.build().simulate()
    }
}

impl Simulator<'_> {
    /// Simulate every month from the hourly balance of its typical day.
    ///
    /// The same consumption curve is used for every month, only the generation follows the yield.
    fn simulate(self) -> Result<SimulationResult, Error> {
        Error::ensure_non_negative("system size", self.system_size.0)?;
        Error::ensure_non_negative("monthly consumption", self.monthly_consumption.0)?;

        let consumption = daily_consumption(self.profile, self.monthly_consumption);
        let months = self
            .yields
            .iter()
            .map(|(month, specific_yield)| {
                let generation =
                    daily_generation(self.system_size, specific_yield, self.tariff.loss_factor);
                let balance = hourly_balance(&consumption, &generation)
                    .into_iter()
                    .sum::<EnergyBalance>()
                    * DAYS_PER_MONTH;
                MonthlyRecord::new(month, balance, &self.tariff)
            })
            .collect_vec();

        let annual_cost: Cost = months.iter().map(|record| record.bill).sum();
        let total_generation: KilowattHours = months.iter().map(|record| record.generation).sum();
        let coverage_ratio = if self.monthly_consumption > KilowattHours::ZERO {
            Percentage(total_generation / (self.monthly_consumption * 12.0) * 100.0)
        } else {
            Percentage::ZERO
        };
        trace!(
            system_size = %self.system_size,
            %annual_cost,
            %coverage_ratio,
            "simulated",
        );

        Ok(SimulationResult { system_size: self.system_size, annual_cost, coverage_ratio, months })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{hour::Hour, tariff::LossFactor},
        quantity::rate::KilowattHourRate,
    };

    fn tariff() -> TariffParameters {
        TariffParameters::builder()
            .unit_cost(KilowattHourRate(859.19))
            .export_credit_g(KilowattHourRate(280.04))
            .export_credit_c(KilowattHourRate(113.66))
            .loss_factor(LossFactor::try_new(0.8).unwrap())
            .build()
    }

    fn yields() -> SolarYieldSeries {
        SolarYieldSeries::try_from(vec![150.0; 12]).unwrap()
    }

    fn simulate(
        system_size: f64,
        monthly_consumption: f64,
        profile: &ConsumptionProfile,
    ) -> Result<SimulationResult, Error> {
        Simulator::builder()
            .system_size(KilowattsPeak(system_size))
            .monthly_consumption(KilowattHours(monthly_consumption))
            .yields(&yields())
            .profile(profile)
            .tariff(tariff())
            .simulate()
    }

    #[test]
    fn test_golden_flat_profile() {
        let result = simulate(10.0, 2500.0, &ConsumptionProfile::flat()).unwrap();
        assert_eq!(result.months.len(), 12);
        for record in &result.months {
            assert_abs_diff_eq!(record.generation.0, 1200.0, epsilon = 1e-6);
            assert_abs_diff_eq!(record.self_consumption.0, 969.166_667, epsilon = 1e-6);
            assert_abs_diff_eq!(record.grid_import.0, 1_530.833_333, epsilon = 1e-6);
            assert_abs_diff_eq!(record.total_excess.0, 230.833_333, epsilon = 1e-6);
            assert_abs_diff_eq!(record.excess_tranche_1.0, 230.833_333, epsilon = 1e-6);
            assert_abs_diff_eq!(record.excess_tranche_2.0, 0.0);
            assert_abs_diff_eq!(record.bill.0, 1_143_183.516_666_666, epsilon = 1e-3);
        }
        assert_abs_diff_eq!(result.annual_cost.0, 13_718_202.2, epsilon = 1e-2);
        assert_abs_diff_eq!(result.coverage_ratio.0, 48.0, epsilon = 1e-9);
        assert_eq!(result.months[0].month_label(), "Jan");
        assert_eq!(result.months[11].month_label(), "Dec");
    }

    #[test]
    fn test_reproducible() {
        let profile = ConsumptionProfile::flat();
        let first = simulate(10.0, 2500.0, &profile).unwrap();
        let second = simulate(10.0, 2500.0, &profile).unwrap();
        assert_eq!(first.annual_cost, second.annual_cost);
        for (left, right) in first.months.iter().zip(&second.months) {
            assert_eq!(left.bill, right.bill);
        }
    }

    #[test]
    fn test_billing_identity() {
        let tariff = tariff();
        for system_size in [0.0, 3.5, 10.0, 25.5, 60.0] {
            let result = simulate(system_size, 2500.0, &ConsumptionProfile::default()).unwrap();
            for record in &result.months {
                let lhs = (record.grid_import * tariff.unit_cost - record.bill).0;
                let rhs = (record.excess_tranche_1 * (tariff.unit_cost - tariff.export_credit_c)
                    + record.excess_tranche_2 * tariff.export_credit_g)
                    .0;
                assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-6 * lhs.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_energy_conservation() {
        let result = simulate(25.0, 2500.0, &ConsumptionProfile::default()).unwrap();
        for record in &result.months {
            assert_abs_diff_eq!(
                record.self_consumption.0 + record.total_excess.0,
                record.generation.0,
                epsilon = 1e-6,
            );
            assert_abs_diff_eq!(
                record.self_consumption.0 + record.grid_import.0,
                2500.0,
                epsilon = 1e-6,
            );
        }
    }

    #[test]
    fn test_no_solar() {
        let result = simulate(0.0, 2500.0, &ConsumptionProfile::flat()).unwrap();
        assert_eq!(result.coverage_ratio, Percentage::ZERO);
        assert_eq!(result.total_generation(), KilowattHours::ZERO);
        assert_abs_diff_eq!(result.annual_cost.0, 2500.0 * 12.0 * 859.19, epsilon = 1e-3);
        for record in &result.months {
            assert_eq!(record.total_excess, KilowattHours::ZERO);
        }
    }

    #[test]
    fn test_zero_consumption() {
        let result = simulate(10.0, 0.0, &ConsumptionProfile::flat()).unwrap();
        assert_eq!(result.coverage_ratio, Percentage::ZERO);

        // Everything is exported and falls into the second tranche:
        for record in &result.months {
            assert_eq!(record.excess_tranche_1, KilowattHours::ZERO);
            assert_abs_diff_eq!(record.excess_tranche_2.0, 1200.0, epsilon = 1e-6);
        }
        assert!(result.annual_cost < Cost::ZERO);
    }

    #[test]
    fn test_all_zero_profile() {
        let profile = ConsumptionProfile::new([0.0; Hour::N_HOURS]);
        let result = simulate(10.0, 2500.0, &profile).unwrap();
        for record in &result.months {
            assert_eq!(record.self_consumption, KilowattHours::ZERO);
            assert_eq!(record.grid_import, KilowattHours::ZERO);
            assert_abs_diff_eq!(record.total_excess.0, record.generation.0);
        }
        assert_abs_diff_eq!(result.coverage_ratio.0, 48.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unnormalized_profile_is_scaled() {
        let doubled = ConsumptionProfile::new(ConsumptionProfile::flat().weights().map(|w| w * 2.0));
        let left = simulate(10.0, 2500.0, &doubled).unwrap();
        let right = simulate(10.0, 2500.0, &ConsumptionProfile::flat()).unwrap();
        assert_abs_diff_eq!(left.annual_cost.0, right.annual_cost.0, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_size() {
        assert!(matches!(
            simulate(-0.5, 2500.0, &ConsumptionProfile::flat()),
            Err(Error::InvalidParameter { name: "system size", .. }),
        ));
    }

    #[test]
    fn test_negative_consumption() {
        assert!(matches!(
            simulate(10.0, -1.0, &ConsumptionProfile::flat()),
            Err(Error::InvalidParameter { name: "monthly consumption", .. }),
        ));
    }

    #[test]
    fn test_serialize() {
        let result = simulate(10.0, 2500.0, &ConsumptionProfile::flat()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["systemSizeKwp"], 10.0);
        assert_abs_diff_eq!(json["coverageRatio"].as_f64().unwrap(), 48.0, epsilon = 1e-9);
        assert_eq!(json["monthlyRecords"].as_array().unwrap().len(), 12);
        assert_eq!(json["monthlyRecords"][1]["monthLabel"], "Feb");
    }
}
