use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        DAYS_PER_MONTH,
        error::Error,
        profile::{ConsumptionProfile, ProfilePreset},
        result::SimulationResult,
        simulator::Simulator,
        solver::NetZeroSolver,
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

/// Rule-of-thumb daily full-load hours for sizing by consumption alone.
const SUN_HOURS: f64 = 4.0;

/// Single row of the scenario comparison.
#[must_use]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub label: String,

    #[serde(rename = "systemSizeKwp")]
    pub system_size: KilowattsPeak,

    pub coverage_ratio: Percentage,
    pub annual_cost: Cost,
}

/// Side-by-side simulation of the requested size and the reference sizes.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct ScenarioComparator<'a> {
    system_size: KilowattsPeak,

    /// Names the requested size in the first row.
    title: &'a str,

    monthly_consumption: KilowattHours,
    yields: &'a SolarYieldSeries,
    profile: &'a ConsumptionProfile,
    tariff: TariffParameters,

    #[builder(default = ProfilePreset::Residential.profile())]
    residential_profile: ConsumptionProfile,

    #[builder(default = ProfilePreset::Industrial.profile())]
    industrial_profile: ConsumptionProfile,
}

impl<S: scenario_comparator_builder::IsComplete> ScenarioComparatorBuilder<'_, S> {
    pub fn compare(self) -> Result<Vec<ScenarioSummary>, Error> {
        self.build().compare()
    }
}

impl ScenarioComparator<'_> {
    /// Simulate, in this order:
    ///
    /// 1. The requested size with the user profile.
    /// 2. No solar at all.
    /// 3. The «4 sun-hours» size covering the daily consumption in four full-load hours.
    /// 4. Net-zero size of the typical industrial profile.
    /// 5. Net-zero size of the typical residential profile.
    #[instrument(skip_all, fields(title = self.title, system_size = %self.system_size))]
    fn compare(self) -> Result<Vec<ScenarioSummary>, Error> {
        let sun_hours_size =
            KilowattsPeak((self.monthly_consumption / DAYS_PER_MONTH).0 / SUN_HOURS);
        let industrial_size = self.net_zero_size(&self.industrial_profile)?;
        let residential_size = self.net_zero_size(&self.residential_profile)?;

        let summaries = vec![
            self.simulate(self.system_size, self.profile)?
                .summarize(format!("System {}", self.title)),
            self.simulate(KilowattsPeak::ZERO, self.profile)?.summarize("No solar"),
            self.simulate(sun_hours_size, self.profile)?.summarize("4 sun-hours"),
            self.simulate(industrial_size, &self.industrial_profile)?
                .summarize("Typical industrial"),
            self.simulate(residential_size, &self.residential_profile)?
                .summarize("Typical residential"),
        ];
        for summary in &summaries {
            debug!(
                label = %summary.label,
                system_size = %summary.system_size,
                coverage_ratio = %summary.coverage_ratio,
                annual_cost = %summary.annual_cost,
                "scenario",
            );
        }
        Ok(summaries)
    }

    fn simulate(
        &self,
        system_size: KilowattsPeak,
        profile: &ConsumptionProfile,
    ) -> Result<SimulationResult, Error> {
        Simulator::builder()
            .system_size(system_size)
            .monthly_consumption(self.monthly_consumption)
            .yields(self.yields)
            .profile(profile)
            .tariff(self.tariff)
            .simulate()
    }

    fn net_zero_size(&self, profile: &ConsumptionProfile) -> Result<KilowattsPeak, Error> {
        Ok(NetZeroSolver::builder()
            .monthly_consumption(self.monthly_consumption)
            .yields(self.yields)
            .profile(profile)
            .tariff(self.tariff)
            .solve()?
            .kilowatts_peak())
    }
}
