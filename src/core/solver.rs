use std::time::Instant;

use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        error::Error,
        profile::ConsumptionProfile,
        simulator::Simulator,
        tariff::TariffParameters,
        yields::SolarYieldSeries,
    },
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, power::KilowattsPeak, zero::Zero},
};

/// Outcome of the net-zero search.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome", content = "systemSizeKwp")]
pub enum NetZeroSize {
    /// The smallest scanned size with a non-positive annual bill.
    Found(KilowattsPeak),

    /// No scanned size reaches a non-positive annual bill.
    Exhausted,
}

impl NetZeroSize {
    /// Reported when the scan is exhausted.
    pub const SENTINEL: KilowattsPeak = KilowattsPeak(500.0);

    /// Found size, or [`Self::SENTINEL`].
    pub const fn kilowatts_peak(self) -> KilowattsPeak {
        match self {
            Self::Found(system_size) => system_size,
            Self::Exhausted => Self::SENTINEL,
        }
    }
}

/// Minimal system size with a non-positive annual bill.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct NetZeroSolver<'a> {
    monthly_consumption: KilowattHours,
    yields: &'a SolarYieldSeries,
    profile: &'a ConsumptionProfile,
    tariff: TariffParameters,
}

impl<S: net_zero_solver_builder::IsComplete> NetZeroSolverBuilder<'_, S> {
    pub fn solve(self) -> Result<NetZeroSize, Error> {
        self.build().solve()
    }
}

impl NetZeroSolver<'_> {
    const STEP: f64 = 0.5;

    /// The last candidate is `500.5 kWp`.
    const N_CANDIDATES: u32 = 1001;

    /// Scan the candidate sizes upwards and return the first one that brings the annual cost to zero.
    ///
    /// The annual cost is not necessarily monotonic in the system size because the second export
    /// tranche is credited below the retail rate, so the scan is exhaustive rather than a bisection.
    #[instrument(skip_all, fields(monthly_consumption = %self.monthly_consumption))]
    fn solve(self) -> Result<NetZeroSize, Error> {
        let start_instant = Instant::now();

        for (n_evaluated, system_size) in Self::candidates().enumerate() {
            let result = Simulator::builder()
                .system_size(system_size)
                .monthly_consumption(self.monthly_consumption)
                .yields(self.yields)
                .profile(self.profile)
                .tariff(self.tariff)
                .simulate()?;
            if result.annual_cost <= Cost::ZERO {
                info!(
                    %system_size,
                    annual_cost = %result.annual_cost,
                    n_evaluated = n_evaluated + 1,
                    elapsed = ?start_instant.elapsed(),
                    "found net-zero size",
                );
                return Ok(NetZeroSize::Found(system_size));
            }
        }

        warn!(
            n_evaluated = Self::N_CANDIDATES,
            elapsed = ?start_instant.elapsed(),
            "no net-zero size in the scanned range",
        );
        Ok(NetZeroSize::Exhausted)
    }

    fn candidates() -> impl Iterator<Item = KilowattsPeak> {
        (1..=Self::N_CANDIDATES).map(|index| KilowattsPeak(f64::from(index) * Self::STEP))
    }
}
