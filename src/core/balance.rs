use std::{array, ops::Mul};

use serde::Serialize;

use crate::{
    core::{
        DAYS_PER_MONTH,
        error::Error,
        hour::Hour,
        profile::ConsumptionProfile,
        shape::GENERATION_SHAPE,
        tariff::LossFactor,
        yields::SolarYieldSeries,
    },
    quantity::{
        energy::KilowattHours,
        power::KilowattsPeak,
        specific_yield::SpecificYield,
        zero::Zero,
    },
};

/// Split of consumption and on-site generation over the same period.
#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    derive_more::Add,
    derive_more::Sum,
)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBalance {
    pub consumption: KilowattHours,
    pub generation: KilowattHours,

    /// Generation consumed in the same period.
    pub self_consumption: KilowattHours,

    /// Generation in excess of the consumption.
    pub surplus: KilowattHours,

    /// Consumption not covered by the generation.
    pub deficit: KilowattHours,
}

impl EnergyBalance {
    pub fn new(consumption: KilowattHours, generation: KilowattHours) -> Self {
        Self {
            consumption,
            generation,
            self_consumption: consumption.min(generation),
            surplus: (generation - consumption).max(KilowattHours::ZERO),
            deficit: (consumption - generation).max(KilowattHours::ZERO),
        }
    }
}

impl Mul<f64> for EnergyBalance {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            consumption: self.consumption * rhs,
            generation: self.generation * rhs,
            self_consumption: self.self_consumption * rhs,
            surplus: self.surplus * rhs,
            deficit: self.deficit * rhs,
        }
    }
}

/// Hourly consumption over a typical day of the month.
pub fn daily_consumption(
    profile: &ConsumptionProfile,
    monthly_consumption: KilowattHours,
) -> [KilowattHours; Hour::N_HOURS] {
    let daily_consumption = monthly_consumption / DAYS_PER_MONTH;
    profile.shares().map(|share| daily_consumption * share)
}

/// Hourly generation over a typical day of a month with the given specific yield.
pub fn daily_generation(
    system_size: KilowattsPeak,
    specific_yield: SpecificYield,
    loss_factor: LossFactor,
) -> [KilowattHours; Hour::N_HOURS] {
    let daily_generation = system_size * specific_yield * loss_factor.get() / DAYS_PER_MONTH;
    GENERATION_SHAPE.map(|share| daily_generation * share)
}

pub fn hourly_balance(
    consumption: &[KilowattHours; Hour::N_HOURS],
    generation: &[KilowattHours; Hour::N_HOURS],
) -> [EnergyBalance; Hour::N_HOURS] {
    array::from_fn(|hour| EnergyBalance::new(consumption[hour], generation[hour]))
}

/// Hourly balance of a typical day at the average monthly yield.
pub fn typical_day(
    profile: &ConsumptionProfile,
    monthly_consumption: KilowattHours,
    system_size: KilowattsPeak,
    yields: &SolarYieldSeries,
    loss_factor: LossFactor,
) -> Result<[EnergyBalance; Hour::N_HOURS], Error> {
    Error::ensure_non_negative("system size", system_size.0)?;
    Error::ensure_non_negative("monthly consumption", monthly_consumption.0)?;
    Ok(hourly_balance(
        &daily_consumption(profile, monthly_consumption),
        &daily_generation(system_size, yields.average(), loss_factor),
    ))
}
