use clap::Parser;

use crate::{
    core::tariff::{LossFactor, TariffParameters},
    prelude::*,
    quantity::{proportions::Percentage, rate::KilowattHourRate},
};

#[derive(Parser)]
pub struct TariffArgs {
    /// Retail rate of the imported energy («CU»).
    #[clap(long = "unit-cost", default_value = "859.19", env = "UNIT_COST")]
    pub unit_cost: KilowattHourRate,

    /// Credit rate of the excess beyond the month's import («Venta G»).
    #[clap(long = "export-credit-g", default_value = "280.04", env = "EXPORT_CREDIT_G")]
    pub export_credit_g: KilowattHourRate,

    /// Charge retained on the excess offsetting the month's import («Venta C»).
    #[clap(long = "export-credit-c", default_value = "113.66", env = "EXPORT_CREDIT_C")]
    pub export_credit_c: KilowattHourRate,

    /// System losses in percent, `0..=100`.
    #[clap(long = "losses-percent", default_value = "20", env = "LOSSES_PERCENT")]
    pub losses: Percentage,
}

impl TariffArgs {
    pub fn parameters(&self) -> Result<TariffParameters> {
        Ok(TariffParameters::builder()
            .unit_cost(self.unit_cost)
            .export_credit_g(self.export_credit_g)
            .export_credit_c(self.export_credit_c)
            .loss_factor(LossFactor::try_from_losses(self.losses)?)
            .build())
    }
}
