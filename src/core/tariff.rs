use serde::Serialize;

use crate::{
    core::error::Error,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        proportions::Percentage,
        rate::KilowattHourRate,
        zero::Zero,
    },
};

/// Share of the nominal generation that survives system losses, `0..=1`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LossFactor(f64);

impl LossFactor {
    pub const LOSSLESS: Self = Self(1.0);

    pub fn try_new(factor: f64) -> Result<Self, Error> {
        if (0.0..=1.0).contains(&factor) {
            Ok(Self(factor))
        } else {
            Err(Error::InvalidParameter { name: "loss factor", value: factor })
        }
    }

    pub fn try_from_losses(losses: Percentage) -> Result<Self, Error> {
        if (0.0..=100.0).contains(&losses.0) {
            Self::try_new(1.0 - losses.to_proportion())
        } else {
            Err(Error::InvalidParameter { name: "loss percentage", value: losses.0 })
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Net-billing tariff.
///
/// Excess energy offsetting the same month's import is credited at the retail rate
/// less [`TariffParameters::export_credit_c`]; the rest is credited at
/// [`TariffParameters::export_credit_g`].
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct TariffParameters {
    /// Retail rate of imported energy.
    pub unit_cost: KilowattHourRate,

    pub export_credit_g: KilowattHourRate,
    pub export_credit_c: KilowattHourRate,

    #[builder(default = LossFactor::LOSSLESS)]
    pub loss_factor: LossFactor,
}

/// Excess energy split into the two net-billing tranches.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExcessTranches {
    /// Offsets the import of the same month.
    pub first: KilowattHours,

    /// Beyond what the month's import can absorb.
    pub second: KilowattHours,
}

impl ExcessTranches {
    pub fn new(total_excess: KilowattHours, grid_import: KilowattHours) -> Self {
        Self {
            first: total_excess.min(grid_import),
            second: (total_excess - grid_import).max(KilowattHours::ZERO),
        }
    }
}

impl TariffParameters {
    /// Monthly bill: negative when the credits exceed the cost of the import.
    pub fn bill(&self, grid_import: KilowattHours, tranches: ExcessTranches) -> Cost {
        grid_import * self.unit_cost
            - tranches.first * (self.unit_cost - self.export_credit_c)
            - tranches.second * self.export_credit_g
    }
}
