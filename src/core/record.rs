use chrono::Month;
use serde::{Serialize, Serializer};

use crate::{
    core::{
        balance::EnergyBalance,
        tariff::{ExcessTranches, TariffParameters},
    },
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Outcome of a single simulated month.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    #[serde(rename = "monthLabel", serialize_with = "serialize_month_label")]
    pub month: Month,

    pub generation: KilowattHours,
    pub self_consumption: KilowattHours,
    pub grid_import: KilowattHours,
    pub total_excess: KilowattHours,
    pub excess_tranche_1: KilowattHours,
    pub excess_tranche_2: KilowattHours,
    pub bill: Cost,
}

impl MonthlyRecord {
    pub fn new(month: Month, balance: EnergyBalance, tariff: &TariffParameters) -> Self {
        let tranches = ExcessTranches::new(balance.surplus, balance.deficit);
        Self {
            month,
            generation: balance.generation,
            self_consumption: balance.self_consumption,
            grid_import: balance.deficit,
            total_excess: balance.surplus,
            excess_tranche_1: tranches.first,
            excess_tranche_2: tranches.second,
            bill: tariff.bill(balance.deficit, tranches),
        }
    }

    pub fn month_label(&self) -> &'static str {
        month_label(self.month)
    }
}

fn month_label(month: Month) -> &'static str {
    &month.name()[..3]
}

#[expect(clippy::trivially_copy_pass_by_ref)]
fn serialize_month_label<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month_label(*month))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    fn tariff() -> TariffParameters {
        TariffParameters::builder()
            .unit_cost(KilowattHourRate(1.0))
            .export_credit_g(KilowattHourRate(0.25))
            .export_credit_c(KilowattHourRate(0.5))
            .build()
    }

    #[test]
    fn test_new() {
        let balance = EnergyBalance {
            consumption: KilowattHours(300.0),
            generation: KilowattHours(400.0),
            self_consumption: KilowattHours(100.0),
            surplus: KilowattHours(300.0),
            deficit: KilowattHours(200.0),
        };
        let record = MonthlyRecord::new(Month::March, balance, &tariff());
        assert_eq!(record.month_label(), "Mar");
        assert_eq!(record.grid_import, KilowattHours(200.0));
        assert_eq!(record.excess_tranche_1, KilowattHours(200.0));
        assert_eq!(record.excess_tranche_2, KilowattHours(100.0));
        assert_abs_diff_eq!(record.bill.0, 75.0);
    }

    #[test]
    fn test_serialize() {
        let record = MonthlyRecord::new(
            Month::September,
            EnergyBalance::new(KilowattHours(10.0), KilowattHours(4.0)),
            &tariff(),
        );
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["monthLabel"], "Sep");
        assert_eq!(json["gridImport"], 6.0);
        assert_eq!(json["excessTranche1"], 0.0);
        assert_eq!(json["bill"], 6.0);
    }
}
