use serde::Serialize;

use crate::{
    core::{record::MonthlyRecord, scenario::ScenarioSummary},
    quantity::{cost::Cost, energy::KilowattHours, power::KilowattsPeak, proportions::Percentage},
};

/// Twelve simulated months of a single system size.
#[must_use]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    #[serde(rename = "systemSizeKwp")]
    pub system_size: KilowattsPeak,

    /// Sum of the monthly bills.
    pub annual_cost: Cost,

    /// Annual generation relative to the annual consumption.
    pub coverage_ratio: Percentage,

    #[serde(rename = "monthlyRecords")]
    pub months: Vec<MonthlyRecord>,
}

impl SimulationResult {
    pub fn total_generation(&self) -> KilowattHours {
        self.months.iter().map(|record| record.generation).sum()
    }

    pub fn total_grid_import(&self) -> KilowattHours {
        self.months.iter().map(|record| record.grid_import).sum()
    }

    pub fn total_excess(&self) -> KilowattHours {
        self.months.iter().map(|record| record.total_excess).sum()
    }

    pub fn summarize(&self, label: impl Into<String>) -> ScenarioSummary {
        ScenarioSummary {
            label: label.into(),
            system_size: self.system_size,
            coverage_ratio: self.coverage_ratio,
            annual_cost: self.annual_cost,
        }
    }
}
