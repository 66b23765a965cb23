use serde::Serialize;

use crate::{
    cli::OutputFormat,
    core::{
        balance::EnergyBalance,
        hour::Hour,
        result::SimulationResult,
        scenario::ScenarioSummary,
        solver::NetZeroSize,
    },
    prelude::*,
    tables::{build_balance_table, build_monthly_table, build_scenario_table, build_summary_table},
};

#[must_use]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_zero: Option<NetZeroSize>,

    pub simulation: SimulationResult,
    pub typical_day: [EnergyBalance; Hour::N_HOURS],
    pub scenarios: Vec<ScenarioSummary>,
}

impl Report {
    pub fn print(&self, format: OutputFormat) -> Result {
        match format {
            OutputFormat::Table => {
                println!("{}", build_monthly_table(&self.simulation));
                println!("{}", build_balance_table(&self.typical_day));
                println!("{}", build_summary_table(&self.simulation));
                println!("{}", build_scenario_table(&self.scenarios));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(self)?),
        }
        Ok(())
    }
}
