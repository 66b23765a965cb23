//! Saved responses of the PVGIS `PVcalc` endpoint.
//!
//! The response must be calculated for a 1 kWp system with zero system losses,
//! so that the monthly energy output `E_m` is the specific yield in kWh per kWp.

use std::{fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;

use crate::{core::yields::SolarYieldSeries, prelude::*};

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_monthly_yields(path: &Path) -> Result<SolarYieldSeries> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    monthly_yields(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
}

pub fn monthly_yields(json: &str) -> Result<SolarYieldSeries> {
    let mut outputs = match serde_json::from_str::<Response>(json)?.outputs.monthly {
        Monthly::Mounted { fixed } => fixed,
        Monthly::Plain(outputs) => outputs,
    };
    outputs.sort_by_key(|output| output.month);
    let months = outputs.iter().map(|output| output.month).collect_vec();
    ensure!(
        months.iter().copied().eq(1..=12),
        "expected the months 1 to 12 exactly once, got {months:?}",
    );
    for output in &outputs {
        debug!(month = output.month, energy = output.energy, "PVGIS output");
    }
    Ok(SolarYieldSeries::try_from(outputs.into_iter().map(|output| output.energy).collect_vec())?)
}

#[derive(Deserialize)]
struct Response {
    outputs: Outputs,
}

#[derive(Deserialize)]
struct Outputs {
    monthly: Monthly,
}

/// PVGIS nests the monthly outputs under the mounting type, older dumps keep a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Monthly {
    Mounted { fixed: Vec<MonthlyOutput> },
    Plain(Vec<MonthlyOutput>),
}

#[derive(Deserialize)]
struct MonthlyOutput {
    month: u8,

    /// Average monthly energy production.
    #[serde(rename = "E_m")]
    energy: f64,
}
