use std::{fs, path::PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::{api::pvgis, core::yields::SolarYieldSeries, prelude::*};

/// Where to take the monthly specific yields from, exactly one is required.
#[derive(Parser)]
#[group(required = true, multiple = false)]
pub struct YieldArgs {
    /// Twelve comma-separated monthly yields in kWh per kWp, January first.
    #[clap(long = "yields", env = "SOLAR_YIELDS", value_delimiter = ',')]
    pub yields: Vec<f64>,

    /// TOML file with `monthly_yields = [12 numbers]`.
    #[clap(long = "yields-file", env = "SOLAR_YIELDS_FILE")]
    pub yields_file: Option<PathBuf>,

    /// Saved JSON response of the PVGIS `PVcalc` endpoint for a 1 kWp lossless system.
    #[clap(long = "pvgis-file", env = "PVGIS_FILE")]
    pub pvgis_file: Option<PathBuf>,
}

#[derive(Deserialize)]
struct YieldsFile {
    monthly_yields: SolarYieldSeries,
}

impl YieldArgs {
    pub fn load(&self) -> Result<SolarYieldSeries> {
        let yields = if let Some(path) = &self.pvgis_file {
            pvgis::read_monthly_yields(path)?
        } else if let Some(path) = &self.yields_file {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            toml::from_str::<YieldsFile>(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display()))?
                .monthly_yields
        } else {
            SolarYieldSeries::try_from(self.yields.clone()).context("invalid `--yields`")?
        };
        info!(average = %yields.average(), "loaded solar yields");
        Ok(yields)
    }
}
