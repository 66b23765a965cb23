use clap::Parser;

use crate::{
    cli::{
        OutputFormat,
        profile::ProfileSourceArgs,
        report::Report,
        tariff::TariffArgs,
        yields::YieldArgs,
    },
    core::{
        balance::typical_day,
        profile::ConsumptionProfile,
        scenario::{ScenarioComparator, ScenarioSummary},
        simulator::Simulator,
        solver::NetZeroSize,
        tariff::TariffParameters,
        yields::SolarYieldSeries,
    },
    prelude::*,
    quantity::{energy::KilowattHours, power::KilowattsPeak},
};

/// Site, tariff and solar resource of the sizing study.
#[derive(Parser)]
pub struct ProjectArgs {
    /// Energy consumed by the site in a month.
    #[clap(
        long = "monthly-consumption-kwh",
        default_value = "2500",
        env = "MONTHLY_CONSUMPTION_KWH"
    )]
    pub monthly_consumption: KilowattHours,

    #[clap(flatten)]
    pub profile: ProfileSourceArgs,

    #[clap(flatten)]
    pub yields: YieldArgs,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[clap(long = "format", default_value = "table", env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

impl ProjectArgs {
    pub fn load(&self) -> Result<Project> {
        let project = Project {
            monthly_consumption: self.monthly_consumption,
            profile: self.profile.load()?,
            yields: self.yields.load()?,
            tariff: self.tariff.parameters()?,
        };
        info!(
            monthly_consumption = %project.monthly_consumption,
            loss_factor = project.tariff.loss_factor.get(),
            "loaded the project",
        );
        Ok(project)
    }
}

pub struct Project {
    pub monthly_consumption: KilowattHours,
    pub profile: ConsumptionProfile,
    pub yields: SolarYieldSeries,
    pub tariff: TariffParameters,
}

impl Project {
    /// Simulate the system size, its typical day, and the reference scenarios.
    pub fn report(
        &self,
        title: &str,
        system_size: KilowattsPeak,
        net_zero: Option<NetZeroSize>,
    ) -> Result<Report> {
        let simulation = Simulator::builder()
            .system_size(system_size)
            .monthly_consumption(self.monthly_consumption)
            .yields(&self.yields)
            .profile(&self.profile)
            .tariff(self.tariff)
            .simulate()?;
        let typical_day = typical_day(
            &self.profile,
            self.monthly_consumption,
            system_size,
            &self.yields,
            self.tariff.loss_factor,
        )?;
        Ok(Report { net_zero, simulation, typical_day, scenarios: self.compare(title, system_size)? })
    }

    pub fn compare(
        &self,
        title: &str,
        system_size: KilowattsPeak,
    ) -> Result<Vec<ScenarioSummary>> {
        Ok(ScenarioComparator::builder()
            .system_size(system_size)
            .title(title)
            .monthly_consumption(self.monthly_consumption)
            .yields(&self.yields)
            .profile(&self.profile)
            .tariff(self.tariff)
            .compare()?)
    }
}
