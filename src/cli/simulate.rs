use clap::Parser;

use crate::{cli::project::ProjectArgs, prelude::*, quantity::power::KilowattsPeak};

#[derive(Parser)]
pub struct SimulateArgs {
    /// Nameplate capacity of the system.
    #[clap(long = "size-kwp", default_value = "10", env = "SYSTEM_SIZE_KWP")]
    pub system_size: KilowattsPeak,

    #[clap(flatten)]
    pub project: ProjectArgs,
}

#[instrument(skip_all, fields(system_size = %args.system_size))]
pub fn simulate(args: &SimulateArgs) -> Result {
    let project = args.project.load()?;
    let report = project.report("Manual", args.system_size, None)?;
    info!(
        annual_cost = %report.simulation.annual_cost,
        coverage_ratio = %report.simulation.coverage_ratio,
        "simulated",
    );
    report.print(args.project.format)
}
