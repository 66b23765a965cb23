use clap::Parser;

use crate::{
    cli::project::ProjectArgs,
    core::solver::{NetZeroSize, NetZeroSolver},
    prelude::*,
};

#[derive(Parser)]
pub struct NetZeroArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,
}

pub fn net_zero(args: &NetZeroArgs) -> Result {
    let project = args.project.load()?;
    let outcome = NetZeroSolver::builder()
        .monthly_consumption(project.monthly_consumption)
        .yields(&project.yields)
        .profile(&project.profile)
        .tariff(project.tariff)
        .solve()?;
    if outcome == NetZeroSize::Exhausted {
        warn!(sentinel = %NetZeroSize::SENTINEL, "simulating the sentinel size instead");
    }
    project.report("Optimized", outcome.kilowatts_peak(), Some(outcome))?.print(args.project.format)
}
