use clap::Parser;

use crate::{
    cli::{OutputFormat, project::ProjectArgs},
    prelude::*,
    quantity::power::KilowattsPeak,
    tables::build_scenario_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Nameplate capacity of the compared system.
    #[clap(long = "size-kwp", default_value = "10", env = "SYSTEM_SIZE_KWP")]
    pub system_size: KilowattsPeak,

    /// Names the compared system in the first row.
    #[clap(long = "title", default_value = "Manual")]
    pub title: String,

    #[clap(flatten)]
    pub project: ProjectArgs,
}

pub fn compare(args: &CompareArgs) -> Result {
    let scenarios = args.project.load()?.compare(&args.title, args.system_size)?;
    match args.project.format {
        OutputFormat::Table => println!("{}", build_scenario_table(&scenarios)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scenarios)?),
    }
    Ok(())
}
