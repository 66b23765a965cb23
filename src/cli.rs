mod compare;
mod net_zero;
mod profile;
mod project;
mod report;
mod simulate;
mod tariff;
mod yields;

use clap::{Parser, Subcommand};

pub use self::{
    compare::{CompareArgs, compare},
    net_zero::{NetZeroArgs, net_zero},
    profile::{ProfileArgs, show_profile},
    simulate::{SimulateArgs, simulate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Simulate the monthly balance and bills of the given system size.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Find the smallest system size with a non-positive annual bill, and simulate it.
    #[clap(name = "net-zero")]
    NetZero(Box<NetZeroArgs>),

    /// Compare the given system size against the reference scenarios.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Edit the consumption profile and print the resulting weights.
    #[clap(name = "profile")]
    Profile(Box<ProfileArgs>),
}

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,

    /// Pretty-printed JSON on the standard output.
    Json,
}
