#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, compare, net_zero, show_profile, simulate},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Simulate(args) => simulate(&args)?,
        Command::NetZero(args) => net_zero(&args)?,
        Command::Compare(args) => compare(&args)?,
        Command::Profile(args) => show_profile(&args)?,
    }

    info!("done!");
    Ok(())
}
