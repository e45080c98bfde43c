#![deny(clippy::pedantic)]
#![warn(clippy::future_not_send)]

#[macro_use]
extern crate async_trait;

mod batch;
mod commands;
mod config;
mod meta;
mod server;
mod source;

use self::commands::{CliCommand, Command};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[clap(about, version)]
struct CLIOptions {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let options: CLIOptions = CLIOptions::parse();
    match options.command {
        Command::Serve(command) => command.run().await,
        Command::Fetch(command) => command.run().await,
    }
}
