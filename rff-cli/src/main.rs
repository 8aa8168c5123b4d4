//! RFF CLI - Command line tool for forecasting the cost and environmental
//! impact of switching a foodservice operation to reusables.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rff-cli",
    version,
    about = "Reusable foodware forecast toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rff_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rff_cmd::run(cli.command)
}
