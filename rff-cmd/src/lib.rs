//! Command implementations for the RFF CLI.
//!
//! Provides subcommands for running a forecast over a project snapshot
//! and for listing the registered locale utility rates.

use clap::Subcommand;

pub mod forecast;
pub mod rates;

#[derive(Subcommand)]
pub enum Command {
    /// Run a forecast over a project snapshot file
    Forecast {
        /// Path to the project snapshot JSON (inventory + resolved catalogs)
        #[arg(short = 'p', long)]
        project: String,

        /// Override the snapshot's locale for utility-rate resolution
        #[arg(long)]
        locale: Option<String>,

        /// Emit the full result tree as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List the registered locale utility rates
    Rates,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Forecast {
            project,
            locale,
            json,
        } => forecast::run_forecast(&project, locale.as_deref(), json),
        Command::Rates => rates::run_rates(),
    }
}
