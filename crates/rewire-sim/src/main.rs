use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    ensemble::{self, EnsembleArgs},
    rewire::{self, RewireArgs},
    verify::{self, VerifyArgs},
};
use tracing::error;

mod commands;
mod io;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "rewire-sim", about = "Degree-preserving graph rewiring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewire one graph and write the result.
    Rewire(RewireArgs),
    /// Produce independent rewired replicates of one graph.
    Ensemble(EnsembleArgs),
    /// Check that a rewired graph preserves degrees and weights of the original.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("rewire-sim: {err}");
        return ExitCode::FAILURE;
    }
    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Command::Rewire(args) => {
            let summary = rewire::run(&args)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Ensemble(args) => {
            let summary = ensemble::run(&args)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify(args) => {
            let check = verify::run(&args)?;
            println!("{}", serde_json::to_string_pretty(&check)?);
            if check.is_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                error!("rewired graph is not a valid null model of the original");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
