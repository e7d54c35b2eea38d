mod cli;
mod command_line;
mod error;
mod output;
mod signals;
mod timer;
mod util;

use std::process::{Command, ExitCode};

use anyhow::Result;
use clap::Parser;

use cli::Args;
use error::TimeError;
use timer::wall_clock_timer::WallClockTimer;

fn print_banner() {
    println!(
        "{} {}: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    );
    println!("Usage: {} [program and arguments]", env!("CARGO_PKG_NAME"));
}

fn run(args: &Args) -> Result<ExitCode> {
    if args.command.is_empty() {
        print_banner();
        return Ok(ExitCode::SUCCESS);
    }

    let command_line = command_line::assemble(&args.command)?;

    signals::install();

    let wall_clock_timer = WallClockTimer::start();

    // Stdio is inherited from the parent, so the child shares our console.
    let child = match Command::new(&args.command[0]).args(&args.command[1..]).spawn() {
        Ok(child) => child,
        Err(_) => {
            // Printed to stdout, not stderr: scripts match on this line.
            println!("{}", TimeError::SpawnFailed { command_line });
            return Ok(ExitCode::FAILURE);
        }
    };

    let (result, _status) = timer::measure(child, &wall_clock_timer)?;

    // The child's own exit status is deliberately not propagated; the run
    // counts as successful once the measurement has been reported.
    output::report(&result);

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
