//! # said CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// South African identity number toolkit.
///
/// Validates identity numbers, decodes their fields, and computes Luhn
/// check digits.
#[derive(Parser, Debug)]
#[command(name = "said", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate identity numbers from arguments or stdin.
    Validate(said_cli::validate::ValidateArgs),
    /// Decode the fields of one identity number.
    Decode(said_cli::decode::DecodeArgs),
    /// Compute the check digit for a 12-digit payload.
    CheckDigit(said_cli::check_digit::CheckDigitArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate(args) => {
            let all_valid = said_cli::validate::run(&args, std::io::stdin().lock(), &mut stdout)?;
            if !all_valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode(args) => said_cli::decode::run(&args, &mut stdout)?,
        Commands::CheckDigit(args) => {
            said_cli::check_digit::run(&args, &mut stdout)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
