mod commands;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "regform CLI - validate registration form values", long_about = None)]
struct Cli {
    /// Config file (default: ./regform.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log each evaluated field
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one field, as when it loses focus
    Check {
        /// Field id (fullName, email, password, confirmPassword, age)
        field: String,

        /// Value to check
        value: String,

        /// Password to compare against when checking confirmPassword
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Submit the whole form
    Submit {
        #[command(flatten)]
        values: commands::submit::FormArgs,

        /// Print the outcome as JSON instead of notices
        #[arg(long)]
        json: bool,
    },

    /// List the validated fields
    Fields,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => regform::Config::load(path)?,
        None => regform::Config::load_default()?,
    };

    let valid = match cli.command {
        Commands::Check {
            field,
            value,
            password,
        } => commands::check::execute(&field, &value, &password, &config)?,
        Commands::Submit { values, json } => commands::submit::execute(values, json, &config)?,
        Commands::Fields => {
            commands::fields::execute(&config);
            true
        }
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
