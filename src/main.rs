//! Command line entry point for the Payroll Engine.

use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::format_currency;
use payroll_engine::config::ConfigLoader;
use payroll_engine::console::{
    ConsoleInput, run_acronym_session, run_decades_session, run_dice_session, run_loan_session,
    run_rps_session,
};
use payroll_engine::files::archive_zip_files;
use payroll_engine::glossary::AcronymFile;

const DEFAULT_ROSTER: &str = "config/roster.yaml";

/// Payroll Engine - paychecks, loan amortization and console tools
#[derive(Parser, Debug)]
#[command(name = "payroll-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every employee's paycheck from a roster file
    Payroll {
        /// Path to the roster YAML file
        #[arg(short, long, default_value = DEFAULT_ROSTER)]
        roster: PathBuf,
    },

    /// Simulate paying off a loan month by month
    Loan,

    /// Initialize or extend an acronym glossary file
    Acronym {
        /// Glossary file to write
        #[arg(short, long, default_value = "output.txt")]
        file: PathBuf,
    },

    /// Play one round of rock-paper-scissors
    Rps,

    /// Roll a die for two players
    Dice,

    /// Report the decade of a birth year
    Decades,

    /// Move .zip files in a directory into its zip/ subdirectory
    ArchiveZips {
        /// Directory to tidy
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Dry run - show what would be moved
        #[arg(long)]
        dry_run: bool,
    },

    /// Serve the JSON API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Path to the roster YAML file
        #[arg(short, long, default_value = DEFAULT_ROSTER)]
        roster: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = io::stdout();
    match cli.command {
        Commands::Payroll { roster } => {
            let config = ConfigLoader::load(&roster)
                .with_context(|| format!("loading roster {}", roster.display()))?;
            let company = config.company();
            company.display_employees(&mut out)?;
            writeln!(out, "Total payroll: {}", format_currency(company.total_payroll()))?;
        }
        Commands::Loan => {
            let mut input = ConsoleInput::stdio();
            run_loan_session(&mut input, &mut out)?;
        }
        Commands::Acronym { file } => {
            let mut input = ConsoleInput::stdio();
            let written = run_acronym_session(&mut input, &mut out, &AcronymFile::new(file))?;
            info!(written, "Acronym session finished");
        }
        Commands::Rps => {
            let mut input = ConsoleInput::stdio();
            run_rps_session(&mut input, &mut out, &mut rand::rng())?;
        }
        Commands::Dice => {
            let mut input = ConsoleInput::stdio();
            run_dice_session(&mut input, &mut out, &mut rand::rng())?;
        }
        Commands::Decades => {
            let mut input = ConsoleInput::stdio();
            run_decades_session(&mut input, &mut out)?;
        }
        Commands::ArchiveZips { dir, dry_run } => {
            let moves = archive_zip_files(&dir, dry_run)
                .with_context(|| format!("archiving zip files in {}", dir.display()))?;
            let verb = if dry_run { "Would move" } else { "Moved" };
            for file_move in &moves {
                writeln!(
                    out,
                    "{} {} -> {}",
                    verb,
                    file_move.from.display(),
                    file_move.to.display()
                )?;
            }
        }
        Commands::Serve { bind, roster } => {
            let config = ConfigLoader::load(&roster)
                .with_context(|| format!("loading roster {}", roster.display()))?;
            let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            runtime.block_on(serve(bind, AppState::from_config(&config)))?;
        }
    }

    Ok(())
}

async fn serve(bind: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    info!(address = %bind, "Payroll Engine API listening");
    axum::serve(listener, create_router(state))
        .await
        .context("serving HTTP API")?;
    Ok(())
}
