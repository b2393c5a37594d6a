use clap::{Parser, Subcommand};
use pilist_application::use_cases::ListSelection;
use pilist_domain::{CliOverrides, Config, DomainError, ListAction};
use std::path::PathBuf;
use tracing::{debug, error};

mod bootstrap;
mod commands;
mod di;
mod prompt;
mod session;

use commands::import::ImportArgs;
use prompt::Prompt;
use session::ConnectionSlot;

#[derive(Parser)]
#[command(name = "pilist")]
#[command(version)]
#[command(about = "Bulk-import allowlists and blocklists into a Pi-hole 5 gravity database")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Gravity database path
    #[arg(long, value_name = "PATH")]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Store entries as allow or deny rules
    #[arg(long, default_value = "allow", value_parser = parse_action)]
    action: ListAction,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a curated remote list by key
    Catalog { key: String },
    /// Import a local list or hosts file
    File { path: PathBuf },
    /// Import domains pasted on stdin, ended by an empty line
    Paste,
    /// Show the curated lists available to `catalog`
    Sources,
}

fn parse_action(s: &str) -> Result<ListAction, String> {
    ListAction::from_str(s).ok_or_else(|| format!("unknown action '{}', expected allow or deny", s))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting pilist v{}", env!("CARGO_PKG_VERSION"));

    let slot = ConnectionSlot::default();
    let outcome = tokio::select! {
        result = run(&cli, &config, &slot) => Some(result),
        Ok(()) = tokio::signal::ctrl_c() => None,
    };
    slot.close().await;

    match outcome {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => {
            report(&e);
            std::process::exit(1);
        }
        // A pending stdin read would otherwise hold the runtime open.
        None => {
            debug!("Interrupted, exiting");
            std::process::exit(0);
        }
    }
}

async fn run(cli: &Cli, config: &Config, slot: &ConnectionSlot) -> anyhow::Result<()> {
    let services = di::Services::new(config)?;
    let mut prompt = Prompt::new();

    let selection = match &cli.command {
        Command::Sources => {
            commands::sources::run(&services.catalog);
            return Ok(());
        }
        Command::Catalog { key } => ListSelection::Catalog(key.clone()),
        Command::File { path } => ListSelection::File(path.clone()),
        Command::Paste => {
            println!("Paste domains, one per line. Finish with an empty line:");
            ListSelection::Paste(prompt.read_paste().await?)
        }
    };

    let args = ImportArgs {
        selection,
        action: cli.action,
        assume_yes: cli.yes,
    };

    commands::import::run(config, &services, args, &mut prompt, slot).await
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::DatabaseError(msg)) | Some(DomainError::InvalidDatabase(msg)) => {
            error!(error = %msg, "Database error");
            eprintln!("\n\tDatabase error!\n\t{}", msg);
        }
        Some(e @ DomainError::EmptyBatch) => eprintln!("{}", e),
        _ => {
            error!(error = %err, "Run failed");
            eprintln!("Error: {:#}", err);
        }
    }
}
