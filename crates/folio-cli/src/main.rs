use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A single-page terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Location to open, e.g. `/#projects`
    #[arg(short = 'r', long, global = true, default_value = "/")]
    route: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio in the terminal
    Run,
    /// List the outbound links on the page
    Links {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the page outline and section anchors
    Sections,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file no longer parses
    if let Some(Commands::Init { force }) = cli.command {
        init_stderr_logging(env_filter("info"));
        return commands::init::run(force);
    }

    // Load configuration
    let config = Arc::new(AppConfig::load()?);
    let filter = env_filter(&config.general.log_level);

    match cli.command {
        Some(Commands::Links { json }) => {
            init_stderr_logging(filter);
            commands::links::run(json)
        }
        Some(Commands::Sections) => {
            init_stderr_logging(filter);
            commands::sections::run()
        }
        _ => {
            init_file_logging(&config, filter)?;
            commands::run::run(config, &cli.route).await
        }
    }
}

/// `RUST_LOG` wins over the configured level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn init_stderr_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// The terminal UI owns stdout, so the log goes to a file under the data dir
fn init_file_logging(config: &AppConfig, filter: EnvFilter) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
