use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use address_groups::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "addrgroups")]
#[command(about = "Edit address groups and bulk-import addresses from text or xlsx files")]
#[command(version)]
struct Cli {
    /// Working directory used for config lookup (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .addrgroups/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the group dialog for a group JSON file
    Edit {
        /// Group file to edit; saved in place
        file: PathBuf,
    },

    /// Parse an address list and print the rows as JSON
    Import {
        /// File to parse (.txt or .xlsx)
        file: PathBuf,

        /// Declared MIME type (defaults to the one implied by the extension)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Print a group file
    Show {
        file: PathBuf,
    },

    /// Write a default .addrgroups/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let config_override = cli.config.as_deref();

    match cli.command {
        Commands::Edit { file } => {
            let config = Config::resolve(&work_dir, config_override)?;
            address_groups::gui::run_gui(&file, config)?;
        }
        Commands::Import { file, mime } => {
            let config = Config::resolve(&work_dir, config_override)?;
            cli::import::import_command(&file, mime.as_deref(), &config).await?;
        }
        Commands::Show { file } => {
            cli::show::show_command(&file)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(&work_dir, force)?;
        }
    }

    Ok(())
}
