//! Eureka registrar CLI.
//!
//! # Commands
//!
//! - `eureka-registrar register` - Register every configured instance
//! - `eureka-registrar discover <app>` - Print one `host:port` for an application
//!
//! Settings come from `--config` (JSON or TOML), `.env` and `EUREKA_*`
//! environment variables.

use clap::{Parser, Subcommand};
use eureka_config::RegistrarConfig;
use eureka_registrar::{Registrar, Result};
use std::path::PathBuf;
use tracing::error;

/// Register and discover service instances in a Eureka registry
#[derive(Parser)]
#[command(name = "eureka-registrar")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.json or .toml)
    #[arg(short, long, global = true, env = "EUREKA_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register every configured instance, in order
    #[command(alias = "r")]
    Register,

    /// Print the address of one instance of an application
    #[command(alias = "d")]
    Discover {
        /// Application name
        app: String,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let config = RegistrarConfig::load(cli.config.as_deref())?;
    let registrar = Registrar::from_config(&config)?;

    match cli.command {
        Commands::Register => {
            let count = registrar.register_all().await?;
            println!("registered {} instance(s)", count);
        }
        Commands::Discover { app } => {
            println!("{}", registrar.discover(&app).await?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    eureka_log::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
