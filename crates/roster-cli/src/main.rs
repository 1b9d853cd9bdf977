//! Roster CLI
//!
//! Line-oriented front end for the account registry. `exec` runs one
//! command and exits; `repl` reads command lines from stdin until EOF,
//! standing in for the chat transport the registry is normally driven
//! by.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster_engine::{dispatch, Registry};

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - account registry over textual commands", long_about = None)]
struct Cli {
    /// Path of the registry file
    #[arg(long, default_value = "registry.json")]
    data: PathBuf,

    /// Name of the table served from the registry file
    #[arg(long, default_value = "accounts")]
    table: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a single command line and print the response
    Exec {
        /// The command and its arguments, e.g. `search_rank plat 1`
        line: Vec<String>,
    },
    /// Read command lines from stdin until EOF
    Repl,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // A registry that cannot load its table cannot serve at all
    let registry = match Registry::open(&cli.data, &cli.table) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Exec { line } => {
            let line = line.join(" ");
            match dispatch(&registry, &line).await {
                Ok(response) => println!("{}", response),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Repl => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match dispatch(&registry, &line).await {
                    Ok(response) => println!("{}", response),
                    Err(e) => {
                        // Persistence failures are logged and reported,
                        // but the process keeps serving
                        tracing::error!(component = "cli", error = %e, "command failed");
                        eprintln!("Error: {}", e);
                    }
                }
            }
        }
    }
}
