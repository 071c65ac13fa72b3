mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "routegate")]
#[command(version, about = "Routegate CLI - inspect and validate route tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the route tree from a table and print it
    Inspect {
        /// Path to the route table (TOML)
        table: PathBuf,

        /// Print the tree as JSON instead of indented text
        #[arg(long)]
        json: bool,
    },

    /// Print the navigation manifest for a table
    Nav {
        /// Path to the route table (TOML)
        table: PathBuf,

        /// Print the manifest as JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Validate a route table without printing the tree
    Check {
        /// Path to the route table (TOML)
        table: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Inspect { table, json } => {
            commands::inspect::execute(&table, json)?;
        }
        Commands::Nav { table, json } => {
            commands::nav::execute(&table, json)?;
        }
        Commands::Check { table } => {
            commands::check::execute(&table)?;
        }
    }

    Ok(())
}
