use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod shared;
pub mod system;

/// Inspect field schemas of saved query results
#[derive(Debug, Parser)]
#[command(name = "axiom-inspect", version)]
struct Cli {
    /// Config file (defaults to config.toml next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the fields of every table in a query result
    Fields {
        /// JSON file with the query response, stdin when omitted
        file: Option<PathBuf>,
        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse field type strings such as "int|long"
    Parse {
        #[arg(required = true)]
        types: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = shared::config::load_config(cli.config.as_deref())?;
    system::tracing::initialize(&config.logging)?;

    match &config.source {
        Some(path) => tracing::debug!("Loaded config from: {}", path.display()),
        None => tracing::debug!("Using default embedded configuration"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Fields { file, json } => {
            let result = commands::read_result(file.as_deref())?;
            commands::run_fields(&result, json || config.output.json, &mut out)
        }
        Command::Parse { types } => commands::run_parse(&types, &mut out),
    }
}
