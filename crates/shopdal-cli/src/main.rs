//! shopdal - inspect and validate the storefront entity schema.
//!
//! Subcommands:
//! - `list`: entity names, kinds and field counts
//! - `show`: the fields of one entity
//! - `validate`: build the schema and report every problem
//! - `dump`: the schema as JSON

mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shopdal::{
    Error,
    config::Config,
    schema::{Error as SchemaError, build::BuildError, node::Schema},
};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// shopdal - storefront entity schemas
#[derive(Parser)]
#[command(name = "shopdal")]
#[command(about = "Inspect and validate storefront entity schemas")]
#[command(version)]
struct App {
    /// Path to the configuration file (defaults to ./shopdal.toml if present)
    #[arg(short, long, global = true, env = "SHOPDAL_CONFIG")]
    config: Option<PathBuf>,

    /// Run in verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered entities
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the fields of one entity
    Show {
        /// Entity name, e.g. `category`
        entity: String,
    },

    /// Build the schema strictly and report validation errors
    Validate,

    /// Print the schema as JSON
    Dump {
        /// Only dump this entity
        #[arg(long)]
        entity: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let app = App::parse();

    let loaded = Config::load_or_default(app.config.as_deref());
    let mut config = loaded.context("failed to load configuration")?;

    // Initialize logging
    let filter = if app.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log.filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        path = ?app.config,
        strict = config.schema.strict,
        "configuration loaded"
    );

    match app.command {
        Command::List { json } => {
            let schema = shopdal::load(&config)?;
            if json {
                let summaries = render::summaries(&schema);
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                print!("{}", render::entity_table(&schema));
            }
        }
        Command::Show { entity } => {
            let schema = shopdal::load(&config)?;
            let entity = schema.try_get(&entity)?;
            print!("{}", render::field_table(entity));
        }
        Command::Validate => {
            config.schema.strict = true;
            return Ok(validate(&config));
        }
        Command::Dump { entity, pretty } => {
            let schema = shopdal::load(&config)?;
            println!("{}", dump(&schema, entity.as_deref(), pretty)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn validate(config: &Config) -> ExitCode {
    match shopdal::load(config) {
        Ok(schema) => {
            println!(
                "schema is valid: {} entities, {} fields",
                schema.len(),
                schema.field_count()
            );
            ExitCode::SUCCESS
        }
        Err(Error::Schema(SchemaError::BuildError(BuildError::Validation(errs)))) => {
            eprintln!("schema has {} problem(s):", errs.len());
            for (route, message) in errs.flatten() {
                eprintln!("  {route}: {message}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dump(schema: &Schema, entity: Option<&str>, pretty: bool) -> anyhow::Result<String> {
    let value = match entity {
        Some(name) => serde_json::to_value(schema.try_get(name)?)?,
        None => serde_json::to_value(schema)?,
    };

    let out = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(out)
}
