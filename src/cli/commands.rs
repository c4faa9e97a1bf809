use crate::config::DrawConfig;
use crate::definition::load_definition;
use crate::table::RouteSet;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for routedraw
#[derive(Parser)]
#[command(name = "routedraw")]
#[command(about = "Compile declarative route definitions into a route table", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a definition document and print every route
    Draw {
        /// Path to the route definition document (YAML or JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Compile a definition document and report the route count
    Check {
        /// Path to the route definition document (YAML or JSON)
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `METHOD /path -> handler` line per route
    Table,
    /// A JSON array of route objects
    Json,
}

/// Render a compiled table in the requested format
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render_routes(routes: &RouteSet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let width = routes
                .iter()
                .map(|r| r.method.as_str().len())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = routes
                .iter()
                .map(|r| {
                    format!(
                        "{:<width$} {} -> {}",
                        r.method.as_str(),
                        r.path,
                        r.handler.handler_name
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let entries: Vec<_> = routes
                .iter()
                .map(|r| {
                    json!({
                        "method": r.method.as_str(),
                        "path": r.path,
                        "handler": r.handler.handler_name,
                        "controller": r.controller(),
                        "action": r.action(),
                        "namespace": r.namespace(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries).context("Failed to serialize routes")
        }
    }
}

/// Execute a parsed command line
///
/// # Errors
///
/// Fails when the definition cannot be loaded or does not compile.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = DrawConfig::from_env();
    match cli.command {
        Commands::Draw { file, format } => {
            let routes = compile(&file, &config)?;
            println!("{}", render_routes(&routes, format)?);
        }
        Commands::Check { file } => {
            let routes = compile(&file, &config)?;
            println!("ok: {} routes", routes.len());
        }
    }
    Ok(())
}

fn compile(file: &Path, config: &DrawConfig) -> anyhow::Result<RouteSet> {
    let definition = load_definition(file)?;
    let routes = definition
        .compile(config)
        .with_context(|| format!("Failed to compile {}", file.display()))?;
    info!(file = %file.display(), routes_count = routes.len(), "Route table ready");
    Ok(routes)
}
