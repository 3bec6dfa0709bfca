mod script;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use placement::catalog::{COLORS, FINISHES, PRODUCTS, Product};
use placement::config::{ConfigError, EngineConfig};
use placement::engine::EngineCore;
use placement::summary::{LineItem, bill_of_materials, total_units};

use crate::script::{Replay, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

#[derive(Parser, Debug)]
#[command(name = "benchyard", about = "Concrete bench layout placement engine")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true, env = "BENCHYARD_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an interaction script and print the resulting scene.
    Replay(ReplayArgs),
    /// Print the registered products, finishes and colors.
    Catalog,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON array of steps.
    script: PathBuf,

    /// Also print the bill of materials for the final scene.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

#[derive(Serialize)]
struct CatalogListing {
    products: &'static [Product],
    finishes: &'static [&'static str],
    colors: &'static [&'static str],
}

#[derive(Serialize)]
struct OrderSummary {
    lines: Vec<LineItem>,
    total_units: usize,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => run_replay(&args, cli.pretty),
        Command::Catalog => print_json(&CatalogListing { products: PRODUCTS, finishes: FINISHES, colors: COLORS }, cli.pretty),
    }
}

fn run_replay(args: &ReplayArgs, pretty: bool) -> Result<(), CliError> {
    let config = EngineConfig::from_env()?;
    let text = std::fs::read_to_string(&args.script)
        .map_err(|source| CliError::Read { path: args.script.clone(), source })?;
    let steps = script::parse(&text)?;

    let mut replay = Replay::new(EngineCore::with_config(config));
    replay.run(&steps)?;

    let scene = replay.core().snapshot();
    tracing::info!(
        steps = steps.len(),
        actions = replay.actions_emitted(),
        objects = scene.objects.len(),
        "replay finished"
    );
    if let Some(obj) = scene.objects.iter().find(|o| o.is_colliding) {
        tracing::warn!(id = %obj.id, variant = %obj.variant, "scene still contains a colliding object");
    }
    print_json(&scene, pretty)?;

    if args.summary {
        let lines = bill_of_materials(&scene.objects);
        let total_units = total_units(&lines);
        print_json(&OrderSummary { lines, total_units }, pretty)?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{text}");
    Ok(())
}
