//! Map a JSON fixture across the plugin boundary and print the result

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use terminal_mappings_rs::fixtures::{map_fixture, FixtureKind};
use terminal_mappings_rs::{MappingConfig, TransportAdapter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "map_fixture", about = "Map terminal SDK and plugin JSON fixtures")]
struct Cli {
    /// Kind of object stored in the fixture
    #[arg(value_enum)]
    kind: FixtureKind,

    /// Path to the JSON fixture
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MappingConfig::from_env()?;
    tracing::debug!(?config, "Loaded mapping configuration");
    let adapter = TransportAdapter::new(config);

    let contents = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("Failed to read fixture {}", cli.path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", cli.path.display()))?;

    let output = map_fixture(&adapter, cli.kind, value)
        .with_context(|| format!("Failed to map fixture {}", cli.path.display()))?;

    tracing::info!(kind = ?cli.kind, path = %cli.path.display(), "Fixture mapped");
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
