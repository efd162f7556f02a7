use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kama_config::Config;
use kama_export::{deps, store, table};
use kama_fetch::{CachedSource, DirSource, HttpSource, PageSource};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod runner;
mod summary;

#[derive(Parser)]
#[command(name = "kama", version, about = "Harvests kanji vocabulary records from character pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch pages (cache-backed) and export the accepted records.
    Scrape {
        /// First page number, defaults to the configured range.
        #[arg(long)]
        first: Option<u32>,
        /// Last page number (inclusive).
        #[arg(long)]
        last: Option<u32>,
    },
    /// Extract from previously cached pages only, no network.
    Extract {
        #[arg(long)]
        first: Option<u32>,
        #[arg(long)]
        last: Option<u32>,
    },
    /// Re-export the records table from the JSON record store.
    Export,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();
    let cli = Cli::parse();

    match cli.command {
        Command::Scrape { first, last } => {
            let http = HttpSource::new(config.site.clone(), &config.fetch)?;
            let source = Arc::new(CachedSource::new(http, &config.fetch.cache_dir));
            scrape(source, &config, first, last).await
        }
        Command::Extract { first, last } => {
            let source = Arc::new(DirSource::new(&config.fetch.cache_dir));
            scrape(source, &config, first, last).await
        }
        Command::Export => export_from_store(&config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    }
}

async fn scrape(
    source: Arc<dyn PageSource>,
    config: &Config,
    first: Option<u32>,
    last: Option<u32>,
) -> Result<()> {
    let first = first.unwrap_or(config.site.first_page);
    let last = last.unwrap_or(config.site.last_page);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown requested");
                cancel.cancel();
            }
        });
    }

    let output = runner::run(source, first..=last, config, cancel).await?;
    write_outputs(&output, config)?;

    println!("{}", output.summary);
    println!("audit log: {}", config.export.audit_path);
    Ok(())
}

fn write_outputs(output: &runner::RunOutput, config: &Config) -> Result<()> {
    let records: Vec<_> = output.accepted.iter().map(|(r, _)| r.clone()).collect();

    let records_file = create_output(&config.export.records_path)?;
    table::export_records(records_file, &records, &config.export)
        .context("failed to write the records table")?;

    let mut rows = Vec::new();
    for (record, components) in &output.accepted {
        rows.extend(deps::dependency_rows(record, components));
    }
    let deps_file = create_output(&config.export.deps_path)?;
    deps::export_dependencies(deps_file, &rows, &config.export)
        .context("failed to write the dependency list")?;

    store::write_store(Path::new(&config.export.store_path), &records)
        .context("failed to write the record store")?;
    Ok(())
}

fn export_from_store(config: &Config) -> Result<()> {
    let mut records = store::read_store(Path::new(&config.export.store_path))
        .context("failed to read the record store")?;
    table::sort_records(&mut records);

    let records_file = create_output(&config.export.records_path)?;
    table::export_records(records_file, &records, &config.export)
        .context("failed to write the records table")?;

    println!(
        "re-exported {} records to {}",
        records.len(),
        config.export.records_path
    );
    Ok(())
}

fn create_output(path: &str) -> Result<std::fs::File> {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
