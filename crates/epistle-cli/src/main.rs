#![forbid(unsafe_code)]

mod names;
mod output;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use epistle_core::{JsonRecordReader, RecordSource, config, expand_records};
use epistle_graph::{AnalyzerConfig, EdgeFilter, analyze, build_cooccurrence};
use names::{HttpNameLookup, NameCache, NameResolver};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ep: correspondence co-occurrence network builder",
    long_about = None
)]
struct Cli {
    /// Folder of per-document record files.
    folder: PathBuf,

    /// Maximum number of record files to read.
    length: usize,

    /// Output path for the node-link JSON artifact.
    filename: PathBuf,

    /// Configuration file (defaults to ./epistle.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the co-occurrence weight threshold from the config.
    #[arg(long)]
    threshold: Option<u64>,

    /// Skip name enrichment; artifact nodes keep their raw identifiers.
    #[arg(long)]
    skip_names: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("EPISTLE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "epistle=debug,info"
        } else {
            "epistle=info,warn"
        })
    });

    let format = env::var("EPISTLE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut cfg = config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(threshold) = cli.threshold {
        cfg.weight_threshold = threshold;
    }

    let records = JsonRecordReader::new(&cli.folder, cli.length)
        .records()
        .context("reading record files")?;
    info!(records = records.len(), "records loaded");

    let mentions = expand_records(&records);
    info!(mentions = mentions.len(), "relations expanded");

    let co = build_cooccurrence(&mentions);
    info!(persons = co.person_count(), "co-occurrence matrix built");

    let edges = EdgeFilter::new(cfg.weight_threshold, &cfg.sentinel).filter(&co);
    info!(
        edges = edges.len(),
        threshold = cfg.weight_threshold,
        "edges above threshold"
    );

    let analysis = analyze(
        &edges,
        &AnalyzerConfig {
            eigenvector_max_iter: cfg.eigenvector.max_iter,
            eigenvector_tolerance: cfg.eigenvector.tolerance,
        },
    );
    let mut data = analysis.data;

    if cli.skip_names {
        info!("name enrichment skipped");
    } else if data.nodes.is_empty() {
        info!("no nodes to enrich");
    } else {
        let cache = NameCache::load(&cfg.names.cache_path);
        let mut resolver = NameResolver::new(cache, HttpNameLookup::new(cfg.names.service_url));
        resolver.enrich(&mut data).context("enriching node names")?;
    }

    output::save(&data, &cli.filename)?;
    info!(path = %cli.filename.display(), "artifact written");
    Ok(())
}
