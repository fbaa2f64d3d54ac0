use anyhow::Result;
use clap::Parser;
use search::{load_inputs, render, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tfidf_core::SearchEngine;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// Input path (file or directory); repeat to combine corpora
    #[arg(long, required = true)]
    input: Vec<PathBuf>,
    /// Query text
    #[arg(long)]
    query: String,
    /// Print each document's summed score next to its id
    #[arg(long, default_value_t = false)]
    scores: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let docs = load_inputs(&cli.input)?;
    tracing::info!(num_docs = docs.len(), "loaded corpus");

    let engine = SearchEngine::new(&docs);
    let results = engine.search_scored(&cli.query);
    tracing::info!(query = %cli.query, hits = results.len(), "search complete");

    let out = render(&results, cli.scores, cli.format)?;
    std::io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
