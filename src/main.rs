use anyhow::Context;
use clap::Parser;
use dramarec_catalog::load_catalog;
use dramarec_core::Model;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A content-based K-drama recommender
#[derive(Parser, Debug)]
#[command(name = "dramarec")]
#[command(about = "Recommend K-dramas by title, genre, or release year", long_about = None)]
struct Args {
    /// Path to the CSV dataset
    #[arg(short, long, default_value = "data/sample_kdrama.csv")]
    data: PathBuf,

    /// Number of recommendations to show
    #[arg(long, default_value_t = 10)]
    topk: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Title, genre token, or year (e.g. "Move to Heaven", "Drama", 2021)
    query: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let items = load_catalog(&args.data)
        .with_context(|| format!("failed to load catalog from {}", args.data.display()))?;
    info!("loaded {} catalog items from {}", items.len(), args.data.display());

    let model = Model::build(items).context("failed to build recommendation model")?;
    info!("model ready: {} items, vocabulary-backed similarity matrix", model.len());

    let result = model
        .recommend(&args.query, args.topk)
        .with_context(|| format!("no recommendations for '{}'", args.query))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Mode: {}", result.mode);
    if let Some(matched) = &result.matched_title {
        println!("Matched title: {matched}");
    }
    println!("{:<40} {:<30} {:>6} {:>7}", "Name", "Genre", "Year", "Rating");
    println!("{}", "-".repeat(86));
    for rec in &result.items {
        println!(
            "{:<40} {:<30} {:>6} {:>7.1}",
            rec.name, rec.genre, rec.year, rec.rating
        );
    }

    Ok(())
}
