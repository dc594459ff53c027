use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use grocery_normalizer::app::process_use_case::{ProcessUseCase, RunOutcome};
use grocery_normalizer::config::Config;
use grocery_normalizer::infra::csv_source_adapter::CsvSourceAdapter;
use grocery_normalizer::infra::json_document_adapter::JsonDocumentAdapter;
use grocery_normalizer::infra::noop_document_adapter::NoopDocumentAdapter;
use grocery_normalizer::observability;

#[derive(Parser)]
#[command(name = "grocery_normalizer")]
#[command(about = "Statistics Canada grocery price normalizer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a source table and write the output document
    Process {
        /// Input CSV file
        input: PathBuf,
        /// Output JSON file
        output: PathBuf,
        /// Optional TOML config overriding the column mapping
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Normalize a source table and print the summary without writing
    Check {
        /// Input CSV file
        input: PathBuf,
        /// Optional TOML config overriding the column mapping
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    observability::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            config,
        } => {
            let config = Config::load_or_default(config.as_deref())?;
            require_input(&input);

            println!("🔄 Normalizing {}...", input.display());
            let source = Box::new(CsvSourceAdapter::new(&input, config.source.clone()));
            let sink = Box::new(JsonDocumentAdapter::new(&output, config.output.pretty));
            let use_case =
                ProcessUseCase::with_default_normalizer(source, sink, config.source.label);

            let outcome = use_case.run().await?;
            info!("Run finished");
            println!("✅ Wrote {}", output.display());
            print_summary(&outcome);
        }
        Commands::Check { input, config } => {
            let config = Config::load_or_default(config.as_deref())?;
            require_input(&input);

            println!("🔄 Checking {}...", input.display());
            let source = Box::new(CsvSourceAdapter::new(&input, config.source.clone()));
            let use_case = ProcessUseCase::with_default_normalizer(
                source,
                Box::new(NoopDocumentAdapter),
                config.source.label,
            );

            let outcome = use_case.run().await?;
            print_summary(&outcome);
        }
    }

    Ok(())
}

fn require_input(input: &Path) {
    if !input.exists() {
        println!("❌ Input file not found: {}", input.display());
        std::process::exit(1);
    }
}

fn print_summary(outcome: &RunOutcome) {
    let metadata = &outcome.document.metadata;

    println!("\n{}", "=".repeat(60));
    println!("PROCESSING SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Total price records: {}", metadata.total_records);
    println!(
        "Dropped rows: {} of {}",
        outcome.stats.dropped, outcome.stats.total_rows
    );
    println!(
        "Date range: {} to {}",
        metadata.date_range.min.as_deref().unwrap_or("n/a"),
        metadata.date_range.max.as_deref().unwrap_or("n/a")
    );
    println!("\nUnique products: {}", metadata.total_products);
    println!("Unique categories: {}", metadata.total_categories);
    println!("Unique locations: {}", metadata.total_locations);

    println!("\nTop 10 Categories:");
    for (i, category) in outcome.document.categories.iter().take(10).enumerate() {
        println!("  {}. {}: {} records", i + 1, category.name, category.count);
    }

    println!("\nSample locations:");
    for location in outcome.document.locations.iter().take(5) {
        println!("  - {} ({})", location.location, location.province);
    }
    println!("{}", "=".repeat(60));
}
