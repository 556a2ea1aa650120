use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::Parser;

use scryfall_explorer::config::{self, ExplorerConfig};
use scryfall_explorer::{Analysis, ScryfallExplorer};

/// Explore the Scryfall API and dump structural summaries to disk.
#[derive(Parser, Debug)]
#[command(name = "scryfall-explorer", version, about)]
struct Cli {
    /// Number of sets to analyze in detail.
    #[arg(long, default_value_t = 20)]
    sets_limit: usize,

    /// Set code whose cards are analyzed.
    #[arg(long, default_value = "inr")]
    set_code: String,

    /// Number of cards to analyze in detail.
    #[arg(long, default_value_t = 5)]
    cards_limit: usize,

    /// Also write the card analysis to cards_analysis.json.
    #[arg(long)]
    save_cards: bool,

    /// Explore the creature-types, card-names and supertypes catalogs.
    #[arg(long)]
    catalogs: bool,

    #[arg(long, default_value = config::API_BASE)]
    base_url: String,

    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value = config::DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let explorer_config = ExplorerConfig {
        base_url: cli.base_url.clone(),
        output_dir: cli.output_dir.clone(),
        log_file: cli.log_file.clone(),
        ..ExplorerConfig::default()
    };
    let explorer = ScryfallExplorer::builder()
        .config(explorer_config)
        .build()
        .context("failed to build Scryfall client")?;

    explorer
        .init_logging()
        .context("failed to set up logging")?;
    tracing::info!("Starting Scryfall API exploration: {}", explorer);

    println!("Exploring sets...");
    let sets = explorer.explore_sets(cli.sets_limit);
    // A failed save is already logged; the run continues.
    let _ = explorer.save(&sets, "sets_analysis.json");

    println!("Exploring cards...");
    let cards = explorer.explore_cards(&cli.set_code, cli.cards_limit);
    match serde_json::to_string_pretty(&cards) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{:?}", cards),
    }
    if cli.save_cards {
        let _ = explorer.save(&cards, "cards_analysis.json");
    }

    let mut catalogs_explored = 0;
    if cli.catalogs {
        println!("Exploring catalogs...");
        for (i, catalog) in config::default_catalogs().into_iter().enumerate() {
            if i > 0 {
                thread::sleep(config::CATALOG_PAUSE);
            }
            let result = explorer.explore_catalog(catalog, config::DEFAULT_CATALOG_SAMPLE);
            let filename = format!("catalog_{}_analysis.json", catalog.replace('-', "_"));
            let _ = explorer.save(&result, &filename);
            catalogs_explored += 1;
        }
    }

    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("EXPLORATION SUMMARY");
    println!("{}", rule);
    println!("Total sets: {}", count_or_na(&sets, |s| s.total_sets as i64));
    println!("Cards in set: {}", count_or_na(&cards, |c| c.total_cards));
    println!("Catalogs explored: {}", catalogs_explored);
    println!("Files written to: {}/", cli.output_dir.display());
    println!("Log file: {}", cli.log_file.display());
    println!("{}", rule);

    tracing::info!("Scryfall API exploration finished");
    Ok(())
}

fn count_or_na<T>(analysis: &Analysis<T>, count: impl Fn(&T) -> i64) -> String {
    match analysis {
        Analysis::Complete(summary) => count(summary).to_string(),
        Analysis::Failed { .. } => "N/A".to_string(),
    }
}
