//! Strictly Crossword - Unified CLI
//!
//! Imports dictionaries, fills grids and shows stored crosswords.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_crossword::{
    AppConfig, Crossword, Generator, GeneratorConfig, LetterGrid, Lexicon, Placement,
    SqliteLexicon,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config = config.with_database_path(db_path);
    }

    match cli.command {
        Command::Import {
            words,
            max_word_length,
        } => {
            let max_word_length =
                max_word_length.unwrap_or(*config.generator().max_word_length());
            run_import(&config, words, max_word_length).await
        }
        Command::Generate {
            rows,
            cols,
            max_blank_ratio,
            max_word_length,
            time_budget_ms,
            max_restarts,
            seed,
            save,
            json,
        } => {
            let mut generator = config.generator().clone();
            if let Some(rows) = rows {
                generator = generator.with_rows(rows);
            }
            if let Some(cols) = cols {
                generator = generator.with_cols(cols);
            }
            if let Some(ratio) = max_blank_ratio {
                generator = generator.with_max_blank_ratio(ratio);
            }
            if let Some(len) = max_word_length {
                generator = generator.with_max_word_length(len);
            }
            if let Some(ms) = time_budget_ms {
                generator = generator.with_time_budget_ms(ms);
            }
            if let Some(max) = max_restarts {
                generator = generator.with_max_restarts(max);
            }
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }
            run_generate(&config, generator, save, json).await
        }
        Command::Show { id, json } => run_show(&config, id, json).await,
    }
}

/// Import a word list and rebuild the charset bank
#[instrument(skip(config), fields(db = %config.database_path()))]
async fn run_import(
    config: &AppConfig,
    words: std::path::PathBuf,
    max_word_length: usize,
) -> Result<()> {
    let content = std::fs::read_to_string(&words)
        .with_context(|| format!("Failed to read word list {}", words.display()))?;

    let lexicon = SqliteLexicon::open(config.database_path())?;
    let inserted = lexicon.import_words(content.lines()).await?;
    let total = lexicon.word_count().await?;
    let charsets = lexicon.rebuild_charsets(max_word_length).await?;

    info!(inserted, total, charsets, "Import finished");
    println!("Imported {inserted} new words ({total} total), {charsets} charset rows");
    Ok(())
}

/// Fill a grid, print it and optionally store it
#[instrument(skip(config, generator, save))]
async fn run_generate(
    config: &AppConfig,
    generator: GeneratorConfig,
    save: Option<String>,
    json: bool,
) -> Result<()> {
    let lexicon = SqliteLexicon::open(config.database_path())?;
    let generator = Generator::new(lexicon, generator);
    let grid = generator.generate().await?;

    let id = match save {
        Some(name) => {
            let id = generator.lexicon().persist_grid(&grid, &name).await?;
            info!(id, name = %name, "Grid saved");
            Some(id)
        }
        None => None,
    };

    if json {
        let value = serde_json::json!({
            "id": id,
            "rows": grid.to_lines(),
            "placements": grid.placements(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_grid(&grid)?;
        if let Some(id) = id {
            println!("Saved as crossword {id}");
        }
    }
    Ok(())
}

/// Print a stored grid
#[instrument(skip(config))]
async fn run_show(config: &AppConfig, id: i32, json: bool) -> Result<()> {
    let lexicon = SqliteLexicon::open(config.database_path())?;
    let stored = lexicon.load_grid(id).await?;
    let grid = stored.to_grid()?;
    debug!(rows = grid.rows(), cols = grid.cols(), "Stored grid parsed");

    if json {
        let value = serde_json::json!({
            "id": stored.id(),
            "name": stored.name(),
            "created_at": stored.created_at(),
            "rows": grid.to_lines(),
            "placements": grid.placements(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("#{} {} ({})", stored.id(), stored.name(), stored.created_at());
        print_grid(&grid)?;
    }
    Ok(())
}

/// Print the grid followed by its entries, clued by their own answers
fn print_grid(grid: &LetterGrid) -> Result<()> {
    print!("{grid}");
    let crossword: Crossword = grid.to_crossword(|p: &Placement| p.text.to_uppercase())?;
    let mut words: Vec<_> = crossword.words().iter().collect();
    words.sort_by_key(|w| (w.direction(), w.clue().order(), w.row(), w.col()));
    for word in words {
        println!(
            "{:>6} ({}, {}) {}",
            word.direction().to_string(),
            word.row(),
            word.col(),
            word.clue().text()
        );
    }
    Ok(())
}
