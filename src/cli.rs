//! Command-line interface for strictly_crossword.

use clap::{Parser, Subcommand};

/// Strictly Crossword - crossword grid generator backed by a SQLite lexicon
#[derive(Parser, Debug)]
#[command(name = "strictly_crossword")]
#[command(about = "Fill crossword grids from a dictionary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(long, default_value = "crossword.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Override the database path from the config
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a newline-separated word list and rebuild the charset bank
    Import {
        /// Word list file, one word per line
        words: std::path::PathBuf,

        /// Longest word the charset bank should cover (defaults to config)
        #[arg(long)]
        max_word_length: Option<usize>,
    },

    /// Fill a grid and print it
    Generate {
        /// Grid rows (defaults to config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (defaults to config)
        #[arg(long)]
        cols: Option<usize>,

        /// Largest share of blank cells
        #[arg(long)]
        max_blank_ratio: Option<f64>,

        /// Longest word to place
        #[arg(long)]
        max_word_length: Option<usize>,

        /// Soft time budget per attempt in milliseconds
        #[arg(long)]
        time_budget_ms: Option<u64>,

        /// Budget resets allowed before giving up
        #[arg(long)]
        max_restarts: Option<u32>,

        /// Seed for a reproducible fill
        #[arg(long)]
        seed: Option<u64>,

        /// Store the grid under this name
        #[arg(long)]
        save: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a stored grid
    Show {
        /// Stored crossword id
        id: i32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
