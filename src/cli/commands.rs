//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal with keyword-based emotion analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Display language (de, en)
        #[arg(short, long, default_value = "de")]
        locale: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Detect the emotion in a piece of text
    Classify {
        /// Text to classify
        text: String,

        /// Print the result as a TOML record
        #[arg(long)]
        record: bool,
    },

    /// Classify text and store it as a new entry
    Add {
        /// Entry text
        text: String,

        /// Entry kind (journal, reflection, story)
        #[arg(short, long, default_value = "journal")]
        kind: String,

        /// Prompt the entry answers
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Show mood series, average and streaks
    Stats {
        /// Window size in days (default: configured window_days)
        #[arg(short, long)]
        days: Option<u32>,

        /// Reference time as RFC 3339; its offset defines local days
        #[arg(long, value_name = "TIMESTAMP")]
        as_of: Option<String>,
    },

    /// Show the merged entry timeline, newest first
    Timeline {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}
