//! CLI module - Command-line interface for moodgif
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// moodgif - find a GIF for how you feel
#[derive(Parser)]
#[command(name = "moodgif")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Show the search keywords an emotion phrase maps to
    #[command(alias = "m")]
    Map {
        /// Emotion phrase
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// List the predefined quick-pick emotions
    #[command(alias = "ls")]
    Emotions,

    /// Search GIFs for an emotion phrase
    #[command(alias = "s")]
    Search {
        /// Emotion phrase or free text; mapped to keywords first
        query: Vec<String>,
        /// Use a predefined emotion id instead of free text
        #[arg(long, short)]
        emotion: Option<String>,
        /// Number of pages to fetch
        #[arg(long, short, default_value = "1")]
        pages: u32,
    },

    /// Show trending GIFs
    #[command(alias = "t")]
    Trending {
        /// Number of GIFs to show
        #[arg(long, short)]
        limit: Option<u32>,
    },

    /// Download a GIF's original rendition
    #[command(alias = "dl")]
    Download {
        /// Provider GIF id
        gif_id: String,
        /// Output file (defaults to the GIF title)
        #[arg(long, short)]
        output: Option<std::path::PathBuf>,
    },

    /// Print a shareable link for a GIF
    Share {
        /// Provider GIF id
        gif_id: String,
    },

    /// Create default config file
    #[command(alias = "init")]
    InitConfig,
}

pub use commands::*;
