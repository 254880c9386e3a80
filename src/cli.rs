//! Command-line interface parsing for termchan
//!
//! This module handles parsing of CLI arguments using clap: one subcommand
//! per forum operation, plus global flags for the backend URL, cache, and
//! log verbosity.

use clap::{Parser, Subcommand};

use crate::config::{CacheConfig, ClientConfig};

/// termchan - browse imageboard-style forums from the terminal
#[derive(Parser, Debug)]
#[command(name = "termchan")]
#[command(about = "Browse boards, threads and posts on an imageboard backend")]
#[command(version)]
pub struct Cli {
    /// Base URL of the forum backend
    #[arg(long, value_name = "URL", default_value = "http://localhost:8088")]
    pub base_url: String,

    /// Disable the in-memory response cache
    #[arg(long)]
    pub no_cache: bool,

    /// Log API traffic and cache activity
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ForumCommand,
}

/// One forum operation per subcommand
#[derive(Subcommand, Debug, PartialEq)]
pub enum ForumCommand {
    /// List all boards
    Boards,
    /// List threads on a board
    Threads {
        /// Board name, e.g. "tech"
        board: String,
    },
    /// Show a single thread with its posts
    Thread {
        board: String,
        thread_id: u64,
    },
    /// Create a new board
    NewBoard {
        /// Board name: letters, numbers, hyphens and underscores
        name: String,
    },
    /// Start a new thread on a board
    NewThread {
        board: String,
        title: String,
        message: String,
    },
    /// Reply to a thread
    Post {
        board: String,
        thread_id: u64,
        content: String,
    },
    /// Show the backend server time
    Time,
}

impl Cli {
    /// Builds the client configuration from the parsed flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            cache: CacheConfig {
                enabled: !self.no_cache,
                ..CacheConfig::default()
            },
            ..ClientConfig::default()
        }
    }
}
