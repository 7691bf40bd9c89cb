//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Shell command arguments.
#[derive(Debug, Args)]
pub struct ShellCommand {
    /// Use a throwaway in-memory store instead of the database file
    #[arg(long)]
    pub memory: bool,
}

/// PIN management commands.
#[derive(Debug, Subcommand)]
pub enum PinCommand {
    /// Write the shared PIN document to the store
    Set {
        /// The PIN value to store
        value: String,
    },

    /// Verify a candidate PIN against the store
    Check {
        /// The candidate PIN
        value: String,
    },
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
