//! Command-line argument parsing
//!
//! Supports:
//! - Listing the action registry
//! - Listing the bindings of a keymap mode, as text or JSON
//! - Canonicalizing key sequences
//! - Checking a config file and reporting its load summary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use keyline::keymap::KeymapMode;

/// Readline-compatible key binding and kill ring toolkit
#[derive(Parser, Debug)]
#[command(name = "keyline", version, about = "Readline-compatible line editing core")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every editing action
    Actions,

    /// List key bindings after applying the user config
    Bindings {
        /// Keymap mode to list (emacs, vi-insert, vi-command)
        #[arg(long, value_name = "MODE")]
        mode: Option<KeymapMode>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Ignore the user config and list the preset only
        #[arg(long)]
        no_config: bool,
    },

    /// Print the canonical form of key sequences
    Encode {
        #[arg(value_name = "SEQ", required = true)]
        sequences: Vec<String>,
    },

    /// Load a config file and report how its bindings apply
    CheckConfig {
        /// Config file (defaults to the user config)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
