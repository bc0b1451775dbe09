//! TOML configuration for keybindings
//!
//! A `[bindings]` table maps key sequences to action names:
//!
//! ```toml
//! [bindings]
//! "C-t" = "transpose-words"
//! "M-t" = "none"
//! ```
//!
//! The action name `none` removes a binding. Bad entries are counted in the
//! returned [`LoadSummary`] instead of failing the whole load.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::registry;
use crate::error::LineEditError;

use super::manager::KeybindingManager;

/// Action name that removes a binding
pub const UNBIND: &str = "none";

/// Root structure of a keymap TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
}

/// Errors that can occur when reading a keymap file
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Outcome of applying a set of bindings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// New bindings plus successful unbinds
    pub applied: usize,
    /// Bindings that replaced an existing one
    pub overridden: usize,
    /// `none` entries for sequences that were not bound
    pub skipped: usize,
    /// Malformed sequences and unknown action names
    pub errors: usize,
}

impl LoadSummary {
    pub fn total(&self) -> usize {
        self.applied + self.overridden + self.skipped + self.errors
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} applied, {} overridden, {} skipped, {} errors",
            self.applied, self.overridden, self.skipped, self.errors
        )
    }
}

/// Parse a keymap TOML document
pub fn parse_keymap_toml(content: &str) -> Result<KeymapConfig, KeymapError> {
    Ok(toml::from_str(content)?)
}

/// Load a keymap TOML file
pub fn load_keymap_file(path: &Path) -> Result<KeymapConfig, KeymapError> {
    let content = std::fs::read_to_string(path)?;
    parse_keymap_toml(&content)
}

/// Apply bindings to the manager's active mode, in sorted sequence order
pub fn apply_bindings(
    manager: &mut KeybindingManager,
    bindings: &BTreeMap<String, String>,
) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for (sequence, name) in bindings {
        if name == UNBIND {
            match manager.unbind(sequence) {
                Ok(_) => summary.applied += 1,
                Err(LineEditError::NotFound(_)) => summary.skipped += 1,
                Err(e) => {
                    tracing::warn!("Skipping binding {:?}: {}", sequence, e);
                    summary.errors += 1;
                }
            }
            continue;
        }

        let Some(action) = registry::lookup(name) else {
            tracing::warn!("Skipping binding {:?}: unknown action {:?}", sequence, name);
            summary.errors += 1;
            continue;
        };

        match manager.bind(sequence, action) {
            Ok(Some(previous)) => {
                tracing::debug!(
                    "{} rebound from {} to {}",
                    previous.sequence,
                    previous.action.name,
                    action.name
                );
                summary.overridden += 1;
            }
            Ok(None) => summary.applied += 1,
            Err(e) => {
                tracing::warn!("Skipping binding {:?}: {}", sequence, e);
                summary.errors += 1;
            }
        }
    }

    summary
}
