//! Line editor configuration
//!
//! Stores user preferences in `~/.config/keyline/config.toml`:
//!
//! ```toml
//! [editor]
//! keymap = "emacs"
//! kill_ring_capacity = 32
//!
//! [bindings]
//! "C-t" = "transpose-words"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keymap::{apply_bindings, KeybindingManager, KeymapError, KeymapMode, LoadSummary};
use crate::kill_ring::{KillRing, DEFAULT_CAPACITY};

/// `[editor]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Preset loaded at startup
    pub keymap: KeymapMode,
    /// Kill ring size, clamped to 1..=256 when the ring is created
    pub kill_ring_capacity: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            keymap: KeymapMode::Emacs,
            kill_ring_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,
    /// Key sequence to action name; `none` unbinds
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
}

impl Config {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load a specific config file
    pub fn load_from(path: &Path) -> std::result::Result<Self, KeymapError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, KeymapError> {
        Ok(toml::from_str(content)?)
    }

    /// Kill ring sized from the settings
    pub fn kill_ring(&self) -> KillRing {
        KillRing::new(self.editor.kill_ring_capacity)
    }

    /// Manager with the configured preset and user bindings applied
    pub fn keybinding_manager(&self) -> Result<(KeybindingManager, LoadSummary)> {
        let mut manager = KeybindingManager::with_emacs_preset()?;
        match self.editor.keymap {
            KeymapMode::Emacs => {}
            KeymapMode::ViInsert => manager.load_vi_preset(),
            mode => manager.set_mode(mode),
        }

        let summary = apply_bindings(&mut manager, &self.bindings);
        if summary.total() > 0 {
            tracing::info!("Applied user bindings: {}", summary);
        }
        Ok((manager, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.kill_ring().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_partial_editor_section() {
        let config = Config::from_toml_str("[editor]\nkill_ring_capacity = 4\n").unwrap();
        assert_eq!(config.editor.keymap, KeymapMode::Emacs);
        assert_eq!(config.kill_ring().capacity(), 4);
    }

    #[test]
    fn test_vi_keymap_alias() {
        let config = Config::from_toml_str("[editor]\nkeymap = \"vi\"\n").unwrap();
        assert_eq!(config.editor.keymap, KeymapMode::ViInsert);

        let (manager, summary) = config.keybinding_manager().unwrap();
        assert_eq!(manager.get_mode(), KeymapMode::ViInsert);
        assert_eq!(summary, LoadSummary::default());
    }

    #[test]
    fn test_oversized_capacity_is_clamped() {
        let config = Config::from_toml_str("[editor]\nkill_ring_capacity = 100000\n").unwrap();
        assert_eq!(config.kill_ring().capacity(), crate::kill_ring::MAX_CAPACITY);
    }

    #[test]
    fn test_bindings_applied_over_preset() {
        let config = Config::from_toml_str(
            r#"
            [bindings]
            "C-t" = "transpose-words"
            "M-t" = "none"
            "#,
        )
        .unwrap();
        let (manager, summary) = config.keybinding_manager().unwrap();

        assert_eq!(summary.overridden, 1);
        assert_eq!(summary.applied, 1);
        let binding = manager.binding_for_sequence("C-t").unwrap().unwrap();
        assert_eq!(binding.action_name(), "transpose-words");
        assert!(manager.binding_for_sequence("M-t").unwrap().is_none());
    }

    #[test]
    fn test_unknown_keymap_is_parse_error() {
        assert!(matches!(
            Config::from_toml_str("[editor]\nkeymap = \"helix\"\n"),
            Err(KeymapError::Parse(_))
        ));
    }
}
