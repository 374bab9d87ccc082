//! Menu Configuration
//!
//! Shell tuning values loaded from a JSON file, following the same
//! config-driven construction used for the rest of the asset pipeline.
//! Every field has a default so a partial file only overrides what it
//! names, and a missing or unreadable file falls back to defaults with a
//! warning instead of aborting startup.

use serde::{Deserialize, Serialize};

/// Tunable values for page layout and transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Window title
    pub window_title: String,

    /// Path to the menu background image (shared by the help page)
    pub background_path: String,

    /// Button width in logical pixels
    pub button_width: u32,

    /// Button height in logical pixels
    pub button_height: u32,

    /// Vertical gap between stacked menu buttons
    pub button_spacing: u32,

    /// Fade-from-black duration in milliseconds
    pub fade_duration_ms: u64,

    /// Help page body, one entry per line
    pub help_lines: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            window_title: "Fatewalker".to_string(),
            background_path: "assets/backgrounds/main_menu.png".to_string(),
            button_width: 160,
            button_height: 28,
            button_spacing: 12,
            fade_duration_ms: 800,
            help_lines: vec![
                "- CHOOSE ACTIONS USING THE MENU".to_string(),
                "- YOUR DECISIONS AFFECT THE WORLD".to_string(),
                "- DEATH IS PERMANENT".to_string(),
                "- EXPLORE CAREFULLY".to_string(),
                "".to_string(),
                "GOOD LUCK, FATEWALKER.".to_string(),
            ],
        }
    }
}

impl MenuConfig {
    /// Load config from a JSON file, falling back to defaults
    ///
    /// Mirrors the asset policy: a missing or malformed file degrades
    /// gracefully rather than failing the whole shell.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: invalid menu config {}: {}, using defaults", path, e);
                    MenuConfig::default()
                }
            },
            Err(_) => {
                println!("No menu config at {}, using defaults", path);
                MenuConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MenuConfig::default();
        assert_eq!(config.button_width, 160);
        assert_eq!(config.button_height, 28);
        assert_eq!(config.button_spacing, 12);
        assert_eq!(config.fade_duration_ms, 800);
        assert!(!config.help_lines.is_empty());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: MenuConfig = serde_json::from_str(r#"{ "fade_duration_ms": 400 }"#).unwrap();
        assert_eq!(config.fade_duration_ms, 400);
        // Unnamed fields keep their defaults
        assert_eq!(config.button_width, 160);
        assert_eq!(config.window_title, "Fatewalker");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = MenuConfig::load_or_default("does/not/exist.json");
        assert_eq!(config.fade_duration_ms, 800);
    }
}
