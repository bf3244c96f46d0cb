// src/config.rs
// Caller configuration, read from a key=value conf file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::defs::CARDCONFIG;

#[derive(Debug, Clone)]
pub struct CallerConfig {
    /// Rows on the player card (always 5 columns, one per letter).
    pub card_rows: u8,
    /// Leave the center cell free and pre-marked.
    pub free_center: bool,
    /// Mark matching card cells automatically on each draw.
    pub auto_mark: bool,
    /// How many previous balls the display shows next to the last one.
    pub recent_window: usize,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            card_rows: CARDCONFIG.rows,
            free_center: CARDCONFIG.free_center,
            auto_mark: true,
            recent_window: 3,
        }
    }
}

impl CallerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config_map = parse_config(&content)?;
        let defaults = Self::default();

        let card_rows = config_map
            .get("card_rows")
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(defaults.card_rows);

        let free_center = config_map
            .get("free_center")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.free_center);

        let auto_mark = config_map
            .get("auto_mark")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.auto_mark);

        let recent_window = config_map
            .get("recent_window")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.recent_window);

        Ok(CallerConfig {
            card_rows,
            free_center,
            auto_mark,
            recent_window,
        })
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => {
                println!("Loaded caller configuration from {}", path.display());
                config
            }
            Err(e) => {
                println!(
                    "Could not load caller config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            config.insert(key, value);
        }
    }

    Ok(config)
}
