use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::state::RecordKeys;

pub const APP_ID: &str = "virtual_closet";

/// Start-up settings for the closet app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct ClosetConfig {
    /// Where the native build keeps its records
    pub data_dir: PathBuf,
    pub keys: RecordKeys,
    /// Fill an empty closet with a small sample catalog
    pub seed_sample_data: bool,
    pub window_size: [f32; 2],
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            keys: RecordKeys::default(),
            seed_sample_data: true,
            window_size: [1200.0, 800.0],
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    eframe::storage_dir(APP_ID).unwrap_or_else(|| PathBuf::from(".virtual_closet"))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}

impl ClosetConfig {
    /// Defaults, overridden by `VIRTUAL_CLOSET_DATA_DIR` and `VIRTUAL_CLOSET_SEED`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("VIRTUAL_CLOSET_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup("VIRTUAL_CLOSET_SEED") {
            self.seed_sample_data = !matches!(
                seed.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_overrides_replace_data_dir_and_seed_flag() {
        let config = ClosetConfig::default().with_overrides(lookup(&[
            ("VIRTUAL_CLOSET_DATA_DIR", "/tmp/closet"),
            ("VIRTUAL_CLOSET_SEED", "off"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/closet"));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = ClosetConfig::default().with_overrides(lookup(&[("VIRTUAL_CLOSET_DATA_DIR", "  ")]));
        assert_eq!(config, ClosetConfig::default());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ClosetConfig = serde_json::from_str(r#"{ "seed_sample_data": false }"#).unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.keys.items, "closet-items");
        assert_eq!(config.keys.outfits, "closet-outfits");
    }
}
