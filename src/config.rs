use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::preview::PREVIEW_LIMIT;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "RUSTY_SIEVE_CONFIG";

/// Viewer settings. Every field has a default, so a config file only needs
/// the keys it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Column holding the area category.
    pub area_field: String,
    /// Column holding the responsible party.
    pub responsible_field: String,
    pub preview_limit: usize,
    /// How long a notification stays visible.
    pub notification_secs: u64,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            area_field: "Área".to_string(),
            responsible_field: "Responsable".to_string(),
            preview_limit: PREVIEW_LIMIT,
            notification_secs: 3,
        }
    }
}

impl SieveConfig {
    /// Defaults, overridden by the file in `$RUSTY_SIEVE_CONFIG` if set.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// The two categorical columns, in display order.
    pub fn category_fields(&self) -> [&str; 2] {
        [&self.area_field, &self.responsible_field]
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sieve.json");
        std::fs::write(&path, r#"{ "responsible_field": "Owner", "preview_limit": 5 }"#).unwrap();

        let config = SieveConfig::from_path(&path).unwrap();
        assert_eq!(config.area_field, "Área");
        assert_eq!(config.responsible_field, "Owner");
        assert_eq!(config.preview_limit, 5);
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert_eq!(config.category_fields(), ["Área", "Owner"]);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sieve.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(SieveConfig::from_path(&path).is_err());
        assert!(SieveConfig::from_path(&dir.path().join("absent.json")).is_err());
    }
}
