//! Service configuration loader for Palaver.
//!
//! Reads `config.toml` from the data directory (`~/.palaver/` in production)
//! and deserializes it into [`ServiceConfig`]. Falls back to defaults when
//! the file is missing or malformed; the loader never fails startup.

use std::path::{Path, PathBuf};

use palaver_types::config::ServiceConfig;

/// Load service configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> ServiceConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}

/// Resolve the data directory: `PALAVER_DATA_DIR` env var, falling back
/// to `~/.palaver`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PALAVER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".palaver")
}
