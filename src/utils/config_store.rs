//! ConfigStore - Launch Configuration Loading

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "SHOWCASE_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "showcase.toml";

/// Resolve the config file location
///
/// `$SHOWCASE_CONFIG` wins; otherwise the platform config directory:
/// - **Linux**: `~/.config/showcase-gui/showcase.toml`
/// - **macOS**: `~/Library/Application Support/dev.showcase.showcase-gui/showcase.toml`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\showcase\showcase-gui\config\showcase.toml`
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let Some(project_dirs) = ProjectDirs::from("dev", "showcase", "showcase-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Parse a config document; blank input yields defaults
pub fn parse_config(content: &str) -> Result<AppConfig> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(toml::from_str(content)?)
}

/// Load a config file; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = ?path, "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    info!(path = ?path, "Loading config file");
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load the config from its resolved location
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_WINDOW_HEIGHT;

    #[test]
    fn blank_document_is_default() {
        assert_eq!(parse_config("").ok(), Some(AppConfig::default()));
        assert_eq!(parse_config("  \n").ok(), Some(AppConfig::default()));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config = parse_config(
            r#"
            platform = "ios"

            [window]
            width = 420.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.platform.as_deref(), Some("ios"));
        assert_eq!(config.window.width, 420.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn invalid_document_is_error() {
        let result = parse_config("[window\nwidth = ");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[logging]\nlevel = \"debug\"\ndirectory = \"/tmp/showcase-logs\"\n")
            .expect("write config");

        let config = load_config_from(&path).expect("valid config");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/tmp/showcase-logs"))
        );
    }
}
