use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "tick.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load `tick.toml` from `dir`. A missing file yields the defaults;
/// a malformed one is an error the caller should treat as fatal.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!(config.file.is_none());
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "file = \"notes/todo.txt\"\n\n[ui]\nshow_key_hints = false\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.file.as_deref(), Some("notes/todo.txt"));
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn test_malformed_config_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "not toml {{{").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
