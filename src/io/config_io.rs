use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

pub const CONFIG_FILE_NAME: &str = "todo.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load the config. An explicit path must exist; otherwise `todo.toml` in
/// `cwd` is used if present, and defaults if not.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(Config::default());
            }
            candidate
        }
    };
    read_config(&path)
}

/// Read and parse a config file. A relative `[log] file` is resolved against
/// the config file's directory.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut config: Config = toml::from_str(&text)?;
    if let (Some(file), Some(dir)) = (config.log.file.as_ref(), path.parent()) {
        if file.is_relative() {
            config.log.file = Some(dir.join(file));
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
show_key_hints = false

[ui.colors]
done = "#00FF00"

[log]
file = "todo.log"
level = "debug"
"##
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_reads_todo_toml_from_cwd() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), sample_config()).unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("done").map(String::as_str), Some("#00FF00"));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(tmp.path().join("todo.log")));
    }

    #[test]
    fn test_explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), sample_config()).unwrap();
        let other = tmp.path().join("other.toml");
        fs::write(&other, "[log]\nlevel = \"warn\"\n").unwrap();

        let config = load_config(Some(&other), tmp.path()).unwrap();
        assert_eq!(config.log.level, "warn");
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_config(Some(&missing), tmp.path()).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[ui\nshow_key_hints = 3").unwrap();
        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("could not parse config"));
    }

    #[test]
    fn test_absolute_log_file_kept() {
        let tmp = TempDir::new().unwrap();
        let log = tmp.path().join("logs").join("app.log");
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, format!("[log]\nfile = {:?}\n", log.display().to_string())).unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.log.file, Some(log));
    }
}
