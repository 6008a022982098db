//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "champions";

/// Storage and log locations for a runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            log_dir: default_log_dir(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHAMPIONS_SAVE_DIR` - Directory for champion records (default: platform data dir)
    /// - `CHAMPIONS_LOG_DIR` - Directory for log files (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_path("CHAMPIONS_SAVE_DIR") {
            config.save_dir = dir;
        }
        if let Some(dir) = read_path("CHAMPIONS_LOG_DIR") {
            config.log_dir = dir;
        }

        config
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }
}

/// Platform data directory, `./save_data` when none can be determined.
///
/// - Linux: `~/.local/share/champions` (or `$XDG_DATA_HOME/champions`)
/// - macOS: `~/Library/Application Support/champions`
/// - Windows: `%APPDATA%\champions`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory plus `logs`, `/tmp/champions/logs` as fallback.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/champions"))
        .join("logs")
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn save_dir_override() {
        let config = RuntimeConfig::default().with_save_dir("/srv/champions");
        assert_eq!(config.save_dir, PathBuf::from("/srv/champions"));
    }
}
