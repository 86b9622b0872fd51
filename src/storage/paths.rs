//! Application paths for configuration.

use directories::ProjectDirs;
use std::path::PathBuf;

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
}

impl AppPaths {
    /// Create paths for the dashfmt application.
    ///
    /// - Linux: `~/.config/dashfmt`
    /// - macOS: `~/Library/Application Support/dev.dashfmt.dashfmt`
    /// - Windows: `%APPDATA%\dashfmt\dashfmt\config`
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("dev", "dashfmt", "dashfmt") {
            Self {
                config: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            // No home directory: fall back to the working directory
            let home = directories::BaseDirs::new()
                .map_or_else(|| PathBuf::from("."), |d| d.home_dir().to_path_buf());
            Self {
                config: home.join(".config/dashfmt"),
            }
        }
    }

    /// Path to the configuration file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join(CONFIG_FILE_NAME)
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
