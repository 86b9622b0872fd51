//! Configuration storage.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, ENV_CONFIG, ENV_FORMAT, ENV_LOCALE, ENV_NO_COLOR,
    ENV_NO_COLOR_STD, ENV_PRETTY, ENV_VERBOSE, ResolvedConfig,
};
pub use paths::AppPaths;
