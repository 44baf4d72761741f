use flock_core::SearchConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub search: SearchConfig,
}
impl Config {
    pub const FILENAME: &str = "flock.toml";

    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => panic!("Failed to parse {}: {e}", path.display()),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found at {}, using defaults", path.display());
                Config::default()
            }
            Err(e) => {
                panic!("Failed to read {}: {e}", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    /// Print sections and containers in view order rather than arrival order.
    pub sorted: bool,
    /// Print each result's duration next to its title.
    pub show_durations: bool,
}
impl Default for General {
    fn default() -> Self {
        Self {
            sorted: true,
            show_durations: true,
        }
    }
}
