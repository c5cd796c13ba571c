use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory. Optional.
pub const CONFIG_FILE: &str = "system_info.toml";

/// Windows' name for the software loopback adapter.
pub const LOOPBACK_PSEUDO_INTERFACE: &str = "Loopback Pseudo-Interface 1";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the JSON snapshot is written into.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// Minimum level written to the log file (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("system_info.log"),
            level: "warn".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Interfaces left out of the report, matched by exact name.
    pub excluded_interfaces: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            excluded_interfaces: vec![LOOPBACK_PSEUDO_INTERFACE.into()],
        }
    }
}

impl AppConfig {
    /// Load `system_info.toml` from the working directory, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow::anyhow!("{}: {}", path.display(), e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.output.directory.as_os_str().is_empty(),
            "output.directory must be non-empty"
        );
        anyhow::ensure!(
            !self.logging.file.as_os_str().is_empty(),
            "logging.file must be non-empty"
        );
        anyhow::ensure!(
            self.logging.file.file_name().is_some(),
            "logging.file must name a file, got {}",
            self.logging.file.display()
        );
        anyhow::ensure!(
            LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()),
            "logging.level must be one of {:?}, got {:?}",
            LOG_LEVELS,
            self.logging.level
        );
        Ok(())
    }
}
