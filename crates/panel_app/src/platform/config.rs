use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use panel_core::DEFAULT_ENDPOINT;
use panel_engine::SubmitSettings;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub endpoint: String,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub reject_error_status: bool,
    pub log_file: PathBuf,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_ms: None,
            request_timeout_ms: None,
            reject_error_status: false,
            log_file: PathBuf::from("./panel.log"),
        }
    }
}

impl PanelConfig {
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if cli.reject_error_status {
            self.reject_error_status = true;
        }
        self
    }

    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            reject_error_status: self.reject_error_status,
        }
    }

    /// One line for the log once the logger is up.
    pub fn startup_summary(&self, source: Option<&Path>) -> String {
        let source = match source {
            Some(path) => format!("{path:?}"),
            None => "defaults".to_string(),
        };
        format!(
            "Config from {} endpoint={} reject_error_status={}",
            source, self.endpoint, self.reject_error_status
        )
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        ron::ser::to_string_pretty(self, pretty).map_err(|err| ConfigError::Serialize(err.to_string()))
    }
}

/// Missing path means built-in defaults; a named file must exist and parse.
pub fn load_config(path: Option<&Path>) -> Result<PanelConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(PanelConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(config)
}

fn parse_config(content: &str) -> Result<PanelConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}
