use crate::utils::error::{PredictionsError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_USER_AGENT: &str = concat!("wc-predictions/", env!("CARGO_PKG_VERSION"));

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout_seconds: None,
                user_agent: None,
            },
            logging: None,
        }
    }

    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PredictionsError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn base_url(&self) -> Result<Url> {
        validate_url("api.base_url", &self.api.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn user_agent(&self) -> &str {
        self.api.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.base_url()?;
        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(PredictionsError::validation(
                    "logging.level",
                    level,
                    format!("Valid levels: {}", valid_levels.join(", ")),
                ));
            }
        }
        Ok(())
    }
}
