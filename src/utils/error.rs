use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionsError {
    #[error("Invalid value for {field} ({value:?}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Unknown league category: {value}")]
    InvalidCategory { value: String },

    #[error("Knockout phase {phase} expects {expected} predictions, got {actual}")]
    BracketSize {
        phase: String,
        expected: usize,
        actual: usize,
    },

    #[error("Inconsistent result: {message}")]
    DomainConsistency { message: String },

    #[error("API responded with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Domain,
    Configuration,
}

impl PredictionsError {
    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. }
            | Self::MissingField { .. }
            | Self::InvalidCategory { .. }
            | Self::BracketSize { .. } => ErrorCategory::Validation,
            Self::Api { .. } | Self::Http(_) | Self::Serialization(_) => ErrorCategory::Network,
            Self::DomainConsistency { .. } => ErrorCategory::Domain,
            Self::Url(_) | Self::Config { .. } | Self::Io(_) => ErrorCategory::Configuration,
        }
    }

    /// True when the error was raised before any request left the client.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("The request was rejected: {}", self),
            ErrorCategory::Network => match self {
                Self::Api { status: 401, .. } => {
                    "You are not signed in or your session has expired".to_string()
                }
                Self::Api { message, .. } => message.clone(),
                _ => "The predictions service could not be reached".to_string(),
            },
            ErrorCategory::Domain => self.to_string(),
            ErrorCategory::Configuration => format!("Check your configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictionsError>;
