use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("HTTP request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to decode JSON data in input: {message}")]
    ParseError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GeoError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FetchError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::ParseError { .. } | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a flaky network may succeed on the next invocation
            Self::FetchError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            Self::HttpStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FetchError(_) | Self::HttpStatusError { .. } => {
                "A problem occurred reading the data file".to_string()
            }
            Self::IoError(e) => format!("A problem occurred reading the data file: {}", e),
            Self::ParseError { .. } => "A problem occurred decoding the json data".to_string(),
            Self::SerializationError(_) => "A problem occurred rendering the report".to_string(),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FetchError(_) => "Check the network connection and that the source URL is reachable",
            Self::HttpStatusError { .. } => "Check that the source URL points at the cities document",
            Self::IoError(_) => "Check that the source file exists and is readable",
            Self::ParseError { .. } => {
                "Make sure the source is a JSON object of {\"city\", \"lat\", \"lon\"} records"
            }
            Self::SerializationError(_) => "Try again with --format text",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
