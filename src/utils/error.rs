use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkylineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    FileNotFoundError { path: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Skyline verification failed: {message}")]
    VerificationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    Algorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkylineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SkylineError::FileNotFoundError { .. }
            | SkylineError::ParseError { .. }
            | SkylineError::CsvError(_)
            | SkylineError::ValidationError { .. } => ErrorCategory::Input,
            SkylineError::ConfigError { .. }
            | SkylineError::InvalidConfigValueError { .. }
            | SkylineError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SkylineError::IoError(_) | SkylineError::SerializationError(_) => {
                ErrorCategory::Output
            }
            SkylineError::VerificationError { .. } => ErrorCategory::Algorithm,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Algorithm => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SkylineError::FileNotFoundError { .. } => {
                "Check the input path and make sure the file exists"
            }
            SkylineError::ParseError { .. } => {
                "The input must start with a point count followed by that many integer pairs"
            }
            SkylineError::CsvError(_) => "Each CSV row must hold two integer columns: x,y",
            SkylineError::ConfigError { .. }
            | SkylineError::InvalidConfigValueError { .. }
            | SkylineError::MissingConfigError { .. } => {
                "Review the TOML configuration and command line flags"
            }
            SkylineError::ValidationError { .. } => {
                "Remove the y floor setting or fix the offending input points"
            }
            SkylineError::IoError(_) | SkylineError::SerializationError(_) => {
                "Check that the output location is writable"
            }
            SkylineError::VerificationError { .. } => {
                "Re-run with --verbose and report the input that triggered this"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkylineError::FileNotFoundError { path } => {
                format!("Cannot find input file '{}'", path)
            }
            SkylineError::ParseError { line, message } => {
                format!("Input is malformed near line {}: {}", line, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SkylineError>;
