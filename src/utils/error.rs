use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Content document '{path}' does not match the portfolio schema: {source}")]
    ContentSchemaError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Content,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ContentSchemaError { .. } => ErrorCategory::Content,
            SiteError::SerializationError(_) => ErrorCategory::Serialization,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Content | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => match self {
                SiteError::IoError(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Low severity is reported but not fatal.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the content file exists at the configured path".to_string()
            }
            SiteError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            SiteError::ContentSchemaError { source, .. } => format!(
                "Fix the content document near line {}, column {} so it matches the portfolio schema",
                source.line(),
                source.column()
            ),
            SiteError::SerializationError(_) => {
                "This is a bug in page serialization; please report it".to_string()
            }
            SiteError::ConfigValidationError { field, .. }
            | SiteError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting and run again", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::ContentSchemaError { path, source } => {
                format!("The content file {} is malformed: {}", path, source)
            }
            SiteError::SerializationError(e) => format!("Could not serialize the page: {}", e),
            SiteError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            SiteError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            SiteError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
