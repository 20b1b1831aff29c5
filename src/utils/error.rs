use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeGateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AgeGateError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AgeGateError::ConfigValidationError { .. } | AgeGateError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AgeGateError::IoError(e) => format!("Could not read or write data: {}", e),
            AgeGateError::SerializationError(e) => format!("Could not encode a result: {}", e),
            AgeGateError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AgeGateError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgeGateError::IoError(_) => "Check that the config file exists and stdout is writable",
            AgeGateError::SerializationError(_) => "Retry with --format text",
            AgeGateError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            AgeGateError::InvalidConfigValueError { .. } => {
                "Make sure min_age is not greater than max_age"
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeGateError>;
