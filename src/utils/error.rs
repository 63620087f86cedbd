use thiserror::Error;

/// Body of every 5xx reply. Internal detail stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Email is required")]
    MissingEmail,

    #[error("{message}")]
    Provider { message: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(serde_json::Error),

    #[error("Email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Waitlist endpoint answered with status {status}")]
    Rejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Provider,
    Unexpected,
    Configuration,
    Client,
}

impl WaitlistError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WaitlistError::MissingEmail => ErrorCategory::Input,
            WaitlistError::Provider { .. } => ErrorCategory::Provider,
            WaitlistError::MalformedBody(_)
            | WaitlistError::Transport(_)
            | WaitlistError::IoError(_) => ErrorCategory::Unexpected,
            WaitlistError::MissingConfigError { .. }
            | WaitlistError::InvalidConfigValueError { .. }
            | WaitlistError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            WaitlistError::Rejected { .. } => ErrorCategory::Client,
        }
    }

    /// HTTP status reported to the caller of the waitlist endpoint.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Provider => 400,
            _ => 500,
        }
    }

    /// The `error` field of the reply body. Only input and provider errors
    /// carry their own text.
    pub fn public_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Provider => self.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn error_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.public_message() })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WaitlistError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            WaitlistError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            WaitlistError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            WaitlistError::Rejected { status } => {
                format!("The waitlist endpoint refused the signup (status {})", status)
            }
            WaitlistError::Transport(_) => "Could not reach the remote service".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WaitlistError::MissingConfigError { .. } => {
                "Set RESEND_API_KEY in the environment, .env.local, or the [provider] section of the config file"
            }
            WaitlistError::InvalidConfigValueError { .. }
            | WaitlistError::ConfigValidationError { .. } => {
                "Check the config file and environment variables for typos"
            }
            WaitlistError::IoError(_) => "Check that the file exists and is readable",
            WaitlistError::Transport(_) | WaitlistError::Rejected { .. } => {
                "Check the endpoint address and that the server is running"
            }
            WaitlistError::Provider { .. } => "Check the sender domain and API key with the email provider",
            WaitlistError::MissingEmail => "Provide an email address",
            WaitlistError::MalformedBody(_) => {
                "Send a JSON body of the form {\"email\": ..., \"type\": ...}"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WaitlistError>;
