use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsernameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },

    #[error("{value} is not a positive number")]
    NotPositive { value: i64 },

    #[error("Word list must contain at least one word")]
    EmptyWordList,

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Input stream closed before all answers were given")]
    InputClosed,
}

impl UsernameError {
    /// Text shown to the person at the keyboard.
    pub fn user_friendly_message(&self) -> String {
        match self {
            UsernameError::InvalidNumber { .. } => "Invalid input. Please enter a number.".to_string(),
            UsernameError::NotPositive { .. } => "Please enter a positive number.".to_string(),
            UsernameError::InputClosed => "No more input available, exiting.".to_string(),
            other => other.to_string(),
        }
    }

    /// Errors that the interactive loop answers with a re-prompt.
    pub fn is_retryable_input(&self) -> bool {
        matches!(
            self,
            UsernameError::InvalidNumber { .. } | UsernameError::NotPositive { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UsernameError>;
