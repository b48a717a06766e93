use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

impl BookingError {
    /// Maps a non-success HTTP status and its message to the matching variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => BookingError::Validation(message),
            401 => BookingError::Authentication(message),
            403 => BookingError::Authorization(message),
            404 => BookingError::NotFound(message),
            _ => BookingError::Server { status, message },
        }
    }

    /// Whether the session should be dropped and the user sent to login.
    pub fn requires_login(&self) -> bool {
        matches!(self, BookingError::Authentication(_))
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
