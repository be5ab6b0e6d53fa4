/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Http { status: u16 },
    Decode(String),
    Validation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http { status } => write!(f, "HTTP error: status {}", status),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Convenience alias for the fetch path
pub type FetchResult<T> = Result<T, AppError>;
