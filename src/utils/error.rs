use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for docsmith operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for docsmith operations
#[derive(Debug)]
pub enum DocsmithError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Redirect generation error
    Redirect(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for DocsmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocsmithError::Io(err) => write!(f, "IO error: {}", err),
            DocsmithError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DocsmithError::Redirect(msg) => write!(f, "Redirect error: {}", msg),
            DocsmithError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for DocsmithError {}

impl From<io::Error> for DocsmithError {
    fn from(err: io::Error) -> Self {
        DocsmithError::Io(err)
    }
}

impl From<String> for DocsmithError {
    fn from(msg: String) -> Self {
        DocsmithError::Generic(msg)
    }
}

impl From<&str> for DocsmithError {
    fn from(msg: &str) -> Self {
        DocsmithError::Generic(msg.to_string())
    }
}
