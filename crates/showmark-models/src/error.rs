use std::fmt;

/// Rejected input at the boundary between the presentation layer and the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidStatus(String),
    InvalidPlatform(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidStatus(value) => write!(
                f,
                "Invalid status: {:?}. Use 'To Watch', 'Watching', or 'Watched'",
                value
            ),
            ParseError::InvalidPlatform(value) => write!(
                f,
                "Invalid platform: {:?}. Use 'Netflix', 'Prime Video', or 'Apple TV+'",
                value
            ),
        }
    }
}

impl std::error::Error for ParseError {}
