use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A workflow was asked for a transition its current state does not allow
    InvalidState(String),

    /// User input rejected before any request is made
    InvalidInput(String),

    /// CSV text could not be previewed
    Csv(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(msg) => write!(f, "{}", msg),
            Error::InvalidInput(msg) => write!(f, "{}", msg),
            Error::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}
