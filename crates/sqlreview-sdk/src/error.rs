use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Service unreachable or the response body could not be read
    Transport(String),

    /// Non-2xx response; `detail` is the service's explanation
    Api { status: u16, detail: String },

    /// 2xx response whose body did not match the expected shape
    Decode(String),

    InvalidInput(String),

    InvalidState(String),

    Io(std::io::Error),
}

impl Error {
    /// Whether the user can fix this without the service changing.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::InvalidState(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "Network error: {}", msg),
            Error::Api { status, detail } if detail.is_empty() => {
                write!(f, "Request failed with status {}", status)
            }
            Error::Api { detail, .. } => write!(f, "{}", detail),
            Error::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            Error::InvalidInput(msg) => write!(f, "{}", msg),
            Error::InvalidState(msg) => write!(f, "{}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<sqlreview_core::Error> for Error {
    fn from(err: sqlreview_core::Error) -> Self {
        match err {
            sqlreview_core::Error::InvalidState(msg) => Error::InvalidState(msg),
            sqlreview_core::Error::InvalidInput(msg) => Error::InvalidInput(msg),
            sqlreview_core::Error::Csv(msg) => Error::InvalidInput(format!("CSV error: {}", msg)),
        }
    }
}
