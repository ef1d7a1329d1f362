use std::fmt;

/// Result type for tagview-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the post source.
///
/// Every variant means the same thing to the viewer: the source was
/// unreachable or answered with something unusable.
#[derive(Debug)]
pub enum Error {
    /// Endpoint is not a valid absolute URL
    InvalidEndpoint(String),

    /// Transport failure (connect, TLS, body read)
    Http(reqwest::Error),

    /// Server answered with a non-success status
    Status(u16),

    /// Body was not a posts envelope
    Decode(tagview_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {}", msg),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status(code) => write!(f, "Unexpected status: {}", code),
            Error::Decode(err) => write!(f, "Malformed response: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::InvalidEndpoint(_) | Error::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<tagview_types::Error> for Error {
    fn from(err: tagview_types::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidEndpoint(err.to_string())
    }
}
