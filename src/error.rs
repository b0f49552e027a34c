//! Unified error type for all conlog operations.

/// Error type for conlog operations.
#[derive(Debug)]
pub enum Error {
    /// A value handed to the API is out of its accepted range (e.g. a negative throttle delay).
    InvalidArgument(String),
    /// Something other than a `Logger` was offered to `Plugin::link`.
    InvalidTarget(String),
    /// The operation needs a real process host with standard streams.
    UnsupportedEnvironment(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML options parsing error.
    ConfigParse(toml::de::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
            Self::InvalidTarget(s) => write!(f, "invalid target: {s}"),
            Self::UnsupportedEnvironment(s) => write!(f, "unsupported environment: {s}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
