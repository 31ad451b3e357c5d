//! Error type shared by the parsers and the history tracker

/// Errors raised for caller-supplied arguments that break an API contract.
///
/// Parsing itself never fails; this only covers arguments checked up front,
/// before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument had the wrong shape (empty tag list, conflicting dialect characters, ...)
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
        }
    }
}

impl std::error::Error for Error {}
