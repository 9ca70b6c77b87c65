//! Error types for forcewrap-soap.

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type a transport binding reports.
///
/// The session layer treats these as opaque upstream failures and passes
/// them through unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Auth(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Could not construct the binding against the endpoint URL.
    #[error("Connect error: {0}")]
    Connect(String),

    /// Login was rejected by the service.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The wire-level round trip failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The reply could not be turned into a field mapping.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}
