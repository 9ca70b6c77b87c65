//! Error types for forcewrap-partner.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is a server-reported fault.
    pub fn is_fault(&self) -> bool {
        matches!(self.kind, ErrorKind::Fault { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// An environment tag outside `{live, test}`. Carries the offending tag.
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    /// A fault the service returned in place of result data. A remote
    /// business/protocol error, not a transport failure; never retried.
    #[error("Salesforce fault: {fault_code} - {fault_string}")]
    Fault {
        fault_code: String,
        fault_string: String,
    },

    /// An error from the transport binding, passed through as-is.
    #[error("Binding error: {0}")]
    Binding(String),
}

impl From<forcewrap_soap::Error> for Error {
    fn from(err: forcewrap_soap::Error) -> Self {
        Error {
            kind: ErrorKind::Binding(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_environment_carries_tag() {
        let err = Error::new(ErrorKind::InvalidEnvironment("staging".to_string()));
        assert_eq!(err.to_string(), "Invalid environment: staging");
        assert!(!err.is_fault());
    }

    #[test]
    fn test_fault_display() {
        let err = Error::new(ErrorKind::Fault {
            fault_code: "sf:MALFORMED_QUERY".to_string(),
            fault_string: "unexpected token".to_string(),
        });
        assert!(err.is_fault());
        assert_eq!(
            err.to_string(),
            "Salesforce fault: sf:MALFORMED_QUERY - unexpected token"
        );
    }

    #[test]
    fn test_from_binding_error_keeps_source() {
        let upstream = forcewrap_soap::Error::new(forcewrap_soap::ErrorKind::Auth(
            "INVALID_LOGIN".to_string(),
        ));
        let err: Error = upstream.into();

        assert!(matches!(err.kind, ErrorKind::Binding(_)));
        assert!(err.source.is_some());
        assert!(err.to_string().contains("INVALID_LOGIN"));
    }
}
