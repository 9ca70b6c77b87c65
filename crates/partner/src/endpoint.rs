//! Environment-to-endpoint resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

/// The Salesforce environment a session targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Production orgs (`www.salesforce.com`).
    #[default]
    Live,
    /// Sandbox orgs (`test.salesforce.com`).
    Test,
}

impl Environment {
    /// The Partner API endpoint URL for this environment and API version.
    ///
    /// The version is interpolated into the URL path verbatim.
    pub fn endpoint_url(&self, version: &str) -> String {
        match self {
            Environment::Live => {
                format!("https://www.salesforce.com/services/Soap/u/{version}")
            }
            Environment::Test => {
                format!("https://test.salesforce.com/services/Soap/u/{version}")
            }
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(Environment::Live),
            "test" => Ok(Environment::Test),
            other => Err(Error::new(ErrorKind::InvalidEnvironment(other.to_string()))),
        }
    }
}

/// Resolve the service URL for a string environment tag.
///
/// Pure and synchronous: an unrecognized tag fails with
/// [`ErrorKind::InvalidEnvironment`] before any other work happens.
pub fn endpoint_url(environment: &str, version: &str) -> Result<String> {
    Ok(environment.parse::<Environment>()?.endpoint_url(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_url() {
        assert_eq!(
            Environment::Live.endpoint_url("21.0"),
            "https://www.salesforce.com/services/Soap/u/21.0"
        );
    }

    #[test]
    fn test_test_url() {
        assert_eq!(
            Environment::Test.endpoint_url("21.0"),
            "https://test.salesforce.com/services/Soap/u/21.0"
        );
    }

    #[test]
    fn test_version_interpolated_verbatim() {
        assert_eq!(
            Environment::Live.endpoint_url("99.9-beta"),
            "https://www.salesforce.com/services/Soap/u/99.9-beta"
        );
    }

    #[test]
    fn test_resolve_by_tag() {
        assert_eq!(
            endpoint_url("test", "20.0").unwrap(),
            "https://test.salesforce.com/services/Soap/u/20.0"
        );
        assert_eq!(
            endpoint_url("live", "20.0").unwrap(),
            "https://www.salesforce.com/services/Soap/u/20.0"
        );
    }

    #[test]
    fn test_unknown_tag_fails_with_offending_value() {
        let err = endpoint_url("staging", "21.0").unwrap_err();
        match err.kind {
            ErrorKind::InvalidEnvironment(tag) => assert_eq!(tag, "staging"),
            other => panic!("expected InvalidEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_matching_is_case_sensitive() {
        assert!(endpoint_url("Live", "21.0").is_err());
        assert!(endpoint_url("TEST", "21.0").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for env in [Environment::Live, Environment::Test] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_default_is_live() {
        assert_eq!(Environment::default(), Environment::Live);
    }
}
