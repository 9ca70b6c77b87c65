//! Shared constants.

/// Partner API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "21.0";

/// Partner API versions this wrapper is known to work against.
///
/// Advisory only: a session with a version outside this list is still
/// established, with a warning.
pub const SUPPORTED_API_VERSIONS: &[&str] = &["20.0", "21.0"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version_is_supported() {
        assert!(SUPPORTED_API_VERSIONS.contains(&DEFAULT_API_VERSION));
    }
}
