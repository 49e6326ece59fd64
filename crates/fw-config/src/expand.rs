//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Strings without `${` are returned unchanged, so bare `$VAR` is literal.
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Variable that could not be looked up.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FW_TEST_EXPAND_SIMPLE", "wiki.example.org");
        }
        let result = expand_env("${FW_TEST_EXPAND_SIMPLE}", "wiki.base_url").unwrap();
        assert_eq!(result, "wiki.example.org");
        unsafe {
            std::env::remove_var("FW_TEST_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FW_TEST_EXPAND_HOST", "fed.wiki.org");
        }
        let result = expand_env("http://${FW_TEST_EXPAND_HOST}/", "wiki.base_url").unwrap();
        assert_eq!(result, "http://fed.wiki.org/");
        unsafe {
            std::env::remove_var("FW_TEST_EXPAND_HOST");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FW_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${FW_TEST_EXPAND_UNSET:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FW_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${FW_TEST_EXPAND_MISSING}", "wiki.base_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FW_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("wiki.base_url"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("http://example.org/$path", "wiki.base_url").unwrap();
        assert_eq!(result, "http://example.org/$path");
    }
}
