//! Configuration management for fw.
//!
//! Parses `fw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `wiki.base_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override wiki site base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Upstream wiki site.
    pub wiki: WikiConfig,
    /// Default synopsis limits.
    pub synopsis: SynopsisConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
        }
    }
}

/// Upstream wiki site configuration.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Base URL that page and sitemap references resolve against.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl WikiConfig {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Limits applied to synopses when the request does not give its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SynopsisConfig {
    /// Maximum number of story lines.
    pub max_lines: usize,
    /// Maximum number of characters.
    pub max_chars: usize,
    /// Whether the title is included.
    pub include_title: bool,
}

impl Default for SynopsisConfig {
    fn default() -> Self {
        Self {
            max_lines: 8,
            max_chars: 500,
            include_title: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`wiki.base_url`").
        field: String,
        /// Error message (e.g., "${`WIKI_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `fw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(base_url) = &settings.base_url {
            self.wiki.base_url.clone_from(base_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_wiki()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate wiki configuration.
    fn validate_wiki(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.wiki.base_url, "wiki.base_url")?;
        require_http_url(&self.wiki.base_url, "wiki.base_url")?;

        if self.wiki.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "wiki.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.wiki.base_url = expand::expand_env(&self.wiki.base_url, "wiki.base_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7980);
        assert_eq!(config.wiki.base_url, "http://localhost:3000/");
        assert_eq!(config.wiki.timeout(), Duration::from_secs(30));
        assert_eq!(config.synopsis.max_lines, 8);
        assert_eq!(config.synopsis.max_chars, 500);
        assert!(config.synopsis.include_title);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: Config = toml::from_str(
            r#"
[wiki]
timeout_secs = 10

[synopsis]
max_chars = 120
"#,
        )
        .unwrap();

        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(
            config.wiki,
            WikiConfig {
                base_url: "http://localhost:3000/".to_owned(),
                timeout_secs: 10,
            }
        );
        assert_eq!(
            config.synopsis,
            SynopsisConfig {
                max_lines: 8,
                max_chars: 120,
                include_title: true,
            }
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7980);
        assert_eq!(config.wiki.base_url, "http://localhost:3000/");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[wiki]
base_url = "https://fed.wiki.org/"
timeout_secs = 5

[synopsis]
max_lines = 3
max_chars = 200
include_title = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.wiki.base_url, "https://fed.wiki.org/");
        assert_eq!(config.wiki.timeout_secs, 5);
        assert_eq!(config.synopsis.max_lines, 3);
        assert_eq!(config.synopsis.max_chars, 200);
        assert!(!config.synopsis.include_title);
    }

    #[test]
    fn test_parse_partial_section_keeps_defaults() {
        let toml = r"
[synopsis]
max_lines = 4
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.synopsis.max_lines, 4);
        assert_eq!(config.synopsis.max_chars, 500);
        assert!(config.synopsis.include_title);
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            port: Some(9000),
            base_url: Some("http://wiki.local/".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1"); // Unchanged
        assert_eq!(config.wiki.base_url, "http://wiki.local/");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7980);
        assert_eq!(config.wiki.base_url, "http://localhost:3000/");
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FW_TEST_CONFIG_WIKI", "wiki.test");
        }

        let toml = r#"
[server]
host = "${FW_TEST_CONFIG_HOST_UNSET:-0.0.0.0}"

[wiki]
base_url = "http://${FW_TEST_CONFIG_WIKI}/"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.wiki.base_url, "http://wiki.test/");

        unsafe {
            std::env::remove_var("FW_TEST_CONFIG_WIKI");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FW_TEST_CONFIG_MISSING");
        }

        let toml = r#"
[wiki]
base_url = "${FW_TEST_CONFIG_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FW_TEST_CONFIG_MISSING"));
        assert!(err.to_string().contains("wiki.base_url"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fw.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[wiki]\nbase_url = \"http://wiki.example.org/\"").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.wiki.base_url, "http://wiki.example.org/");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fw.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let settings = CliSettings {
            port: Some(9100),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/fw.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fw.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_cli_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fw.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            base_url: Some("wiki.example.org".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_base_url_empty() {
        let mut config = Config::default();
        config.wiki.base_url = String::new();
        assert_validation_error(&config, &["wiki.base_url", "empty"]);
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default();
        config.wiki.base_url = "ftp://wiki.example.org/".to_owned();
        assert_validation_error(&config, &["wiki.base_url", "http"]);
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default();
        config.wiki.timeout_secs = 0;
        assert_validation_error(&config, &["wiki.timeout_secs"]);
    }
}
