//! Configuration schema types.
//!
//! Every section uses `serde(default)` so a partial file (or none at all)
//! still yields a complete config.

use std::fmt;
use std::time::Duration;

use bard_client::config::{DEFAULT_BASE_URL, DEFAULT_LOCALE};
use bard_client::{BardConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Root configuration for the `bard` CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BardSettings {
    pub credentials: CredentialsConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

impl BardSettings {
    /// Library configuration built from these settings.
    pub fn client_config(&self) -> BardConfig {
        BardConfig::new(Credentials::new(
            self.credentials.secure_1psid.as_str(),
            self.credentials.secure_1psidts.as_str(),
            self.credentials.secure_1psidcc.as_str(),
        ))
        .with_base_url(self.client.base_url.as_str())
        .with_locale(self.client.locale.as_str())
        .with_timeout(Duration::from_secs(self.client.timeout_secs))
        .with_connect_timeout(Duration::from_secs(self.client.connect_timeout_secs))
    }
}

/// Session cookies.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub secure_1psid: String,
    pub secure_1psidts: String,
    pub secure_1psidcc: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &str| if value.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("CredentialsConfig")
            .field("secure_1psid", &redact(&self.secure_1psid))
            .field("secure_1psidts", &redact(&self.secure_1psidts))
            .field("secure_1psidcc", &redact(&self.secure_1psidcc))
            .finish()
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub locale: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let settings = BardSettings::default();
        assert_eq!(settings.client.base_url, "https://bard.google.com");
        assert_eq!(settings.client.locale, "ko");
        assert_eq!(settings.client.timeout_secs, 120);
        assert_eq!(settings.client.connect_timeout_secs, 10);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: BardSettings = toml::from_str(
            r#"
[client]
locale = "en"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(settings.client.locale, "en");
        assert_eq!(settings.client.base_url, "https://bard.google.com");
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert!(settings.credentials.secure_1psid.is_empty());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result: Result<BardSettings, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let credentials = CredentialsConfig {
            secure_1psid: "alpha-secret".into(),
            secure_1psidts: "beta-secret".into(),
            secure_1psidcc: String::new(),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn client_config_carries_every_setting() {
        let mut settings = BardSettings::default();
        settings.credentials.secure_1psid = "a".into();
        settings.credentials.secure_1psidts = "b".into();
        settings.credentials.secure_1psidcc = "c".into();
        settings.client.base_url = "http://localhost:8080/".into();
        settings.client.locale = "en".into();
        settings.client.timeout_secs = 30;
        settings.client.connect_timeout_secs = 5;

        let config = settings.client_config();
        assert_eq!(config.credentials, Credentials::new("a", "b", "c"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.locale, "en");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn log_level_displays_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
