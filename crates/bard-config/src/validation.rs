//! Configuration validation.
//!
//! Checks numeric ranges and string formats, collecting every problem
//! into a single `ConfigError`.

use crate::error::ConfigError;
use crate::schema::BardSettings;

/// Run all validations on a config, collecting all errors.
///
/// Empty credentials are not an error here: `init-config` and a fresh
/// template both legitimately have none. The client rejects them on connect.
pub fn validate(settings: &BardSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_base_url(&mut errors, &settings.client.base_url);
    if settings.client.locale.trim().is_empty() {
        errors.push("client.locale must not be empty".to_string());
    }
    validate_range(&mut errors, "client.timeout_secs", settings.client.timeout_secs, 1, 600);
    validate_range(
        &mut errors,
        "client.connect_timeout_secs",
        settings.client.connect_timeout_secs,
        1,
        120,
    );

    let credentials = &settings.credentials;
    for (name, value) in [
        ("credentials.secure_1psid", &credentials.secure_1psid),
        ("credentials.secure_1psidts", &credentials.secure_1psidts),
        ("credentials.secure_1psidcc", &credentials.secure_1psidcc),
    ] {
        if value.chars().any(|c| c.is_control() || c == ';') {
            errors.push(format!("{name} contains characters not allowed in a cookie"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_base_url(errors: &mut Vec<String>, url: &str) {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.trim_end_matches('/').is_empty() => {}
        Some(_) => errors.push(format!("client.base_url = {url:?} has no host")),
        None => errors.push(format!(
            "client.base_url = {url:?} must start with http:// or https://"
        )),
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&BardSettings::default()).is_ok());
    }

    #[test]
    fn catches_timeout_zero() {
        let mut settings = BardSettings::default();
        settings.client.timeout_secs = 0;
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("client.timeout_secs"));
    }

    #[test]
    fn catches_connect_timeout_too_large() {
        let mut settings = BardSettings::default();
        settings.client.connect_timeout_secs = 500;
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("client.connect_timeout_secs"));
    }

    #[test]
    fn catches_base_url_without_scheme() {
        let mut settings = BardSettings::default();
        settings.client.base_url = "bard.google.com".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("must start with http"));
    }

    #[test]
    fn catches_base_url_without_host() {
        let mut settings = BardSettings::default();
        settings.client.base_url = "https://".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("has no host"));
    }

    #[test]
    fn catches_empty_locale() {
        let mut settings = BardSettings::default();
        settings.client.locale = "  ".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("client.locale"));
    }

    #[test]
    fn catches_cookie_separator_in_credentials() {
        let mut settings = BardSettings::default();
        settings.credentials.secure_1psidcc = "abc; other=1".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("credentials.secure_1psidcc"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut settings = BardSettings::default();
        settings.client.timeout_secs = 0;
        settings.client.locale = String::new();
        settings.client.base_url = "ftp://example.com".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("client.timeout_secs"));
        assert!(err.contains("client.locale"));
        assert!(err.contains("client.base_url"));
    }
}
