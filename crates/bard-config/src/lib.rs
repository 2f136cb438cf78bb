//! Configuration for the `bard` CLI.
//!
//! Settings come from a TOML file (the platform default path unless one is
//! given), then `BARD_*` environment overrides, then validation. Every
//! section has defaults so a partial or missing file works.

pub mod env;
pub mod error;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use error::ConfigError;
pub use schema::{BardSettings, ClientConfig, CredentialsConfig, LogLevel, LoggingConfig};

use std::path::Path;

/// Load, override from the environment, and validate.
///
/// An explicit `path` must exist. Without one the default path is used and
/// created from the template on first run.
pub fn load_config(path: Option<&Path>) -> Result<BardSettings, ConfigError> {
    let mut settings = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    env::apply_env_overrides(&mut settings);
    validation::validate(&settings)?;
    Ok(settings)
}

/// Same as [`load_config`] with an explicit variable lookup instead of the
/// process environment.
pub fn load_config_with_env<F>(path: &Path, lookup: F) -> Result<BardSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = toml_loader::load_from_path(path)?;
    env::apply_overrides_from(&mut settings, lookup);
    validation::validate(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[credentials]\nsecure_1psid = \"file\"\n[client]\nlocale = \"ko\"\n",
        )
        .unwrap();

        let settings = load_config_with_env(&path, |key| match key {
            env::ENV_SECURE_1PSID => Some("env".to_string()),
            env::ENV_LOCALE => Some("en".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.credentials.secure_1psid, "env");
        assert_eq!(settings.client.locale, "en");
    }

    #[test]
    fn invalid_override_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let err = load_config_with_env(&path, |key| {
            (key == env::ENV_BASE_URL).then(|| "not a url".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn explicit_missing_path_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(!path.exists());
    }
}
