//! Environment variable overrides, applied on top of the config file.

use tracing::debug;

use crate::schema::BardSettings;

pub const ENV_SECURE_1PSID: &str = "BARD_SECURE_1PSID";
pub const ENV_SECURE_1PSIDTS: &str = "BARD_SECURE_1PSIDTS";
pub const ENV_SECURE_1PSIDCC: &str = "BARD_SECURE_1PSIDCC";
pub const ENV_BASE_URL: &str = "BARD_BASE_URL";
pub const ENV_LOCALE: &str = "BARD_LOCALE";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(settings: &mut BardSettings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Apply overrides from `lookup`. Unset and empty values are ignored.
pub fn apply_overrides_from<F>(settings: &mut BardSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let targets: [(&str, &mut String); 5] = [
        (ENV_SECURE_1PSID, &mut settings.credentials.secure_1psid),
        (ENV_SECURE_1PSIDTS, &mut settings.credentials.secure_1psidts),
        (ENV_SECURE_1PSIDCC, &mut settings.credentials.secure_1psidcc),
        (ENV_BASE_URL, &mut settings.client.base_url),
        (ENV_LOCALE, &mut settings.client.locale),
    ];

    for (key, target) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            debug!("config override from {key}");
            *target = value;
        }
    }
}
