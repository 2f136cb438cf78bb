//! Default TOML config template with inline documentation comments.

/// The default config file content.
pub fn default_config_toml() -> &'static str {
    r##"# Bard CLI configuration
# Only override what you want to change -- missing fields use defaults.
# Every value below can also come from the environment:
#   BARD_SECURE_1PSID, BARD_SECURE_1PSIDTS, BARD_SECURE_1PSIDCC,
#   BARD_BASE_URL, BARD_LOCALE

[credentials]
# Cookie values from a signed-in browser session.
secure_1psid = ""
secure_1psidts = ""
secure_1psidcc = ""

[client]
# base_url = "https://bard.google.com"
# locale = "ko"
# timeout_secs = 120          # 1-600
# connect_timeout_secs = 10   # 1-120

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
}
