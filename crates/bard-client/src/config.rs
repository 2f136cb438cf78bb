//! Session credentials and client configuration.

use std::fmt;
use std::time::Duration;

use crate::BardError;

pub const DEFAULT_BASE_URL: &str = "https://bard.google.com";
pub const DEFAULT_LOCALE: &str = "ko";

pub const SECURE_1PSID: &str = "__Secure-1PSID";
pub const SECURE_1PSIDTS: &str = "__Secure-1PSIDTS";
pub const SECURE_1PSIDCC: &str = "__Secure-1PSIDCC";

/// Browser session cookies copied from a signed-in Bard tab.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub secure_1psid: String,
    pub secure_1psidts: String,
    pub secure_1psidcc: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secure_1psid", &"[REDACTED]")
            .field("secure_1psidts", &"[REDACTED]")
            .field("secure_1psidcc", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(
        secure_1psid: impl Into<String>,
        secure_1psidts: impl Into<String>,
        secure_1psidcc: impl Into<String>,
    ) -> Self {
        Self {
            secure_1psid: secure_1psid.into(),
            secure_1psidts: secure_1psidts.into(),
            secure_1psidcc: secure_1psidcc.into(),
        }
    }

    /// Cookie name/value pairs in the order they are sent.
    pub fn cookies(&self) -> [(&'static str, &str); 3] {
        [
            (SECURE_1PSID, &self.secure_1psid),
            (SECURE_1PSIDTS, &self.secure_1psidts),
            (SECURE_1PSIDCC, &self.secure_1psidcc),
        ]
    }

    /// Fails on the first empty cookie, naming it.
    pub fn validate(&self) -> Result<(), BardError> {
        match self.cookies().iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(BardError::MissingCredential(*name)),
            None => Ok(()),
        }
    }

    /// Value for the `Cookie` request header.
    pub(crate) fn cookie_header(&self) -> String {
        self.cookies()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct BardConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub locale: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl BardConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}
