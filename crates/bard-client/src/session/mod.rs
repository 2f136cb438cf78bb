//! Authenticated transport to the Bard web frontend.
//!
//! A `Session` owns the cookie credentials, the HTTP client, the
//! `SNlM0e` token scraped from the landing page, and the request id
//! chosen once for the session's lifetime.

mod headers;
mod request_id;
mod token;
mod transport;

pub use request_id::{
    FixedRequestId, RandomRequestIds, RequestIdSource, MAX_REQUEST_ID, MIN_REQUEST_ID,
};

use tracing::debug;

use crate::config::{BardConfig, Credentials};
use crate::BardError;

/// Cookie-authenticated session with a bootstrapped anti-forgery token.
pub struct Session {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: reqwest::Url,
    pub(crate) token: String,
    pub(crate) request_id: u32,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .field("token", &"[REDACTED]")
            .field("request_id", &self.request_id)
            .finish()
    }
}

impl Session {
    /// Validate credentials, pick a random request id, and bootstrap the token.
    pub async fn connect(config: &BardConfig) -> Result<Self, BardError> {
        Self::connect_with_ids(config, RandomRequestIds::from_entropy()).await
    }

    /// Like [`Session::connect`], drawing the request id from `ids`.
    pub async fn connect_with_ids(
        config: &BardConfig,
        ids: impl RequestIdSource,
    ) -> Result<Self, BardError> {
        let mut session = Self::new(config, ids)?;
        session.refresh_token().await?;
        Ok(session)
    }

    /// Build an unbootstrapped session. No network I/O happens here.
    pub(crate) fn new(config: &BardConfig, mut ids: impl RequestIdSource) -> Result<Self, BardError> {
        config.credentials.validate()?;

        let base_url =
            reqwest::Url::parse(&config.base_url).map_err(|e| BardError::InvalidBaseUrl {
                url: config.base_url.clone(),
                detail: e.to_string(),
            })?;
        if base_url.host_str().is_none() {
            return Err(BardError::InvalidBaseUrl {
                url: config.base_url.clone(),
                detail: "missing host".into(),
            });
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        let request_id = ids.next_request_id();
        debug!(base_url = %base_url, request_id, "session created");

        Ok(Self {
            http,
            credentials: config.credentials.clone(),
            base_url,
            token: String::new(),
            request_id,
        })
    }

    /// The `SNlM0e` token from the last bootstrap.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Request id sent as `_reqid` on every write.
    pub fn request_id(&self) -> u32 {
        self.request_id
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for a path on the frontend host.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BardConfig {
        BardConfig::new(Credentials::new("psid", "psidts", "psidcc"))
    }

    #[test]
    fn new_rejects_missing_credentials() {
        let mut config = config();
        config.credentials.secure_1psidcc.clear();
        let err = Session::new(&config, FixedRequestId(1234)).unwrap_err();
        assert!(matches!(err, BardError::MissingCredential("__Secure-1PSIDCC")));
    }

    #[test]
    fn new_rejects_bad_base_url() {
        let config = config().with_base_url("not a url");
        let err = Session::new(&config, FixedRequestId(1234)).unwrap_err();
        assert!(matches!(err, BardError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn new_uses_injected_request_id() {
        let session = Session::new(&config(), FixedRequestId(4242)).unwrap();
        assert_eq!(session.request_id(), 4242);
        assert_eq!(session.token(), "");
    }

    #[test]
    fn url_joins_paths() {
        let session = Session::new(&config(), FixedRequestId(1000)).unwrap();
        assert_eq!(session.base_url(), "https://bard.google.com");
        assert_eq!(session.url("/"), "https://bard.google.com/");
        assert_eq!(
            session.url("/_/BardChatUi/data/x"),
            "https://bard.google.com/_/BardChatUi/data/x"
        );
    }

    #[test]
    fn debug_hides_token() {
        let mut session = Session::new(&config(), FixedRequestId(1000)).unwrap();
        session.token = "top-secret-token".into();
        let debug = format!("{session:?}");
        assert!(!debug.contains("top-secret-token"));
        assert!(debug.contains("1000"));
    }
}
