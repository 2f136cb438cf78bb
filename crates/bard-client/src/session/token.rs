//! `SNlM0e` anti-forgery token bootstrap.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::BardError;

use super::Session;

static SNLM0E_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"SNlM0e":"(.*?)""#).expect("session: static SNlM0e pattern must compile")
});

/// First `SNlM0e":"<value>"` capture in a page, if any.
pub(crate) fn extract_token(page: &str) -> Option<&str> {
    SNLM0E_RE
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl Session {
    /// Fetch the landing page and scrape the token from its inline script.
    pub async fn acquire_token(&self) -> Result<String, BardError> {
        let page = self.get(&self.url("/")).await?;
        match extract_token(&page) {
            Some(token) => {
                info!(request_id = self.request_id, "acquired SNlM0e token");
                Ok(token.to_string())
            }
            None => {
                warn!(
                    page_len = page.len(),
                    "SNlM0e marker missing from bootstrap page"
                );
                Err(BardError::TokenAcquisition)
            }
        }
    }

    /// Re-run bootstrap and replace the stored token.
    ///
    /// The old token is kept if bootstrap fails.
    pub async fn refresh_token(&mut self) -> Result<(), BardError> {
        self.token = self.acquire_token().await?;
        Ok(())
    }
}
