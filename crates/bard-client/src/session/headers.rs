//! Browser-mimicking request headers.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, HOST, ORIGIN, REFERER, USER_AGENT,
};

use crate::BardError;

use super::Session;

pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

/// Content type sent with the bootstrap GET.
pub(crate) const PAGE_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";
/// Content type sent with form POSTs.
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl Session {
    /// `host[:port]` as the browser would send it.
    pub(crate) fn host(&self) -> String {
        let host = self.base_url.host_str().unwrap_or_default();
        match self.base_url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// Full header set for one request, cookies included.
    pub(crate) fn headers(&self, content_type: &'static str) -> Result<HeaderMap, BardError> {
        let origin = format!("{}://{}", self.base_url.scheme(), self.host());
        let referer = format!("{origin}/");

        let mut headers = HeaderMap::new();
        headers.insert(HOST, header_value("Host", self.host())?);
        headers.insert(
            HeaderName::from_static("x-same-domain"),
            HeaderValue::from_static("1"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(ORIGIN, header_value("Origin", origin)?);
        headers.insert(REFERER, header_value("Referer", referer)?);

        let mut cookie = header_value("Cookie", self.credentials.cookie_header())?;
        cookie.set_sensitive(true);
        headers.insert(COOKIE, cookie);

        Ok(headers)
    }
}

fn header_value(name: &'static str, value: String) -> Result<HeaderValue, BardError> {
    HeaderValue::try_from(value).map_err(|_| BardError::InvalidHeader(name))
}
