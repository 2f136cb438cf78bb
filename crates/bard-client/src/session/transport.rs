//! Single-shot GET / form POST with session headers and cookies.

use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

use crate::BardError;

use super::headers::{FORM_CONTENT_TYPE, PAGE_CONTENT_TYPE};
use super::Session;

impl Session {
    /// GET `url` and return the body. Any status other than 200 is an error.
    pub async fn get(&self, url: &str) -> Result<String, BardError> {
        let request = self.http.get(url).headers(self.headers(PAGE_CONTENT_TYPE)?);
        self.fetch("GET", url, request).await
    }

    /// POST `form` as `application/x-www-form-urlencoded` with `query` appended to `url`.
    pub async fn post_form(
        &self,
        url: &str,
        query: &[(&str, String)],
        form: &[(&str, String)],
    ) -> Result<String, BardError> {
        let request = self
            .http
            .post(url)
            .headers(self.headers(FORM_CONTENT_TYPE)?)
            .query(query)
            .form(form);
        self.fetch("POST", url, request).await
    }

    async fn fetch(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<String, BardError> {
        debug!(method, url, request_id = self.request_id, "bard request");

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(method, url, status = status.as_u16(), "bard request rejected");
            return Err(BardError::Fetch {
                status: status.as_u16(),
                method,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
