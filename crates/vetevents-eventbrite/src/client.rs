//! HTTP client for the Eventbrite v3 REST API.
//!
//! Wraps `reqwest` with bearer-token auth, a configurable base URL, and the
//! token gate that must pass before any search traffic is sent.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::{error_chain, EventbriteError};

/// Per-request timeout for the `/users/me/` identity check.
pub(crate) const VALIDATION_TIMEOUT: Duration = Duration::from_secs(15);
/// Per-request timeout for each `/events/search` page.
pub(crate) const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of response-body characters carried into errors and warnings.
pub(crate) const BODY_SNIPPET_CHARS: usize = 256;

/// Client for the Eventbrite REST API.
///
/// One instance (and its connection pool) is reused for every request in a
/// run. The base URL comes from configuration so tests can point it at a
/// mock server.
pub struct EventbriteClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl EventbriteClient {
    /// Creates a new client rooted at `base_url`, e.g.
    /// `https://www.eventbriteapi.com/v3`.
    ///
    /// # Errors
    ///
    /// Returns [`EventbriteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EventbriteError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        token: &str,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, EventbriteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so that joining a relative path appends
        // to `/v3/` instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| EventbriteError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(EventbriteError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url: parsed,
        })
    }

    /// Checks the token against the `/users/me/` identity endpoint.
    ///
    /// # Errors
    ///
    /// - [`EventbriteError::TokenRequest`] if no response was received.
    /// - [`EventbriteError::TokenInvalidOrForbidden`] on HTTP 401 or 403.
    /// - [`EventbriteError::TokenRateLimited`] on HTTP 429.
    /// - [`EventbriteError::TokenHttp`] on any other status besides 200.
    pub async fn validate_token(&self) -> Result<(), EventbriteError> {
        let url = self.build_url("users/me/", &[]);
        let response = self
            .get(url, VALIDATION_TIMEOUT)
            .await
            .map_err(|e| EventbriteError::TokenRequest(error_chain(&e)))?;

        let status = response.status();
        if status == StatusCode::OK {
            tracing::debug!("eventbrite token accepted");
            return Ok(());
        }

        let body = body_snippet(&response.text().await.unwrap_or_default());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(EventbriteError::TokenInvalidOrForbidden {
                    status: status.as_u16(),
                    body,
                })
            }
            StatusCode::TOO_MANY_REQUESTS => Err(EventbriteError::TokenRateLimited { body }),
            _ => Err(EventbriteError::TokenHttp {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Builds a request URL under the API base with percent-encoded query
    /// parameters.
    pub(crate) fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{path}", self.base_url.path()));
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends an authenticated GET. Only transport failures are errors; status
    /// classification is left to the caller.
    pub(crate) async fn get(
        &self,
        url: Url,
        timeout: Duration,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
    }
}

/// Truncates a response body to at most [`BODY_SNIPPET_CHARS`] characters.
pub(crate) fn body_snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
