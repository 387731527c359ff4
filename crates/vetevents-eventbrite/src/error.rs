use thiserror::Error;

/// Fatal errors from the Eventbrite client.
///
/// The `Token*` variants render as `<kind>:http_<status>:<body snippet>` so the
/// stringified error can go straight into the failed payload.
#[derive(Debug, Error)]
pub enum EventbriteError {
    /// The underlying `reqwest::Client` could not be built. The cause is
    /// carried as the error source.
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),

    #[error("invalid API base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The identity check never got an HTTP response. Holds the full
    /// transport error chain, see [`error_chain`].
    #[error("token_validation_request_error:{0}")]
    TokenRequest(String),

    #[error("token_invalid_or_forbidden:http_{status}:{body}")]
    TokenInvalidOrForbidden { status: u16, body: String },

    #[error("rate_limited_on_token_validation:http_429:{body}")]
    TokenRateLimited { body: String },

    #[error("token_validation_http_error:http_{status}:{body}")]
    TokenHttp { status: u16, body: String },
}

/// A non-fatal failure that ended pagination for one region.
///
/// `Display` produces the `<kind>:<region>:<detail>` string recorded in the
/// payload's `warnings` list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchWarning {
    #[error("request_error:{region}:{message}")]
    Request { region: String, message: String },

    #[error("404:{region}:{body}")]
    NotFound { region: String, body: String },

    #[error("auth_error_http_{status}:{region}:{body}")]
    Auth {
        status: u16,
        region: String,
        body: String,
    },

    #[error("rate_limited_http_429:{region}:{body}")]
    RateLimited { region: String, body: String },

    #[error("http_{status}:{region}:{body}")]
    UnexpectedStatus {
        status: u16,
        region: String,
        body: String,
    },

    #[error("invalid_json_response:{region}:{body}")]
    InvalidJson { region: String, body: String },
}

/// Renders an error followed by every source in its chain, joined by `": "`.
///
/// `reqwest` keeps the useful part of a transport failure (connection
/// refused, DNS lookup, timeout) in the sources, not in its own message.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
