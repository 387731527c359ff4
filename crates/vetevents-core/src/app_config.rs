use std::time::Duration;

/// Regions searched when `EVENTBRITE_REGIONS` is not set.
pub const DEFAULT_REGIONS: [&str; 2] = ["Montana", "Wyoming"];

/// Lookahead window used when `EVENTBRITE_DAYS` is not set.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 60;

#[derive(Clone)]
pub struct AppConfig {
    /// Bearer token for the Eventbrite API. `None` when unset or empty; the
    /// token gate decides what to do about it, not the loader.
    pub eventbrite_token: Option<String>,
    pub api_base_url: String,
    pub query: String,
    pub within: String,
    pub regions: Vec<String>,
    pub lookahead_days: i64,
    pub page_delay: Duration,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "eventbrite_token",
                &self.eventbrite_token.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("query", &self.query)
            .field("within", &self.within)
            .field("regions", &self.regions)
            .field("lookahead_days", &self.lookahead_days)
            .field("page_delay", &self.page_delay)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
