use std::time::Duration;

use crate::app_config::{AppConfig, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_REGIONS};
use crate::ConfigError;

const DEFAULT_API_BASE_URL: &str = "https://www.eventbriteapi.com/v3";
const DEFAULT_QUERY: &str = "veteran OR veterans OR military OR service member";
const DEFAULT_WITHIN: &str = "500mi";
const DEFAULT_USER_AGENT: &str = "mt-wy-veteran-events-scraper/1.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric or list value cannot be parsed. A missing
/// token is not an error here; see [`AppConfig::eventbrite_token`].
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric or list value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i64 = |var: &str, default: i64| -> Result<i64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let eventbrite_token = lookup("EVENTBRITE_TOKEN").ok().filter(|t| !t.is_empty());

    let api_base_url = or_default("EVENTBRITE_API_BASE", DEFAULT_API_BASE_URL);
    let query = or_default("EVENTBRITE_QUERY", DEFAULT_QUERY);
    let within = or_default("EVENTBRITE_WITHIN", DEFAULT_WITHIN);
    let lookahead_days = parse_i64("EVENTBRITE_DAYS", DEFAULT_LOOKAHEAD_DAYS)?;
    let page_delay = parse_delay(
        "EVENTBRITE_PAGE_DELAY_SEC",
        &or_default("EVENTBRITE_PAGE_DELAY_SEC", "0.5"),
    )?;
    let user_agent = or_default("VNN_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("VETEVENTS_LOG_LEVEL", "info");

    let regions = match lookup("EVENTBRITE_REGIONS") {
        Ok(raw) => parse_regions(&raw)?,
        Err(_) => DEFAULT_REGIONS.iter().map(|r| (*r).to_string()).collect(),
    };

    Ok(AppConfig {
        eventbrite_token,
        api_base_url,
        query,
        within,
        regions,
        lookahead_days,
        page_delay,
        user_agent,
        log_level,
    })
}

/// Parse a delay expressed in (possibly fractional) seconds.
fn parse_delay(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };
    let secs = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(e.to_string()))?;
    Duration::try_from_secs_f64(secs).map_err(|e| invalid(e.to_string()))
}

/// Split a comma-separated region list, dropping blank entries.
fn parse_regions(raw: &str) -> Result<Vec<String>, ConfigError> {
    let regions: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_owned)
        .collect();
    if regions.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "EVENTBRITE_REGIONS".to_string(),
            reason: "at least one region is required".to_string(),
        });
    }
    Ok(regions)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
