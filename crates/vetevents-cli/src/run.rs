//! Run orchestration: token gate → region searches → normalize → window
//! filter → dedupe → reports, plus the mapping onto process exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use vetevents_core::{AppConfig, ResultPayload};
use vetevents_eventbrite::{normalize_events, EventbriteClient};

use crate::dedupe::dedupe_by_name_start;
use crate::report::{save_json, save_markdown};
use crate::window::filter_upcoming;

pub(crate) const MISSING_TOKEN_ERROR: &str = "EVENTBRITE_TOKEN is not set";

/// Where the two reports are written.
#[derive(Debug, Clone)]
pub(crate) struct OutputPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Success,
    /// Token rejected, configuration value invalid, or any other runtime error.
    Failed,
    /// `EVENTBRITE_TOKEN` absent; detected before any network traffic.
    MissingCredential,
}

impl RunStatus {
    pub(crate) fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failed => 1,
            RunStatus::MissingCredential => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Executes one full run and leaves both report files in a well-defined state,
/// whatever the outcome.
pub(crate) async fn execute(config: &AppConfig, paths: &OutputPaths) -> RunStatus {
    let Some(token) = config.eventbrite_token.as_deref() else {
        tracing::error!(error = MISSING_TOKEN_ERROR, "run aborted before any request");
        write_failure(paths, MISSING_TOKEN_ERROR, &config.regions, config.lookahead_days);
        return RunStatus::MissingCredential;
    };

    tracing::info!("token acquired; starting fetch");
    match fetch_and_write(config, token, paths).await {
        Ok(count) => {
            tracing::info!(count, "run complete");
            RunStatus::Success
        }
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(error = %error, "run failed");
            write_failure(paths, &error, &config.regions, config.lookahead_days);
            RunStatus::Failed
        }
    }
}

async fn fetch_and_write(
    config: &AppConfig,
    token: &str,
    paths: &OutputPaths,
) -> anyhow::Result<usize> {
    let payload = fetch_events(config, token).await?;
    save_json(&payload, &paths.json)?;
    save_markdown(
        payload.events(),
        &config.regions,
        config.lookahead_days,
        &paths.markdown,
    )?;
    Ok(payload.events().len())
}

/// Validates the token, searches every configured region in order, and
/// builds the generated payload.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the token gate fails.
/// Search failures are not errors; they surface as payload warnings.
pub(crate) async fn fetch_events(
    config: &AppConfig,
    token: &str,
) -> anyhow::Result<ResultPayload> {
    let client =
        EventbriteClient::with_base_url(token, &config.user_agent, &config.api_base_url)?;
    client.validate_token().await?;

    let mut raw_events = Vec::new();
    let mut warnings = Vec::new();
    for region in &config.regions {
        let found = client
            .search_region(&config.query, region, &config.within, config.page_delay)
            .await;
        tracing::info!(
            region = %region,
            events = found.events.len(),
            warnings = found.warnings.len(),
            "region search finished"
        );
        raw_events.extend(found.events);
        warnings.extend(found.warnings.iter().map(ToString::to_string));
    }

    let normalized = normalize_events(&raw_events);
    let upcoming = filter_upcoming(normalized, config.lookahead_days);
    let unique = dedupe_by_name_start(upcoming);
    tracing::debug!(
        raw = raw_events.len(),
        unique = unique.len(),
        "events filtered and deduplicated"
    );

    Ok(ResultPayload::generated(
        &config.query,
        &config.regions,
        &config.within,
        unique,
        warnings,
    ))
}

/// Writes the failed payload and an empty Markdown report. Write errors are
/// logged; there is nothing further to fall back to.
pub(crate) fn write_failure(paths: &OutputPaths, error: &str, regions: &[String], days: i64) {
    if let Err(e) = save_json(&ResultPayload::failed(error), &paths.json) {
        tracing::error!(error = %e, "could not write failure payload");
    }
    if let Err(e) = save_markdown(&[], regions, days, &paths.markdown) {
        tracing::error!(error = %e, "could not write markdown report");
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
