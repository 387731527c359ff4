//! Paginated `/events/search` retrieval for a single region.

use std::time::Duration;

use reqwest::StatusCode;

use crate::client::{body_snippet, EventbriteClient, SEARCH_TIMEOUT};
use crate::error::{error_chain, SearchWarning};
use crate::types::{RawEvent, SearchPage};

/// Everything one region's pagination produced.
///
/// `warnings` holds at most one entry: the failure that stopped pagination.
#[derive(Debug, Default)]
pub struct RegionSearch {
    pub events: Vec<RawEvent>,
    pub warnings: Vec<SearchWarning>,
}

impl EventbriteClient {
    /// Searches one region page by page until the API reports no more items.
    ///
    /// Any failure (transport, non-200 status, non-JSON body) stops
    /// pagination for this region only. Events from earlier pages are kept
    /// and the failure is recorded as a [`SearchWarning`].
    ///
    /// `page_delay` is slept between consecutive pages, never after the last.
    ///
    /// There is no page cap: termination relies on the API eventually
    /// returning `has_more_items: false`.
    pub async fn search_region(
        &self,
        query: &str,
        region: &str,
        within: &str,
        page_delay: Duration,
    ) -> RegionSearch {
        let mut result = RegionSearch::default();
        let mut page: u32 = 1;

        loop {
            match self.fetch_search_page(query, region, within, page).await {
                Ok(search_page) => {
                    let has_more = search_page.has_more_items;
                    let events = search_page.events;
                    tracing::debug!(
                        region,
                        page,
                        events = events.len(),
                        has_more,
                        "fetched search page"
                    );
                    result.events.extend(events);
                    if !has_more {
                        break;
                    }
                }
                Err(warning) => {
                    tracing::warn!(
                        region,
                        page,
                        warning = %warning,
                        "region search stopped early"
                    );
                    result.warnings.push(warning);
                    break;
                }
            }

            page = page.saturating_add(1);
            if !page_delay.is_zero() {
                tokio::time::sleep(page_delay).await;
            }
        }

        result
    }

    /// Fetches and classifies a single search page.
    async fn fetch_search_page(
        &self,
        query: &str,
        region: &str,
        within: &str,
        page: u32,
    ) -> Result<SearchPage, SearchWarning> {
        let page_str = page.to_string();
        let url = self.build_url(
            "events/search",
            &[
                ("q", query),
                ("location.address", region),
                ("location.within", within),
                ("expand", "venue"),
                ("sort_by", "date"),
                ("page", &page_str),
            ],
        );

        let request_error = |e: reqwest::Error| SearchWarning::Request {
            region: region.to_owned(),
            message: error_chain(&e),
        };

        let response = self.get(url, SEARCH_TIMEOUT).await.map_err(request_error)?;
        let status = response.status();
        let text = response.text().await.map_err(request_error)?;
        let region = region.to_owned();
        let body = body_snippet(&text);

        let warning = match status {
            StatusCode::OK => {
                return serde_json::from_str::<serde_json::Value>(&text)
                    .map(SearchPage::from_value)
                    .map_err(|_| SearchWarning::InvalidJson { region, body });
            }
            StatusCode::NOT_FOUND => SearchWarning::NotFound { region, body },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchWarning::Auth {
                status: status.as_u16(),
                region,
                body,
            },
            StatusCode::TOO_MANY_REQUESTS => SearchWarning::RateLimited { region, body },
            _ => SearchWarning::UnexpectedStatus {
                status: status.as_u16(),
                region,
                body,
            },
        };
        Err(warning)
    }
}
