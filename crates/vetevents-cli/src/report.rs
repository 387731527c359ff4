//! Writers for `events.json` and `events.md`.

use std::path::Path;

use anyhow::Context;
use vetevents_core::{NormalizedEvent, ResultPayload};

/// Writes the payload as pretty-printed UTF-8 JSON, creating parent
/// directories and overwriting any previous file.
pub(crate) fn save_json(payload: &ResultPayload, path: &Path) -> anyhow::Result<()> {
    let mut body = serde_json::to_string_pretty(payload).context("serializing result payload")?;
    body.push('\n');
    write_file(path, &body)
}

/// Renders `events` to Markdown and writes it to `path`.
pub(crate) fn save_markdown(
    events: &[NormalizedEvent],
    regions: &[String],
    lookahead_days: i64,
    path: &Path,
) -> anyhow::Result<()> {
    write_file(path, &render_markdown(events, regions, lookahead_days))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Renders the human-readable report.
///
/// Each event gets a `##` heading followed by Date, Location and Sign-up
/// bullets; a bullet is left out when its value is absent or empty.
pub(crate) fn render_markdown(
    events: &[NormalizedEvent],
    regions: &[String],
    lookahead_days: i64,
) -> String {
    let mut lines: Vec<String> = vec![format!(
        "# Upcoming Veteran Events in {}\n",
        join_regions(regions)
    )];

    if events.is_empty() {
        lines.push(format!(
            "No events found within the next {lookahead_days} days.\n"
        ));
    } else {
        for event in events {
            let name = present(event.name.as_ref()).unwrap_or("Unnamed Event");
            lines.push(format!("## {name}\n"));

            if let Some(start) = present(event.start.as_ref()) {
                let start = start.replace('T', " ").replace('Z', "");
                if !start.is_empty() {
                    lines.push(format!("- **Date:** {start}\n"));
                }
            }

            let location: Vec<&str> = [
                &event.venue_name,
                &event.address,
                &event.city,
                &event.state,
            ]
            .into_iter()
            .filter_map(|part| present(part.as_ref()))
            .collect();
            if !location.is_empty() {
                lines.push(format!("- **Location:** {}\n", location.join(", ")));
            }

            if let Some(url) = present(event.url.as_ref()) {
                lines.push(format!("- **Sign up:** [{url}]({url})\n"));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// `Some` only for non-empty strings.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// `["A"]` → `A`, `["A", "B"]` → `A and B`, `["A", "B", "C"]` → `A, B and C`.
fn join_regions(regions: &[String]) -> String {
    match regions {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
