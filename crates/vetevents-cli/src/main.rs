mod dedupe;
mod report;
mod run;
mod window;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::{OutputPaths, RunStatus};

#[derive(Debug, Parser)]
#[command(name = "vetevents")]
#[command(about = "Collect upcoming veteran events from Eventbrite")]
struct Cli {
    /// Path of the structured JSON report.
    #[arg(long, default_value = "events.json")]
    out_json: PathBuf,

    /// Path of the Markdown report.
    #[arg(long, default_value = "events.md")]
    out_md: PathBuf,
}

impl Cli {
    fn output_paths(&self) -> OutputPaths {
        OutputPaths {
            json: self.out_json.clone(),
            markdown: self.out_md.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = vetevents_core::load_app_config();

    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = cli.output_paths();
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            let regions: Vec<String> = vetevents_core::DEFAULT_REGIONS
                .iter()
                .map(|r| (*r).to_string())
                .collect();
            run::write_failure(
                &paths,
                &e.to_string(),
                &regions,
                vetevents_core::DEFAULT_LOOKAHEAD_DAYS,
            );
            return RunStatus::Failed.into();
        }
    };
    tracing::debug!(?config, "configuration loaded");

    run::execute(&config, &paths).await.into()
}
