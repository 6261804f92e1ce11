use std::process::ExitCode;

use chrono::Utc;
use strum::IntoEnumIterator;
use tracing::{error, info};

use valcal::calendar::{ics, index};
use valcal::config::env_loader::load_config;
use valcal::tracing::setup_loki;
use valcal::valorant_esports::api::ScheduleApi;
use valcal::valorant_esports::model::{group_by_region, Region};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;

    let code = run().await;

    // Flush pending log lines before the process exits.
    if let Some((controller, task)) = loki {
        controller.shutdown().await;
        let _ = task.await;
    }

    code
}

async fn run() -> ExitCode {
    let config = load_config();

    let api = match ScheduleApi::new(config.api_base_url.clone(), config.request_timeout) {
        Ok(api) => api,
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Fetch and decode failures are fatal; nothing gets written.
    let events = match api.fetch_upcoming(Utc::now()).await {
        Ok(events) => events,
        Err(err) => {
            error!("Failed to fetch schedule: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!("Fetched {} schedule events", events.len());

    let grouped = group_by_region(events);
    let generated_at = Utc::now();

    // Every canonical region gets a file, empty or not. A failed write only
    // skips that region.
    for region in Region::iter() {
        let matches = grouped.get(&region).map(Vec::as_slice).unwrap_or_default();

        match ics::write_calendar(&config.output_dir, region, matches, generated_at) {
            Ok(path) => info!("Created {} with {} matches", path.display(), matches.len()),
            Err(err) => error!("Failed to write calendar for region {region}: {err}"),
        }
    }

    if let Err(err) = index::write_index(&config.output_dir) {
        error!("Failed to write index.html: {err}");
    }

    ExitCode::SUCCESS
}
