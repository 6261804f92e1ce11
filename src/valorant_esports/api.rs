use super::dto::{ResponseEvent, ScheduleResponse};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

const GQL_PATH: &str = "/api/gql";
const OPERATION_NAME: &str = "homeEvents";
const PERSISTED_QUERY_VERSION: u32 = 1;
const PERSISTED_QUERY_HASH: &str =
    "7246add6f577cf30b304e651bf9e25fc6a41fe49aeafb0754c16b5778060fc0a";

const CLIENT_NAME: &str = "Esports Web";
const CLIENT_VERSION: &str = "8eecb20";

const LOCALE: &str = "en-US";
const SPORT: &str = "val";
const PAGE_SIZE: u32 = 1000;
const LOOKBACK_DAYS: i64 = 7;
const LOOKAHEAD_DAYS: i64 = 21;

// ISO-8601 with millisecond precision, the form the endpoint expects.
const WINDOW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("schedule request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid schedule response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

pub struct ScheduleApi {
    client: Client,
    base_url: String,
}

impl ScheduleApi {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Fetches all unstarted events in a window around today, via the
    /// persisted `homeEvents` query.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ResponseEvent>, ApiError> {
        let (window_start, window_end) = event_date_window(now);

        info!("Fetching schedule from {window_start} to {window_end}");

        let variables = json!({
            "hl": LOCALE,
            "sport": SPORT,
            "eventDateStart": window_start.format(WINDOW_TIME_FORMAT).to_string(),
            "eventDateEnd": window_end.format(WINDOW_TIME_FORMAT).to_string(),
            "eventState": ["unstarted"],
            "eventType": "all",
            "pageSize": PAGE_SIZE,
        })
        .to_string();

        let extensions = json!({
            "persistedQuery": {
                "version": PERSISTED_QUERY_VERSION,
                "sha256Hash": PERSISTED_QUERY_HASH,
            }
        })
        .to_string();

        let body = self
            .client
            .get(format!("{}{}", self.base_url, GQL_PATH))
            .query(&[
                ("operationName", OPERATION_NAME),
                ("variables", variables.as_str()),
                ("extensions", extensions.as_str()),
            ])
            .header("accept", "*/*")
            .header("accept-language", "en-US,en;q=0.5")
            .header("apollographql-client-name", CLIENT_NAME)
            .header("apollographql-client-version", CLIENT_VERSION)
            .header("content-type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response = serde_json::from_str::<ScheduleResponse>(&body)?;
        let events = response.data.esports.events;

        debug!("Schedule contains {} events", events.len());

        Ok(events)
    }
}

/// The query window runs from 7 days back to 21 days ahead, anchored at
/// UTC midnight of the reference instant's day.
fn event_date_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    (
        midnight - Duration::days(LOOKBACK_DAYS),
        midnight + Duration::days(LOOKAHEAD_DAYS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test_log::test]
    fn should_anchor_window_at_utc_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 8, 15, 42, 7).unwrap();

        let (start, end) = event_date_window(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 6, 29, 0, 0, 0).unwrap());
    }

    #[test_log::test]
    fn should_format_window_with_millisecond_precision() {
        let now = Utc.with_ymd_and_hms(2024, 6, 8, 15, 42, 7).unwrap();

        let (start, _) = event_date_window(now);

        assert_eq!(
            start.format(WINDOW_TIME_FORMAT).to_string(),
            "2024-06-01T00:00:00.000Z"
        );
    }
}
