use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use ics::properties::{Created, Description, DtEnd, DtStart, LastModified, Method, Summary};
use ics::ICalendar;

use crate::calendar::index::title_case;
use crate::valorant_esports::model::{Match, Region};

const ICAL_VERSION: &str = "2.0";
// All stamps are UTC, in the basic `...Z` form.
const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const UID_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn calendar_file_name(region: Region) -> String {
    format!("valorant_{region}.ics")
}

/// Builds the region's calendar document, one VEVENT per match.
pub fn build_calendar(
    region: Region,
    matches: &[Match],
    generated_at: DateTime<Utc>,
) -> ICalendar<'static> {
    let region_slug: &'static str = region.into();
    let product_id = format!("-//Valorant Esports Calendar - {}//EN", title_case(region_slug));

    let mut icalendar = ICalendar::new(ICAL_VERSION, product_id);
    icalendar.push(Method::new("REQUEST"));

    for upcoming_match in matches {
        icalendar.add_event(to_ics_event(upcoming_match, generated_at));
    }

    icalendar
}

fn to_ics_event(upcoming_match: &Match, generated_at: DateTime<Utc>) -> ics::Event<'static> {
    let start = upcoming_match.start_time;
    let end = start + match_duration(upcoming_match.best_of);
    let stamp = generated_at.format(UTC_STAMP_FORMAT).to_string();

    let uid = format!(
        "{}-{}-{}",
        upcoming_match.team1,
        upcoming_match.team2,
        start.format(UID_TIME_FORMAT)
    );

    let mut ics_event = ics::Event::new(uid, stamp.clone());

    ics_event.push(Summary::new(format!(
        "{} Vs {} (BO{})",
        upcoming_match.team1, upcoming_match.team2, upcoming_match.best_of
    )));
    ics_event.push(Description::new(format!(
        "League: {}",
        upcoming_match.league_slug
    )));
    ics_event.push(DtStart::new(start.format(UTC_STAMP_FORMAT).to_string()));
    ics_event.push(DtEnd::new(end.format(UTC_STAMP_FORMAT).to_string()));
    ics_event.push(Created::new(stamp.clone()));
    ics_event.push(LastModified::new(stamp));

    ics_event
}

// Best-of-5 matches get a longer slot; everything else fits two hours.
fn match_duration(best_of: u32) -> Duration {
    if best_of == 5 {
        Duration::hours(4)
    } else {
        Duration::hours(2)
    }
}

/// Serializes the region's calendar into `valorant_{region}.ics` inside
/// `output_dir`, creating the directory if needed.
pub fn write_calendar(
    output_dir: &Path,
    region: Region,
    matches: &[Match],
    generated_at: DateTime<Utc>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(calendar_file_name(region));
    fs::write(&path, build_calendar(region, matches, generated_at).to_string())?;

    Ok(path)
}
