use super::dto::ResponseEvent;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const VCT_PREFIX: &str = "vct_";
const LAST_CHANCE_QUALIFIER_PREFIX: &str = "last_chance_qualifier_";
const INTERNATIONAL_SLUGS: [&str; 2] = ["vct_masters", "champions"];

/// One upcoming match, reduced to the fields the calendars need.
#[derive(Debug, Clone)]
pub struct Match {
    pub team1: String,
    pub team2: String,
    pub best_of: u32,
    pub league_slug: String,
    pub start_time: DateTime<Utc>,
}

/// The five competitive groupings that get a calendar file, in the order
/// their files are written.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Emea,
    Americas,
    Pacific,
    China,
    International,
}

/// Derives the region slug from a league slug. International tournaments
/// match by exact alias; regional leagues carry their region after a
/// tournament-tier prefix. Everything else is unclassified.
pub fn region_from_slug(slug: &str) -> Option<&str> {
    if INTERNATIONAL_SLUGS.contains(&slug) {
        return Some("international");
    }

    slug.strip_prefix(VCT_PREFIX)
        .or_else(|| slug.strip_prefix(LAST_CHANCE_QUALIFIER_PREFIX))
}

/// Buckets events into per-region match lists, preserving arrival order.
/// Events that classify outside the canonical regions or lack two teams
/// are dropped.
pub fn group_by_region(events: Vec<ResponseEvent>) -> BTreeMap<Region, Vec<Match>> {
    let mut grouped: BTreeMap<Region, Vec<Match>> = BTreeMap::new();

    for event in events {
        let region = region_from_slug(&event.league.slug)
            .and_then(|region_slug| region_slug.parse::<Region>().ok());

        let Some(region) = region else {
            continue;
        };

        let Some(upcoming_match) = event.to_model() else {
            continue;
        };

        grouped.entry(region).or_default().push(upcoming_match);
    }

    grouped
}
