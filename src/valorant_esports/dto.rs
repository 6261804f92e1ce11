use super::model::Match;
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

// Note: fields the pipeline never inspects (vods, flags, outcomes, ...)
// deserialize to IgnoredAny.
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub data: ResponseData,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    pub esports: ResponseEsports,
}

#[derive(Debug, Deserialize)]
pub struct ResponseEsports {
    pub events: Vec<ResponseEvent>,
    #[serde(default)]
    pub pages: Option<ResponsePages>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePages {
    #[serde(default)]
    pub newer: Option<String>,
    #[serde(default)]
    pub older: IgnoredAny,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEvent {
    pub id: String,
    #[serde(default)]
    pub block_name: Option<String>,
    pub league: ResponseLeague,
    #[serde(rename = "match")]
    pub match_info: ResponseMatch,
    #[serde(default)]
    pub match_teams: Vec<ResponseTeam>,
    pub start_time: DateTime<Utc>,
    pub state: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub streams: IgnoredAny,
    #[serde(default)]
    pub tournament: Option<ResponseTournament>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseLeague {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub display_priority: IgnoredAny,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMatch {
    pub id: String,
    pub state: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub strategy: ResponseStrategy,
    #[serde(default)]
    pub games: Vec<ResponseGame>,
    #[serde(default)]
    pub flags: IgnoredAny,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStrategy {
    pub count: u32,
    #[serde(rename = "type")]
    pub strategy_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseGame {
    pub id: String,
    pub number: u32,
    pub state: String,
    #[serde(default)]
    pub vods: IgnoredAny,
    #[serde(default)]
    pub recaps: IgnoredAny,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTeam {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub light_image: IgnoredAny,
    #[serde(default)]
    pub result: Option<ResponseResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    pub game_wins: u32,
    #[serde(default)]
    pub outcome: IgnoredAny,
}

#[derive(Debug, Deserialize)]
pub struct ResponseTournament {
    pub id: String,
    pub name: String,
}

impl ResponseEvent {
    /// Returns `None` for events that do not have two participating teams
    /// yet (e.g. bracket slots still waiting on a qualifier).
    pub fn to_model(&self) -> Option<Match> {
        if self.match_teams.len() < 2 {
            return None;
        }

        Some(Match {
            team1: self.match_teams[0].name.clone(),
            team2: self.match_teams[1].name.clone(),
            best_of: self.match_info.strategy.count,
            league_slug: self.league.slug.clone(),
            start_time: self.start_time,
        })
    }
}
