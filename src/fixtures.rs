use serde::Deserialize;

use crate::http_client::{API_BASE, FetchError, get_body};

/// One scheduled match for the queried date, in API response order.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub league_id: u32,
    pub home_id: u32,
    pub home_name: String,
    pub away_id: u32,
    pub away_name: String,
    pub date: String,
}

/// Fetches the fixtures scheduled for the current calendar date (process local
/// timezone, not configurable) in one league.
pub fn fetch_today_fixtures(
    api_key: &str,
    league_id: u32,
    season: u16,
) -> Result<Vec<Fixture>, FetchError> {
    let today = chrono::Local::now().format("%Y-%m-%d");
    let url = format!("{API_BASE}/fixtures?league={league_id}&season={season}&date={today}");
    let body = get_body(&url, api_key)?;
    parse_fixtures_json(&body, league_id)
}

#[derive(Debug, Deserialize)]
struct FixturesResponse {
    #[serde(default)]
    response: Vec<FixtureEntry>,
}

#[derive(Debug, Deserialize)]
struct FixtureEntry {
    #[serde(default)]
    fixture: FixtureMeta,
    teams: FixtureTeams,
}

#[derive(Debug, Default, Deserialize)]
struct FixtureMeta {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureTeams {
    home: TeamRef,
    away: TeamRef,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
    name: String,
}

/// A missing `response` key parses as "no fixtures today"; anything that is
/// not the expected envelope is malformed.
pub fn parse_fixtures_json(raw: &str, league_id: u32) -> Result<Vec<Fixture>, FetchError> {
    let parsed: FixturesResponse =
        serde_json::from_str(raw).map_err(|err| FetchError::Malformed(err.to_string()))?;
    Ok(parsed
        .response
        .into_iter()
        .map(|entry| Fixture {
            league_id,
            home_id: entry.teams.home.id,
            home_name: entry.teams.home.name,
            away_id: entry.teams.away.id,
            away_name: entry.teams.away.name,
            date: entry.fixture.date.unwrap_or_default(),
        })
        .collect())
}
