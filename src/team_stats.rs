use serde_json::Value;

use crate::http_client::{API_BASE, FetchError, get_body};

/// A team's season-to-date BTTS record.
#[derive(Debug, Clone, Copy)]
pub struct TeamBttsStat {
    pub team_id: u32,
    pub league_id: u32,
    pub season: u16,
    pub btts_yes: u32,
    pub btts_no: u32,
}

impl TeamBttsStat {
    /// round(100 * yes / max(yes + no, 1), 1). The max guard maps a team with
    /// zero recorded matches to 0.0 rather than "unknown"; that policy is
    /// deliberate and callers rely on it.
    pub fn percentage(&self) -> f64 {
        let total = (self.btts_yes + self.btts_no).max(1);
        round1(100.0 * f64::from(self.btts_yes) / f64::from(total))
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Statistics-fetch capability. The aggregator only needs a percentage per
/// team, so the seam is a single method; tests drive it from an in-memory map.
pub trait BttsSource: Sync {
    fn team_btts(&self, league_id: u32, team_id: u32) -> Result<f64, FetchError>;
}

/// Live source: one request per call, no deduplication across fixtures.
pub struct ApiBttsSource {
    api_key: String,
    season: u16,
}

impl ApiBttsSource {
    pub fn new(api_key: &str, season: u16) -> Self {
        Self {
            api_key: api_key.to_string(),
            season,
        }
    }
}

impl BttsSource for ApiBttsSource {
    fn team_btts(&self, league_id: u32, team_id: u32) -> Result<f64, FetchError> {
        let stat = fetch_team_btts(&self.api_key, league_id, self.season, team_id)?;
        Ok(stat.percentage())
    }
}

pub fn fetch_team_btts(
    api_key: &str,
    league_id: u32,
    season: u16,
    team_id: u32,
) -> Result<TeamBttsStat, FetchError> {
    let url =
        format!("{API_BASE}/teams/statistics?league={league_id}&season={season}&team={team_id}");
    let body = get_body(&url, api_key)?;
    let (btts_yes, btts_no) = parse_team_statistics_json(&body)?;
    Ok(TeamBttsStat {
        team_id,
        league_id,
        season,
        btts_yes,
        btts_no,
    })
}

/// The yes/no counts live under `response.both_teams_to_score`. An absent
/// envelope is malformed; absent counts inside a present envelope default to 0.
pub fn parse_team_statistics_json(raw: &str) -> Result<(u32, u32), FetchError> {
    let root: Value =
        serde_json::from_str(raw).map_err(|err| FetchError::Malformed(err.to_string()))?;
    let stats = root
        .get("response")
        .filter(|v| !v.is_null())
        .ok_or_else(|| FetchError::Malformed("missing response object".to_string()))?;
    let btts = stats
        .get("both_teams_to_score")
        .filter(|v| !v.is_null())
        .ok_or_else(|| FetchError::Malformed("missing both_teams_to_score".to_string()))?;
    let yes = btts.get("yes").and_then(Value::as_u64).unwrap_or(0) as u32;
    let no = btts.get("no").and_then(Value::as_u64).unwrap_or(0) as u32;
    Ok((yes, no))
}
