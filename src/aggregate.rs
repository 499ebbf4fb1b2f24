use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::fixtures::Fixture;
use crate::team_stats::{BttsSource, round1};

/// One table row; lifecycle is a single pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub league: String,
    pub match_label: String,
    pub home_btts: f64,
    pub away_btts: f64,
    pub avg_btts: f64,
}

/// Joins fixtures with both teams' BTTS percentages, drops fixtures with a
/// missing side, filters by the inclusive threshold and sorts descending by
/// the average. Ties keep input order (stable sort, no secondary key).
pub fn analyze(
    fixtures_by_league: &[(String, Vec<Fixture>)],
    source: &dyn BttsSource,
    min_btts: f64,
    parallelism: usize,
) -> Vec<MatchRow> {
    let flat: Vec<(&str, &Fixture)> = fixtures_by_league
        .iter()
        .flat_map(|(league, fixtures)| fixtures.iter().map(move |f| (league.as_str(), f)))
        .collect();

    // Fan the per-team fetches out on a bounded pool and join back
    // positionally, so the output is identical to a sequential run.
    let joined: Vec<Option<MatchRow>> = with_fetch_pool(parallelism, || {
        flat.par_iter()
            .map(|&(league, fixture)| build_row(league, fixture, source))
            .collect()
    });

    let mut rows: Vec<MatchRow> = joined.into_iter().flatten().collect();
    rows.retain(|row| row.avg_btts >= min_btts);
    rows.sort_by(|a, b| {
        b.avg_btts
            .partial_cmp(&a.avg_btts)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn build_row(league: &str, fixture: &Fixture, source: &dyn BttsSource) -> Option<MatchRow> {
    let home_btts = match source.team_btts(fixture.league_id, fixture.home_id) {
        Ok(pct) => pct,
        Err(err) => {
            debug!(team = %fixture.home_name, %err, "home stats missing, dropping fixture");
            return None;
        }
    };
    let away_btts = match source.team_btts(fixture.league_id, fixture.away_id) {
        Ok(pct) => pct,
        Err(err) => {
            debug!(team = %fixture.away_name, %err, "away stats missing, dropping fixture");
            return None;
        }
    };
    Some(MatchRow {
        league: league.to_string(),
        match_label: format!("{} vs {}", fixture.home_name, fixture.away_name),
        home_btts,
        away_btts,
        avg_btts: round1((home_btts + away_btts) / 2.0),
    })
}

fn with_fetch_pool<T>(parallelism: usize, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    match rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
    {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}
