use crate::aggregate::MatchRow;

pub const MAX_PICKS: usize = 3;
// Fixed per-leg multiplier. A placeholder price, not derived from the
// percentages themselves.
pub const PER_LEG_ODDS: f64 = 1.3;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPicks {
    pub rows: Vec<MatchRow>,
    pub combined_odds: f64,
}

/// Takes the leading rows of the already-sorted table and prices the combo at
/// round(1.3^k, 2) for k selected rows.
pub fn daily_picks(rows: &[MatchRow]) -> DailyPicks {
    let rows: Vec<MatchRow> = rows.iter().take(MAX_PICKS).cloned().collect();
    let combined_odds = round2(PER_LEG_ODDS.powi(rows.len() as i32));
    DailyPicks {
        rows,
        combined_odds,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
