use std::collections::HashMap;

use btts_daily::aggregate::analyze;
use btts_daily::config::parse_league_list;
use btts_daily::fixtures::Fixture;
use btts_daily::http_client::FetchError;
use btts_daily::leagues::{LEAGUES, league_by_name};
use btts_daily::picks::daily_picks;
use btts_daily::team_stats::round1;

struct MapSource(HashMap<u32, f64>);

impl btts_daily::team_stats::BttsSource for MapSource {
    fn team_btts(&self, _league_id: u32, team_id: u32) -> Result<f64, FetchError> {
        self.0.get(&team_id).copied().ok_or(FetchError::Timeout)
    }
}

fn source(entries: &[(u32, f64)]) -> MapSource {
    MapSource(entries.iter().copied().collect())
}

fn fixture(home_id: u32, home: &str, away_id: u32, away: &str) -> Fixture {
    Fixture {
        league_id: 39,
        home_id,
        home_name: home.to_string(),
        away_id,
        away_name: away.to_string(),
        date: "2025-08-23T14:00:00+00:00".to_string(),
    }
}

#[test]
fn two_fixtures_filtered_and_sorted() {
    let fixtures = vec![(
        "Premier League (ENG)".to_string(),
        vec![
            fixture(1, "Alpha", 2, "Beta"),
            fixture(3, "Gamma", 4, "Delta"),
        ],
    )];
    let src = source(&[(1, 80.0), (2, 70.0), (3, 50.0), (4, 90.0)]);

    let rows = analyze(&fixtures, &src, 60.0, 1);
    let avgs: Vec<f64> = rows.iter().map(|r| r.avg_btts).collect();
    assert_eq!(avgs, [75.0, 70.0]);
    assert_eq!(rows[0].match_label, "Alpha vs Beta");
    assert_eq!(rows[1].match_label, "Gamma vs Delta");
    assert_eq!(rows[0].league, "Premier League (ENG)");
}

#[test]
fn missing_side_drops_fixture_entirely() {
    let fixtures = vec![(
        "Premier League (ENG)".to_string(),
        vec![
            fixture(1, "Alpha", 2, "Beta"),
            fixture(3, "Gamma", 4, "Delta"),
        ],
    )];
    // Delta never resolves, so Gamma vs Delta must not produce a partial row.
    let src = source(&[(1, 80.0), (2, 70.0), (3, 50.0)]);

    let rows = analyze(&fixtures, &src, 0.0, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].match_label, "Alpha vs Beta");
}

#[test]
fn all_stats_missing_yields_empty_table() {
    let fixtures = vec![(
        "Premier League (ENG)".to_string(),
        vec![fixture(1, "Alpha", 2, "Beta")],
    )];
    let rows = analyze(&fixtures, &source(&[]), 0.0, 1);
    assert!(rows.is_empty());
}

#[test]
fn threshold_is_inclusive_and_zero_keeps_everything() {
    let fixtures = vec![(
        "Premier League (ENG)".to_string(),
        vec![
            fixture(1, "Alpha", 2, "Beta"),
            fixture(3, "Gamma", 4, "Delta"),
        ],
    )];
    let src = source(&[(1, 60.0), (2, 60.0), (3, 10.0), (4, 20.0)]);

    let at_sixty = analyze(&fixtures, &src, 60.0, 1);
    assert_eq!(at_sixty.len(), 1);
    assert_eq!(at_sixty[0].avg_btts, 60.0);

    let at_zero = analyze(&fixtures, &src, 0.0, 1);
    assert_eq!(at_zero.len(), 2);
}

#[test]
fn ties_keep_input_order() {
    let fixtures = vec![
        (
            "Premier League (ENG)".to_string(),
            vec![fixture(1, "Alpha", 2, "Beta")],
        ),
        (
            "La Liga (ESP)".to_string(),
            vec![fixture(3, "Gamma", 4, "Delta")],
        ),
    ];
    let src = source(&[(1, 70.0), (2, 70.0), (3, 60.0), (4, 80.0)]);

    let rows = analyze(&fixtures, &src, 0.0, 1);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].avg_btts, 70.0);
    assert_eq!(rows[1].avg_btts, 70.0);
    assert_eq!(rows[0].league, "Premier League (ENG)");
    assert_eq!(rows[1].league, "La Liga (ESP)");
}

#[test]
fn average_stays_between_both_sides() {
    let pairs = [(0.0, 100.0), (33.3, 66.7), (55.5, 55.6), (80.0, 70.0)];
    for (h, a) in pairs {
        let avg = round1((h + a) / 2.0);
        assert!(avg >= h.min(a) && avg <= h.max(a), "avg {avg} for ({h},{a})");
    }
}

#[test]
fn parallel_run_matches_sequential_run() {
    let mut fixtures = Vec::new();
    let mut entries = Vec::new();
    for i in 0..40u32 {
        let home = i * 2 + 1;
        let away = i * 2 + 2;
        fixtures.push(fixture(home, &format!("H{i}"), away, &format!("A{i}")));
        entries.push((home, f64::from(i % 50) + 40.0));
        entries.push((away, f64::from((i * 7) % 50) + 40.0));
    }
    let grouped = vec![("Premier League (ENG)".to_string(), fixtures)];
    let src = source(&entries);

    let sequential = analyze(&grouped, &src, 60.0, 1);
    let parallel = analyze(&grouped, &src, 60.0, 8);
    assert_eq!(sequential, parallel);
}

#[test]
fn picker_caps_at_three_and_prices_the_combo() {
    let fixtures = vec![(
        "Premier League (ENG)".to_string(),
        vec![
            fixture(1, "A", 2, "B"),
            fixture(3, "C", 4, "D"),
            fixture(5, "E", 6, "F"),
            fixture(7, "G", 8, "H"),
        ],
    )];
    let src = source(&[
        (1, 90.0),
        (2, 90.0),
        (3, 85.0),
        (4, 85.0),
        (5, 80.0),
        (6, 80.0),
        (7, 75.0),
        (8, 75.0),
    ]);
    let rows = analyze(&fixtures, &src, 60.0, 1);
    assert_eq!(rows.len(), 4);

    let picks = daily_picks(&rows);
    assert_eq!(picks.rows.len(), 3);
    assert!((picks.combined_odds - 2.2).abs() < 1e-9);
    assert_eq!(picks.rows[0].avg_btts, 90.0);
}

#[test]
fn picker_odds_per_leg() {
    let row = |avg: f64| btts_daily::aggregate::MatchRow {
        league: "Premier League (ENG)".to_string(),
        match_label: "A vs B".to_string(),
        home_btts: avg,
        away_btts: avg,
        avg_btts: avg,
    };

    let none = daily_picks(&[]);
    assert!(none.rows.is_empty());
    assert!((none.combined_odds - 1.0).abs() < 1e-9);

    let one = daily_picks(&[row(70.0)]);
    assert!((one.combined_odds - 1.3).abs() < 1e-9);

    let two = daily_picks(&[row(70.0), row(65.0)]);
    assert!((two.combined_odds - 1.69).abs() < 1e-9);
}

#[test]
fn league_catalog_resolves_names() {
    assert_eq!(LEAGUES.len(), 13);
    assert_eq!(league_by_name("Premier League (ENG)").map(|l| l.id), Some(39));
    assert_eq!(league_by_name("serie a").map(|l| l.id), Some(135));
    assert_eq!(league_by_name("Sunday League"), None);
}

#[test]
fn league_selection_rejects_unknown_and_empty() {
    let picked = parse_league_list("Premier League (ENG), La Liga (ESP)").expect("known names");
    let ids: Vec<u32> = picked.iter().map(|l| l.id).collect();
    assert_eq!(ids, [39, 140]);

    assert!(parse_league_list("Premier League (ENG), Sunday League").is_err());
    assert!(parse_league_list("  , ").is_err());
}
