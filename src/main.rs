use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::style::Stylize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use btts_daily::aggregate::{self, MatchRow};
use btts_daily::config::AppConfig;
use btts_daily::fixtures::{self, Fixture};
use btts_daily::picks;
use btts_daily::report;
use btts_daily::team_stats::ApiBttsSource;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("btts_daily=info")),
        )
        .init();

    let cfg = AppConfig::from_env()?;
    info!(
        season = cfg.season,
        min_btts = cfg.min_btts,
        leagues = cfg.leagues.len(),
        "starting BTTS run"
    );

    let mut fixtures_by_league: Vec<(String, Vec<Fixture>)> = Vec::new();
    let mut fixtures_total = 0usize;
    for league in &cfg.leagues {
        let fixtures = match fixtures::fetch_today_fixtures(&cfg.api_key, league.id, cfg.season) {
            Ok(list) => list,
            Err(err) => {
                warn!(league = league.name, %err, "fixture fetch failed, treating as no fixtures");
                Vec::new()
            }
        };
        fixtures_total += fixtures.len();
        fixtures_by_league.push((league.name.to_string(), fixtures));
    }

    if fixtures_total == 0 {
        // "No games today" and "API limit reached" are intentionally one
        // outcome here; the warn logs above carry the actual cause.
        println!("No fixtures found for today or API limit reached.");
        return Ok(());
    }

    let source = ApiBttsSource::new(&cfg.api_key, cfg.season);
    let rows = aggregate::analyze(
        &fixtures_by_league,
        &source,
        cfg.min_btts,
        cfg.fetch_parallelism,
    );

    print_table(&rows);

    let picks = picks::daily_picks(&rows);
    if picks.rows.is_empty() {
        println!("No matches meet the BTTS threshold today.");
    } else {
        println!();
        println!("Daily picks (highest BTTS probability):");
        for row in &picks.rows {
            println!("  {}: {} ({:.1}%)", row.league, row.match_label, row.avg_btts);
        }
        println!(
            "Suggested combo: ~{}x odds (based on BTTS 'Yes')",
            picks.combined_odds
        );
    }

    let report_name = format!("BTTS_Report_{}.xlsx", Local::now().format("%Y-%m-%d"));
    report::export_report(Path::new(&report_name), &rows)
        .with_context(|| format!("export {report_name}"))?;
    info!(path = %report_name, rows = rows.len(), "report written");

    Ok(())
}

fn print_table(rows: &[MatchRow]) {
    if rows.is_empty() {
        return;
    }
    println!(
        "{:<26} {:<44} {:>10} {:>10} {:>9}",
        "League", "Match", "Home BTTS%", "Away BTTS%", "Avg BTTS%"
    );
    for row in rows {
        let avg = format!("{:>9.1}", row.avg_btts);
        let avg = if row.avg_btts >= 80.0 {
            avg.green()
        } else if row.avg_btts >= 60.0 {
            avg.yellow()
        } else {
            avg.red()
        };
        println!(
            "{:<26} {:<44} {:>10.1} {:>10.1} {}",
            row.league, row.match_label, row.home_btts, row.away_btts, avg
        );
    }
}
