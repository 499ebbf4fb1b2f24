use std::env;

use anyhow::{Context, Result, bail};

use crate::leagues::{self, League};

pub const DEFAULT_SEASON: u16 = 2025;
pub const DEFAULT_MIN_BTTS: f64 = 60.0;
const DEFAULT_LEAGUES: &[&str] = &["Premier League (ENG)", "La Liga (ESP)", "Serie A (ITA)"];

/// Immutable run configuration. Built once at startup and passed into each
/// component; nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub season: u16,
    pub min_btts: f64,
    pub leagues: Vec<&'static League>,
    pub fetch_parallelism: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("API_FOOTBALL_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .context("API_FOOTBALL_KEY is not set")?;

        let season = env::var("BTTS_SEASON")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SEASON)
            .clamp(2015, 2100);

        let min_btts = env::var("BTTS_MIN_PCT")
            .ok()
            .and_then(|val| val.parse::<f64>().ok())
            .unwrap_or(DEFAULT_MIN_BTTS)
            .clamp(0.0, 100.0);

        let leagues = match env::var("BTTS_LEAGUES") {
            Ok(raw) => parse_league_list(&raw)?,
            Err(_) => DEFAULT_LEAGUES
                .iter()
                .filter_map(|name| leagues::league_by_name(name))
                .collect(),
        };

        let fetch_parallelism = env::var("FETCH_PARALLELISM")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(4)
            .clamp(1, 16);

        Ok(Self {
            api_key,
            season,
            min_btts,
            leagues,
            fetch_parallelism,
        })
    }
}

/// Parses a comma-separated league selection against the fixed catalog.
/// Unknown names and an empty selection are configuration errors.
pub fn parse_league_list(raw: &str) -> Result<Vec<&'static League>> {
    let mut out: Vec<&'static League> = Vec::new();
    for part in raw.split(',') {
        let name = part.trim();
        if name.is_empty() {
            continue;
        }
        match leagues::league_by_name(name) {
            Some(league) => {
                if !out.iter().any(|known| known.id == league.id) {
                    out.push(league);
                }
            }
            None => bail!("unknown league {name:?}"),
        }
    }
    if out.is_empty() {
        bail!("select at least one league");
    }
    Ok(out)
}
