/// One competition in the upstream provider's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub name: &'static str,
    pub id: u32,
}

/// The fixed catalog the operator selects from.
pub const LEAGUES: &[League] = &[
    League { name: "Premier League (ENG)", id: 39 },
    League { name: "La Liga (ESP)", id: 140 },
    League { name: "Serie A (ITA)", id: 135 },
    League { name: "Bundesliga (GER)", id: 78 },
    League { name: "Ligue 1 (FRA)", id: 61 },
    League { name: "Eredivisie (NED)", id: 88 },
    League { name: "Primeira Liga (POR)", id: 94 },
    League { name: "Turkish Super Lig (TUR)", id: 203 },
    League { name: "MLS (USA)", id: 253 },
    League { name: "Brasileirão Serie A (BRA)", id: 71 },
    League { name: "Argentine Primera (ARG)", id: 128 },
    League { name: "Saudi Pro League (KSA)", id: 307 },
    League { name: "A-League (AUS)", id: 188 },
];

/// Resolves a display name to a catalog entry. The country-suffix-free form
/// ("Serie A" for "Serie A (ITA)") also resolves.
pub fn league_by_name(name: &str) -> Option<&'static League> {
    let wanted = name.trim();
    LEAGUES.iter().find(|league| {
        league.name.eq_ignore_ascii_case(wanted)
            || short_name(league.name).eq_ignore_ascii_case(wanted)
    })
}

fn short_name(full: &str) -> &str {
    full.split(" (").next().unwrap_or(full)
}
