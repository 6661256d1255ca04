//! Static NBA team catalog. Defined once, looked up by id, abbreviation
//! (case-insensitive) or slug, never mutated. Slugs are precomputed and
//! asserted against the canonical slugifier in tests.

use once_cell::sync::Lazy;

use crate::domain::{Conference, Team};

macro_rules! team {
    ($id:expr, $name:expr, $abbr:expr, $city:expr, $conf:expr, $logo:expr, $primary:expr, $secondary:expr, $slug:expr) => {
        Team {
            id: $id,
            name: $name.to_string(),
            abbreviation: $abbr.to_string(),
            city: $city.to_string(),
            conference: $conf,
            logo: $logo.to_string(),
            primary_color: $primary.to_string(),
            secondary_color: $secondary.to_string(),
            slug: $slug.to_string(),
        }
    };
}

pub static NBA_TEAMS: Lazy<Vec<Team>> = Lazy::new(|| {
    use Conference::{East, West};
    vec![
        // Eastern Conference - Atlantic
        team!(1, "Celtics", "BOS", "Boston", East, "celtics", "#007A33", "#BA9653", "boston-celtics"),
        team!(2, "Nets", "BKN", "Brooklyn", East, "nets", "#000000", "#FFFFFF", "brooklyn-nets"),
        team!(3, "Knicks", "NYK", "New York", East, "knicks", "#006BB6", "#F58426", "new-york-knicks"),
        team!(4, "76ers", "PHI", "Philadelphia", East, "76ers", "#006BB6", "#ED174C", "philadelphia-76ers"),
        team!(5, "Raptors", "TOR", "Toronto", East, "raptors", "#CE1141", "#000000", "toronto-raptors"),
        // Eastern Conference - Central
        team!(6, "Bulls", "CHI", "Chicago", East, "bulls", "#CE1141", "#000000", "chicago-bulls"),
        team!(7, "Cavaliers", "CLE", "Cleveland", East, "cavaliers", "#860038", "#FDBB30", "cleveland-cavaliers"),
        team!(8, "Pistons", "DET", "Detroit", East, "pistons", "#C8102E", "#1D42BA", "detroit-pistons"),
        team!(9, "Pacers", "IND", "Indiana", East, "pacers", "#002D62", "#FDBB30", "indiana-pacers"),
        team!(10, "Bucks", "MIL", "Milwaukee", East, "bucks", "#00471B", "#EEE1C6", "milwaukee-bucks"),
        // Eastern Conference - Southeast
        team!(11, "Hawks", "ATL", "Atlanta", East, "hawks", "#E03A3E", "#C1D32F", "atlanta-hawks"),
        team!(12, "Hornets", "CHA", "Charlotte", East, "hornets", "#1D1160", "#00788C", "charlotte-hornets"),
        team!(13, "Heat", "MIA", "Miami", East, "heat", "#98002E", "#F9A01B", "miami-heat"),
        team!(14, "Magic", "ORL", "Orlando", East, "magic", "#0077C0", "#C4CED4", "orlando-magic"),
        team!(15, "Wizards", "WAS", "Washington", East, "wizards", "#002B5C", "#E31837", "washington-wizards"),
        // Western Conference - Northwest
        team!(16, "Nuggets", "DEN", "Denver", West, "nuggets", "#0E2240", "#FEC524", "denver-nuggets"),
        team!(17, "Timberwolves", "MIN", "Minnesota", West, "timberwolves", "#0C2340", "#236192", "minnesota-timberwolves"),
        team!(18, "Thunder", "OKC", "Oklahoma City", West, "thunder", "#007AC1", "#EF3B24", "oklahoma-city-thunder"),
        team!(19, "Trail Blazers", "POR", "Portland", West, "blazers", "#E03A3E", "#000000", "portland-trail-blazers"),
        team!(20, "Jazz", "UTA", "Utah", West, "jazz", "#002B5C", "#00471B", "utah-jazz"),
        // Western Conference - Pacific
        team!(21, "Warriors", "GSW", "Golden State", West, "warriors", "#1D428A", "#FFC72C", "golden-state-warriors"),
        team!(22, "Clippers", "LAC", "LA", West, "clippers", "#C8102E", "#1D428A", "la-clippers"),
        team!(23, "Lakers", "LAL", "Los Angeles", West, "lakers", "#552583", "#FDB927", "los-angeles-lakers"),
        team!(24, "Suns", "PHX", "Phoenix", West, "suns", "#1D1160", "#E56020", "phoenix-suns"),
        team!(25, "Kings", "SAC", "Sacramento", West, "kings", "#5A2D81", "#63727A", "sacramento-kings"),
        // Western Conference - Southwest
        team!(26, "Mavericks", "DAL", "Dallas", West, "mavericks", "#00538C", "#002B5E", "dallas-mavericks"),
        team!(27, "Rockets", "HOU", "Houston", West, "rockets", "#CE1141", "#000000", "houston-rockets"),
        team!(28, "Grizzlies", "MEM", "Memphis", West, "grizzlies", "#5D76A9", "#12173F", "memphis-grizzlies"),
        team!(29, "Pelicans", "NOP", "New Orleans", West, "pelicans", "#0C2340", "#C8102E", "new-orleans-pelicans"),
        team!(30, "Spurs", "SAS", "San Antonio", West, "spurs", "#C4CED4", "#000000", "san-antonio-spurs"),
    ]
});

pub fn team_by_id(id: i64) -> Option<&'static Team> {
    NBA_TEAMS.iter().find(|t| t.id == id)
}

pub fn team_by_abbreviation(abbr: &str) -> Option<&'static Team> {
    NBA_TEAMS
        .iter()
        .find(|t| t.abbreviation.eq_ignore_ascii_case(abbr))
}

pub fn team_by_slug(slug: &str) -> Option<&'static Team> {
    NBA_TEAMS.iter().find(|t| t.slug == slug)
}

pub fn teams_by_conference(conference: Conference) -> Vec<&'static Team> {
    NBA_TEAMS.iter().filter(|t| t.conference == conference).collect()
}
