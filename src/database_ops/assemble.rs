//! Assembly of raw store rows into self-consistent [`Match`] values, plus
//! the list ordering and merge policies shared by every surface.

use itertools::Itertools;

use crate::catalog;
use crate::domain::{Conference, Match, MatchAnalysis, MatchStatus, Team};
use crate::database_ops::rows::{GameRow, TeamRow};

/// Resolve a store team sub-row against the static catalog by
/// abbreviation. Unknown abbreviations get a neutral placeholder so a
/// stray row never sinks a whole list.
pub fn enrich_team(row: &TeamRow) -> Team {
    if let Some(team) = catalog::team_by_abbreviation(&row.abbreviation) {
        return team.clone();
    }
    tracing::debug!(
        abbreviation = %row.abbreviation,
        "team missing from catalog, synthesizing placeholder"
    );
    Team {
        id: 0,
        name: row
            .name
            .clone()
            .unwrap_or_else(|| row.abbreviation.clone()),
        abbreviation: row.abbreviation.clone(),
        city: row.city.clone().unwrap_or_default(),
        conference: Conference::East,
        logo: String::new(),
        primary_color: "#666666".to_string(),
        secondary_color: "#999999".to_string(),
        slug: row.abbreviation.to_lowercase(),
    }
}

/// Build a [`Match`] from a raw row: enrich both teams, attach the first
/// analysis sub-row if any (extras are ignored), derive the canonical slug.
pub fn assemble_match(row: GameRow) -> Match {
    let status = row.status.parse::<MatchStatus>().unwrap_or_else(|_| {
        tracing::warn!(game_id = %row.id, status = %row.status, "unknown game status, treating as scheduled");
        MatchStatus::Scheduled
    });

    let analysis = row
        .analyses
        .into_iter()
        .next()
        .and_then(|value| match serde_json::from_value::<MatchAnalysis>(value) {
            Ok(a) => Some(a),
            Err(err) => {
                tracing::warn!(game_id = %row.id, error = %err, "dropping undecodable analysis row");
                None
            }
        });

    let mut assembled = Match {
        id: row.id,
        nba_game_id: row.nba_game_id,
        home_team: enrich_team(&row.home_team),
        away_team: enrich_team(&row.away_team),
        scheduled_at: row.scheduled_at,
        status,
        home_score: row.home_score,
        away_score: row.away_score,
        analysis,
        slug: String::new(),
    };
    assembled.slug = assembled.derive_slug();
    assembled
}

/// Canonical rating descending. The sort is stable, so applying it to the
/// store's date-descending dataset yields the team-page "best" ordering.
pub fn sort_by_rating_desc(matches: &mut [Match]) {
    matches.sort_by(|a, b| {
        b.canonical_rating()
            .partial_cmp(&a.canonical_rating())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Today-list ordering: rating descending, ties broken by tip-off time
/// ascending.
pub fn sort_by_rating_then_time(matches: &mut [Match]) {
    matches.sort_by(|a, b| {
        b.canonical_rating()
            .partial_cmp(&a.canonical_rating())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.scheduled_at.cmp(&b.scheduled_at))
    });
}

/// Merge two candidate lists (fixed away-then-home order), keep the first
/// occurrence of each id, truncate to the display count. Join completion
/// order never matters because the concatenation order is fixed.
pub fn merge_dedupe_truncate(away: Vec<Match>, home: Vec<Match>, limit: usize) -> Vec<Match> {
    away.into_iter()
        .chain(home)
        .unique_by(|m| m.id.clone())
        .take(limit)
        .collect()
}
