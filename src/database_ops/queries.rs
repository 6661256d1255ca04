//! Read-only query layer over the managed store. Every function fetches
//! raw rows, runs them through assembly and applies the ordering policy of
//! the surface it serves. Nothing here ever writes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;

use crate::database_ops::assemble::{
    assemble_match, enrich_team, sort_by_rating_desc, sort_by_rating_then_time,
};
use crate::database_ops::db::Db;
use crate::database_ops::rows::{GameRow, StandingRow};
use crate::dates;
use crate::domain::{Conference, Match, TeamStanding};
use crate::normalization::slug::parse_match_slug;

/// Shared select list: one game row, both team sub-rows, analyses
/// aggregated to a JSON array (creation order, so "first" is stable).
const GAME_SELECT: &str = r#"
SELECT g.id::text AS id,
       g.nba_game_id,
       g.scheduled_at,
       g.status,
       g.home_score,
       g.away_score,
       ht.abbreviation AS home_abbreviation,
       ht.name AS home_name,
       ht.city AS home_city,
       aw.abbreviation AS away_abbreviation,
       aw.name AS away_name,
       aw.city AS away_city,
       COALESCE(
           jsonb_agg(to_jsonb(a) ORDER BY a.created_at) FILTER (WHERE a.id IS NOT NULL),
           '[]'::jsonb
       ) AS analyses
  FROM games g
  JOIN teams ht ON ht.id = g.home_team_id
  JOIN teams aw ON aw.id = g.away_team_id
  LEFT JOIN game_analyses a ON a.match_id = g.id
"#;

const GAME_GROUP: &str = " GROUP BY g.id, ht.id, aw.id";

fn collect_games(rows: &[PgRow]) -> Result<Vec<GameRow>> {
    rows.iter()
        .map(GameRow::from_pg_row)
        .collect::<sqlx::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Matches of the reference timezone's previous calendar day that carry an
/// analysis, best rated first.
pub async fn yesterday_matches(db: &Db, now: DateTime<Utc>) -> Result<Vec<Match>> {
    let (start, end) = dates::yesterday_range(now);
    let sql = format!(
        "{GAME_SELECT} WHERE g.scheduled_at >= $1 AND g.scheduled_at < $2 \
         {GAME_GROUP} HAVING COUNT(a.id) > 0 ORDER BY g.scheduled_at ASC"
    );
    let rows = sqlx::query(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(&db.pool)
        .await?;
    let mut matches: Vec<Match> = collect_games(&rows)?
        .into_iter()
        .map(assemble_match)
        .filter(|m| m.analysis.is_some())
        .collect();
    sort_by_rating_desc(&mut matches);
    Ok(matches)
}

/// Matches of the reference timezone's current calendar day, best rated
/// first, ties by tip-off time.
pub async fn today_matches(db: &Db, now: DateTime<Utc>) -> Result<Vec<Match>> {
    let (start, end) = dates::today_range(now);
    let sql = format!(
        "{GAME_SELECT} WHERE g.scheduled_at >= $1 AND g.scheduled_at < $2 \
         {GAME_GROUP} ORDER BY g.scheduled_at ASC"
    );
    let rows = sqlx::query(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(&db.pool)
        .await?;
    let mut matches: Vec<Match> = collect_games(&rows)?.into_iter().map(assemble_match).collect();
    sort_by_rating_then_time(&mut matches);
    Ok(matches)
}

/// Resolve a match by its canonical slug.
///
/// The decoded segments never resolve a team directly: the date narrows
/// the candidate set (slug dates are UTC), then every candidate is
/// re-encoded and compared against the requested slug. A malformed slug is
/// indistinguishable from an unknown one to the caller.
pub async fn match_by_slug(db: &Db, slug: &str) -> Result<Option<Match>> {
    let parsed = match parse_match_slug(slug) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(slug, error = %err, "rejecting malformed match slug");
            return Ok(None);
        }
    };

    let (start, end) = dates::utc_day_range(parsed.date);
    let sql = format!(
        "{GAME_SELECT} WHERE g.scheduled_at >= $1 AND g.scheduled_at < $2 \
         {GAME_GROUP} ORDER BY g.scheduled_at ASC"
    );
    let rows = sqlx::query(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(&db.pool)
        .await?;

    Ok(collect_games(&rows)?
        .into_iter()
        .map(assemble_match)
        .find(|candidate| candidate.slug == slug))
}

/// Store id of a team, by case-insensitive abbreviation.
pub async fn team_id_by_abbreviation(db: &Db, abbr: &str) -> Result<Option<String>> {
    let id: Option<String> = sqlx::query_scalar(
        "SELECT id::text FROM teams WHERE upper(abbreviation) = upper($1) LIMIT 1",
    )
    .bind(abbr)
    .fetch_optional(&db.pool)
    .await?;
    Ok(id)
}

/// Analyzed match history of one team, most recent first (the store's
/// default order; the "best" presentation re-sorts the same dataset).
pub async fn team_matches(db: &Db, team_abbr: &str, limit: i64) -> Result<Vec<Match>> {
    let Some(team_id) = team_id_by_abbreviation(db, team_abbr).await? else {
        tracing::warn!(abbreviation = %team_abbr, "team not found in store");
        return Ok(Vec::new());
    };
    let sql = format!(
        "{GAME_SELECT} WHERE (g.home_team_id = $1::uuid OR g.away_team_id = $1::uuid) \
         {GAME_GROUP} HAVING COUNT(a.id) > 0 ORDER BY g.scheduled_at DESC LIMIT $2"
    );
    let rows = sqlx::query(&sql)
        .bind(team_id)
        .bind(limit)
        .fetch_all(&db.pool)
        .await?;
    Ok(collect_games(&rows)?.into_iter().map(assemble_match).collect())
}

/// Finished, analyzed matches involving a team, excluding the match being
/// viewed. Feeds the related-matches rail.
pub async fn related_matches(
    db: &Db,
    team_abbr: &str,
    current_match_id: &str,
    limit: i64,
) -> Result<Vec<Match>> {
    let Some(team_id) = team_id_by_abbreviation(db, team_abbr).await? else {
        return Ok(Vec::new());
    };
    let sql = format!(
        "{GAME_SELECT} WHERE (g.home_team_id = $1::uuid OR g.away_team_id = $1::uuid) \
         AND g.id <> $2::uuid AND g.status = 'finished' \
         {GAME_GROUP} HAVING COUNT(a.id) > 0 ORDER BY g.scheduled_at DESC LIMIT $3"
    );
    let rows = sqlx::query(&sql)
        .bind(team_id)
        .bind(current_match_id.to_string())
        .bind(limit)
        .fetch_all(&db.pool)
        .await?;
    Ok(collect_games(&rows)?.into_iter().map(assemble_match).collect())
}

/// Next scheduled matches involving a team.
pub async fn upcoming_matches(
    db: &Db,
    team_abbr: &str,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<Match>> {
    let Some(team_id) = team_id_by_abbreviation(db, team_abbr).await? else {
        return Ok(Vec::new());
    };
    let sql = format!(
        "{GAME_SELECT} WHERE (g.home_team_id = $1::uuid OR g.away_team_id = $1::uuid) \
         AND g.status = 'scheduled' AND g.scheduled_at >= $2 \
         {GAME_GROUP} ORDER BY g.scheduled_at ASC LIMIT $3"
    );
    let rows = sqlx::query(&sql)
        .bind(team_id)
        .bind(now)
        .bind(limit)
        .fetch_all(&db.pool)
        .await?;
    Ok(collect_games(&rows)?.into_iter().map(assemble_match).collect())
}

/// Every match carrying an analysis, most recent first. Drives the
/// sitemap enumeration.
pub async fn all_analyzed_matches(db: &Db) -> Result<Vec<Match>> {
    let sql = format!(
        "{GAME_SELECT} {GAME_GROUP} HAVING COUNT(a.id) > 0 ORDER BY g.scheduled_at DESC"
    );
    let rows = sqlx::query(&sql).fetch_all(&db.pool).await?;
    Ok(collect_games(&rows)?.into_iter().map(assemble_match).collect())
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Standings {
    pub east: Vec<TeamStanding>,
    pub west: Vec<TeamStanding>,
}

/// Season standings partitioned by conference (each team lands in exactly
/// one side, decided by the enriched catalog record).
pub async fn standings(db: &Db, season: i32) -> Result<Standings> {
    let rows = sqlx::query(
        r#"
        SELECT s.conference_rank,
               s.wins,
               s.losses,
               s.win_pct::float8 AS win_pct,
               s.last_10,
               s.streak,
               s.games_behind::float8 AS games_behind,
               s.home_record,
               s.away_record,
               t.abbreviation,
               t.name,
               t.city
          FROM standings s
          JOIN teams t ON t.id = s.team_id
         WHERE s.season = $1
         ORDER BY s.conference_rank ASC
        "#,
    )
    .bind(season)
    .fetch_all(&db.pool)
    .await?;

    let mut out = Standings::default();
    for row in &rows {
        let raw = StandingRow::from_pg_row(row)?;
        let team = enrich_team(&raw.team);
        let conference = team.conference;
        let standing = TeamStanding {
            team,
            conference,
            conference_rank: raw.conference_rank,
            wins: raw.wins,
            losses: raw.losses,
            win_pct: raw.win_pct,
            last_10: raw.last_10.unwrap_or_default(),
            streak: raw.streak.unwrap_or_default(),
            games_behind: raw.games_behind,
            home_record: raw.home_record,
            away_record: raw.away_record,
        };
        match conference {
            Conference::East => out.east.push(standing),
            Conference::West => out.west.push(standing),
        }
    }
    Ok(out)
}
