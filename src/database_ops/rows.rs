//! Raw row shapes as they come back from the store, before enrichment.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Nested team sub-record of a game row. Only the identifying fields are
/// fetched; everything else is enriched from the static catalog.
#[derive(Debug, Clone)]
pub struct TeamRow {
    pub abbreviation: String,
    pub name: Option<String>,
    pub city: Option<String>,
}

/// One game row with its nested team sub-rows and the JSON-aggregated
/// analysis sub-rows (zero or many; assembly keeps the first).
#[derive(Debug, Clone)]
pub struct GameRow {
    pub id: String,
    pub nba_game_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_team: TeamRow,
    pub away_team: TeamRow,
    pub analyses: Vec<serde_json::Value>,
}

impl GameRow {
    pub fn from_pg_row(row: &PgRow) -> sqlx::Result<Self> {
        let analyses: serde_json::Value = row.try_get("analyses")?;
        let analyses = match analyses {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Null => Vec::new(),
            other => vec![other],
        };
        Ok(Self {
            id: row.try_get("id")?,
            nba_game_id: row.try_get("nba_game_id")?,
            scheduled_at: row.try_get("scheduled_at")?,
            status: row.try_get("status")?,
            home_score: row.try_get("home_score")?,
            away_score: row.try_get("away_score")?,
            home_team: TeamRow {
                abbreviation: row.try_get("home_abbreviation")?,
                name: row.try_get("home_name")?,
                city: row.try_get("home_city")?,
            },
            away_team: TeamRow {
                abbreviation: row.try_get("away_abbreviation")?,
                name: row.try_get("away_name")?,
                city: row.try_get("away_city")?,
            },
            analyses,
        })
    }
}

/// One standings row with its nested team sub-record.
#[derive(Debug, Clone)]
pub struct StandingRow {
    pub conference_rank: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_pct: f64,
    pub last_10: Option<String>,
    pub streak: Option<String>,
    pub games_behind: Option<f64>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
    pub team: TeamRow,
}

impl StandingRow {
    pub fn from_pg_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            conference_rank: row.try_get("conference_rank")?,
            wins: row.try_get("wins")?,
            losses: row.try_get("losses")?,
            win_pct: row.try_get("win_pct")?,
            last_10: row.try_get("last_10")?,
            streak: row.try_get("streak")?,
            games_behind: row.try_get("games_behind")?,
            home_record: row.try_get("home_record")?,
            away_record: row.try_get("away_record")?,
            team: TeamRow {
                abbreviation: row.try_get("abbreviation")?,
                name: row.try_get("name")?,
                city: row.try_get("city")?,
            },
        })
    }
}
