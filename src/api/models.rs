// API response models (DTOs). Localized text is resolved here, once per
// field, against the requested locale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::domain::{
    ActiveBreakdown, AnalysisType, GameDynamics, Match, MatchAnalysis, MatchStatus,
    StandoutPlayer, Team, Verdict,
};
use crate::i18n::{translations, Locale};
use crate::normalization::rating::RatingTier;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(Meta::now()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            meta: Some(Meta::now()),
        }
    }
}

/// Metadata included in all API responses
#[derive(Debug, Serialize)]
pub struct Meta {
    pub timestamp: DateTime<Utc>,
    pub request_id: String,
    pub version: String,
}

impl Meta {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now(),
            request_id: uuid::Uuid::new_v4().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub uptime_seconds: u64,
}

/// Common `?locale=fr|en` query parameter; French is the site default.
#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Locale,
}

/// Team history filter: the store's date-descending order, or the same
/// dataset re-sorted by canonical rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    #[default]
    Recent,
    Best,
}

#[derive(Debug, Deserialize)]
pub struct TeamMatchesQuery {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub filter: HistoryFilter,
    #[serde(default = "default_history_limit")]
    pub limit: i64,
}

fn default_history_limit() -> i64 {
    20
}

/// Canonical rating plus its presentation attributes, all derived from the
/// single threshold table.
#[derive(Debug, Serialize)]
pub struct RatingDto {
    pub value: f64,
    pub tier: RatingTier,
    pub color: &'static str,
    pub label: &'static str,
}

impl RatingDto {
    pub fn new(value: f64, locale: Locale) -> Self {
        let tier = RatingTier::classify(value);
        Self {
            value,
            tier,
            color: tier.color(),
            label: tier.label(locale),
        }
    }
}

/// One component of a breakdown, ready for a score bar.
#[derive(Debug, Serialize)]
pub struct ScoreBarDto {
    pub label: String,
    pub value: f64,
    pub max_value: f64,
}

#[derive(Debug, Serialize)]
pub struct StandoutPlayerDto {
    pub name: String,
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<String>,
}

impl StandoutPlayerDto {
    fn from_domain(player: &StandoutPlayer, locale: Locale) -> Self {
        Self {
            name: player.name.clone(),
            team: player.team.clone(),
            contribution: player.contribution().resolve(locale).map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameDynamicsDto {
    pub pace: String,
    pub pace_label: String,
    pub physicality: String,
    pub physicality_label: String,
    pub shooting_quality: String,
    pub shooting_label: String,
}

impl GameDynamicsDto {
    fn from_domain(dynamics: &GameDynamics, locale: Locale) -> Self {
        Self {
            pace: enum_str(&dynamics.pace),
            pace_label: translations::translate(dynamics.pace.translation_key(), locale),
            physicality: enum_str(&dynamics.physicality),
            physicality_label: translations::translate(
                dynamics.physicality.translation_key(),
                locale,
            ),
            shooting_quality: enum_str(&dynamics.shooting_quality),
            shooting_label: translations::translate(
                dynamics.shooting_quality.translation_key(),
                locale,
            ),
        }
    }
}

fn enum_str<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct VerdictDto {
    pub recommendation: String,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_if: Option<String>,
}

impl VerdictDto {
    fn from_domain(verdict: &Verdict, locale: Locale) -> Self {
        Self {
            recommendation: enum_str(&verdict.recommendation),
            color: verdict.recommendation.tier().color(),
            best_for: verdict.best_for().resolve(locale).map(str::to_string),
            watch_if: verdict.watch_if().resolve(locale).map(str::to_string),
        }
    }
}

/// Fully resolved analysis payload for the detail page.
#[derive(Debug, Serialize)]
pub struct AnalysisDto {
    pub rating: RatingDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<Vec<String>>,
    pub breakdown_title: String,
    pub breakdown: Vec<ScoreBarDto>,
    /// First-generation analyses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_factors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_details: Option<crate::domain::ScoringDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub standout_players: Vec<StandoutPlayerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_dynamics: Option<GameDynamicsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AnalysisDto {
    pub fn from_domain(analysis: &MatchAnalysis, post_match: bool, locale: Locale) -> Self {
        // Summary falls back through the legacy comment when the newer
        // fields are missing entirely.
        let summary = analysis
            .summary()
            .resolve(locale)
            .or_else(|| analysis.comment().resolve(locale))
            .map(str::to_string);

        Self {
            rating: RatingDto::new(analysis.canonical_rating(), locale),
            analysis_type: analysis.analysis_type,
            headline: analysis.headline().resolve(locale).map(str::to_string),
            summary,
            key_takeaways: analysis
                .key_takeaways()
                .resolve(locale)
                .map(<[String]>::to_vec),
            breakdown_title: translations::translate("analysis.breakdown", locale),
            breakdown: breakdown_bars(analysis, post_match, locale),
            key_factors: analysis
                .breakdown
                .as_ref()
                .and_then(|b| b.key_factors().resolve(locale))
                .map(<[String]>::to_vec),
            narrative: analysis
                .breakdown
                .as_ref()
                .and_then(|b| b.narrative().resolve(locale))
                .map(str::to_string),
            scoring_details: analysis.scoring_details.clone(),
            standout_players: analysis
                .standout_players
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|p| StandoutPlayerDto::from_domain(p, locale))
                .collect(),
            game_dynamics: analysis
                .game_dynamics
                .as_ref()
                .map(|d| GameDynamicsDto::from_domain(d, locale)),
            verdict: analysis
                .verdict
                .as_ref()
                .map(|v| VerdictDto::from_domain(v, locale)),
            created_at: analysis.created_at,
        }
    }
}

fn breakdown_bars(analysis: &MatchAnalysis, post_match: bool, locale: Locale) -> Vec<ScoreBarDto> {
    use crate::domain::{InterestBreakdown, PrematchBreakdown};

    let bar = |key: &str, value: f64, max_value: f64| ScoreBarDto {
        label: translations::translate(key, locale),
        value,
        max_value,
    };

    match analysis.active_breakdown(post_match) {
        Some(ActiveBreakdown::Pre(pre)) => vec![
            bar("analysis.stakes", pre.stakes, PrematchBreakdown::MAX_STAKES),
            bar(
                "analysis.starPower",
                pre.star_power,
                PrematchBreakdown::MAX_STAR_POWER,
            ),
            bar(
                "analysis.recentForm",
                pre.recent_form,
                PrematchBreakdown::MAX_RECENT_FORM,
            ),
        ],
        Some(ActiveBreakdown::Post(post)) => vec![
            bar("analysis.stakes", post.stakes, InterestBreakdown::MAX_STAKES),
            bar(
                "analysis.starPower",
                post.star_power,
                InterestBreakdown::MAX_STAR_POWER,
            ),
            bar(
                "analysis.performances",
                post.performances,
                InterestBreakdown::MAX_PERFORMANCES,
            ),
            bar(
                "analysis.clutch",
                post.clutch_factor,
                InterestBreakdown::MAX_CLUTCH_FACTOR,
            ),
        ],
        None => Vec::new(),
    }
}

/// Card-sized match payload for lists.
#[derive(Debug, Serialize)]
pub struct MatchSummaryDto {
    pub id: String,
    pub slug: String,
    pub home_team: Team,
    pub away_team: Team,
    pub scheduled_at: DateTime<Utc>,
    pub scheduled_label: String,
    pub scheduled_label_short: String,
    pub tip_off_time: String,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

impl MatchSummaryDto {
    pub fn from_match(m: &Match, locale: Locale) -> Self {
        Self {
            id: m.id.clone(),
            slug: m.slug.clone(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            scheduled_at: m.scheduled_at,
            scheduled_label: dates::format_match_date(m.scheduled_at, locale),
            scheduled_label_short: dates::format_match_date_short(m.scheduled_at, locale),
            tip_off_time: dates::format_reference_time(m.scheduled_at),
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
            rating: m
                .analysis
                .as_ref()
                .map(|a| RatingDto::new(a.canonical_rating(), locale)),
            headline: m
                .analysis
                .as_ref()
                .and_then(|a| a.headline().resolve(locale).map(str::to_string)),
        }
    }
}

/// Full match page payload: the match, its resolved analysis, the merged
/// related/upcoming rails and the structured-data blob.
#[derive(Debug, Serialize)]
pub struct MatchDetailDto {
    #[serde(flatten)]
    pub summary: MatchSummaryDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisDto>,
    pub related: Vec<MatchSummaryDto>,
    pub upcoming: Vec<MatchSummaryDto>,
    pub json_ld: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_ops::assemble::assemble_match;
    use crate::database_ops::rows::{GameRow, TeamRow};
    use chrono::TimeZone;

    fn sample_match(status: &str, analysis: serde_json::Value) -> Match {
        assemble_match(GameRow {
            id: "g1".to_string(),
            nba_game_id: "001".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2024, 1, 16, 0, 30, 0).unwrap(),
            status: status.to_string(),
            home_score: Some(120),
            away_score: Some(115),
            home_team: TeamRow {
                abbreviation: "BOS".into(),
                name: None,
                city: None,
            },
            away_team: TeamRow {
                abbreviation: "LAL".into(),
                name: None,
                city: None,
            },
            analyses: vec![analysis],
        })
    }

    #[test]
    fn summary_resolves_headline_per_locale() {
        let m = sample_match(
            "finished",
            serde_json::json!({
                "id": "a1",
                "match_interest_score": 85.0,
                "headline": "Duel", "headline_fr": "Duel au sommet",
            }),
        );
        let fr = MatchSummaryDto::from_match(&m, Locale::Fr);
        let en = MatchSummaryDto::from_match(&m, Locale::En);
        assert_eq!(fr.headline.as_deref(), Some("Duel au sommet"));
        assert_eq!(en.headline.as_deref(), Some("Duel"));
        let rating = fr.rating.unwrap();
        assert_eq!(rating.value, 8.5);
        assert_eq!(rating.tier, RatingTier::Epic);
        assert_eq!(rating.label, "Épique");
    }

    #[test]
    fn analysis_dto_picks_the_breakdown_for_the_phase() {
        let analysis_json = serde_json::json!({
            "id": "a1",
            "rating": 7.0,
            "prematch_breakdown": {"stakes": 40.0, "star_power": 10.0, "recent_form": 20.0},
            "interest_breakdown": {"stakes": 25.0, "star_power": 12.0, "performances": 15.0, "clutch_factor": 30.0},
        });
        let m = sample_match("finished", analysis_json);
        let analysis = m.analysis.as_ref().unwrap();

        let post = AnalysisDto::from_domain(analysis, true, Locale::En);
        assert_eq!(post.breakdown.len(), 4);
        assert_eq!(post.breakdown[3].max_value, 35.0);

        let pre = AnalysisDto::from_domain(analysis, false, Locale::En);
        assert_eq!(pre.breakdown.len(), 3);
        assert_eq!(pre.breakdown[0].max_value, 55.0);
    }

    #[test]
    fn summary_falls_back_to_legacy_comment() {
        let m = sample_match(
            "finished",
            serde_json::json!({
                "id": "a1",
                "rating": 6.0,
                "comment_fr": "Analyse en français",
                "comment_en": "English writeup",
            }),
        );
        let analysis = m.analysis.as_ref().unwrap();
        let fr = AnalysisDto::from_domain(analysis, true, Locale::Fr);
        let en = AnalysisDto::from_domain(analysis, true, Locale::En);
        assert_eq!(fr.summary.as_deref(), Some("Analyse en français"));
        assert_eq!(en.summary.as_deref(), Some("English writeup"));
    }

    #[test]
    fn legacy_key_factors_resolve_with_base_fallback() {
        let m = sample_match(
            "finished",
            serde_json::json!({
                "id": "a1",
                "rating": 6.0,
                "breakdown": {
                    "suspense": 8.0,
                    "key_factors": ["Turnovers"],
                    "key_factors_fr": ["Pertes de balle"],
                    "narrative": "Came down to the wire",
                },
            }),
        );
        let analysis = m.analysis.as_ref().unwrap();
        let fr = AnalysisDto::from_domain(analysis, true, Locale::Fr);
        let en = AnalysisDto::from_domain(analysis, true, Locale::En);
        assert_eq!(fr.key_factors.as_deref(), Some(&["Pertes de balle".to_string()][..]));
        // No `_en` variant exists for legacy fields: english falls back to base.
        assert_eq!(en.key_factors.as_deref(), Some(&["Turnovers".to_string()][..]));
        assert_eq!(en.narrative.as_deref(), Some("Came down to the wire"));
    }

    #[test]
    fn dynamics_labels_are_translated() {
        let m = sample_match(
            "finished",
            serde_json::json!({
                "id": "a1",
                "rating": 6.0,
                "game_dynamics": {"pace": "fast", "physicality": "intense", "shooting_quality": "hot"},
            }),
        );
        let analysis = m.analysis.as_ref().unwrap();
        let fr = AnalysisDto::from_domain(analysis, true, Locale::Fr);
        let dynamics = fr.game_dynamics.unwrap();
        assert_eq!(dynamics.pace, "fast");
        assert_eq!(dynamics.pace_label, "Rapide");
    }
}
