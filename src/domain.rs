//! Core entities of the match-analysis site: teams, matches, analyses and
//! standings. These are transient per-request values assembled from store
//! rows; nothing here is ever written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{localized_list, localized_str, Localized};
use crate::normalization::rating::{canonical_rating, RatingTier};
use crate::normalization::slug::encode_match_slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
}

impl std::str::FromStr for MatchStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "in_progress" => Ok(MatchStatus::InProgress),
            "finished" => Ok(MatchStatus::Finished),
            _ => Err(()),
        }
    }
}

/// Immutable reference entity from the static catalog (or a synthesized
/// placeholder when a store row carries an unknown abbreviation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub city: String,
    pub conference: Conference,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub slug: String,
}

impl Team {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}

/// One scheduled or completed game, enriched and slug-stamped at assembly
/// time. The slug is always recomputable from the team names and the UTC
/// calendar date of `scheduled_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: String,
    pub nba_game_id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub analysis: Option<MatchAnalysis>,
    pub slug: String,
}

impl Match {
    /// Canonical slug derivation; `slug` must always equal this.
    pub fn derive_slug(&self) -> String {
        encode_match_slug(
            &self.away_team.city,
            &self.away_team.name,
            &self.home_team.city,
            &self.home_team.name,
            self.scheduled_at,
        )
    }

    pub fn is_post_match(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Canonical 0-10 rating; matches without an analysis sort as 0.
    pub fn canonical_rating(&self) -> f64 {
        self.analysis
            .as_ref()
            .map(MatchAnalysis::canonical_rating)
            .unwrap_or(0.0)
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::classify(self.canonical_rating())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Pre,
    Post,
}

/// Editorial analysis attached to a match. Text fields come in `_fr`/`_en`
/// suffixed pairs with an unsuffixed legacy fallback; resolution goes
/// through [`Localized`] so the fallback chain never drifts per call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(rename = "type", default)]
    pub analysis_type: Option<AnalysisType>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment_fr: Option<String>,
    #[serde(default)]
    pub comment_en: Option<String>,
    #[serde(default)]
    pub breakdown: Option<LegacyBreakdown>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub headline_fr: Option<String>,
    #[serde(default)]
    pub headline_en: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub summary_fr: Option<String>,
    #[serde(default)]
    pub summary_en: Option<String>,
    /// Composite interest score on the 0-100 scale; wins over `rating`.
    #[serde(default)]
    pub match_interest_score: Option<f64>,
    #[serde(default)]
    pub interest_breakdown: Option<InterestBreakdown>,
    #[serde(default)]
    pub prematch_breakdown: Option<PrematchBreakdown>,
    #[serde(default)]
    pub scoring_details: Option<ScoringDetails>,
    #[serde(default)]
    pub key_takeaways: Option<Vec<String>>,
    #[serde(default)]
    pub key_takeaways_fr: Option<Vec<String>>,
    #[serde(default)]
    pub key_takeaways_en: Option<Vec<String>>,
    #[serde(default)]
    pub standout_players: Option<Vec<StandoutPlayer>>,
    #[serde(default)]
    pub game_dynamics: Option<GameDynamics>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

impl MatchAnalysis {
    pub fn canonical_rating(&self) -> f64 {
        canonical_rating(self.match_interest_score, self.rating)
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::classify(self.canonical_rating())
    }

    pub fn headline(&self) -> Localized<'_, str> {
        localized_str(&self.headline, &self.headline_fr, &self.headline_en)
    }

    pub fn summary(&self) -> Localized<'_, str> {
        localized_str(&self.summary, &self.summary_fr, &self.summary_en)
    }

    /// Legacy comment; only exists in suffixed form.
    pub fn comment(&self) -> Localized<'_, str> {
        Localized::new(None, self.comment_fr.as_deref(), self.comment_en.as_deref())
    }

    pub fn key_takeaways(&self) -> Localized<'_, [String]> {
        localized_list(
            &self.key_takeaways,
            &self.key_takeaways_fr,
            &self.key_takeaways_en,
        )
    }

    /// Breakdown shape to present: post-match only for finished games,
    /// pre-match otherwise.
    pub fn active_breakdown(&self, post_match: bool) -> Option<ActiveBreakdown<'_>> {
        if post_match {
            self.interest_breakdown.as_ref().map(ActiveBreakdown::Post)
        } else {
            self.prematch_breakdown.as_ref().map(ActiveBreakdown::Pre)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ActiveBreakdown<'a> {
    Pre(&'a PrematchBreakdown),
    Post(&'a InterestBreakdown),
}

/// Pre-match component scores. Weights sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrematchBreakdown {
    #[serde(default)]
    pub stakes: f64,
    #[serde(default)]
    pub star_power: f64,
    #[serde(default)]
    pub recent_form: f64,
    #[serde(default)]
    pub rivalry: Option<f64>,
    #[serde(default)]
    pub schedule_context: Option<f64>,
}

impl PrematchBreakdown {
    pub const MAX_STAKES: f64 = 55.0;
    pub const MAX_STAR_POWER: f64 = 15.0;
    pub const MAX_RECENT_FORM: f64 = 30.0;
}

/// Post-match component scores. Weights sum to 100, distributed
/// differently from the pre-match shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestBreakdown {
    #[serde(default)]
    pub stakes: f64,
    #[serde(default)]
    pub star_power: f64,
    #[serde(default)]
    pub performances: f64,
    #[serde(default)]
    pub clutch_factor: f64,
}

impl InterestBreakdown {
    pub const MAX_STAKES: f64 = 30.0;
    pub const MAX_STAR_POWER: f64 = 15.0;
    pub const MAX_PERFORMANCES: f64 = 20.0;
    pub const MAX_CLUTCH_FACTOR: f64 = 35.0;
}

/// First-generation breakdown kept for old analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyBreakdown {
    #[serde(default)]
    pub suspense: f64,
    #[serde(default)]
    pub intensity: f64,
    #[serde(default)]
    pub star_power: f64,
    #[serde(default)]
    pub wow_moments: f64,
    #[serde(default)]
    pub context: f64,
    #[serde(default)]
    pub key_factors: Option<Vec<String>>,
    #[serde(default)]
    pub key_factors_fr: Option<Vec<String>>,
    #[serde(default)]
    pub narrative: Option<String>,
    #[serde(default)]
    pub narrative_fr: Option<String>,
}

impl LegacyBreakdown {
    pub fn key_factors(&self) -> Localized<'_, [String]> {
        Localized::new(self.key_factors.as_deref(), self.key_factors_fr.as_deref(), None)
    }

    pub fn narrative(&self) -> Localized<'_, str> {
        Localized::new(self.narrative.as_deref(), self.narrative_fr.as_deref(), None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandoutPlayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub contribution: Option<String>,
    #[serde(default)]
    pub contribution_fr: Option<String>,
    #[serde(default)]
    pub contribution_en: Option<String>,
}

impl StandoutPlayer {
    pub fn contribution(&self) -> Localized<'_, str> {
        localized_str(
            &self.contribution,
            &self.contribution_fr,
            &self.contribution_en,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Medium,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Physicality {
    Soft,
    Moderate,
    Intense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShootingQuality {
    Cold,
    Average,
    Hot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDynamics {
    pub pace: Pace,
    pub physicality: Physicality,
    pub shooting_quality: ShootingQuality,
}

impl Pace {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Pace::Slow => "dynamics.slow",
            Pace::Medium => "dynamics.medium",
            Pace::Fast => "dynamics.fast",
        }
    }
}

impl Physicality {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Physicality::Soft => "dynamics.soft",
            Physicality::Moderate => "dynamics.moderate",
            Physicality::Intense => "dynamics.intense",
        }
    }
}

impl ShootingQuality {
    pub fn translation_key(&self) -> &'static str {
        match self {
            ShootingQuality::Cold => "dynamics.cold",
            ShootingQuality::Average => "dynamics.average",
            ShootingQuality::Hot => "dynamics.hot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Epic,
    MustWatch,
    WorthIt,
    Skip,
}

impl Recommendation {
    /// Verdict badges reuse the rating tier colors.
    pub fn tier(&self) -> RatingTier {
        match self {
            Recommendation::Epic => RatingTier::Epic,
            Recommendation::MustWatch => RatingTier::MustWatch,
            Recommendation::WorthIt => RatingTier::WorthIt,
            Recommendation::Skip => RatingTier::Skip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub recommendation: Recommendation,
    #[serde(default)]
    pub best_for: Option<String>,
    #[serde(default)]
    pub best_for_fr: Option<String>,
    #[serde(default)]
    pub best_for_en: Option<String>,
    #[serde(default)]
    pub watch_if: Option<String>,
    #[serde(default)]
    pub watch_if_fr: Option<String>,
    #[serde(default)]
    pub watch_if_en: Option<String>,
}

impl Verdict {
    pub fn best_for(&self) -> Localized<'_, str> {
        localized_str(&self.best_for, &self.best_for_fr, &self.best_for_en)
    }

    pub fn watch_if(&self) -> Localized<'_, str> {
        localized_str(&self.watch_if, &self.watch_if_fr, &self.watch_if_en)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakesCalculation {
    #[serde(default)]
    pub home_rank: Option<i32>,
    #[serde(default)]
    pub away_rank: Option<i32>,
    #[serde(default)]
    pub home_points: Option<f64>,
    #[serde(default)]
    pub away_points: Option<f64>,
    #[serde(default)]
    pub rivalry_bonus: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarPowerCalculation {
    #[serde(default)]
    pub home_points: Option<f64>,
    #[serde(default)]
    pub away_points: Option<f64>,
    #[serde(default)]
    pub tier1_matchup_bonus: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentFormCalculation {
    #[serde(default)]
    pub home_points: Option<f64>,
    #[serde(default)]
    pub away_points: Option<f64>,
    #[serde(default)]
    pub contrast_bonus: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

/// Raw arithmetic behind the pre-match component scores; display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringDetails {
    #[serde(default)]
    pub stakes_calculation: Option<StakesCalculation>,
    #[serde(default)]
    pub star_power_calculation: Option<StarPowerCalculation>,
    #[serde(default)]
    pub recent_form_calculation: Option<RecentFormCalculation>,
}

/// Per-team, per-season aggregate recomputed upstream; read-only here.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStanding {
    pub team: Team,
    pub conference: Conference,
    pub conference_rank: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_pct: f64,
    pub last_10: String,
    pub streak: String,
    pub games_behind: Option<f64>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(interest: Option<f64>, rating: Option<f64>) -> MatchAnalysis {
        serde_json::from_value(serde_json::json!({
            "id": "a1",
            "match_id": "m1",
            "match_interest_score": interest,
            "rating": rating,
        }))
        .unwrap()
    }

    #[test]
    fn breakdown_weights_sum_to_one_hundred() {
        assert_eq!(
            PrematchBreakdown::MAX_STAKES
                + PrematchBreakdown::MAX_STAR_POWER
                + PrematchBreakdown::MAX_RECENT_FORM,
            100.0
        );
        assert_eq!(
            InterestBreakdown::MAX_STAKES
                + InterestBreakdown::MAX_STAR_POWER
                + InterestBreakdown::MAX_PERFORMANCES
                + InterestBreakdown::MAX_CLUTCH_FACTOR,
            100.0
        );
    }

    #[test]
    fn analysis_rating_prefers_composite_score() {
        assert_eq!(analysis(Some(85.0), Some(6.0)).canonical_rating(), 8.5);
        assert_eq!(analysis(None, Some(6.0)).canonical_rating(), 6.0);
        assert_eq!(analysis(None, None).canonical_rating(), 0.0);
    }

    #[test]
    fn active_breakdown_follows_match_phase() {
        let a: MatchAnalysis = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "prematch_breakdown": {"stakes": 40.0, "star_power": 10.0, "recent_form": 20.0},
            "interest_breakdown": {"stakes": 25.0, "star_power": 12.0, "performances": 15.0, "clutch_factor": 30.0},
        }))
        .unwrap();
        assert!(matches!(
            a.active_breakdown(false),
            Some(ActiveBreakdown::Pre(_))
        ));
        assert!(matches!(
            a.active_breakdown(true),
            Some(ActiveBreakdown::Post(_))
        ));
    }

    #[test]
    fn analysis_deserializes_from_store_json() {
        let a: MatchAnalysis = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "match_id": "m1",
            "type": "post",
            "rating": 7.5,
            "comment_fr": "Gros match",
            "comment_en": "Great game",
            "headline": "H",
            "headline_fr": "HF",
            "key_takeaways_en": ["sharp shooting"],
            "verdict": {"recommendation": "must_watch", "watch_if_en": "you like defense"},
            "game_dynamics": {"pace": "fast", "physicality": "intense", "shooting_quality": "hot"},
        }))
        .unwrap();
        assert_eq!(a.analysis_type, Some(AnalysisType::Post));
        assert_eq!(
            a.headline().resolve(crate::i18n::Locale::Fr),
            Some("HF")
        );
        assert_eq!(a.headline().resolve(crate::i18n::Locale::En), Some("H"));
        assert_eq!(
            a.verdict.as_ref().unwrap().recommendation,
            Recommendation::MustWatch
        );
        assert_eq!(
            a.game_dynamics.as_ref().unwrap().pace.translation_key(),
            "dynamics.fast"
        );
    }

    #[test]
    fn status_parses_from_store_strings() {
        assert_eq!("scheduled".parse(), Ok(MatchStatus::Scheduled));
        assert_eq!("in_progress".parse(), Ok(MatchStatus::InProgress));
        assert_eq!("finished".parse(), Ok(MatchStatus::Finished));
        assert!("postponed".parse::<MatchStatus>().is_err());
    }
}
