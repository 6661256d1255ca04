use serde::Serialize;

use crate::i18n::Locale;

/// Scale factor between the composite interest score (0-100) and the
/// canonical rating (0-10).
const INTEREST_SCORE_SCALE: f64 = 10.0;

/// Collapse the two stored rating scales into the single canonical 0-10
/// value used for all sorting and display.
///
/// Precedence: a present composite `match_interest_score` always wins over
/// the legacy `rating`, even when it is zero. Presence is `Option`
/// presence, not truthiness.
pub fn canonical_rating(match_interest_score: Option<f64>, legacy_rating: Option<f64>) -> f64 {
    match (match_interest_score, legacy_rating) {
        (Some(score), _) => score / INTEREST_SCORE_SCALE,
        (None, Some(rating)) => rating,
        (None, None) => 0.0,
    }
}

/// Discrete qualitative tier of a canonical rating.
///
/// The threshold table here is the single source of truth for rating
/// presentation (badges, bars, sort grouping). Bounds are inclusive:
/// exactly 8.0 is epic, exactly 5.0 is worth-it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Skip,
    WorthIt,
    MustWatch,
    Epic,
}

impl RatingTier {
    pub fn classify(rating: f64) -> Self {
        if rating >= 8.0 {
            RatingTier::Epic
        } else if rating >= 7.0 {
            RatingTier::MustWatch
        } else if rating >= 5.0 {
            RatingTier::WorthIt
        } else {
            RatingTier::Skip
        }
    }

    /// Fixed display color (hex), identical in both color schemes.
    pub fn color(&self) -> &'static str {
        match self {
            RatingTier::Epic => "#8B5CF6",
            RatingTier::MustWatch => "#22C55E",
            RatingTier::WorthIt => "#EAB308",
            RatingTier::Skip => "#EF4444",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (RatingTier::Epic, Locale::Fr) => "Épique",
            (RatingTier::Epic, Locale::En) => "Epic",
            (RatingTier::MustWatch, _) => "Must Watch",
            (RatingTier::WorthIt, _) => "Worth It",
            (RatingTier::Skip, Locale::Fr) => "À éviter",
            (RatingTier::Skip, Locale::En) => "Skip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_score_wins_over_legacy_rating() {
        assert_eq!(canonical_rating(Some(85.0), Some(6.0)), 8.5);
    }

    #[test]
    fn zero_composite_score_still_wins() {
        assert_eq!(canonical_rating(Some(0.0), Some(6.0)), 0.0);
    }

    #[test]
    fn legacy_rating_passes_through() {
        assert_eq!(canonical_rating(None, Some(6.0)), 6.0);
    }

    #[test]
    fn absent_ratings_default_to_zero() {
        assert_eq!(canonical_rating(None, None), 0.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(RatingTier::classify(8.0), RatingTier::Epic);
        assert_eq!(RatingTier::classify(7.0), RatingTier::MustWatch);
        assert_eq!(RatingTier::classify(5.0), RatingTier::WorthIt);
        assert_eq!(RatingTier::classify(7.999999), RatingTier::MustWatch);
        assert_eq!(RatingTier::classify(4.999), RatingTier::Skip);
    }

    #[test]
    fn classification_is_monotonic() {
        let samples = [0.0, 2.5, 4.999, 5.0, 6.9, 7.0, 7.5, 8.0, 9.9, 10.0];
        for pair in samples.windows(2) {
            assert!(
                RatingTier::classify(pair[0]) <= RatingTier::classify(pair[1]),
                "tier order broken between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn tier_colors_are_stable() {
        assert_eq!(RatingTier::Epic.color(), "#8B5CF6");
        assert_eq!(RatingTier::Skip.color(), "#EF4444");
    }

    #[test]
    fn labels_follow_locale() {
        assert_eq!(RatingTier::Epic.label(Locale::Fr), "Épique");
        assert_eq!(RatingTier::Epic.label(Locale::En), "Epic");
        assert_eq!(RatingTier::Skip.label(Locale::Fr), "À éviter");
        assert_eq!(RatingTier::MustWatch.label(Locale::Fr), "Must Watch");
    }
}
