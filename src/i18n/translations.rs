//! Static UI string catalog with dot-notation keys.
//!
//! The rendering layer owns the full message files; this catalog only
//! carries the strings the API itself emits (score-bar labels, game
//! dynamics labels, site-level metadata).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::i18n::Locale;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<&'static str, &'static str>;

static EN: Lazy<TranslationMap> = Lazy::new(|| {
    HashMap::from([
        ("site.name", "Courtside"),
        (
            "site.description",
            "Spoiler-free NBA guide - find out which games are worth watching",
        ),
        ("analysis.breakdown", "Score breakdown"),
        ("analysis.stakes", "Stakes"),
        ("analysis.starPower", "Star power"),
        ("analysis.recentForm", "Recent form"),
        ("analysis.performances", "Performances"),
        ("analysis.clutch", "Clutch factor"),
        ("dynamics.pace", "Pace"),
        ("dynamics.physicality", "Physicality"),
        ("dynamics.shooting", "Shooting"),
        ("dynamics.slow", "Slow"),
        ("dynamics.medium", "Medium"),
        ("dynamics.fast", "Fast"),
        ("dynamics.soft", "Soft"),
        ("dynamics.moderate", "Moderate"),
        ("dynamics.intense", "Intense"),
        ("dynamics.cold", "Cold"),
        ("dynamics.average", "Average"),
        ("dynamics.hot", "Hot"),
        ("match.relatedMatches", "Related games"),
        ("match.upcomingMatches", "Upcoming games"),
    ])
});

static FR: Lazy<TranslationMap> = Lazy::new(|| {
    HashMap::from([
        ("site.name", "Courtside"),
        (
            "site.description",
            "Guide NBA sans spoilers - découvrez quels matchs valent le coup",
        ),
        ("analysis.breakdown", "Détail de la note"),
        ("analysis.stakes", "Enjeux"),
        ("analysis.starPower", "Star power"),
        ("analysis.recentForm", "Forme récente"),
        ("analysis.performances", "Performances"),
        ("analysis.clutch", "Facteur clutch"),
        ("dynamics.pace", "Rythme"),
        ("dynamics.physicality", "Intensité physique"),
        ("dynamics.shooting", "Adresse"),
        ("dynamics.slow", "Lent"),
        ("dynamics.medium", "Moyen"),
        ("dynamics.fast", "Rapide"),
        ("dynamics.soft", "Tendre"),
        ("dynamics.moderate", "Modérée"),
        ("dynamics.intense", "Intense"),
        ("dynamics.cold", "Froide"),
        ("dynamics.average", "Moyenne"),
        ("dynamics.hot", "Chaude"),
        ("match.relatedMatches", "Matchs liés"),
        ("match.upcomingMatches", "Prochains matchs"),
    ])
});

fn catalog(locale: Locale) -> &'static TranslationMap {
    match locale {
        Locale::Fr => &FR,
        Locale::En => &EN,
    }
}

/// Look up a key in the requested locale, falling back to English, then to
/// the key itself so missing strings stay discoverable instead of blank.
pub fn translate(key: &str, locale: Locale) -> String {
    if let Some(s) = catalog(locale).get(key) {
        return (*s).to_string();
    }
    if let Some(s) = EN.get(key) {
        tracing::debug!(key, locale = %locale, "translation missing, using english fallback");
        return (*s).to_string();
    }
    tracing::debug!(key, "missing translation key, returning key as-is");
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_localized_string() {
        assert_eq!(translate("analysis.stakes", Locale::Fr), "Enjeux");
        assert_eq!(translate("analysis.stakes", Locale::En), "Stakes");
    }

    #[test]
    fn falls_back_to_english_catalog() {
        // Every key present in EN must resolve for FR too.
        for key in EN.keys() {
            assert!(!translate(key, Locale::Fr).is_empty(), "missing fr for {key}");
        }
    }

    #[test]
    fn unknown_key_is_returned_as_is() {
        assert_eq!(translate("nope.nothing", Locale::Fr), "nope.nothing");
    }

    #[test]
    fn both_catalogs_share_the_same_key_set() {
        let mut en_keys: Vec<_> = EN.keys().collect();
        let mut fr_keys: Vec<_> = FR.keys().collect();
        en_keys.sort();
        fr_keys.sort();
        assert_eq!(en_keys, fr_keys);
    }
}
