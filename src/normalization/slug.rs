use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Literal separator between the away and home segments of a match slug.
const VS_SEPARATOR: &str = "-vs-";

/// Fixed width of the trailing `YYYY-MM-DD` date suffix.
const DATE_WIDTH: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugParseError {
    /// The `-vs-` separator is missing or appears more than once.
    #[error("match slug must contain exactly one \"-vs-\" separator")]
    BadSeparator,
    /// No parseable `YYYY-MM-DD` suffix after the home segment.
    #[error("match slug must end with a YYYY-MM-DD date")]
    BadDate,
}

/// Canonicalize free text into a URL-safe slug.
///
/// Steps:
/// - lowercase
/// - NFD-decompose and drop combining marks (accent stripping)
/// - collapse every maximal run of non-`[a-z0-9]` into a single hyphen
/// - trim leading/trailing hyphens
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut pending_hyphen = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

// Unicode combining marks live in the canonical-decomposition output as
// U+0300..U+036F plus the extended combining blocks.
fn is_combining_mark(c: char) -> bool {
    matches!(u32::from(c),
        0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F)
}

/// Canonical encoding of a match identity:
/// `{away-city-name}-vs-{home-city-name}-{YYYY-MM-DD}`.
///
/// The date is the calendar date of the scheduled instant rendered in UTC.
/// This function is the authoritative definition of a match slug; lookups
/// re-encode candidates and compare against the requested slug.
pub fn encode_match_slug(
    away_city: &str,
    away_name: &str,
    home_city: &str,
    home_name: &str,
    scheduled_at: DateTime<Utc>,
) -> String {
    let away = slugify(&format!("{away_city}-{away_name}"));
    let home = slugify(&format!("{home_city}-{home_name}"));
    let date = scheduled_at.date_naive().format("%Y-%m-%d");
    format!("{away}{VS_SEPARATOR}{home}-{date}")
}

/// Team slug as used for team pages: slugified "city name".
pub fn encode_team_slug(city: &str, name: &str) -> String {
    slugify(&format!("{city}-{name}"))
}

/// Segment boundaries recovered from a match slug.
///
/// Decoding is intentionally partial: the segments are normalized text and
/// cannot be inverted back into team identities. Resolution works by
/// re-encoding every candidate match for `date` and comparing slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatchSlug {
    pub away_segment: String,
    pub home_segment: String,
    pub date: NaiveDate,
}

/// Split a match slug into away segment, home segment and date.
pub fn parse_match_slug(slug: &str) -> Result<ParsedMatchSlug, SlugParseError> {
    let mut parts = slug.split(VS_SEPARATOR);
    let away = parts.next().ok_or(SlugParseError::BadSeparator)?;
    let home_and_date = parts.next().ok_or(SlugParseError::BadSeparator)?;
    if parts.next().is_some() {
        return Err(SlugParseError::BadSeparator);
    }

    // Fixed-width suffix: "...-YYYY-MM-DD". The dash before the date is not
    // part of the home segment. Canonical slugs are ASCII; a non-boundary
    // split point can only come from junk input.
    if home_and_date.len() <= DATE_WIDTH
        || !home_and_date.is_char_boundary(home_and_date.len() - DATE_WIDTH)
    {
        return Err(SlugParseError::BadDate);
    }
    let (home_with_dash, date_str) = home_and_date.split_at(home_and_date.len() - DATE_WIDTH);
    let home = home_with_dash
        .strip_suffix('-')
        .ok_or(SlugParseError::BadDate)?;
    let date =
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| SlugParseError::BadDate)?;

    Ok(ParsedMatchSlug {
        away_segment: away.to_string(),
        home_segment: home.to_string(),
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Boston Celtics"), "boston-celtics");
        assert_eq!(slugify("Philadelphia 76ers"), "philadelphia-76ers");
    }

    #[test]
    fn slugify_strips_accents() {
        assert_eq!(slugify("Équipe Montréal"), "equipe-montreal");
        assert_eq!(slugify("São Paulo"), "sao-paulo");
    }

    #[test]
    fn slugify_collapses_symbol_runs_and_trims() {
        assert_eq!(slugify("  LA -- Clippers!! "), "la-clippers");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn encodes_canonical_match_slug() {
        let tip_off = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        let slug = encode_match_slug("Los Angeles", "Lakers", "Boston", "Celtics", tip_off);
        assert_eq!(slug, "los-angeles-lakers-vs-boston-celtics-2024-01-15");
    }

    #[test]
    fn encode_renders_date_in_utc() {
        // 02:00 UTC is still the previous evening in US Eastern; the slug
        // date must follow UTC regardless.
        let tip_off = Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap();
        let slug = encode_match_slug("Los Angeles", "Lakers", "Boston", "Celtics", tip_off);
        assert!(slug.ends_with("2024-01-16"), "{slug}");
    }

    #[test]
    fn encoded_slugs_stay_in_the_url_safe_alphabet() {
        let tip_off = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        let slug = encode_match_slug("Équipe", "Montréal!", "São Paulo", "76ers", tip_off);
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(parse_match_slug(&slug).is_ok());
    }

    #[test]
    fn parse_recovers_segments_and_date() {
        let parsed =
            parse_match_slug("los-angeles-lakers-vs-boston-celtics-2024-01-15").unwrap();
        assert_eq!(parsed.away_segment, "los-angeles-lakers");
        assert_eq!(parsed.home_segment, "boston-celtics");
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_round_trips_the_encode_date() {
        let tip_off = Utc.with_ymd_and_hms(2025, 3, 2, 1, 0, 0).unwrap();
        let slug = encode_match_slug("Oklahoma City", "Thunder", "Utah", "Jazz", tip_off);
        let parsed = parse_match_slug(&slug).unwrap();
        assert_eq!(parsed.date, tip_off.date_naive());
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            parse_match_slug("lakers-2024-01-01"),
            Err(SlugParseError::BadSeparator)
        );
    }

    #[test]
    fn parse_rejects_double_separator() {
        assert_eq!(
            parse_match_slug("a-vs-b-vs-c-2024-01-01"),
            Err(SlugParseError::BadSeparator)
        );
    }

    #[test]
    fn parse_rejects_missing_date() {
        assert_eq!(
            parse_match_slug("lakers-vs-celtics"),
            Err(SlugParseError::BadDate)
        );
        assert_eq!(
            parse_match_slug("lakers-vs-celtics-2024-13-99"),
            Err(SlugParseError::BadDate)
        );
    }

    #[test]
    fn parse_never_panics_on_non_ascii_junk() {
        assert!(parse_match_slug("équipe-vs-montréal-ééé").is_err());
        assert!(parse_match_slug("a-vs-é").is_err());
    }
}
