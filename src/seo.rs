//! schema.org JSON-LD payloads embedded in rendered pages and API
//! responses.

use serde_json::{json, Value};

use crate::domain::{Match, MatchStatus, Team};
use crate::i18n::{translations, Locale};

pub fn match_json_ld(m: &Match, locale: Locale) -> Value {
    let headline = m
        .analysis
        .as_ref()
        .and_then(|a| a.headline().resolve(locale).map(str::to_string));
    let summary = m
        .analysis
        .as_ref()
        .and_then(|a| a.summary().resolve(locale).map(str::to_string));

    let mut payload = json!({
        "@context": "https://schema.org",
        "@type": "SportsEvent",
        "name": format!("{} vs {}", m.away_team.full_name(), m.home_team.full_name()),
        "startDate": m.scheduled_at.to_rfc3339(),
        "description": summary.or(headline).unwrap_or_else(|| "NBA game analysis".to_string()),
        "homeTeam": {
            "@type": "SportsTeam",
            "name": m.home_team.full_name(),
        },
        "awayTeam": {
            "@type": "SportsTeam",
            "name": m.away_team.full_name(),
        },
        "sport": "Basketball",
    });

    if m.status == MatchStatus::Finished && m.home_score.is_some() && m.away_score.is_some() {
        payload["eventStatus"] = json!("https://schema.org/EventCompleted");
    }
    payload
}

pub fn team_json_ld(team: &Team) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SportsTeam",
        "name": team.full_name(),
        "sport": "Basketball",
        "memberOf": {
            "@type": "SportsOrganization",
            "name": "NBA",
        },
    })
}

pub fn website_json_ld(locale: Locale, base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": translations::translate("site.name", locale),
        "description": translations::translate("site.description", locale),
        "url": format!("{base_url}/{locale}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_ops::assemble::assemble_match;
    use crate::database_ops::rows::{GameRow, TeamRow};
    use chrono::{TimeZone, Utc};

    fn finished_match() -> Match {
        assemble_match(GameRow {
            id: "g1".to_string(),
            nba_game_id: "001".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap(),
            status: "finished".to_string(),
            home_score: Some(112),
            away_score: Some(108),
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
            analyses: vec![serde_json::json!({
                "id": "a1",
                "headline": "Clash of eras",
                "headline_fr": "Choc des générations",
            })],
        })
    }

    #[test]
    fn match_payload_marks_completed_games() {
        let payload = match_json_ld(&finished_match(), Locale::En);
        assert_eq!(payload["@type"], "SportsEvent");
        assert_eq!(
            payload["name"],
            "Los Angeles Lakers vs Boston Celtics"
        );
        assert_eq!(payload["eventStatus"], "https://schema.org/EventCompleted");
    }

    #[test]
    fn description_resolves_per_locale_with_fallback() {
        let m = finished_match();
        assert_eq!(
            match_json_ld(&m, Locale::Fr)["description"],
            "Choc des générations"
        );
        assert_eq!(match_json_ld(&m, Locale::En)["description"], "Clash of eras");
    }

    #[test]
    fn website_payload_localizes_url_and_description() {
        let fr = website_json_ld(Locale::Fr, "https://courtside.app");
        assert_eq!(fr["url"], "https://courtside.app/fr");
        assert!(fr["description"].as_str().unwrap().contains("spoilers"));
    }
}
