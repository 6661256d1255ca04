//! Sitemap enumeration: every static page, team page and analyzed match
//! page, in both locale path variants.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::catalog::NBA_TEAMS;
use crate::domain::Match;
use crate::i18n::Locale;
use crate::util::env::env_opt;

const DEFAULT_BASE_URL: &str = "https://courtside.app";

#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: &'static str,
    pub priority: f64,
}

pub fn base_url() -> String {
    env_opt("SITE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Locale-specific path segment for the teams index page.
fn teams_index_segment(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "equipes",
        Locale::En => "teams",
    }
}

/// Locale-specific path segment for a single team page.
fn team_segment(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "equipe",
        Locale::En => "team",
    }
}

fn methodology_segment(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "methodologie",
        Locale::En => "methodology",
    }
}

/// Build the full sitemap. `matches` is expected to be the analyzed set
/// (the enumeration itself does not re-filter); last-modified for a match
/// page is the analysis creation time, falling back to the scheduled time.
pub fn build_sitemap(matches: &[Match], now: DateTime<Utc>, base: &str) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(6 + NBA_TEAMS.len() * 2 + matches.len() * 2);

    for locale in Locale::ALL {
        entries.push(SitemapEntry {
            url: format!("{base}/{locale}"),
            last_modified: now,
            change_frequency: "hourly",
            priority: 1.0,
        });
    }
    for locale in Locale::ALL {
        entries.push(SitemapEntry {
            url: format!("{base}/{locale}/{}", teams_index_segment(locale)),
            last_modified: now,
            change_frequency: "weekly",
            priority: 0.8,
        });
    }
    for locale in Locale::ALL {
        entries.push(SitemapEntry {
            url: format!("{base}/{locale}/{}", methodology_segment(locale)),
            last_modified: now,
            change_frequency: "monthly",
            priority: 0.5,
        });
    }

    for team in NBA_TEAMS.iter() {
        for locale in Locale::ALL {
            entries.push(SitemapEntry {
                url: format!("{base}/{locale}/{}/{}", team_segment(locale), team.slug),
                last_modified: now,
                change_frequency: "daily",
                priority: 0.7,
            });
        }
    }

    for m in matches {
        let last_modified = m
            .analysis
            .as_ref()
            .and_then(|a| a.created_at)
            .unwrap_or(m.scheduled_at);
        for locale in Locale::ALL {
            entries.push(SitemapEntry {
                url: format!("{base}/{locale}/match/{}", m.slug),
                last_modified,
                change_frequency: "weekly",
                priority: 0.8,
            });
        }
    }

    entries
}

/// Render entries as sitemap.org XML.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::with_capacity(entries.len() * 160 + 128);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    out.push('\n');
    for entry in entries {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", entry.url));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        out.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_ops::assemble::assemble_match;
    use crate::database_ops::rows::{GameRow, TeamRow};
    use chrono::TimeZone;

    fn analyzed_match(created_at: Option<&str>) -> Match {
        let mut analysis = serde_json::json!({"id": "a1", "rating": 7.0});
        if let Some(ts) = created_at {
            analysis["created_at"] = serde_json::json!(ts);
        }
        assemble_match(GameRow {
            id: "g1".to_string(),
            nba_game_id: "001".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap(),
            status: "finished".to_string(),
            home_score: None,
            away_score: None,
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
    fn enumerates_static_team_and_match_pages_in_both_locales() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let matches = vec![analyzed_match(None)];
        let entries = build_sitemap(&matches, now, "https://example.test");
        // 6 static + 30 teams * 2 + 1 match * 2
        assert_eq!(entries.len(), 6 + 60 + 2);
        assert!(entries
            .iter()
            .any(|e| e.url == "https://example.test/fr/equipe/boston-celtics"));
        assert!(entries
            .iter()
            .any(|e| e.url == "https://example.test/en/team/boston-celtics"));
        assert!(entries.iter().any(|e| e.url
            == "https://example.test/en/match/los-angeles-lakers-vs-boston-celtics-2024-01-15"));
    }

    #[test]
    fn match_lastmod_prefers_analysis_creation_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let with_created = analyzed_match(Some("2024-01-16T08:00:00Z"));
        let entries = build_sitemap(std::slice::from_ref(&with_created), now, "https://x.test");
        let match_entry = entries.iter().find(|e| e.url.contains("/match/")).unwrap();
        assert_eq!(
            match_entry.last_modified,
            Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap()
        );

        let without_created = analyzed_match(None);
        let entries = build_sitemap(std::slice::from_ref(&without_created), now, "https://x.test");
        let match_entry = entries.iter().find(|e| e.url.contains("/match/")).unwrap();
        assert_eq!(match_entry.last_modified, without_created.scheduled_at);
    }

    #[test]
    fn xml_rendering_is_well_formed_enough() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let xml = to_xml(&build_sitemap(&[], now, "https://x.test"));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<urlset"));
        assert!(xml.ends_with("</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), xml.matches("</url>").count());
        assert!(xml.contains("<lastmod>2024-01-16T12:00:00Z</lastmod>"));
    }
}
