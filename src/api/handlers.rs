// HTTP request handlers for the read API.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use std::time::SystemTime;

use crate::api::models::*;
use crate::catalog;
use crate::database_ops::assemble::{merge_dedupe_truncate, sort_by_rating_desc};
use crate::database_ops::db::Db;
use crate::database_ops::queries;
use crate::domain::Match;
use crate::i18n::Locale;
use crate::seo;
use crate::sitemap;
use crate::util::env::env_parse;

/// Display cap for the related/upcoming rails on the match page.
const RAIL_LIMIT: usize = 4;
/// Per-team fetch size feeding each rail before merge/dedupe.
const RAIL_FETCH: i64 = 2;

/// One failed list query must not take down sibling sections: log it and
/// render that section empty.
fn degrade<T>(result: anyhow::Result<Vec<T>>, section: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::error!(section, error = %err, "query failed, degrading section to empty");
            Vec::new()
        }
    }
}

fn summaries(matches: &[Match], locale: Locale) -> Vec<MatchSummaryDto> {
    matches
        .iter()
        .map(|m| MatchSummaryDto::from_match(m, locale))
        .collect()
}

/// Health check endpoint
pub async fn health_check(db: web::Data<Db>) -> Result<HttpResponse> {
    let db_status = if db.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    let uptime = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let response = ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        database: db_status.to_string(),
        uptime_seconds: uptime,
    });

    Ok(HttpResponse::Ok().json(response))
}

/// Yesterday's analyzed matches, best rated first.
pub async fn yesterday_matches(
    query: web::Query<LocaleQuery>,
    db: web::Data<Db>,
) -> Result<HttpResponse> {
    let matches = degrade(
        queries::yesterday_matches(&db, Utc::now()).await,
        "matches.yesterday",
    );
    let response = ApiResponse::success(summaries(&matches, query.locale));
    Ok(HttpResponse::Ok().json(response))
}

/// Today's slate, best rated first, ties by tip-off.
pub async fn today_matches(
    query: web::Query<LocaleQuery>,
    db: web::Data<Db>,
) -> Result<HttpResponse> {
    let matches = degrade(queries::today_matches(&db, Utc::now()).await, "matches.today");
    let response = ApiResponse::success(summaries(&matches, query.locale));
    Ok(HttpResponse::Ok().json(response))
}

/// Match detail by canonical slug, with the related/upcoming rails and the
/// structured-data payload. Malformed and unknown slugs are both 404s.
pub async fn match_detail(
    path: web::Path<String>,
    query: web::Query<LocaleQuery>,
    db: web::Data<Db>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let locale = query.locale;

    let found = match queries::match_by_slug(&db, &slug).await {
        Ok(found) => found,
        Err(err) => {
            tracing::error!(%slug, error = %err, "match lookup failed");
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("match lookup failed")));
        }
    };
    let Some(m) = found else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("match not found")));
    };

    // Rails are independent sections: fetch all four concurrently, degrade
    // each on its own, then merge in the fixed away-then-home order.
    let now = Utc::now();
    let (away_related, home_related, away_upcoming, home_upcoming) = tokio::join!(
        queries::related_matches(&db, &m.away_team.abbreviation, &m.id, RAIL_FETCH),
        queries::related_matches(&db, &m.home_team.abbreviation, &m.id, RAIL_FETCH),
        queries::upcoming_matches(&db, &m.away_team.abbreviation, now, RAIL_FETCH),
        queries::upcoming_matches(&db, &m.home_team.abbreviation, now, RAIL_FETCH),
    );
    let related = merge_dedupe_truncate(
        degrade(away_related, "match.related.away"),
        degrade(home_related, "match.related.home"),
        RAIL_LIMIT,
    );
    let upcoming = merge_dedupe_truncate(
        degrade(away_upcoming, "match.upcoming.away"),
        degrade(home_upcoming, "match.upcoming.home"),
        RAIL_LIMIT,
    );

    let detail = MatchDetailDto {
        summary: MatchSummaryDto::from_match(&m, locale),
        analysis: m
            .analysis
            .as_ref()
            .map(|a| AnalysisDto::from_domain(a, m.is_post_match(), locale)),
        related: summaries(&related, locale),
        upcoming: summaries(&upcoming, locale),
        json_ld: seo::match_json_ld(&m, locale),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail)))
}

/// The full static team catalog.
pub async fn list_teams() -> Result<HttpResponse> {
    let teams: Vec<_> = catalog::NBA_TEAMS.iter().cloned().collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(teams)))
}

/// Single team by catalog slug.
pub async fn team_detail(path: web::Path<String>) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let Some(team) = catalog::team_by_slug(&slug) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("team not found")));
    };
    let payload = serde_json::json!({
        "team": team,
        "json_ld": seo::team_json_ld(team),
    });
    Ok(HttpResponse::Ok().json(ApiResponse::success(payload)))
}

/// Analyzed match history for a team. `filter=best` re-sorts the same
/// dataset by canonical rating; `filter=recent` keeps the store order.
pub async fn team_matches(
    path: web::Path<String>,
    query: web::Query<TeamMatchesQuery>,
    db: web::Data<Db>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let Some(team) = catalog::team_by_slug(&slug) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("team not found")));
    };

    let limit = query.limit.clamp(1, 100);
    let mut matches = degrade(
        queries::team_matches(&db, &team.abbreviation, limit).await,
        "team.matches",
    );
    if query.filter == HistoryFilter::Best {
        sort_by_rating_desc(&mut matches);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(summaries(&matches, query.locale))))
}

/// Season standings split by conference.
pub async fn standings(db: web::Data<Db>) -> Result<HttpResponse> {
    let season: i32 = env_parse("STANDINGS_SEASON", 2025);
    match queries::standings(&db, season).await {
        Ok(standings) => Ok(HttpResponse::Ok().json(ApiResponse::success(standings))),
        Err(err) => {
            tracing::error!(season, error = %err, "standings query failed");
            Ok(HttpResponse::Ok().json(ApiResponse::success(queries::Standings::default())))
        }
    }
}

/// Sitemap XML over every static, team and analyzed-match page.
pub async fn sitemap_xml(db: web::Data<Db>) -> Result<HttpResponse> {
    let matches = degrade(queries::all_analyzed_matches(&db).await, "sitemap.matches");
    let entries = sitemap::build_sitemap(&matches, Utc::now(), &sitemap::base_url());
    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .body(sitemap::to_xml(&entries)))
}
