// API route configuration

use actix_web::web;

use crate::api::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        .route("/", web::get().to(handlers::health_check))
        // Sitemap (served at the root like any static site would)
        .route("/sitemap.xml", web::get().to(handlers::sitemap_xml))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route(
                    "/matches/yesterday",
                    web::get().to(handlers::yesterday_matches),
                )
                .route("/matches/today", web::get().to(handlers::today_matches))
                .route("/matches/{slug}", web::get().to(handlers::match_detail))
                .route("/teams", web::get().to(handlers::list_teams))
                .route("/teams/{slug}", web::get().to(handlers::team_detail))
                .route(
                    "/teams/{slug}/matches",
                    web::get().to(handlers::team_matches),
                )
                .route("/standings", web::get().to(handlers::standings)),
        );
}
