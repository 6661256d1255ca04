// HTTP API server binary for courtside
// Serves the bilingual NBA match-analysis read API

use anyhow::Result;
use courtside::api::ApiServer;
use courtside::database_ops::db::Db;
use courtside::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    courtside::util::tracing::init_tracing("info,sqlx=warn")?;

    tracing::info!("Initializing courtside API server");

    // Load dotenv/env once (safe to call multiple times)
    env_util::init_env();

    // Load configuration from environment
    let server = ApiServer::from_env()?;

    // Initialize database connection
    let database_url = env_util::db_url_prefer_session()?;
    let max_connections: u32 = env_util::env_parse("DB_MAX_CONNS", 10u32);
    let db = Db::connect(&database_url, max_connections).await?;

    tracing::info!("Database connected successfully");

    // Start HTTP server
    server.run(db).await?;

    Ok(())
}
