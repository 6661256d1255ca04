// Prints the full sitemap XML to stdout, for cron-driven static exports.

use anyhow::Result;
use chrono::Utc;
use courtside::database_ops::{db::Db, queries};
use courtside::sitemap;
use courtside::util::env as env_util;

#[tokio::main]
async fn main() -> Result<()> {
    courtside::util::tracing::init_tracing("warn")?;
    env_util::init_env();

    let database_url = env_util::db_url_prefer_session()?;
    let db = Db::connect(&database_url, 2).await?;

    let matches = queries::all_analyzed_matches(&db).await?;
    let entries = sitemap::build_sitemap(&matches, Utc::now(), &sitemap::base_url());
    print!("{}", sitemap::to_xml(&entries));

    Ok(())
}
