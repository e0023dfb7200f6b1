use mimalloc::MiMalloc;
use tracing::info;

use taaltoren::config::{Config, SCORE_LISTEN_ADDR};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &Config::load()?;
    taaltoren::telemetry::init_tracing(&cfg.loglevel);

    info!(
        database_url = %cfg.redacted_database_url(),
        init_schema = cfg.init_schema,
        max_connections = cfg.db_max_connections,
        loglevel = %cfg.loglevel
    );

    let app = taaltoren::server::build_score_app(cfg).await?;
    taaltoren::server::serve(cfg.listen_addr_or(SCORE_LISTEN_ADDR), app).await?;
    Ok(())
}
