use mimalloc::MiMalloc;
use tracing::info;

use taaltoren::config::{Config, PROBE_LISTEN_ADDR};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &Config::load()?;
    taaltoren::telemetry::init_tracing(&cfg.loglevel);

    info!(database_url = %cfg.redacted_database_url(), loglevel = %cfg.loglevel);

    let app = taaltoren::server::build_probe_app(cfg).await?;
    taaltoren::server::serve(cfg.listen_addr_or(PROBE_LISTEN_ADDR), app).await?;
    Ok(())
}
