use mimalloc::MiMalloc;
use tracing::info;

use taaltoren::config::{CONTENT_LISTEN_ADDR, Config};

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
        admin_jwt = cfg.admin_jwt_secret.is_some(),
        loglevel = %cfg.loglevel
    );

    let app = taaltoren::server::build_content_app(cfg).await?;
    taaltoren::server::serve(cfg.listen_addr_or(CONTENT_LISTEN_ADDR), app).await?;
    Ok(())
}
