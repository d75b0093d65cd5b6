use std::io;

use log::info;
use swapi_favorites::config::AppConfig;
use swapi_favorites::db::connect_db;
use swapi_favorites::seed::run_seed;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    let db = connect_db(&config)
        .await
        .map_err(|e| io::Error::other(format!("db connect failed: {}", e)))?;
    let report = run_seed(&db)
        .await
        .map_err(|e| io::Error::other(format!("seed failed: {}", e)))?;
    info!("seeded {:?}", report);
    Ok(())
}
