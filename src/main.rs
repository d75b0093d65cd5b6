use std::io;

use actix_web::{middleware, web, App, HttpServer};
use log::info;
use swapi_favorites::config::AppConfig;
use swapi_favorites::db::connect_db;
use swapi_favorites::routes;
use swapi_favorites::seed::run_seed;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    let db = connect_db(&config)
        .await
        .map_err(|e| io::Error::other(format!("db connect failed: {}", e)))?;
    if config.seed_on_start {
        run_seed(&db)
            .await
            .map_err(|e| io::Error::other(format!("seed failed: {}", e)))?;
    }
    let server_port = config.server_port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .wrap(middleware::from_fn(routes::cors::cors_handler))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", server_port))?;
    info!("server started at http://0.0.0.0:{}", server_port);
    server.run().await
}
