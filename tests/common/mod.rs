//! Shared setup for the HTTP tests: an in-memory SQLite database with the
//! schema created and, optionally, the sample rows seeded.

#![allow(dead_code)]

use sea_orm::{Database, DatabaseConnection};
use swapi_favorites::{db::init_schema, seed::run_seed};

pub async fn empty_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    init_schema(&db).await.unwrap();
    db
}

pub async fn seeded_db() -> DatabaseConnection {
    let db = empty_db().await;
    run_seed(&db).await.unwrap();
    db
}

/// Builds the application service the way `main` does.
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .wrap(actix_web::middleware::from_fn(
                    swapi_favorites::routes::cors::cors_handler,
                ))
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(swapi_favorites::routes::configure),
        )
        .await
    };
}
