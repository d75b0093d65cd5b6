use log::{info, warn};
use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::AppConfig;
use crate::entity::{favorite_people, favorite_planet, people, planet, user};

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.database_url();
    if config.is_sqlite() {
        if let Err(err) = ensure_sqlite_path(&url) {
            warn!("cannot prepare sqlite file for {}: {}", url, err);
        }
    }
    let db = Database::connect(&url).await?;
    init_schema(&db).await?;
    Ok(db)
}

/// Creates the database file and its directory so sqlx can open it.
fn ensure_sqlite_path(url: &str) -> io::Result<()> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    if path.starts_with(":memory:") {
        return Ok(());
    }
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;
    Ok(())
}

/// Creates every table and the favorite pair indexes when missing.
pub async fn init_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    create_table(db, &schema, user::Entity).await?;
    create_table(db, &schema, people::Entity).await?;
    create_table(db, &schema, planet::Entity).await?;
    create_table(db, &schema, favorite_people::Entity).await?;
    create_table(db, &schema, favorite_planet::Entity).await?;

    for stmt in favorite_indexes() {
        db.execute(backend.build(&stmt)).await?;
    }
    info!("database schema ready");
    Ok(())
}

async fn create_table<C, E>(db: &C, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

fn favorite_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("uq_favorite_people_user_people")
            .table(favorite_people::Entity)
            .col(favorite_people::Column::UserId)
            .col(favorite_people::Column::PeopleId)
            .unique()
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("uq_favorite_planet_user_planet")
            .table(favorite_planet::Entity)
            .col(favorite_planet::Column::UserId)
            .col(favorite_planet::Column::PlanetId)
            .unique()
            .to_owned(),
    ]
}
