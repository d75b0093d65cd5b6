use actix_web::{web, HttpResponse};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use serde::Serialize;

use crate::current_user::CurrentUserId;
use crate::entity::{favorite_people, favorite_planet, people, planet, user};
use crate::error::AppError;
use crate::response::{ok_msg, FavoriteCreated};
use crate::routes::parse_id;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/planet/{id:\\d+}")
            .route(web::post().to(add_planet))
            .route(web::delete().to(remove_planet)),
    )
    .service(
        web::resource("/people/{id:\\d+}")
            .route(web::post().to(add_people))
            .route(web::delete().to(remove_people)),
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    People,
    Planet,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Favorite {
    People(favorite_people::Model),
    Planet(favorite_planet::Model),
}

impl FavoriteKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Planet => "Planet",
        }
    }

    async fn target_exists(self, db: &DatabaseConnection, target_id: i32) -> Result<bool, DbErr> {
        let found = match self {
            Self::People => people::Entity::find_by_id(target_id).one(db).await?.is_some(),
            Self::Planet => planet::Entity::find_by_id(target_id).one(db).await?.is_some(),
        };
        Ok(found)
    }

    async fn find(
        self,
        db: &DatabaseConnection,
        user_id: i32,
        target_id: i32,
    ) -> Result<Option<Favorite>, DbErr> {
        let found = match self {
            Self::People => favorite_people::Entity::find()
                .filter(favorite_people::Column::UserId.eq(user_id))
                .filter(favorite_people::Column::PeopleId.eq(target_id))
                .one(db)
                .await?
                .map(Favorite::People),
            Self::Planet => favorite_planet::Entity::find()
                .filter(favorite_planet::Column::UserId.eq(user_id))
                .filter(favorite_planet::Column::PlanetId.eq(target_id))
                .one(db)
                .await?
                .map(Favorite::Planet),
        };
        Ok(found)
    }

    async fn insert(
        self,
        db: &DatabaseConnection,
        user_id: i32,
        target_id: i32,
    ) -> Result<Favorite, DbErr> {
        match self {
            Self::People => favorite_people::ActiveModel {
                user_id: Set(user_id),
                people_id: Set(target_id),
                ..Default::default()
            }
            .insert(db)
            .await
            .map(Favorite::People),
            Self::Planet => favorite_planet::ActiveModel {
                user_id: Set(user_id),
                planet_id: Set(target_id),
                ..Default::default()
            }
            .insert(db)
            .await
            .map(Favorite::Planet),
        }
    }
}

impl Favorite {
    async fn delete(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        match self {
            Self::People(model) => {
                favorite_people::Entity::delete_by_id(model.id).exec(db).await?;
            }
            Self::Planet(model) => {
                favorite_planet::Entity::delete_by_id(model.id).exec(db).await?;
            }
        }
        Ok(())
    }
}

async fn add_planet(
    db: web::Data<DatabaseConnection>,
    current: CurrentUserId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    add_favorite(db.get_ref(), FavoriteKind::Planet, current, parse_id(&path)).await
}

async fn remove_planet(
    db: web::Data<DatabaseConnection>,
    current: CurrentUserId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    remove_favorite(db.get_ref(), FavoriteKind::Planet, current, parse_id(&path)).await
}

async fn add_people(
    db: web::Data<DatabaseConnection>,
    current: CurrentUserId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    add_favorite(db.get_ref(), FavoriteKind::People, current, parse_id(&path)).await
}

async fn remove_people(
    db: web::Data<DatabaseConnection>,
    current: CurrentUserId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    remove_favorite(db.get_ref(), FavoriteKind::People, current, parse_id(&path)).await
}

/// `None` ids are integers too large for a row id and match nothing.
pub async fn add_favorite(
    db: &DatabaseConnection,
    kind: FavoriteKind,
    current: CurrentUserId,
    target_id: Option<i32>,
) -> Result<HttpResponse, AppError> {
    let not_found = || AppError::not_found(format!("User or {} not found", kind.label()));
    let (user_id, target_id) = match (current.id(), target_id) {
        (Some(user_id), Some(target_id)) => (user_id, target_id),
        _ => return Err(not_found()),
    };

    let user_exists = user::Entity::find_by_id(user_id).one(db).await?.is_some();
    if !user_exists || !kind.target_exists(db, target_id).await? {
        return Err(not_found());
    }

    if kind.find(db, user_id, target_id).await?.is_some() {
        return Ok(ok_msg("Already in favorites"));
    }

    insert_favorite(db, kind, user_id, target_id).await
}

/// Inserts the pair. The unique index turns a concurrent insert of the same
/// pair into "Already in favorites".
async fn insert_favorite(
    db: &DatabaseConnection,
    kind: FavoriteKind,
    user_id: i32,
    target_id: i32,
) -> Result<HttpResponse, AppError> {
    let favorite = match kind.insert(db, user_id, target_id).await {
        Ok(favorite) => favorite,
        Err(err) if is_unique_violation(&err) => {
            debug!("user {} already has {} {} (unique index)", user_id, kind.label(), target_id);
            return Ok(ok_msg("Already in favorites"));
        }
        Err(err) => return Err(err.into()),
    };
    debug!("user {} added {} {} to favorites", user_id, kind.label(), target_id);

    Ok(HttpResponse::Created().json(FavoriteCreated {
        msg: format!("{} added to favorites", kind.label()),
        favorite,
    }))
}

pub async fn remove_favorite(
    db: &DatabaseConnection,
    kind: FavoriteKind,
    current: CurrentUserId,
    target_id: Option<i32>,
) -> Result<HttpResponse, AppError> {
    let not_found = || AppError::not_found("Favorite not found");
    let (user_id, target_id) = match (current.id(), target_id) {
        (Some(user_id), Some(target_id)) => (user_id, target_id),
        _ => return Err(not_found()),
    };

    let favorite = kind
        .find(db, user_id, target_id)
        .await?
        .ok_or_else(not_found)?;
    favorite.delete(db).await?;
    debug!("user {} removed {} {} from favorites", user_id, kind.label(), target_id);

    Ok(ok_msg(format!("{} removed from favorites", kind.label())))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
