use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::current_user::CurrentUserId;
use crate::entity::{favorite_people, favorite_planet, people, planet, user};
use crate::error::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_users)))
        .service(web::resource("/favorites").route(web::get().to(list_favorites)));
}

#[derive(Serialize)]
struct FavoritesDto {
    user: user::Model,
    favorite_people: Vec<people::Model>,
    favorite_planets: Vec<planet::Model>,
}

async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let rows = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn list_favorites(
    db: web::Data<DatabaseConnection>,
    current: CurrentUserId,
) -> Result<HttpResponse, AppError> {
    let db = db.get_ref();
    let user = match current.id() {
        Some(id) => user::Entity::find_by_id(id).one(db).await?,
        None => None,
    }
    .ok_or_else(|| AppError::not_found("User not found"))?;

    let fav_people = favorite_people::Entity::find()
        .filter(favorite_people::Column::UserId.eq(user.id))
        .order_by_asc(favorite_people::Column::Id)
        .all(db)
        .await?;
    let fav_planets = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(user.id))
        .order_by_asc(favorite_planet::Column::Id)
        .all(db)
        .await?;

    let people_rows = people::Entity::find()
        .filter(people::Column::Id.is_in(fav_people.iter().map(|f| f.people_id)))
        .all(db)
        .await?;
    let planet_rows = planet::Entity::find()
        .filter(planet::Column::Id.is_in(fav_planets.iter().map(|f| f.planet_id)))
        .all(db)
        .await?;

    let dto = FavoritesDto {
        user,
        favorite_people: resolve_targets(&fav_people, people_rows, |f| f.people_id, |p| p.id),
        favorite_planets: resolve_targets(&fav_planets, planet_rows, |f| f.planet_id, |p| p.id),
    };
    Ok(HttpResponse::Ok().json(dto))
}

/// Maps favorites to their targets in favorite order. Favorites whose target
/// is gone (orphans) are skipped.
pub fn resolve_targets<F, T>(
    favorites: &[F],
    targets: Vec<T>,
    target_of: impl Fn(&F) -> i32,
    id_of: impl Fn(&T) -> i32,
) -> Vec<T>
where
    T: Clone,
{
    let by_id: HashMap<i32, T> = targets.into_iter().map(|t| (id_of(&t), t)).collect();
    favorites
        .iter()
        .filter_map(|fav| by_id.get(&target_of(fav)).cloned())
        .collect()
}
