use actix_web::{web, HttpResponse};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entity::people;
use crate::error::AppError;
use crate::routes::parse_id;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)))
        .service(web::resource("/{id:\\d+}").route(web::get().to(get)));
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let rows = people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(db.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn get(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let not_found = || AppError::not_found("People not found");
    let id = parse_id(&path).ok_or_else(not_found)?;
    let row = people::Entity::find_by_id(id)
        .one(db.get_ref())
        .await?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(row))
}
