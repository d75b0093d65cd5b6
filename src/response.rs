use actix_web::HttpResponse;
use serde::Serialize;

use crate::error::AppError;

/// The `{"msg": ...}` body shared by errors and acknowledgements.
#[derive(Serialize)]
pub struct MsgResponse {
    pub msg: String,
}

impl MsgResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Serialize)]
pub struct FavoriteCreated<T: Serialize> {
    pub msg: String,
    pub favorite: T,
}

pub fn ok_msg(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(MsgResponse::new(msg))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("Not found"))
}
