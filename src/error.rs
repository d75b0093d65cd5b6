use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::MsgResponse;

pub const MISSING_USER_ID: &str = "Provide ?user_id=<id>";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{msg}")]
    Api { status: StatusCode, msg: String },
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl AppError {
    pub fn missing_user_id() -> Self {
        Self::Api {
            status: StatusCode::BAD_REQUEST,
            msg: MISSING_USER_ID.to_string(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::Api {
            status: StatusCode::NOT_FOUND,
            msg: msg.into(),
        }
    }

    pub fn msg(&self) -> &str {
        match self {
            Self::Api { msg, .. } => msg,
            Self::Db(_) => "Internal server error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Api { status, .. } => *status,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Db(err) = self {
            error!("request failed: {}", err);
        }
        HttpResponse::build(self.status_code()).json(MsgResponse::new(self.msg()))
    }
}
