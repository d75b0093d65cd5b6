//! The caller-supplied "current user".
//!
//! There is no authentication: the user is whoever the `user_id` query
//! parameter names. Handlers that need a user take [`CurrentUserId`] and get
//! a 400 `{"msg": "Provide ?user_id=<id>"}` when it is missing or malformed.

use std::num::IntErrorKind;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;

/// An integer `user_id`. `None` holds integers too large for a row id; they
/// are valid input that simply matches no user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUserId(pub Option<i32>);

impl CurrentUserId {
    pub fn id(self) -> Option<i32> {
        self.0
    }
}

impl FromRequest for CurrentUserId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = parse_user_id(req.query_string())
            .ok_or_else(|| AppError::missing_user_id().into());
        ready(result)
    }
}

/// Reads the first `user_id` value. `0` counts as absent, like an empty value.
fn parse_user_id(query: &str) -> Option<CurrentUserId> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query).ok()?;
    let raw = pairs
        .into_inner()
        .into_iter()
        .find(|(key, _)| key == "user_id")
        .map(|(_, value)| value)?;

    match raw.trim().parse::<i32>() {
        Ok(0) => None,
        Ok(id) => Some(CurrentUserId(Some(id))),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Some(CurrentUserId(None)),
            _ => None,
        },
    }
}
