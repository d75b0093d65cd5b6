use actix_web::web;

use crate::response::not_found;

pub mod cors;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

/// Registers every endpoint plus the JSON 404 fallbacks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(sitemap::sitemap)))
        .service(web::scope("/people").configure(people::config))
        .service(web::scope("/planets").configure(planet::config))
        .service(web::scope("/users").configure(user::config))
        .service(web::scope("/favorite").configure(favorite::config))
        .default_service(web::to(not_found));
}

/// Path ids match `\d+`; ones too large for a row id parse to `None` and
/// are looked up as missing.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}
