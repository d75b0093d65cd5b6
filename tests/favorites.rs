//! Favorite creation, removal and the per-user aggregate view.

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{json, Value};
use swapi_favorites::entity::{favorite_people, favorite_planet};

use common::seeded_db;

#[actix_web::test]
async fn aggregate_shows_seeded_favorites() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/users/favorites?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "luke");
    assert_eq!(
        body["favorite_people"],
        json!([{"id": 2, "name": "Darth Vader", "gender": "male", "height": 202, "hair_color": "none"}])
    );
    assert_eq!(
        body["favorite_planets"],
        json!([{"id": 1, "name": "Tatooine", "climate": "arid", "population": 200000, "terrain": "desert"}])
    );
}

#[actix_web::test]
async fn aggregate_without_user_id_is_bad_request() {
    let db = seeded_db().await;
    let app = test_app!(db);

    for uri in ["/users/favorites", "/users/favorites?user_id=luke"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"msg": "Provide ?user_id=<id>"}));
    }
}

#[actix_web::test]
async fn aggregate_for_unknown_user_is_not_found() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/users/favorites?user_id=42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "User not found"}));
}

#[actix_web::test]
async fn aggregate_uses_first_user_id() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/users/favorites?user_id=1&user_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "luke");
    assert_eq!(body["favorite_people"][0]["name"], "Darth Vader");
}

#[actix_web::test]
async fn oversized_user_id_is_an_unknown_user() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let cases = [
        (test::TestRequest::get(), "/users/favorites?user_id=3000000000", "User not found"),
        (test::TestRequest::post(), "/favorite/planet/1?user_id=3000000000", "User or Planet not found"),
        (test::TestRequest::post(), "/favorite/people/1?user_id=3000000000", "User or People not found"),
        (test::TestRequest::delete(), "/favorite/people/2?user_id=3000000000", "Favorite not found"),
    ];
    for (req, uri, msg) in cases {
        let resp = test::call_service(&app, req.uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "msg": msg }), "{}", uri);
    }
}

#[actix_web::test]
async fn oversized_target_id_is_not_found() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/favorite/planet/99999999999?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "User or Planet not found"}));

    let req = test::TestRequest::delete()
        .uri("/favorite/planet/99999999999?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Favorite not found"}));
}

#[actix_web::test]
async fn aggregate_for_user_without_favorites_is_empty() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/users/favorites?user_id=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["username"], "leia");
    assert_eq!(body["favorite_people"], json!([]));
    assert_eq!(body["favorite_planets"], json!([]));
}

#[actix_web::test]
async fn add_planet_without_user_id_is_bad_request() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post().uri("/favorite/planet/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Provide ?user_id=<id>"}));
}

#[actix_web::test]
async fn add_planet_twice_creates_one_favorite() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/favorite/planet/3?user_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Planet added to favorites");
    assert_eq!(body["favorite"]["user_id"], 2);
    assert_eq!(body["favorite"]["planet_id"], 3);
    assert!(body["favorite"]["id"].is_i64());

    let req = test::TestRequest::post()
        .uri("/favorite/planet/3?user_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Already in favorites"}));

    let count = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(2))
        .filter(favorite_planet::Column::PlanetId.eq(3))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn add_people_then_aggregate_includes_it() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/favorite/people/3?user_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "People added to favorites");
    assert_eq!(body["favorite"]["people_id"], 3);

    let req = test::TestRequest::get()
        .uri("/users/favorites?user_id=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["favorite_people"][0]["name"], "Leia Organa");
}

#[actix_web::test]
async fn add_for_missing_user_or_target_is_not_found() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let cases = [
        ("/favorite/planet/999?user_id=1", "User or Planet not found"),
        ("/favorite/planet/1?user_id=999", "User or Planet not found"),
        ("/favorite/people/999?user_id=1", "User or People not found"),
        ("/favorite/people/1?user_id=999", "User or People not found"),
    ];
    for (uri, msg) in cases {
        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "msg": msg }), "{}", uri);
    }
}

#[actix_web::test]
async fn remove_never_created_favorite_is_not_found() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::delete()
        .uri("/favorite/people/1?user_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Favorite not found"}));
}

#[actix_web::test]
async fn remove_without_user_id_is_bad_request() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::delete()
        .uri("/favorite/people/2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn remove_seeded_favorites() {
    let db = seeded_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::delete()
        .uri("/favorite/people/2?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "People removed from favorites"}));

    let req = test::TestRequest::delete()
        .uri("/favorite/planet/1?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Planet removed from favorites"}));

    assert_eq!(favorite_people::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(favorite_planet::Entity::find().count(&db).await.unwrap(), 0);

    let req = test::TestRequest::delete()
        .uri("/favorite/planet/1?user_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unique_index_rejects_duplicate_pair() {
    use sea_orm::{ActiveModelTrait, Set, SqlErr};

    let db = seeded_db().await;
    let err = favorite_people::ActiveModel {
        user_id: Set(1),
        people_id: Set(2),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
}
