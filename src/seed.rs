//! Fixed sample rows for a fresh database.

use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};

use crate::entity::{favorite_people, favorite_planet, people, planet, user};

/// Rows inserted by one [`run_seed`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub people: u64,
    pub planets: u64,
    pub favorites: u64,
}

/// Fills each empty table with sample rows, then gives luke his test
/// favorites. Safe to run repeatedly.
pub async fn run_seed<C>(db: &C) -> Result<SeedReport, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    if user::Entity::find().one(&txn).await?.is_none() {
        let rows = vec![new_user("luke@rebels.io", "luke"), new_user("leia@rebels.io", "leia")];
        report.users = rows.len() as u64;
        user::Entity::insert_many(rows).exec(&txn).await?;
    }

    if people::Entity::find().count(&txn).await? == 0 {
        let rows = vec![
            new_person("Luke Skywalker", "male", 172, "blond"),
            new_person("Darth Vader", "male", 202, "none"),
            new_person("Leia Organa", "female", 150, "brown"),
        ];
        report.people = rows.len() as u64;
        people::Entity::insert_many(rows).exec(&txn).await?;
    }

    if planet::Entity::find().count(&txn).await? == 0 {
        let rows = vec![
            new_planet("Tatooine", "arid", 200_000, "desert"),
            new_planet("Alderaan", "temperate", 2_000_000_000, "grasslands"),
            new_planet("Hoth", "frozen", 0, "tundra"),
        ];
        report.planets = rows.len() as u64;
        planet::Entity::insert_many(rows).exec(&txn).await?;
    }

    let luke = user::Entity::find()
        .filter(user::Column::Username.eq("luke"))
        .one(&txn)
        .await?;
    let tatooine = planet::Entity::find()
        .filter(planet::Column::Name.eq("Tatooine"))
        .one(&txn)
        .await?;
    let vader = people::Entity::find()
        .filter(people::Column::Name.eq("Darth Vader"))
        .one(&txn)
        .await?;

    if let (Some(luke), Some(tatooine)) = (&luke, &tatooine) {
        let exists = favorite_planet::Entity::find()
            .filter(favorite_planet::Column::UserId.eq(luke.id))
            .filter(favorite_planet::Column::PlanetId.eq(tatooine.id))
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            favorite_planet::ActiveModel {
                user_id: Set(luke.id),
                planet_id: Set(tatooine.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.favorites += 1;
        }
    }

    if let (Some(luke), Some(vader)) = (&luke, &vader) {
        let exists = favorite_people::Entity::find()
            .filter(favorite_people::Column::UserId.eq(luke.id))
            .filter(favorite_people::Column::PeopleId.eq(vader.id))
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            favorite_people::ActiveModel {
                user_id: Set(luke.id),
                people_id: Set(vader.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.favorites += 1;
        }
    }

    txn.commit().await?;
    info!(
        "seed done: {} users, {} people, {} planets, {} favorites inserted",
        report.users, report.people, report.planets, report.favorites
    );
    Ok(report)
}

fn new_user(email: &str, username: &str) -> user::ActiveModel {
    user::ActiveModel {
        email: Set(email.to_string()),
        username: Set(username.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
}

fn new_person(name: &str, gender: &str, height: i32, hair_color: &str) -> people::ActiveModel {
    people::ActiveModel {
        name: Set(name.to_string()),
        gender: Set(Some(gender.to_string())),
        height: Set(Some(height)),
        hair_color: Set(Some(hair_color.to_string())),
        ..Default::default()
    }
}

fn new_planet(name: &str, climate: &str, population: i64, terrain: &str) -> planet::ActiveModel {
    planet::ActiveModel {
        name: Set(name.to_string()),
        climate: Set(Some(climate.to_string())),
        population: Set(Some(population)),
        terrain: Set(Some(terrain.to_string())),
        ..Default::default()
    }
}
