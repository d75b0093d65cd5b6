pub mod favorite_people;
pub mod favorite_planet;
pub mod people;
pub mod planet;
pub mod user;

pub mod prelude {
    pub use super::favorite_people::Entity as FavoritePeople;
    pub use super::favorite_planet::Entity as FavoritePlanet;
    pub use super::people::Entity as People;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}
