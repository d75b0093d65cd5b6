pub mod config;
pub mod current_user;
pub mod db;
pub mod entity;
pub mod error;
pub mod response;
pub mod routes;
pub mod seed;
