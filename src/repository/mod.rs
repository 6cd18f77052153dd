pub mod battle_repository;
pub mod database;
pub mod monster_repository;
pub mod schema;
