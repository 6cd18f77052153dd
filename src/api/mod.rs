pub mod battle_apis;
pub mod config;
pub mod monster_apis;
