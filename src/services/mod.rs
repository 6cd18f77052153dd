pub mod battle_engine;
pub mod battle_service;
pub mod monster_import;
