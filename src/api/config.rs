use actix_cors::Cors;
use actix_web::web;
use crate::errors::AppError;
use super::monster_apis::{get_monsters, get_monster_by_id, create_monster, update_monster_by_id, delete_monster_by_id, import_csv};
use super::battle_apis::{get_battles, get_battle_by_id, delete_battle_by_id, create_battle};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(get_monsters)
            .service(create_monster)
            .service(import_csv)
            .service(get_monster_by_id)
            .service(delete_monster_by_id)
            .service(update_monster_by_id)
            .service(get_battles)
            .service(get_battle_by_id)
            .service(delete_battle_by_id)
            .service(create_battle)
    );
}

/// Any origin, method and header may call the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

// Malformed bodies answer with a 400 carrying the parser message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
