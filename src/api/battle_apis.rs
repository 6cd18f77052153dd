use actix_web::{web, get, post, delete, HttpResponse};
use crate::errors::{AppError, AppResult};
use crate::models::battle::CreateBattleRequest;
use crate::repository::battle_repository;
use crate::repository::database::Database;
use crate::services::battle_service;

#[get("/battle")]
pub async fn get_battles(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let battles = web::block(move || battle_repository::get_battles(&db)).await??;
    Ok(HttpResponse::Ok().json(battles))
}

#[get("/battle/{id}")]
pub async fn get_battle_by_id(db: web::Data<Database>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let battle_id = id.into_inner();
    let battle = web::block(move || battle_repository::get_battle_by_id(&db, battle_id)).await??;
    match battle {
        Some(battle) => Ok(HttpResponse::Ok().json(battle)),
        None => Err(AppError::BattleNotFound(battle_id)),
    }
}

/// Fights the two requested monsters and answers with the winner.
#[post("/battle")]
pub async fn create_battle(
    db: web::Data<Database>,
    battle_request: web::Json<CreateBattleRequest>,
) -> AppResult<HttpResponse> {
    let battle_request = battle_request.into_inner();
    let winner = web::block(move || battle_service::start_battle(&db, &battle_request)).await??;
    Ok(HttpResponse::Ok().json(winner))
}

#[delete("/battle/{id}")]
pub async fn delete_battle_by_id(db: web::Data<Database>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let battle_id = id.into_inner();
    match web::block(move || battle_repository::delete_battle_by_id(&db, battle_id)).await?? {
        Some(_) => Ok(HttpResponse::Ok().finish()),
        None => Err(AppError::BattleNotFound(battle_id)),
    }
}
