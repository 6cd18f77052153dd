use actix_web::{web, get, post, delete, put, HttpResponse};
use actix_multipart::Multipart;
use futures::TryStreamExt;
use tempfile::NamedTempFile;
use std::io::Write;
use crate::errors::{AppError, AppResult};
use crate::models::monster::{MonsterChanges, NewMonster};
use crate::repository::database::Database;
use crate::repository::monster_repository;
use crate::services::monster_import;

#[get("/monster")]
pub async fn get_monsters(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let monsters = web::block(move || monster_repository::get_monsters(&db)).await??;
    Ok(HttpResponse::Ok().json(monsters))
}

#[post("/monster")]
pub async fn create_monster(db: web::Data<Database>, new_monster: web::Json<NewMonster>) -> AppResult<HttpResponse> {
    let new_monster = new_monster.into_inner();
    new_monster.validate()?;
    let monster = web::block(move || monster_repository::create_monster(&db, new_monster)).await??;
    tracing::info!(monster_id = monster.id, name = %monster.name, "monster created");
    Ok(HttpResponse::Ok().json(monster))
}

#[get("/monster/{id}")]
pub async fn get_monster_by_id(db: web::Data<Database>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let monster_id = id.into_inner();
    match web::block(move || monster_repository::get_monster_by_id(&db, monster_id)).await?? {
        Some(monster) => Ok(HttpResponse::Ok().json(monster)),
        None => Err(AppError::MonsterNotFound(monster_id)),
    }
}

#[delete("/monster/{id}")]
pub async fn delete_monster_by_id(db: web::Data<Database>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let monster_id = id.into_inner();
    match web::block(move || monster_repository::delete_monster_by_id(&db, monster_id)).await?? {
        Some(_) => Ok(HttpResponse::Ok().finish()),
        None => Err(AppError::MonsterNotFound(monster_id)),
    }
}

#[put("/monster/{id}")]
pub async fn update_monster_by_id(
    db: web::Data<Database>,
    id: web::Path<i32>,
    changes: web::Json<MonsterChanges>,
) -> AppResult<HttpResponse> {
    let monster_id = id.into_inner();
    let changes = changes.into_inner();
    changes.validate()?;
    match web::block(move || monster_repository::update_monster_by_id(&db, monster_id, changes)).await?? {
        Some(monster) => Ok(HttpResponse::Ok().json(monster)),
        None => Err(AppError::MonsterNotFound(monster_id)),
    }
}

/// Imports every monster of an uploaded CSV file, or none of them.
#[post("/monster/import-csv")]
pub async fn import_csv(db: web::Data<Database>, mut payload: Multipart) -> AppResult<HttpResponse> {
    let mut temp_file: Option<NamedTempFile> = None;

    while let Some(mut field) = payload.try_next().await? {
        if field.content_disposition().get_filename().is_none() {
            return Err(AppError::BadRequest("No file name provided".to_string()));
        }
        if temp_file.is_some() {
            return Err(AppError::BadRequest("Only one file can be imported at a time".to_string()));
        }

        let mut file = NamedTempFile::new()?;
        while let Some(chunk) = field.try_next().await? {
            file.write_all(&chunk)?;
        }
        temp_file = Some(file);
    }

    let temp_file = temp_file.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let monsters = web::block(move || {
        let new_monsters = monster_import::read_monsters(temp_file.reopen()?)?;
        monster_repository::create_monsters(&db, new_monsters)
    })
    .await??;

    tracing::info!(count = monsters.len(), "monsters imported from csv");
    Ok(HttpResponse::Ok().json(monsters))
}
