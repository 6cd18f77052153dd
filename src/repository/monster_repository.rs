use chrono::prelude::*;
use diesel::prelude::*;
use crate::errors::AppResult;
use crate::models::monster::{Monster, MonsterChanges, NewMonster};
use crate::repository::schema::monsters::dsl::*;
use crate::repository::database::Database;

pub fn get_monsters(db: &Database) -> AppResult<Vec<Monster>> {
    let mut connection = db.get_connection()?;
    Ok(monsters.order(id.asc()).load::<Monster>(&mut connection)?)
}

pub fn get_monster_by_id(db: &Database, monster_id: i32) -> AppResult<Option<Monster>> {
    let mut connection = db.get_connection()?;
    Ok(monsters
        .find(monster_id)
        .get_result::<Monster>(&mut connection)
        .optional()?)
}

pub fn create_monster(db: &Database, monster: NewMonster) -> AppResult<Monster> {
    let mut connection = db.get_connection()?;
    Ok(diesel::insert_into(monsters)
        .values(&monster)
        .get_result::<Monster>(&mut connection)?)
}

/// Inserts every monster or none of them.
pub fn create_monsters(db: &Database, new_monsters: Vec<NewMonster>) -> AppResult<Vec<Monster>> {
    let mut connection = db.get_connection()?;
    connection.transaction(|conn| {
        new_monsters
            .iter()
            .map(|monster| {
                diesel::insert_into(monsters)
                    .values(monster)
                    .get_result::<Monster>(conn)
            })
            .collect::<QueryResult<Vec<Monster>>>()
    })
    .map_err(Into::into)
}

pub fn update_monster_by_id(
    db: &Database,
    monster_id: i32,
    mut changes: MonsterChanges,
) -> AppResult<Option<Monster>> {
    let mut connection = db.get_connection()?;
    changes.updated_at = Some(Utc::now().naive_utc());
    Ok(diesel::update(monsters.find(monster_id))
        .set(&changes)
        .get_result::<Monster>(&mut connection)
        .optional()?)
}

pub fn delete_monster_by_id(db: &Database, monster_id: i32) -> AppResult<Option<usize>> {
    let mut connection = db.get_connection()?;
    let count = diesel::delete(monsters.find(monster_id)).execute(&mut connection)?;
    Ok((count > 0).then_some(count))
}
