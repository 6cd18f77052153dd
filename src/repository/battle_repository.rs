use diesel::dsl::max;
use diesel::prelude::*;
use diesel::SqliteConnection;
use crate::errors::{AppError, AppResult};
use crate::models::battle::Battle;
use crate::repository::schema::battles::dsl::*;
use crate::repository::database::Database;
use crate::services::battle_engine;

pub fn get_battles(db: &Database) -> AppResult<Vec<Battle>> {
    let mut connection = db.get_connection()?;
    Ok(battles.order(id.asc()).load::<Battle>(&mut connection)?)
}

pub fn get_battle_by_id(db: &Database, battle_id: i32) -> AppResult<Option<Battle>> {
    let mut connection = db.get_connection()?;
    Ok(battles
        .find(battle_id)
        .get_result::<Battle>(&mut connection)
        .optional()?)
}

pub fn delete_battle_by_id(db: &Database, battle_id: i32) -> AppResult<Option<usize>> {
    let mut connection = db.get_connection()?;
    let count = diesel::delete(battles.find(battle_id)).execute(&mut connection)?;
    Ok((count > 0).then_some(count))
}

/// The id the next recorded battle would receive. Advisory only: use
/// [`create_battle`] to actually claim it.
pub fn next_battle_id(db: &Database) -> AppResult<i32> {
    let mut connection = db.get_connection()?;
    Ok(next_id(&mut connection)?)
}

/// Appends the battle built by `resolve` under the next free id.
///
/// The max-id read and the insert share one `BEGIN IMMEDIATE` transaction, so the
/// database write lock is held from the read onwards and concurrent callers are
/// queued behind each other instead of racing for the same id.
pub fn create_battle<F>(db: &Database, resolve: F) -> AppResult<Battle>
where
    F: FnOnce(i32) -> Battle,
{
    let mut connection = db.get_connection()?;
    connection.immediate_transaction::<_, AppError, _>(|conn| {
        let battle = resolve(next_id(conn)?);
        diesel::insert_into(battles).values(&battle).execute(conn)?;
        Ok(battle)
    })
}

fn next_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    let current_max = battles.select(max(id)).first::<Option<i32>>(conn)?;
    Ok(battle_engine::assign_battle_id(current_max))
}
