use crate::errors::{AppError, AppResult};
use crate::models::battle::CreateBattleRequest;
use crate::models::monster::Monster;
use crate::repository::database::Database;
use crate::repository::{battle_repository, monster_repository};
use crate::services::battle_engine;

/// Looks up both participants, resolves the battle, records it in the ledger and
/// returns the winning monster.
///
/// A missing id or an unknown monster fails with [`AppError::MissingId`] before
/// anything is simulated or written.
pub fn start_battle(db: &Database, request: &CreateBattleRequest) -> AppResult<Monster> {
    let (Some(monster_a_id), Some(monster_b_id)) = (request.monster_a, request.monster_b) else {
        return Err(AppError::MissingId);
    };

    let monster_a = monster_repository::get_monster_by_id(db, monster_a_id)?
        .ok_or(AppError::MissingId)?;
    let monster_b = monster_repository::get_monster_by_id(db, monster_b_id)?
        .ok_or(AppError::MissingId)?;

    let battle = battle_repository::create_battle(db, |battle_id| {
        battle_engine::resolve(battle_id, &monster_a, &monster_b)
    })?;
    tracing::info!(
        battle_id = battle.id,
        monster_a = battle.monster_a,
        monster_b = battle.monster_b,
        winner = battle.winner,
        "battle recorded"
    );

    Ok(if battle.winner == monster_a.id { monster_a } else { monster_b })
}
