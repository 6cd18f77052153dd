use crate::models::battle::Battle;
use crate::models::monster::{Monster, NewMonster};
use crate::repository::database::Database;
use crate::repository::{battle_repository, monster_repository};
use crate::services::battle_engine;

pub fn test_database() -> Database {
    Database::in_memory().expect("Failed to create the in-memory database")
}

/// Five monsters, in insertion order:
/// 0 and 2 share a defense, 3 and 4 share a speed, 1 outruns everyone.
pub fn fixture_monsters() -> Vec<NewMonster> {
    [
        ("Dead Unicorn", 60, 40, 10, 80),
        ("Old Shark", 50, 20, 80, 90),
        ("Red Dragon", 70, 40, 20, 60),
        ("Robot Bear", 50, 40, 80, 60),
        ("Angel", 40, 40, 100, 60),
    ]
    .into_iter()
    .map(|(name, attack, defense, hp, speed)| NewMonster {
        name: name.to_string(),
        attack,
        defense,
        hp,
        speed,
        image_url: format!("/images/{}.png", name.to_lowercase().replace(' ', "-")),
    })
    .collect()
}

pub fn init_test_monsters(db: &Database) -> Vec<Monster> {
    monster_repository::create_monsters(db, fixture_monsters())
        .expect("Failed to seed test monsters")
}

pub fn init_test_battle(db: &Database) -> Battle {
    let test_monsters = init_test_monsters(db);
    battle_repository::create_battle(db, |battle_id| {
        battle_engine::resolve(battle_id, &test_monsters[0], &test_monsters[1])
    })
    .expect("Failed to seed a test battle")
}
