//! Deterministic battle resolution between two monsters.
//!
//! The engine only ever touches [`Combatant`] working copies taken by value, so the
//! caller's stored [`Monster`] snapshots are never mutated and concurrent battles
//! share no state.

use crate::models::battle::Battle;
use crate::models::monster::Monster;

/// Every blow lands for at least this much, however high the defense.
pub const MIN_DAMAGE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Private working copy of a monster's combat stats for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combatant {
    pub id: i32,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    pub speed: i32,
}

impl From<&Monster> for Combatant {
    fn from(monster: &Monster) -> Self {
        Combatant {
            id: monster.id,
            attack: monster.attack,
            defense: monster.defense,
            hp: monster.hp,
            speed: monster.speed,
        }
    }
}

impl Combatant {
    pub fn is_standing(&self) -> bool {
        self.hp > 0
    }

    pub fn damage_against(&self, defender: &Combatant) -> i32 {
        (self.attack - defender.defense).max(MIN_DAMAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub first: Side,
    pub winner: Side,
    pub turns: u64,
    pub a: Combatant,
    pub b: Combatant,
}

impl Outcome {
    pub fn winner_id(&self) -> i32 {
        match self.winner {
            Side::A => self.a.id,
            Side::B => self.b.id,
        }
    }
}

/// Decides once, before any damage, which side strikes first in every turn.
///
/// A leads unless B is strictly faster, or equally fast with strictly more attack.
pub fn first_attacker(a: &Combatant, b: &Combatant) -> Side {
    if b.speed > a.speed || (b.speed == a.speed && b.attack > a.attack) {
        Side::B
    } else {
        Side::A
    }
}

/// One turn: the attacker strikes, and a defender still standing strikes back.
///
/// Returns the updated `(attacker, defender)` pair.
pub fn exchange(mut attacker: Combatant, mut defender: Combatant) -> (Combatant, Combatant) {
    defender.hp -= attacker.damage_against(&defender);
    if defender.is_standing() {
        attacker.hp -= defender.damage_against(&attacker);
    }
    (attacker, defender)
}

/// Runs turns until one side is down.
///
/// Expects both sides to start with `hp > 0`. Every turn removes at least
/// [`MIN_DAMAGE`] hit points, so the loop always ends, and the attacker only takes
/// damage when the defender survived, so both sides can never fall together.
pub fn simulate(mut a: Combatant, mut b: Combatant) -> Outcome {
    let first = first_attacker(&a, &b);
    let mut turns = 0;

    while a.is_standing() && b.is_standing() {
        (a, b) = match first {
            Side::A => exchange(a, b),
            Side::B => {
                let (b, a) = exchange(b, a);
                (a, b)
            }
        };
        turns += 1;
        tracing::trace!(turn = turns, a_hp = a.hp, b_hp = b.hp, "turn resolved");
    }

    let winner = if a.is_standing() { Side::A } else { Side::B };
    Outcome { first, winner, turns, a, b }
}

/// Fights `monster_a` against `monster_b` and records the result under `battle_id`.
pub fn resolve(battle_id: i32, monster_a: &Monster, monster_b: &Monster) -> Battle {
    let outcome = simulate(Combatant::from(monster_a), Combatant::from(monster_b));
    tracing::debug!(
        battle_id,
        turns = outcome.turns,
        first = ?outcome.first,
        winner = outcome.winner_id(),
        "battle simulated"
    );

    Battle {
        id: battle_id,
        monster_a: monster_a.id,
        monster_b: monster_b.id,
        winner: outcome.winner_id(),
    }
}

/// `current_max + 1`, or 1 for an empty ledger.
pub fn assign_battle_id(current_max: Option<i32>) -> i32 {
    current_max.map_or(1, |max_id| max_id + 1)
}
