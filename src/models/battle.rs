use serde::{Deserialize, Serialize};
use diesel::{Insertable, Queryable};

/// Immutable record of one resolved battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Queryable, Insertable)]
#[diesel(table_name = crate::repository::schema::battles)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: i32,
    pub monster_a: i32,
    pub monster_b: i32,
    pub winner: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBattleRequest {
    pub monster_a: Option<i32>,
    pub monster_b: Option<i32>,
}
