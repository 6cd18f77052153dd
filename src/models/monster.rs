use serde::{Deserialize, Serialize};
use diesel::{AsChangeset, Insertable, Queryable};
use crate::errors::{AppError, AppResult};
use crate::repository::schema::monsters;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: i32,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    pub speed: i32,
    pub image_url: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

/// Body of `POST /monster` and one row of a CSV import.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = monsters)]
#[serde(rename_all = "camelCase")]
pub struct NewMonster {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    pub speed: i32,
    #[serde(default)]
    pub image_url: String,
}

/// Body of `PUT /monster/{id}`. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = monsters)]
#[serde(rename_all = "camelCase")]
pub struct MonsterChanges {
    pub name: Option<String>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub hp: Option<i32>,
    pub speed: Option<i32>,
    pub image_url: Option<String>,
    #[serde(skip)]
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl NewMonster {
    pub fn validate(&self) -> AppResult<()> {
        check_name(&self.name)?;
        check_stat("attack", self.attack)?;
        check_stat("defense", self.defense)?;
        check_stat("speed", self.speed)?;
        check_hp(self.hp)
    }
}

impl MonsterChanges {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        for (field, value) in [
            ("attack", self.attack),
            ("defense", self.defense),
            ("speed", self.speed),
        ] {
            if let Some(value) = value {
                check_stat(field, value)?;
            }
        }
        match self.hp {
            Some(hp) => check_hp(hp),
            None => Ok(()),
        }
    }
}

fn check_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidMonster("Monster name must not be empty.".to_string()));
    }
    Ok(())
}

fn check_stat(field: &str, value: i32) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::InvalidMonster(format!(
            "Monster {field} must not be negative."
        )));
    }
    Ok(())
}

// A monster with no hit points left could never be resolved in a battle.
fn check_hp(hp: i32) -> AppResult<()> {
    if hp <= 0 {
        return Err(AppError::InvalidMonster("Monster hp must be greater than zero.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_monster() -> NewMonster {
        NewMonster {
            name: "Monster Test".to_string(),
            attack: 50,
            defense: 40,
            hp: 80,
            speed: 60,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_should_accept_a_valid_monster() {
        assert!(new_monster().validate().is_ok());
    }

    #[test]
    fn test_should_reject_a_monster_without_hit_points() {
        let monster = NewMonster { hp: 0, ..new_monster() };

        assert!(matches!(monster.validate(), Err(AppError::InvalidMonster(_))));
    }

    #[test]
    fn test_should_reject_negative_stats_and_blank_names() {
        let negative = NewMonster { defense: -1, ..new_monster() };
        let blank = NewMonster { name: "   ".to_string(), ..new_monster() };

        assert!(negative.validate().is_err());
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_changes_only_check_present_fields() {
        let rename = MonsterChanges {
            name: Some("Monster Update".to_string()),
            ..Default::default()
        };
        let kill = MonsterChanges {
            hp: Some(0),
            ..Default::default()
        };

        assert!(rename.validate().is_ok());
        assert!(kill.validate().is_err());
    }

    #[test]
    fn test_should_deserialize_camel_case_body() {
        let monster: NewMonster = serde_json::from_str(
            r#"{"name":"Old Shark","attack":50,"defense":20,"hp":80,"speed":90,"imageUrl":"shark.png"}"#,
        )
        .unwrap();

        assert_eq!(monster.image_url, "shark.png");
        assert_eq!(monster.speed, 90);
    }
}
