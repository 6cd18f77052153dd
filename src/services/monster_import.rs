use std::io::Read;

use crate::errors::{AppError, AppResult};
use crate::models::monster::NewMonster;

/// Parses a CSV export with the header `name,attack,defense,hp,speed,imageUrl`.
///
/// The whole file is rejected on the first row that does not map onto a monster.
pub fn read_monsters<R: Read>(reader: R) -> AppResult<Vec<NewMonster>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut new_monsters = Vec::new();
    for result in reader.deserialize::<NewMonster>() {
        let monster = result.map_err(|err| {
            tracing::warn!(error = %err, "rejected csv row");
            AppError::WrongDataMapping
        })?;
        monster.validate()?;
        new_monsters.push(monster);
    }

    if new_monsters.is_empty() {
        return Err(AppError::BadRequest("No monsters found in the file.".to_string()));
    }
    Ok(new_monsters)
}
