//! Animal type repository
//!
//! Types are the parent of animals; the storage layer cascades a type
//! deletion to its animals. The name column is unique and a duplicate
//! surfaces as the storage constraint error, unmodified.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::Result;
use crate::models::{AnimalType, NewAnimalType, TypeCount, UpdateAnimalType};
use crate::repository::now;
use crate::schema::{animal_types, animals};

/// List all types ordered by name.
pub fn list(db: &Database) -> Result<Vec<AnimalType>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} ORDER BY {} ASC",
        animal_types::TABLE,
        animal_types::NAME
    ))?;
    let type_iter = stmt.query_map(params![], map_type_row)?;

    let mut results = Vec::new();
    for animal_type in type_iter {
        results.push(animal_type?);
    }

    Ok(results)
}

/// Get a type by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<AnimalType>> {
    let conn = db.get_connection()?;

    let animal_type = conn
        .query_row(
            &format!("SELECT * FROM {} WHERE {} = ?", animal_types::TABLE, animal_types::ID),
            params![id],
            map_type_row,
        )
        .optional()?;

    Ok(animal_type)
}

/// Create a new type.
pub fn create(db: &Database, new_type: NewAnimalType) -> Result<AnimalType> {
    let conn = db.get_connection()?;
    let timestamp = now();

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            animal_types::TABLE,
            animal_types::NAME,
            animal_types::DESCRIPTION,
            animal_types::CREATED_AT,
            animal_types::UPDATED_AT
        ),
        params![new_type.name, new_type.description, timestamp, timestamp],
    )?;

    Ok(AnimalType {
        id: conn.last_insert_rowid(),
        name: new_type.name,
        description: new_type.description,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Apply a partial update to a type; omitted fields keep their stored value.
pub fn update(db: &Database, id: i64, update: UpdateAnimalType) -> Result<Option<AnimalType>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let merged = AnimalType {
        id: current.id,
        name: update.name.unwrap_or(current.name),
        description: update.description.resolve(current.description),
        created_at: current.created_at,
        updated_at: now(),
    };

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ? WHERE {} = ?",
            animal_types::TABLE,
            animal_types::NAME,
            animal_types::DESCRIPTION,
            animal_types::UPDATED_AT,
            animal_types::ID
        ),
        params![merged.name, merged.description, merged.updated_at, id],
    )?;

    Ok(Some(merged))
}

/// Delete a type. Dependent animals are removed by the storage cascade.
/// Deleting an id that does not exist is a silent no-op.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", animal_types::TABLE, animal_types::ID),
        params![id],
    )?;

    Ok(())
}

/// Animal counts per type, zero-filled: a type with no animals appears
/// with a count of 0. Ordered by type name.
pub fn counts(db: &Database) -> Result<Vec<TypeCount>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&count_query("ORDER BY t.name ASC"))?;
    let count_iter = stmt.query_map(params![], map_count_row)?;

    let mut results = Vec::new();
    for count in count_iter {
        results.push(count?);
    }

    Ok(results)
}

/// The type with the most animals. Ties break deterministically on name.
pub fn most_common(db: &Database) -> Result<Option<TypeCount>> {
    let conn = db.get_connection()?;

    let most_common = conn
        .query_row(
            &count_query("ORDER BY animal_count DESC, t.name ASC LIMIT 1"),
            params![],
            map_count_row,
        )
        .optional()?;

    Ok(most_common)
}

fn count_query(tail: &str) -> String {
    format!(
        "SELECT t.{type_id} AS type_id, t.{name} AS name, COUNT(a.{animal_id}) AS animal_count
         FROM {types} t
         LEFT JOIN {animals} a ON a.{fk} = t.{type_id}
         GROUP BY t.{type_id}, t.{name} {tail}",
        type_id = animal_types::ID,
        name = animal_types::NAME,
        animal_id = animals::ID,
        types = animal_types::TABLE,
        animals = animals::TABLE,
        fk = animals::TYPE_ID,
    )
}

fn map_type_row(row: &Row) -> rusqlite::Result<AnimalType> {
    Ok(AnimalType {
        id: row.get(animal_types::ID)?,
        name: row.get(animal_types::NAME)?,
        description: row.get(animal_types::DESCRIPTION)?,
        created_at: row.get(animal_types::CREATED_AT)?,
        updated_at: row.get(animal_types::UPDATED_AT)?,
    })
}

fn map_count_row(row: &Row) -> rusqlite::Result<TypeCount> {
    Ok(TypeCount {
        type_id: row.get("type_id")?,
        name: row.get("name")?,
        count: row.get("animal_count")?,
    })
}
