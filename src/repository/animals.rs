//! Animal repository
//!
//! Every read joins the animal_types table so the returned domain object
//! carries its nested type details. The join is a LEFT JOIN: a missing type
//! row yields an omitted sub-object, never a partially populated one.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::{FarmError, Result};
use crate::models::{Animal, AnimalTypeRef, NewAnimal, UpdateAnimal};
use crate::repository::now;
use crate::schema::{animal_types, animals};

fn select_query(tail: &str) -> String {
    format!(
        "SELECT a.*, t.{type_name} AS type_name, t.{type_description} AS type_description
         FROM {animals} a
         LEFT JOIN {types} t ON a.{fk} = t.{type_id} {tail}",
        type_name = animal_types::NAME,
        type_description = animal_types::DESCRIPTION,
        animals = animals::TABLE,
        types = animal_types::TABLE,
        fk = animals::TYPE_ID,
        type_id = animal_types::ID,
    )
}

/// List all animals with their type details.
pub fn list(db: &Database) -> Result<Vec<Animal>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&select_query("ORDER BY a.id ASC"))?;
    let animal_iter = stmt.query_map(params![], map_animal_row)?;

    let mut results = Vec::new();
    for animal in animal_iter {
        results.push(animal?);
    }

    Ok(results)
}

/// List the animals of one type.
pub fn list_by_type(db: &Database, type_id: i64) -> Result<Vec<Animal>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&select_query("WHERE a.type_id = ? ORDER BY a.id ASC"))?;
    let animal_iter = stmt.query_map(params![type_id], map_animal_row)?;

    let mut results = Vec::new();
    for animal in animal_iter {
        results.push(animal?);
    }

    Ok(results)
}

/// Get an animal by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<Animal>> {
    let conn = db.get_connection()?;

    let animal = conn
        .query_row(&select_query("WHERE a.id = ?"), params![id], map_animal_row)
        .optional()?;

    Ok(animal)
}

/// Create a new animal. A missing or dangling type_id surfaces as the
/// storage foreign-key error.
pub fn create(db: &Database, new_animal: NewAnimal) -> Result<Animal> {
    let conn = db.get_connection()?;
    let timestamp = now();

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            animals::TABLE,
            animals::TAG_NUMBER,
            animals::NAME,
            animals::BREED,
            animals::FATHER_BREED,
            animals::MOTHER_BREED,
            animals::GENDER,
            animals::DATE_OF_BIRTH,
            animals::WEIGHT,
            animals::HEIGHT,
            animals::ACQUISITION_DATE,
            animals::ACQUISITION_LOCATION,
            animals::EXIT_DATE,
            animals::EXIT_REASON,
            animals::AGE,
            animals::TYPE_ID,
            animals::DESCRIPTION,
            animals::IMAGE,
            animals::CREATED_AT,
            animals::UPDATED_AT
        ),
        params![
            new_animal.tag_number,
            new_animal.name,
            new_animal.breed,
            new_animal.father_breed,
            new_animal.mother_breed,
            new_animal.gender,
            new_animal.date_of_birth,
            new_animal.weight,
            new_animal.height,
            new_animal.acquisition_date,
            new_animal.acquisition_location,
            new_animal.exit_date,
            new_animal.exit_reason,
            new_animal.age,
            new_animal.type_id,
            new_animal.description,
            new_animal.image,
            timestamp,
            timestamp
        ],
    )?;

    let id = conn.last_insert_rowid();
    drop(conn);

    get_by_id(db, id)?
        .ok_or_else(|| FarmError::Other("Failed to retrieve newly inserted animal".to_string()))
}

/// Apply a partial update; omitted fields keep their stored value and
/// explicitly null fields are cleared. Returns the refreshed row, or None
/// when the id does not exist.
pub fn update(db: &Database, id: i64, update: UpdateAnimal) -> Result<Option<Animal>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let tag_number = update.tag_number.resolve(current.tag_number);
    let name = update.name.unwrap_or(current.name);
    let breed = update.breed.resolve(current.breed);
    let father_breed = update.father_breed.resolve(current.father_breed);
    let mother_breed = update.mother_breed.resolve(current.mother_breed);
    let gender = update.gender.unwrap_or(current.gender);
    let date_of_birth = update.date_of_birth.resolve(current.date_of_birth);
    let weight = update.weight.resolve(current.weight);
    let height = update.height.resolve(current.height);
    let acquisition_date = update.acquisition_date.resolve(current.acquisition_date);
    let acquisition_location = update.acquisition_location.resolve(current.acquisition_location);
    let exit_date = update.exit_date.resolve(current.exit_date);
    let exit_reason = update.exit_reason.resolve(current.exit_reason);
    let age = update.age.resolve(current.age);
    let type_id = update.type_id.unwrap_or(current.type_id);
    let description = update.description.unwrap_or(current.description);
    let image = update.image.resolve(current.image);

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?,
             {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            animals::TABLE,
            animals::TAG_NUMBER,
            animals::NAME,
            animals::BREED,
            animals::FATHER_BREED,
            animals::MOTHER_BREED,
            animals::GENDER,
            animals::DATE_OF_BIRTH,
            animals::WEIGHT,
            animals::HEIGHT,
            animals::ACQUISITION_DATE,
            animals::ACQUISITION_LOCATION,
            animals::EXIT_DATE,
            animals::EXIT_REASON,
            animals::AGE,
            animals::TYPE_ID,
            animals::DESCRIPTION,
            animals::IMAGE,
            animals::UPDATED_AT,
            animals::ID
        ),
        params![
            tag_number,
            name,
            breed,
            father_breed,
            mother_breed,
            gender,
            date_of_birth,
            weight,
            height,
            acquisition_date,
            acquisition_location,
            exit_date,
            exit_reason,
            age,
            type_id,
            description,
            image,
            now(),
            id
        ],
    )?;
    drop(conn);

    // Re-read so a changed type_id reflects the new joined type details.
    get_by_id(db, id)
}

/// Delete an animal. Deleting an id that does not exist is a silent no-op.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", animals::TABLE, animals::ID),
        params![id],
    )?;

    Ok(())
}

/// Total number of animals.
pub fn count(db: &Database) -> Result<i64> {
    let conn = db.get_connection()?;

    let total = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", animals::TABLE),
        params![],
        |row| row.get(0),
    )?;

    Ok(total)
}

fn map_animal_row(row: &Row) -> rusqlite::Result<Animal> {
    let type_name: Option<String> = row.get("type_name")?;
    let type_description: Option<String> = row.get("type_description")?;

    Ok(Animal {
        id: row.get(animals::ID)?,
        tag_number: row.get(animals::TAG_NUMBER)?,
        name: row.get(animals::NAME)?,
        breed: row.get(animals::BREED)?,
        father_breed: row.get(animals::FATHER_BREED)?,
        mother_breed: row.get(animals::MOTHER_BREED)?,
        gender: row.get(animals::GENDER)?,
        date_of_birth: row.get(animals::DATE_OF_BIRTH)?,
        weight: row.get(animals::WEIGHT)?,
        height: row.get(animals::HEIGHT)?,
        acquisition_date: row.get(animals::ACQUISITION_DATE)?,
        acquisition_location: row.get(animals::ACQUISITION_LOCATION)?,
        exit_date: row.get(animals::EXIT_DATE)?,
        exit_reason: row.get(animals::EXIT_REASON)?,
        age: row.get(animals::AGE)?,
        type_id: row.get(animals::TYPE_ID)?,
        description: row.get(animals::DESCRIPTION)?,
        image: row.get(animals::IMAGE)?,
        animal_type: type_name.map(|name| AnimalTypeRef { name, description: type_description }),
        created_at: row.get(animals::CREATED_AT)?,
        updated_at: row.get(animals::UPDATED_AT)?,
    })
}
