//! Animal document repository
//!
//! Rows reference files held by the external file store through opaque
//! filename/path keys; the repository never interprets file contents.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::Result;
use crate::models::{AnimalDocument, NewAnimalDocument, UpdateAnimalDocument};
use crate::repository::now;
use crate::schema::animal_documents;

/// List the documents attached to one animal, oldest first (display order).
pub fn list_for_animal(db: &Database, animal_id: i64) -> Result<Vec<AnimalDocument>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} WHERE {} = ? ORDER BY {} ASC",
        animal_documents::TABLE,
        animal_documents::ANIMAL_ID,
        animal_documents::CREATED_AT
    ))?;
    let doc_iter = stmt.query_map(params![animal_id], map_document_row)?;

    let mut results = Vec::new();
    for document in doc_iter {
        results.push(document?);
    }

    Ok(results)
}

/// Get a document by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<AnimalDocument>> {
    let conn = db.get_connection()?;

    let document = conn
        .query_row(
            &format!(
                "SELECT * FROM {} WHERE {} = ?",
                animal_documents::TABLE,
                animal_documents::ID
            ),
            params![id],
            map_document_row,
        )
        .optional()?;

    Ok(document)
}

/// Attach a new document to an animal. A dangling animal_id surfaces as
/// the storage foreign-key error.
pub fn create(db: &Database, new_document: NewAnimalDocument) -> Result<AnimalDocument> {
    let conn = db.get_connection()?;
    let timestamp = now();

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?, ?)",
            animal_documents::TABLE,
            animal_documents::ANIMAL_ID,
            animal_documents::FILENAME,
            animal_documents::ORIGINAL_NAME,
            animal_documents::FILE_PATH,
            animal_documents::FILE_SIZE,
            animal_documents::MIME_TYPE,
            animal_documents::CREATED_AT
        ),
        params![
            new_document.animal_id,
            new_document.filename,
            new_document.original_name,
            new_document.file_path,
            new_document.file_size,
            new_document.mime_type,
            timestamp
        ],
    )?;

    Ok(AnimalDocument {
        id: conn.last_insert_rowid(),
        animal_id: new_document.animal_id,
        filename: new_document.filename,
        original_name: new_document.original_name,
        file_path: new_document.file_path,
        file_size: new_document.file_size,
        mime_type: new_document.mime_type,
        created_at: timestamp,
    })
}

/// Apply a partial update; omitted fields keep their stored value.
pub fn update(
    db: &Database,
    id: i64,
    update: UpdateAnimalDocument,
) -> Result<Option<AnimalDocument>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let merged = AnimalDocument {
        id: current.id,
        animal_id: current.animal_id,
        filename: update.filename.unwrap_or(current.filename),
        original_name: update.original_name.unwrap_or(current.original_name),
        file_path: update.file_path.resolve(current.file_path),
        file_size: update.file_size.resolve(current.file_size),
        mime_type: update.mime_type.resolve(current.mime_type),
        created_at: current.created_at,
    };

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            animal_documents::TABLE,
            animal_documents::FILENAME,
            animal_documents::ORIGINAL_NAME,
            animal_documents::FILE_PATH,
            animal_documents::FILE_SIZE,
            animal_documents::MIME_TYPE,
            animal_documents::ID
        ),
        params![
            merged.filename,
            merged.original_name,
            merged.file_path,
            merged.file_size,
            merged.mime_type,
            id
        ],
    )?;

    Ok(Some(merged))
}

/// Delete a document row. Deleting an id that does not exist is a silent
/// no-op; removing the backing file is the file store's concern.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", animal_documents::TABLE, animal_documents::ID),
        params![id],
    )?;

    Ok(())
}

fn map_document_row(row: &Row) -> rusqlite::Result<AnimalDocument> {
    Ok(AnimalDocument {
        id: row.get(animal_documents::ID)?,
        animal_id: row.get(animal_documents::ANIMAL_ID)?,
        filename: row.get(animal_documents::FILENAME)?,
        original_name: row.get(animal_documents::ORIGINAL_NAME)?,
        file_path: row.get(animal_documents::FILE_PATH)?,
        file_size: row.get(animal_documents::FILE_SIZE)?,
        mime_type: row.get(animal_documents::MIME_TYPE)?,
        created_at: row.get(animal_documents::CREATED_AT)?,
    })
}
