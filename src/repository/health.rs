//! Animal health record repository
//!
//! Insemination and deworming events per animal, plus the derived
//! "upcoming events" view: future insemination deliveries and future
//! dewormings across the whole herd, merged and sorted.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::Result;
use crate::models::{HealthRecord, NewHealthRecord, UpcomingEvent, UpdateHealthRecord};
use crate::repository::now;
use crate::schema::{animal_health_records as health, animals};

/// Cap on the upcoming-events view.
const UPCOMING_EVENTS_LIMIT: i64 = 10;

/// List the health records of one animal, newest event first.
pub fn list_for_animal(db: &Database, animal_id: i64) -> Result<Vec<HealthRecord>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} WHERE {} = ? ORDER BY {} DESC, {} DESC",
        health::TABLE,
        health::ANIMAL_ID,
        health::DATE,
        health::CREATED_AT
    ))?;
    let record_iter = stmt.query_map(params![animal_id], map_record_row)?;

    let mut results = Vec::new();
    for record in record_iter {
        results.push(record?);
    }

    Ok(results)
}

/// Get a health record by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<HealthRecord>> {
    let conn = db.get_connection()?;

    let record = conn
        .query_row(
            &format!("SELECT * FROM {} WHERE {} = ?", health::TABLE, health::ID),
            params![id],
            map_record_row,
        )
        .optional()?;

    Ok(record)
}

/// Create a new health record. A dangling animal_id surfaces as the
/// storage foreign-key error.
pub fn create(db: &Database, new_record: NewHealthRecord) -> Result<HealthRecord> {
    let conn = db.get_connection()?;
    let timestamp = now();

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?, ?)",
            health::TABLE,
            health::ANIMAL_ID,
            health::RECORD_TYPE,
            health::DATE,
            health::EXPECTED_DELIVERY_DATE,
            health::NOTES,
            health::CREATED_AT,
            health::UPDATED_AT
        ),
        params![
            new_record.animal_id,
            new_record.record_type,
            new_record.date,
            new_record.expected_delivery_date,
            new_record.notes,
            timestamp,
            timestamp
        ],
    )?;

    Ok(HealthRecord {
        id: conn.last_insert_rowid(),
        animal_id: new_record.animal_id,
        record_type: new_record.record_type,
        date: new_record.date,
        expected_delivery_date: new_record.expected_delivery_date,
        notes: new_record.notes,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Apply a partial update; omitted fields keep their stored value.
pub fn update(db: &Database, id: i64, update: UpdateHealthRecord) -> Result<Option<HealthRecord>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let merged = HealthRecord {
        id: current.id,
        animal_id: current.animal_id,
        record_type: update.record_type.unwrap_or(current.record_type),
        date: update.date.unwrap_or(current.date),
        expected_delivery_date: update
            .expected_delivery_date
            .resolve(current.expected_delivery_date),
        notes: update.notes.resolve(current.notes),
        created_at: current.created_at,
        updated_at: now(),
    };

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            health::TABLE,
            health::RECORD_TYPE,
            health::DATE,
            health::EXPECTED_DELIVERY_DATE,
            health::NOTES,
            health::UPDATED_AT,
            health::ID
        ),
        params![
            merged.record_type,
            merged.date,
            merged.expected_delivery_date,
            merged.notes,
            merged.updated_at,
            id
        ],
    )?;

    Ok(Some(merged))
}

/// Delete a health record. Deleting an id that does not exist is a silent
/// no-op.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", health::TABLE, health::ID),
        params![id],
    )?;

    Ok(())
}

/// The next events across the whole herd, strictly after `after`:
/// insemination rows contribute their expected delivery date, deworming
/// rows their record date. Ascending by event date, capped at ten.
pub fn upcoming_events(db: &Database, after: NaiveDate) -> Result<Vec<UpcomingEvent>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT h.{id} AS record_id, h.{animal_id} AS animal_id, a.{animal_name} AS animal_name,
                h.{record_type} AS record_type, h.{delivery} AS event_date, h.{notes} AS notes
         FROM {records} h
         JOIN {animals} a ON a.{a_id} = h.{animal_id}
         WHERE h.{record_type} = 'insemination' AND h.{delivery} IS NOT NULL AND h.{delivery} > ?
         UNION ALL
         SELECT h.{id}, h.{animal_id}, a.{animal_name}, h.{record_type}, h.{date}, h.{notes}
         FROM {records} h
         JOIN {animals} a ON a.{a_id} = h.{animal_id}
         WHERE h.{record_type} = 'deworming' AND h.{date} > ?
         ORDER BY event_date ASC
         LIMIT ?",
        id = health::ID,
        animal_id = health::ANIMAL_ID,
        animal_name = animals::NAME,
        record_type = health::RECORD_TYPE,
        delivery = health::EXPECTED_DELIVERY_DATE,
        notes = health::NOTES,
        date = health::DATE,
        records = health::TABLE,
        animals = animals::TABLE,
        a_id = animals::ID,
    ))?;

    let event_iter = stmt.query_map(params![after, after, UPCOMING_EVENTS_LIMIT], |row| {
        Ok(UpcomingEvent {
            record_id: row.get("record_id")?,
            animal_id: row.get("animal_id")?,
            animal_name: row.get("animal_name")?,
            record_type: row.get("record_type")?,
            event_date: row.get("event_date")?,
            notes: row.get("notes")?,
        })
    })?;

    let mut results = Vec::new();
    for event in event_iter {
        results.push(event?);
    }

    Ok(results)
}

fn map_record_row(row: &Row) -> rusqlite::Result<HealthRecord> {
    Ok(HealthRecord {
        id: row.get(health::ID)?,
        animal_id: row.get(health::ANIMAL_ID)?,
        record_type: row.get(health::RECORD_TYPE)?,
        date: row.get(health::DATE)?,
        expected_delivery_date: row.get(health::EXPECTED_DELIVERY_DATE)?,
        notes: row.get(health::NOTES)?,
        created_at: row.get(health::CREATED_AT)?,
        updated_at: row.get(health::UPDATED_AT)?,
    })
}
