//! Milk production repository
//!
//! total_amount is storage-resident and recomputed from the morning and
//! evening yields on every write, including updates that change only one
//! of the two.

use chrono::{Days, NaiveDate};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::Result;
use crate::models::{MilkRecord, MilkStats, NewMilkRecord, UpdateMilkRecord};
use crate::repository::now;
use crate::schema::milk_production as milk;

/// List all production records, newest date first, then by animal.
pub fn list(db: &Database) -> Result<Vec<MilkRecord>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} ORDER BY {} DESC, {} ASC",
        milk::TABLE,
        milk::DATE,
        milk::ANIMAL_ID
    ))?;
    let record_iter = stmt.query_map(params![], map_milk_row)?;

    let mut results = Vec::new();
    for record in record_iter {
        results.push(record?);
    }

    Ok(results)
}

/// List the production records of one animal, newest date first.
pub fn list_for_animal(db: &Database, animal_id: i64) -> Result<Vec<MilkRecord>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} WHERE {} = ? ORDER BY {} DESC",
        milk::TABLE,
        milk::ANIMAL_ID,
        milk::DATE
    ))?;
    let record_iter = stmt.query_map(params![animal_id], map_milk_row)?;

    let mut results = Vec::new();
    for record in record_iter {
        results.push(record?);
    }

    Ok(results)
}

/// Get a production record by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<MilkRecord>> {
    let conn = db.get_connection()?;

    let record = conn
        .query_row(
            &format!("SELECT * FROM {} WHERE {} = ?", milk::TABLE, milk::ID),
            params![id],
            map_milk_row,
        )
        .optional()?;

    Ok(record)
}

/// Create a new production record; the stored total is morning + evening.
pub fn create(db: &Database, new_record: NewMilkRecord) -> Result<MilkRecord> {
    let conn = db.get_connection()?;
    let timestamp = now();
    let total_amount = new_record.morning_amount + new_record.evening_amount;

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            milk::TABLE,
            milk::ANIMAL_ID,
            milk::DATE,
            milk::MORNING_AMOUNT,
            milk::EVENING_AMOUNT,
            milk::TOTAL_AMOUNT,
            milk::NOTES,
            milk::CREATED_AT,
            milk::UPDATED_AT
        ),
        params![
            new_record.animal_id,
            new_record.date,
            new_record.morning_amount,
            new_record.evening_amount,
            total_amount,
            new_record.notes,
            timestamp,
            timestamp
        ],
    )?;

    Ok(MilkRecord {
        id: conn.last_insert_rowid(),
        animal_id: new_record.animal_id,
        date: new_record.date,
        morning_amount: new_record.morning_amount,
        evening_amount: new_record.evening_amount,
        total_amount,
        notes: new_record.notes,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Apply a partial update; the stored total is recomputed from the merged
/// morning and evening yields.
pub fn update(db: &Database, id: i64, update: UpdateMilkRecord) -> Result<Option<MilkRecord>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let morning_amount = update.morning_amount.unwrap_or(current.morning_amount);
    let evening_amount = update.evening_amount.unwrap_or(current.evening_amount);
    let merged = MilkRecord {
        id: current.id,
        animal_id: current.animal_id,
        date: update.date.unwrap_or(current.date),
        morning_amount,
        evening_amount,
        total_amount: morning_amount + evening_amount,
        notes: update.notes.resolve(current.notes),
        created_at: current.created_at,
        updated_at: now(),
    };

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            milk::TABLE,
            milk::DATE,
            milk::MORNING_AMOUNT,
            milk::EVENING_AMOUNT,
            milk::TOTAL_AMOUNT,
            milk::NOTES,
            milk::UPDATED_AT,
            milk::ID
        ),
        params![
            merged.date,
            merged.morning_amount,
            merged.evening_amount,
            merged.total_amount,
            merged.notes,
            merged.updated_at,
            id
        ],
    )?;

    Ok(Some(merged))
}

/// Delete a production record. Deleting an id that does not exist is a
/// silent no-op.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", milk::TABLE, milk::ID),
        params![id],
    )?;

    Ok(())
}

/// Count, sum and average over all records, plus the total for the seven
/// days ending at `today` (inclusive).
pub fn stats(db: &Database, today: NaiveDate) -> Result<MilkStats> {
    let conn = db.get_connection()?;
    let window_start = today.checked_sub_days(Days::new(6)).unwrap_or(today);

    let stats = conn.query_row(
        &format!(
            "SELECT
                COUNT(*) AS record_count,
                COALESCE(SUM({total}), 0) AS total_amount,
                COALESCE(AVG({total}), 0) AS average_amount,
                COALESCE(SUM(CASE WHEN {date} >= ? AND {date} <= ? THEN {total} ELSE 0 END), 0)
                    AS last_seven_days
             FROM {table}",
            total = milk::TOTAL_AMOUNT,
            date = milk::DATE,
            table = milk::TABLE,
        ),
        params![window_start, today],
        |row| {
            Ok(MilkStats {
                record_count: row.get("record_count")?,
                total_amount: row.get("total_amount")?,
                average_amount: row.get("average_amount")?,
                last_seven_days: row.get("last_seven_days")?,
            })
        },
    )?;

    Ok(stats)
}

fn map_milk_row(row: &Row) -> rusqlite::Result<MilkRecord> {
    Ok(MilkRecord {
        id: row.get(milk::ID)?,
        animal_id: row.get(milk::ANIMAL_ID)?,
        date: row.get(milk::DATE)?,
        morning_amount: row.get(milk::MORNING_AMOUNT)?,
        evening_amount: row.get(milk::EVENING_AMOUNT)?,
        total_amount: row.get(milk::TOTAL_AMOUNT)?,
        notes: row.get(milk::NOTES)?,
        created_at: row.get(milk::CREATED_AT)?,
        updated_at: row.get(milk::UPDATED_AT)?,
    })
}
