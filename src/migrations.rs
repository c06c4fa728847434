//! Schema migrations
//!
//! An ordered list of versioned migrations tracked in the
//! `schema_migrations` marker table. The runner is safe to call on every
//! startup: applied versions are skipped, and the individual steps are
//! written defensively (`IF NOT EXISTS` table creation, column-presence
//! introspection before `ALTER`, NOT-NULL introspection before a table
//! rebuild) so databases created before version tracking existed still
//! converge to the target shape.
//!
//! A failed step is rolled back and logged; later steps are skipped and the
//! resulting [`SchemaStatus`] records the degradation instead of aborting
//! startup.

use chrono::Utc;
use rusqlite::{params, Connection, Transaction};
use tracing::{info, warn};

use crate::models::SchemaStatus;
use crate::schema::schema_migrations;

struct Migration {
    version: i64,
    name: &'static str,
    apply: fn(&Transaction<'_>) -> rusqlite::Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration { version: 1, name: "create_tables", apply: create_tables },
    Migration { version: 2, name: "add_animal_image", apply: add_animal_image },
    Migration { version: 3, name: "relax_animal_age", apply: relax_animal_age },
    Migration { version: 4, name: "seed_app_info", apply: seed_app_info },
];

/// Bring the schema up to date, applying every unapplied migration in order.
///
/// Never returns an error: failures are recorded on the returned status so
/// the application can start against whatever schema state resulted.
pub fn run(conn: &mut Connection) -> SchemaStatus {
    if let Err(err) = ensure_marker_table(conn) {
        warn!(error = %err, "could not create migration marker table");
        return SchemaStatus {
            version: 0,
            degraded: true,
            failures: vec![format!("marker table: {err}")],
        };
    }

    let mut version = current_version(conn).unwrap_or(0);
    let mut failures = Vec::new();

    // Table rebuilds drop and recreate the animals table; with enforcement
    // on, the drop would fire ON DELETE CASCADE into the child tables.
    if let Err(err) = conn.execute_batch("PRAGMA foreign_keys = OFF;") {
        warn!(error = %err, "could not suspend foreign keys for migration");
    }

    for migration in MIGRATIONS {
        if migration.version <= version {
            continue;
        }
        match apply_migration(conn, migration) {
            Ok(()) => {
                info!(version = migration.version, name = migration.name, "migration applied");
                version = migration.version;
            }
            Err(err) => {
                warn!(
                    version = migration.version,
                    name = migration.name,
                    error = %err,
                    "migration failed, continuing with previous schema"
                );
                failures.push(format!("{} (v{}): {err}", migration.name, migration.version));
                break;
            }
        }
    }

    if let Err(err) = conn.execute_batch("PRAGMA foreign_keys = ON;") {
        warn!(error = %err, "could not re-enable foreign keys after migration");
        failures.push(format!("re-enable foreign keys: {err}"));
    }

    SchemaStatus { version, degraded: !failures.is_empty(), failures }
}

fn ensure_marker_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {} ({} INTEGER PRIMARY KEY, {} TEXT NOT NULL, {} TEXT NOT NULL)",
            schema_migrations::TABLE,
            schema_migrations::VERSION,
            schema_migrations::NAME,
            schema_migrations::APPLIED_AT
        ),
        params![],
    )?;
    Ok(())
}

fn current_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row(
        &format!(
            "SELECT COALESCE(MAX({}), 0) FROM {}",
            schema_migrations::VERSION,
            schema_migrations::TABLE
        ),
        params![],
        |row| row.get(0),
    )
}

fn apply_migration(conn: &mut Connection, migration: &Migration) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;

    if let Err(err) = (migration.apply)(&tx) {
        if let Err(rollback_err) = tx.rollback() {
            warn!(
                version = migration.version,
                error = %rollback_err,
                "rollback failed after migration error"
            );
        }
        return Err(err);
    }

    tx.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
            schema_migrations::TABLE,
            schema_migrations::VERSION,
            schema_migrations::NAME,
            schema_migrations::APPLIED_AT
        ),
        params![migration.version, migration.name, Utc::now().naive_utc()],
    )?;
    tx.commit()
}

/// Does `table` carry a column named `column`?
fn column_exists(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query(params![])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Is `column` declared NOT NULL on `table`?
fn column_is_not_null(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query(params![])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            let not_null: i64 = row.get("notnull")?;
            return Ok(not_null != 0);
        }
    }
    Ok(false)
}

fn create_tables(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    tx.execute_batch(include_str!("../migrations/2025-06-01-000000_create_tables/up.sql"))
}

fn add_animal_image(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    if !column_exists(tx, "animals", "image")? {
        tx.execute("ALTER TABLE animals ADD COLUMN image TEXT", params![])?;
    }
    Ok(())
}

/// Legacy databases declared `animals.age` NOT NULL. SQLite cannot drop a
/// NOT NULL in place, so the table is rebuilt through a shadow copy and
/// renamed over the original.
fn relax_animal_age(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    if !column_is_not_null(tx, "animals", "age")? {
        return Ok(());
    }

    tx.execute_batch(
        "CREATE TABLE animals_rebuild (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tag_number TEXT,
            name TEXT NOT NULL,
            breed TEXT,
            father_breed TEXT,
            mother_breed TEXT,
            gender TEXT NOT NULL DEFAULT 'UNKNOWN',
            date_of_birth TEXT,
            weight REAL,
            height REAL,
            acquisition_date TEXT,
            acquisition_location TEXT,
            exit_date TEXT,
            exit_reason TEXT,
            age INTEGER,
            type_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            image TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (type_id) REFERENCES animal_types (id) ON DELETE CASCADE
        );
        INSERT INTO animals_rebuild (
            id, tag_number, name, breed, father_breed, mother_breed, gender,
            date_of_birth, weight, height, acquisition_date, acquisition_location,
            exit_date, exit_reason, age, type_id, description, image,
            created_at, updated_at
        )
        SELECT
            id, tag_number, name, breed, father_breed, mother_breed, gender,
            date_of_birth, weight, height, acquisition_date, acquisition_location,
            exit_date, exit_reason, age, type_id, description, image,
            created_at, updated_at
        FROM animals;
        DROP TABLE animals;
        ALTER TABLE animals_rebuild RENAME TO animals;
        CREATE INDEX IF NOT EXISTS idx_animals_type_id ON animals (type_id);",
    )
}

fn seed_app_info(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM app_info", params![], |row| row.get(0))?;
    if existing == 0 {
        tx.execute(
            "INSERT INTO app_info (name, version, description) VALUES (?, ?, ?)",
            params![
                "Farmstead",
                env!("CARGO_PKG_VERSION"),
                "Farm record keeping for animals, cashflow and milk production"
            ],
        )?;
    }
    Ok(())
}
