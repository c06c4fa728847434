//! Application metadata repository
//!
//! The app_info table is a singleton seeded by migration; reads always take
//! the most recently inserted row.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::Result;
use crate::models::AppInfo;
use crate::schema::app_info;

/// Get the current application metadata row, if one has been seeded.
pub fn get(db: &Database) -> Result<Option<AppInfo>> {
    let conn = db.get_connection()?;

    let info = conn
        .query_row(
            &format!(
                "SELECT * FROM {} ORDER BY {} DESC LIMIT 1",
                app_info::TABLE,
                app_info::ID
            ),
            params![],
            map_app_info_row,
        )
        .optional()?;

    Ok(info)
}

fn map_app_info_row(row: &Row) -> rusqlite::Result<AppInfo> {
    Ok(AppInfo {
        id: row.get(app_info::ID)?,
        name: row.get(app_info::NAME)?,
        version: row.get(app_info::VERSION)?,
        description: row.get(app_info::DESCRIPTION)?,
    })
}
