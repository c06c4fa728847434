//! Cashflow transaction repository
//!
//! The balance is never stored; every summary read recomputes it as the
//! difference of conditional sums over all rows.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row, ToSql};
use serde::Deserialize;

use crate::db::Database;
use crate::error::Result;
use crate::models::{
    CashflowSummary, MonthlyCashflow, NewTransaction, Transaction, TransactionKind,
    UpdateTransaction,
};
use crate::repository::now;
use crate::schema::transactions;

/// Optional filters applied by [`list`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Restrict to one direction
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    /// Inclusive start date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// List transactions, newest first.
pub fn list(db: &Database, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
    let conn = db.get_connection()?;

    // Build query
    let mut query = format!("SELECT * FROM {} WHERE 1 = 1", transactions::TABLE);
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(kind) = filter.kind {
        query.push_str(&format!(" AND {} = ?", transactions::TYPE));
        params.push(Box::new(kind));
    }

    if let Some(start) = filter.start_date {
        query.push_str(&format!(" AND {} >= ?", transactions::DATE));
        params.push(Box::new(start));
    }

    if let Some(end) = filter.end_date {
        query.push_str(&format!(" AND {} <= ?", transactions::DATE));
        params.push(Box::new(end));
    }

    query.push_str(&format!(
        " ORDER BY {} DESC, {} DESC",
        transactions::DATE,
        transactions::CREATED_AT
    ));

    let mut stmt = conn.prepare(&query)?;
    let tx_iter = stmt.query_map(rusqlite::params_from_iter(params.iter()), map_transaction_row)?;

    let mut results = Vec::new();
    for transaction in tx_iter {
        results.push(transaction?);
    }

    Ok(results)
}

/// Get a transaction by id.
pub fn get_by_id(db: &Database, id: i64) -> Result<Option<Transaction>> {
    let conn = db.get_connection()?;

    let transaction = conn
        .query_row(
            &format!("SELECT * FROM {} WHERE {} = ?", transactions::TABLE, transactions::ID),
            params![id],
            map_transaction_row,
        )
        .optional()?;

    Ok(transaction)
}

/// Create a new transaction.
pub fn create(db: &Database, new_transaction: NewTransaction) -> Result<Transaction> {
    let conn = db.get_connection()?;
    let timestamp = now();

    conn.execute(
        &format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?)",
            transactions::TABLE,
            transactions::TYPE,
            transactions::NAME,
            transactions::AMOUNT,
            transactions::DATE,
            transactions::CREATED_AT,
            transactions::UPDATED_AT
        ),
        params![
            new_transaction.kind,
            new_transaction.name,
            new_transaction.amount,
            new_transaction.date,
            timestamp,
            timestamp
        ],
    )?;

    Ok(Transaction {
        id: conn.last_insert_rowid(),
        kind: new_transaction.kind,
        name: new_transaction.name,
        amount: new_transaction.amount,
        date: new_transaction.date,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Apply a partial update; omitted fields keep their stored value.
pub fn update(db: &Database, id: i64, update: UpdateTransaction) -> Result<Option<Transaction>> {
    let Some(current) = get_by_id(db, id)? else {
        return Ok(None);
    };

    let merged = Transaction {
        id: current.id,
        kind: update.kind.unwrap_or(current.kind),
        name: update.name.unwrap_or(current.name),
        amount: update.amount.unwrap_or(current.amount),
        date: update.date.unwrap_or(current.date),
        created_at: current.created_at,
        updated_at: now(),
    };

    let conn = db.get_connection()?;
    conn.execute(
        &format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            transactions::TABLE,
            transactions::TYPE,
            transactions::NAME,
            transactions::AMOUNT,
            transactions::DATE,
            transactions::UPDATED_AT,
            transactions::ID
        ),
        params![merged.kind, merged.name, merged.amount, merged.date, merged.updated_at, id],
    )?;

    Ok(Some(merged))
}

/// Delete a transaction. Deleting an id that does not exist is a silent no-op.
pub fn delete(db: &Database, id: i64) -> Result<()> {
    let conn = db.get_connection()?;

    conn.execute(
        &format!("DELETE FROM {} WHERE {} = ?", transactions::TABLE, transactions::ID),
        params![id],
    )?;

    Ok(())
}

/// Income, expense, balance and row count over the whole table.
/// All fields are zero when no transactions exist.
pub fn summary(db: &Database) -> Result<CashflowSummary> {
    let conn = db.get_connection()?;

    let summary = conn.query_row(
        &format!(
            "SELECT
                COALESCE(SUM(CASE WHEN {kind} = ? THEN {amount} ELSE 0 END), 0) AS total_income,
                COALESCE(SUM(CASE WHEN {kind} = ? THEN {amount} ELSE 0 END), 0) AS total_expense,
                COUNT(*) AS transaction_count
             FROM {table}",
            kind = transactions::TYPE,
            amount = transactions::AMOUNT,
            table = transactions::TABLE,
        ),
        params![TransactionKind::Income, TransactionKind::Expense],
        |row| {
            let total_income: f64 = row.get("total_income")?;
            let total_expense: f64 = row.get("total_expense")?;
            Ok(CashflowSummary {
                total_income,
                total_expense,
                balance: total_income - total_expense,
                transaction_count: row.get("transaction_count")?,
            })
        },
    )?;

    Ok(summary)
}

/// Income and expense totals grouped by calendar month within one year.
/// Months without transactions are omitted.
pub fn monthly_stats(db: &Database, year: i32) -> Result<Vec<MonthlyCashflow>> {
    let conn = db.get_connection()?;

    let mut stmt = conn.prepare(&format!(
        "SELECT
            CAST(strftime('%m', {date}) AS INTEGER) AS month,
            COALESCE(SUM(CASE WHEN {kind} = ? THEN {amount} ELSE 0 END), 0) AS income,
            COALESCE(SUM(CASE WHEN {kind} = ? THEN {amount} ELSE 0 END), 0) AS expense
         FROM {table}
         WHERE strftime('%Y', {date}) = ?
         GROUP BY month
         ORDER BY month ASC",
        date = transactions::DATE,
        kind = transactions::TYPE,
        amount = transactions::AMOUNT,
        table = transactions::TABLE,
    ))?;

    let month_iter = stmt.query_map(
        params![TransactionKind::Income, TransactionKind::Expense, format!("{year:04}")],
        |row| {
            Ok(MonthlyCashflow {
                month: row.get("month")?,
                income: row.get("income")?,
                expense: row.get("expense")?,
            })
        },
    )?;

    let mut results = Vec::new();
    for month in month_iter {
        results.push(month?);
    }

    Ok(results)
}

fn map_transaction_row(row: &Row) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(transactions::ID)?,
        kind: row.get(transactions::TYPE)?,
        name: row.get(transactions::NAME)?,
        amount: row.get(transactions::AMOUNT)?,
        date: row.get(transactions::DATE)?,
        created_at: row.get(transactions::CREATED_AT)?,
        updated_at: row.get(transactions::UPDATED_AT)?,
    })
}
