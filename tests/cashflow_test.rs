use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use farmstead::db::Database;
use farmstead::models::{NewTransaction, TransactionKind, UpdateTransaction};
use farmstead::repository::cashflow::{self, TransactionFilter};

fn test_db() -> (TempDir, Database) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::new(db_path.to_str().expect("utf-8 path")).expect("Failed to create database");
    (temp_dir, db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn add(db: &Database, kind: TransactionKind, name: &str, amount: f64, on: NaiveDate) -> i64 {
    cashflow::create(db, NewTransaction { kind, name: name.to_string(), amount, date: on })
        .expect("create transaction")
        .id
}

#[test]
fn test_summary_over_income_and_expense() {
    let (_guard, db) = test_db();

    add(&db, TransactionKind::Income, "Milk sale", 100.0, date(2024, 1, 1));
    add(&db, TransactionKind::Expense, "Feed", 40.0, date(2024, 1, 2));

    let summary = cashflow::summary(&db).expect("summary");
    assert_eq!(summary.total_income, 100.0);
    assert_eq!(summary.total_expense, 40.0);
    assert_eq!(summary.balance, 60.0);
    assert_eq!(summary.transaction_count, 2);
}

#[test]
fn test_summary_of_empty_table_is_all_zero() {
    let (_guard, db) = test_db();

    let summary = cashflow::summary(&db).expect("summary");
    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.total_expense, 0.0);
    assert_eq!(summary.balance, 0.0);
    assert_eq!(summary.transaction_count, 0);
}

#[test]
fn test_list_orders_newest_first() {
    let (_guard, db) = test_db();

    add(&db, TransactionKind::Income, "Old", 10.0, date(2024, 1, 1));
    add(&db, TransactionKind::Income, "New", 10.0, date(2024, 3, 1));
    add(&db, TransactionKind::Income, "Middle", 10.0, date(2024, 2, 1));

    let names: Vec<String> = cashflow::list(&db, &TransactionFilter::default())
        .expect("list")
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["New", "Middle", "Old"]);
}

#[test]
fn test_list_filters_by_kind_and_date_range() {
    let (_guard, db) = test_db();

    add(&db, TransactionKind::Income, "Milk sale", 100.0, date(2024, 1, 10));
    add(&db, TransactionKind::Expense, "Feed", 40.0, date(2024, 1, 20));
    add(&db, TransactionKind::Expense, "Vet", 75.0, date(2024, 4, 2));

    let expenses = cashflow::list(
        &db,
        &TransactionFilter { kind: Some(TransactionKind::Expense), ..TransactionFilter::default() },
    )
    .expect("list");
    assert_eq!(expenses.len(), 2);

    let january = cashflow::list(
        &db,
        &TransactionFilter {
            kind: None,
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 1, 31)),
        },
    )
    .expect("list");
    assert_eq!(january.len(), 2);

    let january_expenses = cashflow::list(
        &db,
        &TransactionFilter {
            kind: Some(TransactionKind::Expense),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 1, 31)),
        },
    )
    .expect("list");
    assert_eq!(january_expenses.len(), 1);
    assert_eq!(january_expenses[0].name, "Feed");
}

#[test]
fn test_partial_update_merges() {
    let (_guard, db) = test_db();
    let id = add(&db, TransactionKind::Income, "Milk sale", 100.0, date(2024, 1, 1));

    let updated = cashflow::update(
        &db,
        id,
        UpdateTransaction { amount: Some(120.0), ..UpdateTransaction::default() },
    )
    .expect("update")
    .expect("transaction exists");

    assert_eq!(updated.amount, 120.0);
    assert_eq!(updated.name, "Milk sale");
    assert_eq!(updated.kind, TransactionKind::Income);
    assert_eq!(updated.date, date(2024, 1, 1));

    let summary = cashflow::summary(&db).expect("summary");
    assert_eq!(summary.balance, 120.0, "balance is recomputed on read");
}

#[test]
fn test_empty_partial_update_changes_nothing_but_updated_at() {
    let (_guard, db) = test_db();
    let id = add(&db, TransactionKind::Income, "Milk sale", 100.0, date(2024, 1, 1));
    let before = cashflow::get_by_id(&db, id).expect("get").expect("exists");

    let after = cashflow::update(&db, id, UpdateTransaction::default())
        .expect("update")
        .expect("transaction exists");

    assert_eq!(after.kind, before.kind);
    assert_eq!(after.name, before.name);
    assert_eq!(after.amount, before.amount);
    assert_eq!(after.date, before.date);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_update_missing_id_returns_none() {
    let (_guard, db) = test_db();

    let result = cashflow::update(&db, 4711, UpdateTransaction::default()).expect("update");
    assert!(result.is_none());
}

#[test]
fn test_delete_then_get_is_none() {
    let (_guard, db) = test_db();
    let id = add(&db, TransactionKind::Expense, "Feed", 40.0, date(2024, 1, 2));

    cashflow::delete(&db, id).expect("delete");
    assert!(cashflow::get_by_id(&db, id).expect("get").is_none());
    cashflow::delete(&db, id).expect("repeat delete is a no-op");
}

#[test]
fn test_monthly_stats_group_by_calendar_month() {
    let (_guard, db) = test_db();

    add(&db, TransactionKind::Income, "Milk January", 100.0, date(2024, 1, 5));
    add(&db, TransactionKind::Income, "Milk January late", 50.0, date(2024, 1, 28));
    add(&db, TransactionKind::Expense, "Feed January", 30.0, date(2024, 1, 12));
    add(&db, TransactionKind::Income, "Milk March", 80.0, date(2024, 3, 3));
    add(&db, TransactionKind::Income, "Other year", 999.0, date(2023, 1, 5));

    let months = cashflow::monthly_stats(&db, 2024).expect("monthly stats");
    assert_eq!(months.len(), 2, "months without rows are omitted");

    assert_eq!(months[0].month, 1);
    assert_eq!(months[0].income, 150.0);
    assert_eq!(months[0].expense, 30.0);

    assert_eq!(months[1].month, 3);
    assert_eq!(months[1].income, 80.0);
    assert_eq!(months[1].expense, 0.0);
}
