use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use farmstead::db::Database;
use farmstead::models::{Gender, NewAnimal, NewAnimalType, NewMilkRecord, UpdateMilkRecord};
use farmstead::repository::{animal_types, animals, milk};

fn test_db() -> (TempDir, Database) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::new(db_path.to_str().expect("utf-8 path")).expect("Failed to create database");
    (temp_dir, db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn herd_member(db: &Database, name: &str) -> i64 {
    let type_id = match animal_types::list(db).expect("list types").first() {
        Some(t) => t.id,
        None => {
            animal_types::create(
                db,
                NewAnimalType { name: "Cow".to_string(), description: None },
            )
            .expect("create type")
            .id
        }
    };
    animals::create(
        db,
        NewAnimal {
            tag_number: None,
            name: name.to_string(),
            breed: None,
            father_breed: None,
            mother_breed: None,
            gender: Gender::Female,
            date_of_birth: None,
            weight: None,
            height: None,
            acquisition_date: None,
            acquisition_location: None,
            exit_date: None,
            exit_reason: None,
            age: None,
            type_id,
            description: "herd member".to_string(),
            image: None,
        },
    )
    .expect("create animal")
    .id
}

fn record(animal_id: i64, on: NaiveDate, morning: f64, evening: f64) -> NewMilkRecord {
    NewMilkRecord {
        animal_id,
        date: on,
        morning_amount: morning,
        evening_amount: evening,
        notes: None,
    }
}

#[test]
fn test_total_is_stored_as_morning_plus_evening() {
    let (_guard, db) = test_db();
    let animal_id = herd_member(&db, "Bessie");

    let created =
        milk::create(&db, record(animal_id, date(2024, 6, 1), 12.5, 10.0)).expect("create");
    assert_eq!(created.total_amount, 22.5);

    let fetched = milk::get_by_id(&db, created.id).expect("get").expect("record exists");
    assert_eq!(fetched.total_amount, 22.5);
}

#[test]
fn test_single_sided_update_recomputes_total() {
    let (_guard, db) = test_db();
    let animal_id = herd_member(&db, "Bessie");
    let created =
        milk::create(&db, record(animal_id, date(2024, 6, 1), 12.5, 10.0)).expect("create");

    let updated = milk::update(
        &db,
        created.id,
        UpdateMilkRecord { morning_amount: Some(14.0), ..UpdateMilkRecord::default() },
    )
    .expect("update")
    .expect("record exists");

    assert_eq!(updated.morning_amount, 14.0);
    assert_eq!(updated.evening_amount, 10.0, "untouched side survives");
    assert_eq!(updated.total_amount, 24.0);

    let fetched = milk::get_by_id(&db, created.id).expect("get").expect("record exists");
    assert_eq!(fetched.total_amount, 24.0, "recomputed total is persisted");
}

#[test]
fn test_empty_partial_update_changes_nothing_but_updated_at() {
    let (_guard, db) = test_db();
    let animal_id = herd_member(&db, "Bessie");
    let created =
        milk::create(&db, record(animal_id, date(2024, 6, 1), 12.5, 10.0)).expect("create");

    let updated = milk::update(&db, created.id, UpdateMilkRecord::default())
        .expect("update")
        .expect("record exists");

    assert_eq!(updated.date, created.date);
    assert_eq!(updated.morning_amount, created.morning_amount);
    assert_eq!(updated.evening_amount, created.evening_amount);
    assert_eq!(updated.total_amount, created.total_amount);
    assert_eq!(updated.notes, created.notes);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_list_orders_by_date_then_animal() {
    let (_guard, db) = test_db();
    let bessie = herd_member(&db, "Bessie");
    let clara = herd_member(&db, "Clara");

    milk::create(&db, record(clara, date(2024, 6, 2), 8.0, 7.0)).expect("create");
    milk::create(&db, record(bessie, date(2024, 6, 1), 12.0, 10.0)).expect("create");
    milk::create(&db, record(bessie, date(2024, 6, 2), 12.5, 10.5)).expect("create");

    let records = milk::list(&db).expect("list");
    let keys: Vec<(NaiveDate, i64)> =
        records.iter().map(|r| (r.date, r.animal_id)).collect();
    assert_eq!(
        keys,
        [(date(2024, 6, 2), bessie), (date(2024, 6, 2), clara), (date(2024, 6, 1), bessie)]
    );

    let for_bessie = milk::list_for_animal(&db, bessie).expect("list");
    assert_eq!(for_bessie.len(), 2);
}

#[test]
fn test_delete_then_get_is_none() {
    let (_guard, db) = test_db();
    let animal_id = herd_member(&db, "Bessie");
    let created =
        milk::create(&db, record(animal_id, date(2024, 6, 1), 12.5, 10.0)).expect("create");

    milk::delete(&db, created.id).expect("delete");
    assert!(milk::get_by_id(&db, created.id).expect("get").is_none());
    milk::delete(&db, created.id).expect("repeat delete is a no-op");
}

#[test]
fn test_stats_cover_totals_and_trailing_window() {
    let (_guard, db) = test_db();
    let animal_id = herd_member(&db, "Bessie");
    let today = date(2024, 6, 10);

    // Inside the 7-day window ending today.
    milk::create(&db, record(animal_id, date(2024, 6, 10), 10.0, 10.0)).expect("create");
    milk::create(&db, record(animal_id, date(2024, 6, 4), 5.0, 5.0)).expect("create");
    // Outside the window.
    milk::create(&db, record(animal_id, date(2024, 6, 3), 4.0, 4.0)).expect("create");
    milk::create(&db, record(animal_id, date(2024, 1, 15), 3.0, 3.0)).expect("create");

    let stats = milk::stats(&db, today).expect("stats");
    assert_eq!(stats.record_count, 4);
    assert_eq!(stats.total_amount, 44.0);
    assert_eq!(stats.average_amount, 11.0);
    assert_eq!(stats.last_seven_days, 30.0);
}

#[test]
fn test_stats_of_empty_table_are_all_zero() {
    let (_guard, db) = test_db();

    let stats = milk::stats(&db, date(2024, 6, 10)).expect("stats");
    assert_eq!(stats.record_count, 0);
    assert_eq!(stats.total_amount, 0.0);
    assert_eq!(stats.average_amount, 0.0);
    assert_eq!(stats.last_seven_days, 0.0);
}
