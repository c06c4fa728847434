use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use farmstead::db::Database;
use farmstead::models::{Gender, NewAnimal, NewAnimalType, Patch, UpdateAnimal};
use farmstead::repository::{animal_types, animals};

fn test_db() -> (TempDir, Database) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::new(db_path.to_str().expect("utf-8 path")).expect("Failed to create database");
    (temp_dir, db)
}

fn cow_type(db: &Database) -> i64 {
    animal_types::create(
        db,
        NewAnimalType { name: "Cow".to_string(), description: Some("dairy".to_string()) },
    )
    .expect("create type")
    .id
}

fn bessie(type_id: i64) -> NewAnimal {
    NewAnimal {
        tag_number: Some("DE-0042".to_string()),
        name: "Bessie".to_string(),
        breed: Some("Holstein".to_string()),
        father_breed: None,
        mother_breed: Some("Holstein".to_string()),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(2020, 3, 14),
        weight: Some(540.0),
        height: Some(140.0),
        acquisition_date: NaiveDate::from_ymd_opt(2021, 5, 1),
        acquisition_location: Some("Spring auction".to_string()),
        exit_date: None,
        exit_reason: None,
        age: Some(4),
        type_id,
        description: "dairy".to_string(),
        image: Some("animals/bessie.jpg".to_string()),
    }
}

#[test]
fn test_create_then_get_round_trips() {
    let (_guard, db) = test_db();
    let type_id = cow_type(&db);

    let created = animals::create(&db, bessie(type_id)).expect("create animal");
    let fetched = animals::get_by_id(&db, created.id).expect("get").expect("animal exists");

    assert_eq!(fetched.name, "Bessie");
    assert_eq!(fetched.tag_number, Some("DE-0042".to_string()));
    assert_eq!(fetched.gender, Gender::Female);
    assert_eq!(fetched.date_of_birth, NaiveDate::from_ymd_opt(2020, 3, 14));
    assert_eq!(fetched.weight, Some(540.0));
    assert_eq!(fetched.age, Some(4));
    assert_eq!(fetched.type_id, type_id);
    assert_eq!(fetched.description, "dairy");
    assert_eq!(fetched.image, Some("animals/bessie.jpg".to_string()));
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn test_animal_carries_nested_type_details() {
    let (_guard, db) = test_db();
    let type_id = cow_type(&db);

    let created = animals::create(&db, bessie(type_id)).expect("create animal");
    let animal_type = created.animal_type.expect("joined type present");
    assert_eq!(animal_type.name, "Cow");
    assert_eq!(animal_type.description, Some("dairy".to_string()));
}

#[test]
fn test_create_with_dangling_type_fails() {
    let (_guard, db) = test_db();

    let result = animals::create(&db, bessie(4711));
    assert!(result.is_err(), "foreign-key violation must surface");
}

#[test]
fn test_empty_partial_update_changes_nothing_but_updated_at() {
    let (_guard, db) = test_db();
    let type_id = cow_type(&db);
    let created = animals::create(&db, bessie(type_id)).expect("create animal");

    let updated = animals::update(&db, created.id, UpdateAnimal::default())
        .expect("update")
        .expect("animal exists");

    assert_eq!(updated.tag_number, created.tag_number);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.breed, created.breed);
    assert_eq!(updated.father_breed, created.father_breed);
    assert_eq!(updated.mother_breed, created.mother_breed);
    assert_eq!(updated.gender, created.gender);
    assert_eq!(updated.date_of_birth, created.date_of_birth);
    assert_eq!(updated.weight, created.weight);
    assert_eq!(updated.height, created.height);
    assert_eq!(updated.acquisition_date, created.acquisition_date);
    assert_eq!(updated.acquisition_location, created.acquisition_location);
    assert_eq!(updated.exit_date, created.exit_date);
    assert_eq!(updated.exit_reason, created.exit_reason);
    assert_eq!(updated.age, created.age);
    assert_eq!(updated.type_id, created.type_id);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_partial_update_sets_and_clears_fields() {
    let (_guard, db) = test_db();
    let type_id = cow_type(&db);
    let created = animals::create(&db, bessie(type_id)).expect("create animal");

    let updated = animals::update(
        &db,
        created.id,
        UpdateAnimal {
            weight: Patch::Set(550.5),
            exit_reason: Patch::Set("sold".to_string()),
            exit_date: Patch::Set(
                NaiveDate::from_ymd_opt(2024, 11, 1).expect("valid date"),
            ),
            image: Patch::Clear,
            ..UpdateAnimal::default()
        },
    )
    .expect("update")
    .expect("animal exists");

    assert_eq!(updated.weight, Some(550.5));
    assert_eq!(updated.exit_reason, Some("sold".to_string()));
    assert_eq!(updated.image, None, "explicit null clears the field");
    assert_eq!(updated.name, "Bessie", "untouched fields survive");
}

#[test]
fn test_update_can_move_animal_to_another_type() {
    let (_guard, db) = test_db();
    let cow_id = cow_type(&db);
    let goat_id = animal_types::create(
        &db,
        NewAnimalType { name: "Goat".to_string(), description: None },
    )
    .expect("create type")
    .id;
    let created = animals::create(&db, bessie(cow_id)).expect("create animal");

    let updated = animals::update(
        &db,
        created.id,
        UpdateAnimal { type_id: Some(goat_id), ..UpdateAnimal::default() },
    )
    .expect("update")
    .expect("animal exists");

    assert_eq!(updated.type_id, goat_id);
    assert_eq!(updated.animal_type.expect("joined type").name, "Goat");
}

#[test]
fn test_update_missing_id_returns_none() {
    let (_guard, db) = test_db();

    let result = animals::update(&db, 4711, UpdateAnimal::default()).expect("update");
    assert!(result.is_none());
}

#[test]
fn test_delete_then_get_is_none() {
    let (_guard, db) = test_db();
    let type_id = cow_type(&db);
    let created = animals::create(&db, bessie(type_id)).expect("create animal");

    animals::delete(&db, created.id).expect("delete");
    assert!(animals::get_by_id(&db, created.id).expect("get").is_none());

    // Deleting again stays a silent no-op.
    animals::delete(&db, created.id).expect("repeat delete");
}

#[test]
fn test_list_by_type_filters() {
    let (_guard, db) = test_db();
    let cow_id = cow_type(&db);
    let goat_id = animal_types::create(
        &db,
        NewAnimalType { name: "Goat".to_string(), description: None },
    )
    .expect("create type")
    .id;
    animals::create(&db, bessie(cow_id)).expect("create animal");
    animals::create(
        &db,
        NewAnimal { name: "Billy".to_string(), ..bessie(goat_id) },
    )
    .expect("create animal");

    let cows = animals::list_by_type(&db, cow_id).expect("list");
    assert_eq!(cows.len(), 1);
    assert_eq!(cows[0].name, "Bessie");

    let all = animals::list(&db).expect("list");
    assert_eq!(all.len(), 2);
}
