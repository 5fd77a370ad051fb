//! Repository layer tests
//!
//! Exercises the CRUD surface and the archive round trip against an
//! in-memory database.

use chrono::NaiveDate;

use crate::models::{
    NewAnimal, NewBreedingRecord, NewFeedingRecord, NewSheddingRecord, NewWeightRecord, Sex,
};
use crate::storage::{Database, StorageError};

// ===== Helper Functions =====

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_animal(name: &str) -> NewAnimal {
    NewAnimal {
        name: name.to_string(),
        species: "Ball Python".to_string(),
        morph: "Pastel".to_string(),
        sex: Sex::Female,
        birth_date: date(2022, 5, 1),
        source: None,
        price: None,
        notes: None,
    }
}

fn new_weight(animal_id: i64, grams: f64, on: NaiveDate) -> NewWeightRecord {
    NewWeightRecord {
        animal_id,
        weight_grams: grams,
        date: on,
        notes: None,
    }
}

fn new_shed(animal_id: i64, on: NaiveDate) -> NewSheddingRecord {
    NewSheddingRecord {
        animal_id,
        date: on,
        is_complete: true,
        notes: None,
    }
}

// ===== Animal Tests =====

#[test]
fn test_create_animal_generates_sequential_codes() {
    let db = Database::new_in_memory().unwrap();

    let first = db.create_animal(&new_animal("Nagi")).unwrap();
    let second = db.create_animal(&new_animal("Monty")).unwrap();

    assert_eq!(first.code, "S001");
    assert_eq!(second.code, "S002");
}

#[test]
fn test_animal_codes_are_not_reused_after_delete() {
    let db = Database::new_in_memory().unwrap();

    let first = db.create_animal(&new_animal("Nagi")).unwrap();
    let second = db.create_animal(&new_animal("Monty")).unwrap();
    db.delete_animal(second.id).unwrap();

    let third = db.create_animal(&new_animal("Kaa")).unwrap();
    // The highest code ever assigned was S002; deletion does not free it
    assert_eq!(third.code, "S003");
    assert_eq!(first.code, "S001");
}

#[test]
fn test_update_animal_preserves_code() {
    let db = Database::new_in_memory().unwrap();
    let created = db.create_animal(&new_animal("Nagi")).unwrap();

    let mut payload = new_animal("Nagini");
    payload.sex = Sex::Male;
    payload.notes = Some("renamed".to_string());
    let updated = db.update_animal(created.id, &payload).unwrap();

    assert_eq!(updated.code, created.code);
    assert_eq!(updated.name, "Nagini");
    assert_eq!(updated.sex, Sex::Male);
    assert_eq!(updated.notes.as_deref(), Some("renamed"));
}

#[test]
fn test_create_animal_rejects_blank_name() {
    let db = Database::new_in_memory().unwrap();
    let result = db.create_animal(&new_animal("   "));
    assert!(matches!(result, Err(StorageError::InvalidInput(_))));
}

#[test]
fn test_get_animal_missing_returns_none() {
    let db = Database::new_in_memory().unwrap();
    assert!(db.get_animal(42).unwrap().is_none());
}

#[test]
fn test_update_and_delete_missing_animal_not_found() {
    let db = Database::new_in_memory().unwrap();

    assert!(matches!(
        db.update_animal(99, &new_animal("Ghost")),
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(db.delete_animal(99), Err(StorageError::NotFound(_))));
}

#[test]
fn test_delete_animal_cascades_to_records() {
    let db = Database::new_in_memory().unwrap();
    let male = db.create_animal(&new_animal("Monty")).unwrap();
    let female = db.create_animal(&new_animal("Nagi")).unwrap();

    db.create_weight_record(&new_weight(female.id, 120.0, date(2024, 1, 1)))
        .unwrap();
    db.create_shedding_record(&new_shed(female.id, date(2024, 1, 5)))
        .unwrap();
    db.create_feeding_record(&NewFeedingRecord {
        animal_id: female.id,
        date: date(2024, 1, 2),
        food_type: "frozen-thawed mouse".to_string(),
        food_weight_grams: 20.0,
        animal_weight_grams: 120.0,
        notes: None,
    })
    .unwrap();
    db.create_breeding_record(&NewBreedingRecord {
        male_id: male.id,
        female_id: female.id,
        date: date(2024, 2, 1),
        outcome: "locked".to_string(),
        eggs_count: None,
        hatch_count: None,
        notes: None,
    })
    .unwrap();

    db.delete_animal(female.id).unwrap();

    assert!(db.list_weight_records().unwrap().is_empty());
    assert!(db.list_shedding_records().unwrap().is_empty());
    assert!(db.list_feeding_records().unwrap().is_empty());
    assert!(db.list_breeding_records().unwrap().is_empty());
    // The other animal is untouched
    assert!(db.get_animal(male.id).unwrap().is_some());
}

// ===== Weight Record Tests =====

#[test]
fn test_weight_record_crud_roundtrip() {
    let db = Database::new_in_memory().unwrap();
    let animal = db.create_animal(&new_animal("Nagi")).unwrap();

    let created = db
        .create_weight_record(&new_weight(animal.id, 150.5, date(2024, 3, 1)))
        .unwrap();
    assert_eq!(created.weight_grams, 150.5);

    let updated = db
        .update_weight_record(created.id, &new_weight(animal.id, 155.0, date(2024, 3, 2)))
        .unwrap();
    assert_eq!(updated.weight_grams, 155.0);
    assert_eq!(updated.date, date(2024, 3, 2));

    db.delete_weight_record(created.id).unwrap();
    assert!(db.list_weight_records().unwrap().is_empty());
}

#[test]
fn test_weight_record_rejects_negative_weight() {
    let db = Database::new_in_memory().unwrap();
    let animal = db.create_animal(&new_animal("Nagi")).unwrap();

    let result = db.create_weight_record(&new_weight(animal.id, -1.0, date(2024, 3, 1)));
    assert!(matches!(result, Err(StorageError::InvalidInput(_))));
}

#[test]
fn test_list_weight_records_for_animal_filters_and_sorts() {
    let db = Database::new_in_memory().unwrap();
    let a = db.create_animal(&new_animal("Nagi")).unwrap();
    let b = db.create_animal(&new_animal("Monty")).unwrap();

    db.create_weight_record(&new_weight(a.id, 130.0, date(2024, 2, 1)))
        .unwrap();
    db.create_weight_record(&new_weight(b.id, 500.0, date(2024, 1, 10)))
        .unwrap();
    db.create_weight_record(&new_weight(a.id, 120.0, date(2024, 1, 1)))
        .unwrap();

    let records = db.list_weight_records_for_animal(a.id).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, date(2024, 1, 1));
    assert_eq!(records[1].date, date(2024, 2, 1));
    assert!(records.iter().all(|r| r.animal_id == a.id));
}

// ===== Shedding Record Tests =====

#[test]
fn test_shedding_record_crud_roundtrip() {
    let db = Database::new_in_memory().unwrap();
    let animal = db.create_animal(&new_animal("Nagi")).unwrap();

    let created = db
        .create_shedding_record(&new_shed(animal.id, date(2024, 4, 1)))
        .unwrap();
    assert!(created.is_complete);

    let updated = db
        .update_shedding_record(
            created.id,
            &NewSheddingRecord {
                animal_id: animal.id,
                date: date(2024, 4, 2),
                is_complete: false,
                notes: Some("stuck shed on tail tip".to_string()),
            },
        )
        .unwrap();
    assert!(!updated.is_complete);
    assert_eq!(updated.notes.as_deref(), Some("stuck shed on tail tip"));

    db.delete_shedding_record(created.id).unwrap();
    assert!(db.list_shedding_records().unwrap().is_empty());
}

// ===== Husbandry Tests =====

#[test]
fn test_feeding_record_crud_roundtrip() {
    let db = Database::new_in_memory().unwrap();
    let animal = db.create_animal(&new_animal("Nagi")).unwrap();

    let created = db
        .create_feeding_record(&NewFeedingRecord {
            animal_id: animal.id,
            date: date(2024, 5, 1),
            food_type: "rat pup".to_string(),
            food_weight_grams: 35.0,
            animal_weight_grams: 400.0,
            notes: None,
        })
        .unwrap();

    let fetched = db.list_feeding_records_for_animal(animal.id).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].food_type, "rat pup");

    db.delete_feeding_record(created.id).unwrap();
    assert!(db.list_feeding_records().unwrap().is_empty());
}

#[test]
fn test_breeding_record_rejects_same_animal_pairing() {
    let db = Database::new_in_memory().unwrap();
    let animal = db.create_animal(&new_animal("Nagi")).unwrap();

    let result = db.create_breeding_record(&NewBreedingRecord {
        male_id: animal.id,
        female_id: animal.id,
        date: date(2024, 6, 1),
        outcome: String::new(),
        eggs_count: None,
        hatch_count: None,
        notes: None,
    });
    assert!(matches!(result, Err(StorageError::InvalidInput(_))));
}

// ===== Archive Tests =====

#[test]
fn test_archive_roundtrip_preserves_ids_and_references() {
    let source = Database::new_in_memory().unwrap();
    let animal = source.create_animal(&new_animal("Nagi")).unwrap();
    source
        .create_weight_record(&new_weight(animal.id, 120.0, date(2024, 1, 1)))
        .unwrap();
    source
        .create_shedding_record(&new_shed(animal.id, date(2024, 1, 5)))
        .unwrap();

    let archive = source.export_archive().unwrap();

    let target = Database::new_in_memory().unwrap();
    // Pre-existing data must be replaced, not merged
    target.create_animal(&new_animal("Stale")).unwrap();
    let imported = target.import_archive(&archive).unwrap();

    assert_eq!(imported, 3);

    let animals = target.list_animals().unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0].id, animal.id);
    assert_eq!(animals[0].name, "Nagi");
    assert_eq!(animals[0].code, "S001");

    let weights = target.list_weight_records_for_animal(animal.id).unwrap();
    assert_eq!(weights.len(), 1);
    assert_eq!(weights[0].weight_grams, 120.0);

    let sheds = target.list_shedding_records_for_animal(animal.id).unwrap();
    assert_eq!(sheds.len(), 1);
}

#[test]
fn test_import_archive_rejects_newer_version() {
    let db = Database::new_in_memory().unwrap();
    let mut archive = db.export_archive().unwrap();
    archive.version += 1;

    assert!(matches!(
        db.import_archive(&archive),
        Err(StorageError::InvalidInput(_))
    ));
}

#[test]
fn test_import_archive_is_transactional() {
    let db = Database::new_in_memory().unwrap();
    let keeper = db.create_animal(&new_animal("Keeper")).unwrap();

    // Weight record referencing a missing animal violates the FK and must
    // roll the whole import back
    let mut archive = db.export_archive().unwrap();
    archive.weight_records.push(crate::models::WeightRecord {
        id: 1,
        animal_id: 999,
        weight_grams: 100.0,
        date: date(2024, 1, 1),
        notes: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    });

    assert!(db.import_archive(&archive).is_err());

    // Original contents still intact
    let animals = db.list_animals().unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0].id, keeper.id);
}
