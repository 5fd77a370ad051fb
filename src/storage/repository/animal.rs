//! Animal CRUD operations
//!
//! Provides animal management methods for the Database, including
//! collection code generation (S001, S002, ...).

use chrono::Utc;
use rusqlite::{params, Row};

use super::{parse_date, parse_timestamp, StorageError};
use crate::models::{Animal, NewAnimal, Sex};
use crate::storage::Database;

const ANIMAL_COLUMNS: &str =
    "id, name, code, species, morph, sex, birth_date, source, price, notes, created_at, updated_at";

/// Map a full animal row (column order per ANIMAL_COLUMNS)
pub(super) fn animal_from_row(row: &Row) -> rusqlite::Result<Animal> {
    let sex: String = row.get(5)?;
    let birth_date: String = row.get(6)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;

    Ok(Animal {
        id: row.get(0)?,
        name: row.get(1)?,
        code: row.get(2)?,
        species: row.get(3)?,
        morph: row.get(4)?,
        sex: Sex::from_str(&sex),
        birth_date: parse_date(&birth_date),
        source: row.get(7)?,
        price: row.get(8)?,
        notes: row.get(9)?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

impl Database {
    /// List all animals ordered by code
    pub fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM animals ORDER BY code",
            ANIMAL_COLUMNS
        ))?;

        let animals = stmt
            .query_map([], animal_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(animals)
    }

    /// Get a single animal by id
    pub fn get_animal(&self, animal_id: i64) -> Result<Option<Animal>, StorageError> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM animals WHERE id = ?1",
            ANIMAL_COLUMNS
        ))?;

        match stmt.query_row(params![animal_id], animal_from_row) {
            Ok(animal) => Ok(Some(animal)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new animal, generating its collection code
    pub fn create_animal(&self, payload: &NewAnimal) -> Result<Animal, StorageError> {
        if payload.name.trim().is_empty() {
            return Err(StorageError::InvalidInput("animal name is empty".into()));
        }

        let code = self.next_animal_code()?;
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO animals (name, code, species, morph, sex, birth_date, source, price, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                payload.name,
                code,
                payload.species,
                payload.morph,
                payload.sex.as_str(),
                payload.birth_date.to_string(),
                payload.source,
                payload.price,
                payload.notes,
                now_str,
                now_str,
            ],
        )?;

        let id = self.connection().last_insert_rowid();
        Ok(Animal {
            id,
            name: payload.name.clone(),
            code,
            species: payload.species.clone(),
            morph: payload.morph.clone(),
            sex: payload.sex,
            birth_date: payload.birth_date,
            source: payload.source.clone(),
            price: payload.price,
            notes: payload.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update an animal's editable fields
    ///
    /// The collection code is never touched by updates.
    pub fn update_animal(&self, animal_id: i64, payload: &NewAnimal) -> Result<Animal, StorageError> {
        let now_str = Utc::now().to_rfc3339();

        let rows_affected = self.connection().execute(
            "UPDATE animals SET name = ?1, species = ?2, morph = ?3, sex = ?4, birth_date = ?5,
                    source = ?6, price = ?7, notes = ?8, updated_at = ?9
             WHERE id = ?10",
            params![
                payload.name,
                payload.species,
                payload.morph,
                payload.sex.as_str(),
                payload.birth_date.to_string(),
                payload.source,
                payload.price,
                payload.notes,
                now_str,
                animal_id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "animal with id {} not found",
                animal_id
            )));
        }

        self.get_animal(animal_id)?
            .ok_or_else(|| StorageError::NotFound(format!("animal with id {} not found", animal_id)))
    }

    /// Delete an animal and all records referencing it
    pub fn delete_animal(&self, animal_id: i64) -> Result<(), StorageError> {
        // Remove dependent records first; the schema declares plain
        // REFERENCES without ON DELETE CASCADE
        self.connection().execute(
            "DELETE FROM weight_records WHERE animal_id = ?1",
            params![animal_id],
        )?;
        self.connection().execute(
            "DELETE FROM shedding_records WHERE animal_id = ?1",
            params![animal_id],
        )?;
        self.connection().execute(
            "DELETE FROM feeding_records WHERE animal_id = ?1",
            params![animal_id],
        )?;
        self.connection().execute(
            "DELETE FROM breeding_records WHERE male_id = ?1 OR female_id = ?1",
            params![animal_id],
        )?;

        let rows_affected = self
            .connection()
            .execute("DELETE FROM animals WHERE id = ?1", params![animal_id])?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "animal with id {} not found",
                animal_id
            )));
        }

        Ok(())
    }

    /// Generate the next collection code (S001, S002, ...)
    ///
    /// Scans existing codes for the highest numeric suffix; gaps left by
    /// deletions are not reused.
    fn next_animal_code(&self) -> Result<String, StorageError> {
        let mut stmt = self.connection().prepare("SELECT code FROM animals")?;
        let codes = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let max_code = codes
            .iter()
            .filter_map(|code| code.strip_prefix('S'))
            .filter_map(|digits| digits.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        Ok(format!("S{:03}", max_code + 1))
    }
}
