//! Feeding and breeding record CRUD operations
//!
//! Provides husbandry record management methods for the Database.

use chrono::Utc;
use rusqlite::{params, Row};

use super::{parse_date, parse_timestamp, StorageError};
use crate::models::{BreedingRecord, FeedingRecord, NewBreedingRecord, NewFeedingRecord};
use crate::storage::Database;

/// Map a feeding record row (id, animal_id, date, food_type,
/// food_weight_grams, animal_weight_grams, notes, created_at, updated_at)
pub(super) fn feeding_record_from_row(row: &Row) -> rusqlite::Result<FeedingRecord> {
    let date: String = row.get(2)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    Ok(FeedingRecord {
        id: row.get(0)?,
        animal_id: row.get(1)?,
        date: parse_date(&date),
        food_type: row.get(3)?,
        food_weight_grams: row.get(4)?,
        animal_weight_grams: row.get(5)?,
        notes: row.get(6)?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

/// Map a breeding record row (id, male_id, female_id, date, outcome,
/// eggs_count, hatch_count, notes, created_at, updated_at)
pub(super) fn breeding_record_from_row(row: &Row) -> rusqlite::Result<BreedingRecord> {
    let date: String = row.get(3)?;
    let created_at: String = row.get(8)?;
    let updated_at: String = row.get(9)?;

    Ok(BreedingRecord {
        id: row.get(0)?,
        male_id: row.get(1)?,
        female_id: row.get(2)?,
        date: parse_date(&date),
        outcome: row.get(4)?,
        eggs_count: row.get(5)?,
        hatch_count: row.get(6)?,
        notes: row.get(7)?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

impl Database {
    // ===== Feeding records =====

    /// List all feeding records
    pub fn list_feeding_records(&self) -> Result<Vec<FeedingRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, food_type, food_weight_grams, animal_weight_grams, notes, created_at, updated_at
             FROM feeding_records ORDER BY date, id",
        )?;

        let records = stmt
            .query_map([], feeding_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// List feeding records for one animal, ascending by date
    pub fn list_feeding_records_for_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<FeedingRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, food_type, food_weight_grams, animal_weight_grams, notes, created_at, updated_at
             FROM feeding_records WHERE animal_id = ?1 ORDER BY date, id",
        )?;

        let records = stmt
            .query_map(params![animal_id], feeding_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Create a feeding record
    pub fn create_feeding_record(
        &self,
        payload: &NewFeedingRecord,
    ) -> Result<FeedingRecord, StorageError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO feeding_records (animal_id, date, food_type, food_weight_grams, animal_weight_grams, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                payload.animal_id,
                payload.date.to_string(),
                payload.food_type,
                payload.food_weight_grams,
                payload.animal_weight_grams,
                payload.notes,
                now_str,
                now_str,
            ],
        )?;

        Ok(FeedingRecord {
            id: self.connection().last_insert_rowid(),
            animal_id: payload.animal_id,
            date: payload.date,
            food_type: payload.food_type.clone(),
            food_weight_grams: payload.food_weight_grams,
            animal_weight_grams: payload.animal_weight_grams,
            notes: payload.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update a feeding record
    pub fn update_feeding_record(
        &self,
        record_id: i64,
        payload: &NewFeedingRecord,
    ) -> Result<FeedingRecord, StorageError> {
        let rows_affected = self.connection().execute(
            "UPDATE feeding_records SET animal_id = ?1, date = ?2, food_type = ?3, food_weight_grams = ?4,
                    animal_weight_grams = ?5, notes = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                payload.animal_id,
                payload.date.to_string(),
                payload.food_type,
                payload.food_weight_grams,
                payload.animal_weight_grams,
                payload.notes,
                Utc::now().to_rfc3339(),
                record_id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "feeding record with id {} not found",
                record_id
            )));
        }

        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, food_type, food_weight_grams, animal_weight_grams, notes, created_at, updated_at
             FROM feeding_records WHERE id = ?1",
        )?;
        stmt.query_row(params![record_id], feeding_record_from_row)
            .map_err(Into::into)
    }

    /// Delete a feeding record
    pub fn delete_feeding_record(&self, record_id: i64) -> Result<(), StorageError> {
        let rows_affected = self.connection().execute(
            "DELETE FROM feeding_records WHERE id = ?1",
            params![record_id],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "feeding record with id {} not found",
                record_id
            )));
        }

        Ok(())
    }

    // ===== Breeding records =====

    /// List all breeding records
    pub fn list_breeding_records(&self) -> Result<Vec<BreedingRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, male_id, female_id, date, outcome, eggs_count, hatch_count, notes, created_at, updated_at
             FROM breeding_records ORDER BY date, id",
        )?;

        let records = stmt
            .query_map([], breeding_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Create a breeding record
    pub fn create_breeding_record(
        &self,
        payload: &NewBreedingRecord,
    ) -> Result<BreedingRecord, StorageError> {
        if payload.male_id == payload.female_id {
            return Err(StorageError::InvalidInput(
                "sire and dam must be different animals".into(),
            ));
        }

        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO breeding_records (male_id, female_id, date, outcome, eggs_count, hatch_count, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                payload.male_id,
                payload.female_id,
                payload.date.to_string(),
                payload.outcome,
                payload.eggs_count,
                payload.hatch_count,
                payload.notes,
                now_str,
                now_str,
            ],
        )?;

        Ok(BreedingRecord {
            id: self.connection().last_insert_rowid(),
            male_id: payload.male_id,
            female_id: payload.female_id,
            date: payload.date,
            outcome: payload.outcome.clone(),
            eggs_count: payload.eggs_count,
            hatch_count: payload.hatch_count,
            notes: payload.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update a breeding record
    pub fn update_breeding_record(
        &self,
        record_id: i64,
        payload: &NewBreedingRecord,
    ) -> Result<BreedingRecord, StorageError> {
        if payload.male_id == payload.female_id {
            return Err(StorageError::InvalidInput(
                "sire and dam must be different animals".into(),
            ));
        }

        let rows_affected = self.connection().execute(
            "UPDATE breeding_records SET male_id = ?1, female_id = ?2, date = ?3, outcome = ?4,
                    eggs_count = ?5, hatch_count = ?6, notes = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                payload.male_id,
                payload.female_id,
                payload.date.to_string(),
                payload.outcome,
                payload.eggs_count,
                payload.hatch_count,
                payload.notes,
                Utc::now().to_rfc3339(),
                record_id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "breeding record with id {} not found",
                record_id
            )));
        }

        let mut stmt = self.connection().prepare(
            "SELECT id, male_id, female_id, date, outcome, eggs_count, hatch_count, notes, created_at, updated_at
             FROM breeding_records WHERE id = ?1",
        )?;
        stmt.query_row(params![record_id], breeding_record_from_row)
            .map_err(Into::into)
    }

    /// Delete a breeding record
    pub fn delete_breeding_record(&self, record_id: i64) -> Result<(), StorageError> {
        let rows_affected = self.connection().execute(
            "DELETE FROM breeding_records WHERE id = ?1",
            params![record_id],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "breeding record with id {} not found",
                record_id
            )));
        }

        Ok(())
    }
}
