//! Weight and shedding record CRUD operations
//!
//! Provides growth record management methods for the Database. These are
//! the two record families the analytics core reads.

use chrono::Utc;
use rusqlite::{params, Row};

use super::{parse_date, parse_timestamp, StorageError};
use crate::models::{NewSheddingRecord, NewWeightRecord, SheddingRecord, WeightRecord};
use crate::storage::Database;

/// Map a weight record row (id, animal_id, weight_grams, date, notes,
/// created_at, updated_at)
pub(super) fn weight_record_from_row(row: &Row) -> rusqlite::Result<WeightRecord> {
    let date: String = row.get(3)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(WeightRecord {
        id: row.get(0)?,
        animal_id: row.get(1)?,
        weight_grams: row.get(2)?,
        date: parse_date(&date),
        notes: row.get(4)?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

/// Map a shedding record row (id, animal_id, date, is_complete, notes,
/// created_at, updated_at)
pub(super) fn shedding_record_from_row(row: &Row) -> rusqlite::Result<SheddingRecord> {
    let date: String = row.get(2)?;
    let is_complete: i32 = row.get(3)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(SheddingRecord {
        id: row.get(0)?,
        animal_id: row.get(1)?,
        date: parse_date(&date),
        is_complete: is_complete != 0,
        notes: row.get(4)?,
        created_at: parse_timestamp(&created_at),
        updated_at: parse_timestamp(&updated_at),
    })
}

impl Database {
    // ===== Weight records =====

    /// List all weight records
    pub fn list_weight_records(&self) -> Result<Vec<WeightRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, weight_grams, date, notes, created_at, updated_at
             FROM weight_records ORDER BY date, id",
        )?;

        let records = stmt
            .query_map([], weight_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// List weight records for one animal, ascending by date
    pub fn list_weight_records_for_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<WeightRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, weight_grams, date, notes, created_at, updated_at
             FROM weight_records WHERE animal_id = ?1 ORDER BY date, id",
        )?;

        let records = stmt
            .query_map(params![animal_id], weight_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Create a weight record
    pub fn create_weight_record(
        &self,
        payload: &NewWeightRecord,
    ) -> Result<WeightRecord, StorageError> {
        if payload.weight_grams < 0.0 {
            return Err(StorageError::InvalidInput(format!(
                "weight must not be negative, got {}",
                payload.weight_grams
            )));
        }

        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO weight_records (animal_id, weight_grams, date, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                payload.animal_id,
                payload.weight_grams,
                payload.date.to_string(),
                payload.notes,
                now_str,
                now_str,
            ],
        )?;

        Ok(WeightRecord {
            id: self.connection().last_insert_rowid(),
            animal_id: payload.animal_id,
            weight_grams: payload.weight_grams,
            date: payload.date,
            notes: payload.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update a weight record
    pub fn update_weight_record(
        &self,
        record_id: i64,
        payload: &NewWeightRecord,
    ) -> Result<WeightRecord, StorageError> {
        if payload.weight_grams < 0.0 {
            return Err(StorageError::InvalidInput(format!(
                "weight must not be negative, got {}",
                payload.weight_grams
            )));
        }

        let rows_affected = self.connection().execute(
            "UPDATE weight_records SET animal_id = ?1, weight_grams = ?2, date = ?3, notes = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                payload.animal_id,
                payload.weight_grams,
                payload.date.to_string(),
                payload.notes,
                Utc::now().to_rfc3339(),
                record_id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "weight record with id {} not found",
                record_id
            )));
        }

        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, weight_grams, date, notes, created_at, updated_at
             FROM weight_records WHERE id = ?1",
        )?;
        stmt.query_row(params![record_id], weight_record_from_row)
            .map_err(Into::into)
    }

    /// Delete a weight record
    pub fn delete_weight_record(&self, record_id: i64) -> Result<(), StorageError> {
        let rows_affected = self.connection().execute(
            "DELETE FROM weight_records WHERE id = ?1",
            params![record_id],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "weight record with id {} not found",
                record_id
            )));
        }

        Ok(())
    }

    // ===== Shedding records =====

    /// List all shedding records
    pub fn list_shedding_records(&self) -> Result<Vec<SheddingRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, is_complete, notes, created_at, updated_at
             FROM shedding_records ORDER BY date, id",
        )?;

        let records = stmt
            .query_map([], shedding_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// List shedding records for one animal, ascending by date
    pub fn list_shedding_records_for_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<SheddingRecord>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, is_complete, notes, created_at, updated_at
             FROM shedding_records WHERE animal_id = ?1 ORDER BY date, id",
        )?;

        let records = stmt
            .query_map(params![animal_id], shedding_record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Create a shedding record
    pub fn create_shedding_record(
        &self,
        payload: &NewSheddingRecord,
    ) -> Result<SheddingRecord, StorageError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.connection().execute(
            "INSERT INTO shedding_records (animal_id, date, is_complete, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                payload.animal_id,
                payload.date.to_string(),
                payload.is_complete as i32,
                payload.notes,
                now_str,
                now_str,
            ],
        )?;

        Ok(SheddingRecord {
            id: self.connection().last_insert_rowid(),
            animal_id: payload.animal_id,
            date: payload.date,
            is_complete: payload.is_complete,
            notes: payload.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update a shedding record
    pub fn update_shedding_record(
        &self,
        record_id: i64,
        payload: &NewSheddingRecord,
    ) -> Result<SheddingRecord, StorageError> {
        let rows_affected = self.connection().execute(
            "UPDATE shedding_records SET animal_id = ?1, date = ?2, is_complete = ?3, notes = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                payload.animal_id,
                payload.date.to_string(),
                payload.is_complete as i32,
                payload.notes,
                Utc::now().to_rfc3339(),
                record_id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "shedding record with id {} not found",
                record_id
            )));
        }

        let mut stmt = self.connection().prepare(
            "SELECT id, animal_id, date, is_complete, notes, created_at, updated_at
             FROM shedding_records WHERE id = ?1",
        )?;
        stmt.query_row(params![record_id], shedding_record_from_row)
            .map_err(Into::into)
    }

    /// Delete a shedding record
    pub fn delete_shedding_record(&self, record_id: i64) -> Result<(), StorageError> {
        let rows_affected = self.connection().execute(
            "DELETE FROM shedding_records WHERE id = ?1",
            params![record_id],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(format!(
                "shedding record with id {} not found",
                record_id
            )));
        }

        Ok(())
    }
}
