//! Archive snapshot operations
//!
//! Assembles the full-database snapshot used by JSON export and restores
//! it on import. Import replaces the current contents, matching the
//! "overwrite existing data" semantics of the backup feature.

use chrono::Utc;
use rusqlite::params;

use super::{ArchiveData, StorageError, ARCHIVE_VERSION};
use crate::storage::Database;

impl Database {
    /// Snapshot every collection into an archive
    pub fn export_archive(&self) -> Result<ArchiveData, StorageError> {
        Ok(ArchiveData {
            version: ARCHIVE_VERSION,
            exported_at: Utc::now(),
            animals: self.list_animals()?,
            weight_records: self.list_weight_records()?,
            shedding_records: self.list_shedding_records()?,
            feeding_records: self.list_feeding_records()?,
            breeding_records: self.list_breeding_records()?,
        })
    }

    /// Replace the database contents with an archive's
    ///
    /// Row ids from the archive are kept verbatim so animal references in
    /// the record tables stay valid. Runs in a single transaction; on any
    /// failure the previous contents are untouched.
    ///
    /// Returns the number of imported rows across all tables.
    pub fn import_archive(&self, archive: &ArchiveData) -> Result<usize, StorageError> {
        if archive.version > ARCHIVE_VERSION {
            return Err(StorageError::InvalidInput(format!(
                "archive version {} is newer than supported version {}",
                archive.version, ARCHIVE_VERSION
            )));
        }

        let tx = self.connection().unchecked_transaction()?;

        // Children before parents, foreign keys are enforced
        tx.execute("DELETE FROM weight_records", [])?;
        tx.execute("DELETE FROM shedding_records", [])?;
        tx.execute("DELETE FROM feeding_records", [])?;
        tx.execute("DELETE FROM breeding_records", [])?;
        tx.execute("DELETE FROM animals", [])?;

        let mut imported = 0usize;

        for animal in &archive.animals {
            tx.execute(
                "INSERT INTO animals (id, name, code, species, morph, sex, birth_date, source, price, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    animal.id,
                    animal.name,
                    animal.code,
                    animal.species,
                    animal.morph,
                    animal.sex.as_str(),
                    animal.birth_date.to_string(),
                    animal.source,
                    animal.price,
                    animal.notes,
                    animal.created_at.to_rfc3339(),
                    animal.updated_at.to_rfc3339(),
                ],
            )?;
            imported += 1;
        }

        for record in &archive.weight_records {
            tx.execute(
                "INSERT INTO weight_records (id, animal_id, weight_grams, date, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.animal_id,
                    record.weight_grams,
                    record.date.to_string(),
                    record.notes,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            imported += 1;
        }

        for record in &archive.shedding_records {
            tx.execute(
                "INSERT INTO shedding_records (id, animal_id, date, is_complete, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.animal_id,
                    record.date.to_string(),
                    record.is_complete as i32,
                    record.notes,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            imported += 1;
        }

        for record in &archive.feeding_records {
            tx.execute(
                "INSERT INTO feeding_records (id, animal_id, date, food_type, food_weight_grams, animal_weight_grams, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    record.id,
                    record.animal_id,
                    record.date.to_string(),
                    record.food_type,
                    record.food_weight_grams,
                    record.animal_weight_grams,
                    record.notes,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            imported += 1;
        }

        for record in &archive.breeding_records {
            tx.execute(
                "INSERT INTO breeding_records (id, male_id, female_id, date, outcome, eggs_count, hatch_count, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    record.id,
                    record.male_id,
                    record.female_id,
                    record.date.to_string(),
                    record.outcome,
                    record.eggs_count,
                    record.hatch_count,
                    record.notes,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            imported += 1;
        }

        tx.commit()?;
        Ok(imported)
    }
}
