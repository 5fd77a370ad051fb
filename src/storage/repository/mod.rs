//! Repository layer for database CRUD operations
//!
//! Provides high-level database operations for animals and their husbandry
//! records, plus the archive snapshot used by JSON import/export.

mod animal;
mod growth;
mod husbandry;
mod transfer;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use super::error::StorageError;
use crate::models::{Animal, BreedingRecord, FeedingRecord, SheddingRecord, WeightRecord};

/// Current archive format version
pub const ARCHIVE_VERSION: u32 = 1;

/// Full snapshot of the database for JSON backup files
///
/// Row ids are preserved in the archive so that record-to-animal references
/// survive a round trip. Importing an archive replaces the current data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ArchiveData {
    /// Archive format version
    pub version: u32,
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub weight_records: Vec<WeightRecord>,
    #[serde(default)]
    pub shedding_records: Vec<SheddingRecord>,
    #[serde(default)]
    pub feeding_records: Vec<FeedingRecord>,
    #[serde(default)]
    pub breeding_records: Vec<BreedingRecord>,
}

/// Parse an RFC 3339 timestamp column, falling back to now on bad data
pub(super) fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse a YYYY-MM-DD date column, falling back to the epoch date on bad data
pub(super) fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

#[cfg(test)]
mod tests;
