//! Growth record data models
//!
//! Weight measurements and shedding events, the two record families the
//! analytics core consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dated weight observation for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeightRecord {
    /// Numeric row id
    pub id: i64,
    /// Animal this measurement belongs to
    pub animal_id: i64,
    /// Measured body weight in grams (never negative)
    pub weight_grams: f64,
    /// Date of the measurement
    pub date: NaiveDate,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a weight record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewWeightRecord {
    pub animal_id: i64,
    pub weight_grams: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A dated shedding event for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SheddingRecord {
    /// Numeric row id
    pub id: i64,
    /// Animal this event belongs to
    pub animal_id: i64,
    /// Date of the shed
    pub date: NaiveDate,
    /// Whether the skin came off in one piece
    pub is_complete: bool,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a shedding record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewSheddingRecord {
    pub animal_id: i64,
    pub date: NaiveDate,
    pub is_complete: bool,
    #[serde(default)]
    pub notes: Option<String>,
}
