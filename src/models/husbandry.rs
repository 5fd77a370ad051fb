//! Husbandry record data models
//!
//! Feeding and breeding records. These sit outside the analytics core but
//! are part of the day-to-day bookkeeping surface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A feeding event for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FeedingRecord {
    /// Numeric row id
    pub id: i64,
    /// Animal that was fed
    pub animal_id: i64,
    /// Date of the feeding
    pub date: NaiveDate,
    /// Prey description (e.g. "frozen-thawed mouse")
    pub food_type: String,
    /// Prey weight in grams
    pub food_weight_grams: f64,
    /// Animal's body weight at feeding time, in grams
    pub animal_weight_grams: f64,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a feeding record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewFeedingRecord {
    pub animal_id: i64,
    pub date: NaiveDate,
    pub food_type: String,
    pub food_weight_grams: f64,
    pub animal_weight_grams: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A pairing attempt between two animals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BreedingRecord {
    /// Numeric row id
    pub id: i64,
    /// Sire
    pub male_id: i64,
    /// Dam
    pub female_id: i64,
    /// Pairing date
    pub date: NaiveDate,
    /// Observed outcome ("locked", "no interest", "gravid", ...)
    pub outcome: String,
    /// Eggs laid, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eggs_count: Option<u32>,
    /// Eggs hatched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hatch_count: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a breeding record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewBreedingRecord {
    pub male_id: i64,
    pub female_id: i64,
    pub date: NaiveDate,
    pub outcome: String,
    #[serde(default)]
    pub eggs_count: Option<u32>,
    #[serde(default)]
    pub hatch_count: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}
