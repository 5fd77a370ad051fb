//! Animal data model
//!
//! Defines the Animal structure representing a single tracked reptile,
//! plus the input payload used when creating or updating one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Biological sex of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    #[default]
    Female,
}

impl Sex {
    /// Convert from string representation (database column value)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Sex::Male,
            _ => Sex::Female,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// A tracked reptile individual
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Animal {
    /// Numeric row id
    pub id: i64,
    /// Display name given by the keeper
    pub name: String,
    /// Collection code (S001, S002, ...), generated on creation and
    /// never changed afterwards
    pub code: String,
    /// Species or common name
    pub species: String,
    /// Morph / genetics description
    pub morph: String,
    /// Biological sex
    pub sex: Sex,
    /// Hatch or birth date
    pub birth_date: NaiveDate,
    /// Where the animal came from (breeder, expo, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Purchase price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating an animal
///
/// The `code` is intentionally absent: it is generated by the store on
/// creation and preserved on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub morph: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}
