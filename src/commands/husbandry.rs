//! Husbandry record IPC commands
//!
//! Provides Tauri commands for feeding and breeding records.

use tauri::State;

use crate::error::AppError;
use crate::models::{BreedingRecord, FeedingRecord, NewBreedingRecord, NewFeedingRecord};

use super::AppState;

// ===== Feeding records =====

/// List feeding records, optionally restricted to one animal
#[tauri::command]
pub async fn list_feeding_records(
    state: State<'_, AppState>,
    animal_id: Option<i64>,
) -> Result<Vec<FeedingRecord>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    match animal_id {
        Some(id) => db.list_feeding_records_for_animal(id).map_err(Into::into),
        None => db.list_feeding_records().map_err(Into::into),
    }
}

/// Create a feeding record
#[tauri::command]
pub async fn create_feeding_record(
    state: State<'_, AppState>,
    payload: NewFeedingRecord,
) -> Result<FeedingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.create_feeding_record(&payload).map_err(Into::into)
}

/// Update a feeding record
#[tauri::command]
pub async fn update_feeding_record(
    state: State<'_, AppState>,
    record_id: i64,
    payload: NewFeedingRecord,
) -> Result<FeedingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.update_feeding_record(record_id, &payload).map_err(Into::into)
}

/// Delete a feeding record
#[tauri::command]
pub async fn delete_feeding_record(
    state: State<'_, AppState>,
    record_id: i64,
) -> Result<(), AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.delete_feeding_record(record_id).map_err(Into::into)
}

// ===== Breeding records =====

/// List all breeding records
#[tauri::command]
pub async fn list_breeding_records(
    state: State<'_, AppState>,
) -> Result<Vec<BreedingRecord>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.list_breeding_records().map_err(Into::into)
}

/// Create a breeding record
#[tauri::command]
pub async fn create_breeding_record(
    state: State<'_, AppState>,
    payload: NewBreedingRecord,
) -> Result<BreedingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.create_breeding_record(&payload).map_err(Into::into)
}

/// Update a breeding record
#[tauri::command]
pub async fn update_breeding_record(
    state: State<'_, AppState>,
    record_id: i64,
    payload: NewBreedingRecord,
) -> Result<BreedingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.update_breeding_record(record_id, &payload).map_err(Into::into)
}

/// Delete a breeding record
#[tauri::command]
pub async fn delete_breeding_record(
    state: State<'_, AppState>,
    record_id: i64,
) -> Result<(), AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.delete_breeding_record(record_id).map_err(Into::into)
}
