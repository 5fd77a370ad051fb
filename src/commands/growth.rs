//! Growth record IPC commands
//!
//! Provides Tauri commands for weight and shedding record bookkeeping.

use tauri::State;

use crate::error::AppError;
use crate::models::{NewSheddingRecord, NewWeightRecord, SheddingRecord, WeightRecord};

use super::AppState;

// ===== Weight records =====

/// List weight records, optionally restricted to one animal
#[tauri::command]
pub async fn list_weight_records(
    state: State<'_, AppState>,
    animal_id: Option<i64>,
) -> Result<Vec<WeightRecord>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    match animal_id {
        Some(id) => db.list_weight_records_for_animal(id).map_err(Into::into),
        None => db.list_weight_records().map_err(Into::into),
    }
}

/// Create a weight record
#[tauri::command]
pub async fn create_weight_record(
    state: State<'_, AppState>,
    payload: NewWeightRecord,
) -> Result<WeightRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.create_weight_record(&payload).map_err(Into::into)
}

/// Update a weight record
#[tauri::command]
pub async fn update_weight_record(
    state: State<'_, AppState>,
    record_id: i64,
    payload: NewWeightRecord,
) -> Result<WeightRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.update_weight_record(record_id, &payload).map_err(Into::into)
}

/// Delete a weight record
#[tauri::command]
pub async fn delete_weight_record(
    state: State<'_, AppState>,
    record_id: i64,
) -> Result<(), AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.delete_weight_record(record_id).map_err(Into::into)
}

// ===== Shedding records =====

/// List shedding records, optionally restricted to one animal
#[tauri::command]
pub async fn list_shedding_records(
    state: State<'_, AppState>,
    animal_id: Option<i64>,
) -> Result<Vec<SheddingRecord>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    match animal_id {
        Some(id) => db.list_shedding_records_for_animal(id).map_err(Into::into),
        None => db.list_shedding_records().map_err(Into::into),
    }
}

/// Create a shedding record
#[tauri::command]
pub async fn create_shedding_record(
    state: State<'_, AppState>,
    payload: NewSheddingRecord,
) -> Result<SheddingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.create_shedding_record(&payload).map_err(Into::into)
}

/// Update a shedding record
#[tauri::command]
pub async fn update_shedding_record(
    state: State<'_, AppState>,
    record_id: i64,
    payload: NewSheddingRecord,
) -> Result<SheddingRecord, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.update_shedding_record(record_id, &payload).map_err(Into::into)
}

/// Delete a shedding record
#[tauri::command]
pub async fn delete_shedding_record(
    state: State<'_, AppState>,
    record_id: i64,
) -> Result<(), AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.delete_shedding_record(record_id).map_err(Into::into)
}
