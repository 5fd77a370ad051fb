//! Animal management IPC commands
//!
//! Provides Tauri commands for the animal roster.

use std::sync::Mutex;

use tauri::State;

use crate::error::AppError;
use crate::models::{Animal, NewAnimal};
use crate::storage::Database;

/// Application state containing the database connection
pub struct AppState {
    pub db: Mutex<Database>,
}

/// List all animals ordered by collection code
#[tauri::command]
pub async fn list_animals(state: State<'_, AppState>) -> Result<Vec<Animal>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.list_animals().map_err(Into::into)
}

/// Get a single animal by id
#[tauri::command]
pub async fn get_animal(
    state: State<'_, AppState>,
    animal_id: i64,
) -> Result<Option<Animal>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.get_animal(animal_id).map_err(Into::into)
}

/// Create an animal; the collection code is generated server-side
#[tauri::command]
pub async fn create_animal(
    state: State<'_, AppState>,
    payload: NewAnimal,
) -> Result<Animal, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.create_animal(&payload).map_err(Into::into)
}

/// Update an animal's editable fields (the code is preserved)
#[tauri::command]
pub async fn update_animal(
    state: State<'_, AppState>,
    animal_id: i64,
    payload: NewAnimal,
) -> Result<Animal, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.update_animal(animal_id, &payload).map_err(Into::into)
}

/// Delete an animal and all of its records
#[tauri::command]
pub async fn delete_animal(state: State<'_, AppState>, animal_id: i64) -> Result<(), AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    db.delete_animal(animal_id).map_err(Into::into)
}
