//! Backup import/export IPC commands
//!
//! Writes the whole database to a JSON archive file and restores it. The
//! frontend picks the path with the dialog plugin; file I/O happens here
//! so the renderer never touches the filesystem.

use std::fs;

use serde::Serialize;
use tauri::State;

use crate::error::AppError;
use crate::storage::ArchiveData;

use super::AppState;

/// Result of an archive operation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ArchiveSummary {
    /// Archive file path
    pub path: String,
    /// Number of rows written or restored
    pub records: usize,
}

/// Export all data to a JSON archive file
#[tauri::command]
pub async fn export_archive(
    state: State<'_, AppState>,
    path: String,
) -> Result<ArchiveSummary, AppError> {
    // Snapshot under the lock, write without it
    let archive = {
        let db = state.db.lock().map_err(|_| AppError::LockError)?;
        db.export_archive()?
    };

    let records = archive.animals.len()
        + archive.weight_records.len()
        + archive.shedding_records.len()
        + archive.feeding_records.len()
        + archive.breeding_records.len();

    let json = serde_json::to_string_pretty(&archive)?;
    let target = path.clone();
    tokio::task::spawn_blocking(move || fs::write(&target, json))
        .await
        .map_err(|e| AppError::internal(format!("Task join error: {}", e)))??;

    Ok(ArchiveSummary { path, records })
}

/// Import a JSON archive file, replacing the current data
#[tauri::command]
pub async fn import_archive(
    state: State<'_, AppState>,
    path: String,
) -> Result<ArchiveSummary, AppError> {
    let source = path.clone();
    let json = tokio::task::spawn_blocking(move || fs::read_to_string(&source))
        .await
        .map_err(|e| AppError::internal(format!("Task join error: {}", e)))??;

    let archive: ArchiveData = serde_json::from_str(&json)?;

    let db = state.db.lock().map_err(|_| AppError::LockError)?;
    let records = db.import_archive(&archive)?;

    Ok(ArchiveSummary { path, records })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::storage::ArchiveData;

    #[test]
    fn test_archive_data_tolerates_missing_collections() {
        // Hand-edited or older backup files may omit whole sections
        let json = format!(
            r#"{{"version": 1, "exported_at": "{}", "animals": []}}"#,
            Utc::now().to_rfc3339()
        );

        let archive: ArchiveData = serde_json::from_str(&json).unwrap();
        assert!(archive.weight_records.is_empty());
        assert!(archive.breeding_records.is_empty());
    }
}
