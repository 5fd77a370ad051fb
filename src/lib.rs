// ViviLog Client Library
// Provides Tauri IPC commands for reptile husbandry record keeping

pub mod analytics;
pub mod commands;
pub mod error;
pub mod models;
pub mod storage;

use std::sync::Mutex;

use tauri::Manager;

use commands::{
    create_animal, create_breeding_record, create_feeding_record, create_shedding_record,
    create_weight_record, delete_animal, delete_breeding_record, delete_feeding_record,
    delete_shedding_record, delete_weight_record, export_archive, get_animal,
    get_growth_chart_data, get_growth_rate_volatility, get_shedding_forecast, import_archive,
    list_animals, list_breeding_records, list_feeding_records, list_shedding_records,
    list_weight_records, update_animal, update_breeding_record, update_feeding_record,
    update_shedding_record, update_weight_record, AppState,
};

use storage::Database;

/// Database file name
const DATABASE_FILENAME: &str = "vivilog.db";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Get app data directory for database storage
            let app_data_dir = app
                .path()
                .app_data_dir()
                .expect("Failed to get app data directory");

            // Create directory if it doesn't exist
            std::fs::create_dir_all(&app_data_dir)?;

            // Initialize database
            let db_path = app_data_dir.join(DATABASE_FILENAME);
            let db = Database::new(&db_path).expect("Failed to initialize database");

            // Store database in app state
            app.manage(AppState { db: Mutex::new(db) });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Animal roster
            list_animals,
            get_animal,
            create_animal,
            update_animal,
            delete_animal,
            // Weight records
            list_weight_records,
            create_weight_record,
            update_weight_record,
            delete_weight_record,
            // Shedding records
            list_shedding_records,
            create_shedding_record,
            update_shedding_record,
            delete_shedding_record,
            // Feeding records
            list_feeding_records,
            create_feeding_record,
            update_feeding_record,
            delete_feeding_record,
            // Breeding records
            list_breeding_records,
            create_breeding_record,
            update_breeding_record,
            delete_breeding_record,
            // Growth analytics
            get_growth_rate_volatility,
            get_shedding_forecast,
            get_growth_chart_data,
            // Backup
            export_archive,
            import_archive
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
