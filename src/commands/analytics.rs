//! Analytics Tauri IPC commands
//!
//! Loads an animal's records from the store, hands them to the pure
//! calculator functions, and returns the derived values. Nothing computed
//! here is persisted; every call recomputes from the current records.

use tauri::State;

use crate::analytics::{
    calculator::{growth_chart_data, growth_rate_volatility, predict_next_shedding},
    GrowthChartData, SheddingForecast,
};
use crate::error::AppError;

use super::AppState;

/// Get the growth-rate volatility figure for an animal
///
/// This is the dispersion (population std deviation) of the per-interval
/// growth rates between consecutive weigh-ins, in grams per day. The
/// legacy UI labels it "growth rate"; see
/// [`growth_rate_volatility`](crate::analytics::calculator::growth_rate_volatility)
/// for why the name here differs. Returns 0.0 with fewer than two
/// weigh-ins.
#[tauri::command]
pub async fn get_growth_rate_volatility(
    state: State<'_, AppState>,
    animal_id: i64,
) -> Result<f64, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;

    // Already ascending by date; the calculator does not sort
    let records = db.list_weight_records_for_animal(animal_id)?;
    let weights: Vec<f64> = records.iter().map(|r| r.weight_grams).collect();
    let dates: Vec<chrono::NaiveDate> = records.iter().map(|r| r.date).collect();

    Ok(growth_rate_volatility(&weights, &dates))
}

/// Forecast the next shedding date for an animal
///
/// Returns `None` when the animal has fewer than two shedding records or
/// when the history carries no usable interval (all events on one day).
#[tauri::command]
pub async fn get_shedding_forecast(
    state: State<'_, AppState>,
    animal_id: i64,
) -> Result<Option<SheddingForecast>, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;

    let records = db.list_shedding_records_for_animal(animal_id)?;
    Ok(predict_next_shedding(&records))
}

/// Get the chart projection (dates, weights, shedding dates) for an animal
#[tauri::command]
pub async fn get_growth_chart_data(
    state: State<'_, AppState>,
    animal_id: i64,
) -> Result<GrowthChartData, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockError)?;

    let weight_records = db.list_weight_records_for_animal(animal_id)?;
    let shedding_records = db.list_shedding_records_for_animal(animal_id)?;

    Ok(growth_chart_data(&weight_records, &shedding_records, animal_id))
}
