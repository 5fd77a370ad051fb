//! Analytics type definitions
//!
//! Contains the output structures produced by the growth calculator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for an animal's next shedding event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SheddingForecast {
    /// Predicted date of the next shed (last event plus the average
    /// historical interval)
    pub predicted_date: NaiveDate,

    /// `1 - coefficient_of_variation` of the historical intervals.
    ///
    /// This is not a probability and is deliberately not clamped: regular
    /// intervals push it toward 1.0, and when intervals vary more than
    /// their mean it goes negative. Consumers should treat it as a
    /// regularity score, not a percentage.
    pub confidence: f64,
}

/// Chart-ready projection of one animal's growth history
///
/// `dates` and `weights` are parallel (same length, same order);
/// `shedding_dates` is independent of both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GrowthChartData {
    /// Weight measurement dates, ascending
    pub dates: Vec<NaiveDate>,

    /// Measured weights in grams, aligned positionally with `dates`
    pub weights: Vec<f64>,

    /// Shedding event dates, ascending
    pub shedding_dates: Vec<NaiveDate>,
}
