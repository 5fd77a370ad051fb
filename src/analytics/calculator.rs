//! Growth statistics calculation logic
//!
//! Pure functions over weight and shedding record slices. All of these are
//! stateless: identical inputs always produce identical outputs, and none
//! of the numeric edge cases (empty input, same-day records) can leak a
//! NaN or infinity to the caller.

use chrono::{Duration, NaiveDate};

use crate::models::{SheddingRecord, WeightRecord};

use super::{GrowthChartData, SheddingForecast};

/// Milliseconds in one day, for fractional-day date arithmetic
const MS_PER_DAY: f64 = 86_400_000.0;

/// Population standard deviation of a sequence of values
///
/// Divides by N, not N-1. A single-element input yields 0. An empty input
/// is a caller precondition violation; it returns 0.0 rather than NaN so a
/// slipped guard upstream cannot poison chart output.
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let avg_square_diff = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    avg_square_diff.sqrt()
}

/// Dispersion of per-interval growth rates (grams per day)
///
/// `weights` and `dates` are parallel slices for one animal, ordered by
/// ascending date; ordering is the caller's responsibility. Fewer than two
/// points yields 0.0.
///
/// For each consecutive pair the rate is `delta_weight / delta_days`.
/// Pairs with a zero-day gap (two weigh-ins on the same date) are skipped
/// rather than producing an infinite rate.
///
/// Note on the name: the legacy implementation exposed this figure as the
/// "growth rate", but what it actually returns is the population standard
/// deviation of the interval rates, i.e. how *volatile* growth has been,
/// not how fast. The behavior is kept for compatibility with historical
/// UI readings; the name here says what it computes.
pub fn growth_rate_volatility(weights: &[f64], dates: &[NaiveDate]) -> f64 {
    if weights.len() < 2 || dates.len() < 2 {
        return 0.0;
    }

    let mut rates = Vec::with_capacity(weights.len() - 1);
    for i in 1..weights.len().min(dates.len()) {
        let days = (dates[i] - dates[i - 1]).num_days() as f64;
        if days == 0.0 {
            // Same-day measurements carry no rate information
            continue;
        }
        rates.push((weights[i] - weights[i - 1]) / days);
    }

    std_deviation(&rates)
}

/// Predict an animal's next shedding date from its event history
///
/// Requires at least two records; otherwise returns `None`. Records are
/// stably sorted by date (ties keep their original relative order), the
/// mean inter-event interval is added to the last event's date, and the
/// confidence is `1 - std_deviation(intervals) / avg_interval`.
///
/// When every interval is zero (all events on one day) there is no mean
/// interval to project with, so the history is treated as insufficient and
/// `None` is returned instead of dividing by zero.
pub fn predict_next_shedding(records: &[SheddingRecord]) -> Option<SheddingForecast> {
    if records.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&SheddingRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let intervals: Vec<f64> = sorted
        .windows(2)
        .map(|pair| (pair[1].date - pair[0].date).num_days() as f64)
        .collect();

    let avg_interval = intervals.iter().sum::<f64>() / intervals.len() as f64;
    if avg_interval <= 0.0 {
        return None;
    }

    let last = sorted[sorted.len() - 1].date;
    let predicted_date = (last.and_hms_opt(0, 0, 0)?
        + Duration::milliseconds((avg_interval * MS_PER_DAY).round() as i64))
    .date();

    Some(SheddingForecast {
        predicted_date,
        confidence: 1.0 - std_deviation(&intervals) / avg_interval,
    })
}

/// Build the chart projection for one animal
///
/// Filters both collections to `animal_id`, sorts each ascending by date
/// (stable), and projects three arrays: measurement dates, the weights
/// aligned with them, and shedding dates. Pure projection, no statistics.
pub fn growth_chart_data(
    weight_records: &[WeightRecord],
    shedding_records: &[SheddingRecord],
    animal_id: i64,
) -> GrowthChartData {
    let mut weights: Vec<&WeightRecord> = weight_records
        .iter()
        .filter(|record| record.animal_id == animal_id)
        .collect();
    weights.sort_by_key(|record| record.date);

    let mut sheds: Vec<&SheddingRecord> = shedding_records
        .iter()
        .filter(|record| record.animal_id == animal_id)
        .collect();
    sheds.sort_by_key(|record| record.date);

    GrowthChartData {
        dates: weights.iter().map(|record| record.date).collect(),
        weights: weights.iter().map(|record| record.weight_grams).collect(),
        shedding_dates: sheds.iter().map(|record| record.date).collect(),
    }
}
