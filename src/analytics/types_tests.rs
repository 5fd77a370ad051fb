//! Unit tests for analytics types serialization

use chrono::NaiveDate;

use super::{GrowthChartData, SheddingForecast};

#[test]
fn test_shedding_forecast_serialization() {
    let forecast = SheddingForecast {
        predicted_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        confidence: 0.875,
    };

    let json = serde_json::to_value(&forecast).unwrap();
    assert_eq!(json["predicted_date"], "2024-03-04");
    assert_eq!(json["confidence"], 0.875);
}

#[test]
fn test_shedding_forecast_roundtrip_preserves_negative_confidence() {
    let forecast = SheddingForecast {
        predicted_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        confidence: -0.4,
    };

    let json = serde_json::to_string(&forecast).unwrap();
    let back: SheddingForecast = serde_json::from_str(&json).unwrap();
    assert_eq!(back, forecast);
}

#[test]
fn test_growth_chart_data_default_is_empty() {
    let chart = GrowthChartData::default();
    assert!(chart.dates.is_empty());
    assert!(chart.weights.is_empty());
    assert!(chart.shedding_dates.is_empty());
}

#[test]
fn test_growth_chart_data_parallel_arrays_serialize_in_order() {
    let chart = GrowthChartData {
        dates: vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ],
        weights: vec![100.0, 115.5],
        shedding_dates: vec![NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()],
    };

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["dates"][1], "2024-02-01");
    assert_eq!(json["weights"][1], 115.5);
    assert_eq!(json["shedding_dates"][0], "2024-01-20");
}
