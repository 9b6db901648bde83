//! Fertilizer and seed dosage calculation.

use crate::tables;

const FERTILIZER_FALLBACK_RATE: f64 = 25.0;
const SEED_FALLBACK_RATE: f64 = 1.0;

fn effective_rate(custom_rate: Option<f64>, default: Option<f64>, fallback: f64) -> f64 {
    match custom_rate {
        Some(rate) if rate > 0.0 => rate,
        _ => default.unwrap_or(fallback),
    }
}

/// Fertilizer amount in grams for an area, rounded to whole grams.
///
/// A positive custom rate wins; otherwise the plant's table default, then
/// the generic fallback. Non-positive areas yield zero.
pub fn fertilizer_amount(area_m2: f64, custom_rate: Option<f64>, plant: &str) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    let rate = effective_rate(
        custom_rate,
        tables::fertilizer_default(plant),
        FERTILIZER_FALLBACK_RATE,
    );
    (area_m2 * rate).round()
}

/// Seed amount in grams for an area, rounded to one decimal.
pub fn seed_amount(area_m2: f64, custom_rate: Option<f64>, plant: &str) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    let rate = effective_rate(custom_rate, tables::seed_default(plant), SEED_FALLBACK_RATE);
    (area_m2 * rate * 10.0).round() / 10.0
}
