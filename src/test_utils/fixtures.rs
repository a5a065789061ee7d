//! Consumption page fixtures in the Octopus Energy wire format.

use crate::model::ConsumptionPage;
use serde_json::{json, Value};

/// One interval as the API returns it.
pub fn interval_json(interval_end: &str, consumption: f64) -> Value {
    json!({
        "consumption": consumption,
        "interval_start": interval_end,
        "interval_end": interval_end,
    })
}

/// A page body with the given intervals and `next` link.
pub fn page_json(intervals: &[Value], next: Option<&str>) -> String {
    json!({
        "count": intervals.len(),
        "next": next,
        "previous": null,
        "results": intervals,
    })
    .to_string()
}

/// A decoded page built from `(interval_end, consumption)` pairs.
pub fn page(intervals: &[(&str, f64)], next: Option<&str>) -> ConsumptionPage {
    let intervals: Vec<Value> = intervals
        .iter()
        .map(|(end, consumption)| interval_json(end, *consumption))
        .collect();
    serde_json::from_str(&page_json(&intervals, next)).unwrap()
}
