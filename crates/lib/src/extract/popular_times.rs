//! Popular-times histogram derivation.
//!
//! The document carries one entry per weekday: an ISO weekday number
//! (1 = Monday .. 7 = Sunday) plus a list of `[hour, traffic-level]` pairs.
//!
//! Unlike every other deriver, this one is all-or-nothing: any structural
//! mismatch at the day, slot, hour, or value level discards the whole
//! histogram. A partially-correct traffic histogram reads as authoritative
//! data downstream, which is worse than reporting none at all.

use super::path;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

const POPULAR_TIMES_ITEMS: &[usize] = &[84, 0];

/// ISO weekday number minus one indexes this table.
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Derives the weekday-name → hour → traffic-level mapping, or the empty map
/// when the document carries no (or malformed) popular-times data.
pub(super) fn popular_times(data: &[Value]) -> BTreeMap<String, BTreeMap<u8, u32>> {
    let mut histogram = BTreeMap::new();

    for entry in path::sequence(data, POPULAR_TIMES_ITEMS) {
        let Some(entry) = entry.as_array() else {
            debug!("popular times: day entry is not a sequence, dropping histogram");
            return BTreeMap::new();
        };

        let day = path::field::<i64>(entry, &[0]);
        let Some(name) = usize::try_from(day)
            .ok()
            .and_then(|d| d.checked_sub(1))
            .and_then(|d| WEEKDAY_NAMES.get(d))
        else {
            debug!(day, "popular times: weekday out of range, dropping histogram");
            return BTreeMap::new();
        };

        let mut hours = BTreeMap::new();
        for slot in path::sequence(entry, &[1]) {
            let Some(slot) = slot.as_array() else {
                return BTreeMap::new();
            };
            let (Some(hour), Some(level)) = (
                slot.first().and_then(Value::as_f64),
                slot.get(1).and_then(Value::as_f64),
            ) else {
                debug!("popular times: malformed hour slot, dropping histogram");
                return BTreeMap::new();
            };

            hours.insert(hour as u8, level as u32);
        }

        histogram.insert(name.to_string(), hours);
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_with_popular_times(items: Value) -> Vec<Value> {
        let mut data = vec![Value::Null; 85];
        data[84] = json!([items]);
        data
    }

    #[test]
    fn test_histogram_keyed_by_weekday_name() {
        let data = data_with_popular_times(json!([
            [1, [[8, 20], [9, 45]]],
            [7, [[12, 80]]]
        ]));
        let histogram = popular_times(&data);

        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram["Monday"][&8], 20);
        assert_eq!(histogram["Monday"][&9], 45);
        assert_eq!(histogram["Sunday"][&12], 80);
    }

    #[test]
    fn test_one_malformed_slot_drops_entire_histogram() {
        let data = data_with_popular_times(json!([
            [1, [[8, 20]]],
            [2, [[9, "busy"]]]
        ]));
        assert!(
            popular_times(&data).is_empty(),
            "a single bad slot must empty the whole histogram, not just its day"
        );
    }

    #[test]
    fn test_weekday_out_of_range_drops_entire_histogram() {
        let data = data_with_popular_times(json!([[0, [[8, 20]]]]));
        assert!(popular_times(&data).is_empty());

        let data = data_with_popular_times(json!([[8, [[8, 20]]]]));
        assert!(popular_times(&data).is_empty());
    }

    #[test]
    fn test_missing_popular_times_yields_empty() {
        assert!(popular_times(&[const { Value::Null }; 3]).is_empty());
    }
}
