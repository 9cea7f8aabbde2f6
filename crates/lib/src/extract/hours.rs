//! Opening-hours derivation.
//!
//! The document carries one entry per weekday: a day label plus an ordered
//! list of time-range text fragments. How those fragments are rendered varies
//! wildly with locale and listing type ("10 am–10 pm", "Open 24 hours",
//! "Closed"), so the open/closed inference is deliberately coarse: a day is
//! open iff its cleaned range text contains at least one digit.

use super::path;
use crate::types::OpenHours;
use serde_json::Value;

const HOURS_ITEMS: &[usize] = &[34, 1];

/// Derives the per-day working hours. A day whose entry is not itself a
/// sequence is skipped; one bad day never invalidates the others.
pub(super) fn working_hours(data: &[Value]) -> Vec<OpenHours> {
    path::sequence(data, HOURS_ITEMS)
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_array()?;
            let day = path::field::<String>(entry, &[0]);

            let mut joined = String::new();
            for fragment in path::sequence(entry, &[1]) {
                joined.push_str(fragment.as_str().unwrap_or_default());
            }

            let cleaned: String = joined
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '"')
                .collect();
            let open = cleaned.chars().any(|c| c.is_numeric());

            Some(OpenHours {
                day,
                open_hours: cleaned,
                open,
            })
        })
        .collect()
}
