//! User-review collection and the pre-aggregated rating histogram.

use super::path;
use crate::types::Review;
use serde_json::Value;
use std::collections::BTreeMap;

const REVIEW_ITEMS: &[usize] = &[52, 0];

/// Collects user reviews. Entries with no derivable reviewer name are
/// placeholders in the source data, not real reviews, and are skipped
/// entirely. Photo entries whose URL resolves empty are skipped per review.
pub(super) fn user_reviews(data: &[Value]) -> Vec<Review> {
    path::sequence(data, REVIEW_ITEMS)
        .iter()
        .filter_map(|entry| {
            let entry = path::as_sequence(entry);
            let name = path::field::<String>(entry, &[0, 1]);
            if name.is_empty() {
                return None;
            }

            let images = path::sequence(entry, &[14])
                .iter()
                .filter_map(|photo| {
                    let url = path::field::<String>(path::as_sequence(photo), &[6, 0]);
                    (!url.is_empty()).then_some(url)
                })
                .collect();

            Some(Review {
                name,
                profile_picture: path::field::<String>(entry, &[0, 2]),
                when: path::field::<String>(entry, &[1]),
                rating: path::field::<i64>(entry, &[4]),
                description: path::field::<String>(entry, &[3]),
                images,
            })
        })
        .collect()
}

/// Reads the five-bucket rating histogram (count of 1-star through 5-star
/// reviews). The document exposes it pre-aggregated; it is never recomputed
/// from the individual reviews.
pub(super) fn reviews_per_rating(data: &[Value]) -> BTreeMap<u8, u32> {
    (1u8..=5)
        .map(|stars| {
            let count = path::field::<i64>(data, &[52, 3, (stars - 1) as usize]);
            (stars, count.max(0) as u32)
        })
        .collect()
}
