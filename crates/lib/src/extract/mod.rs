//! # Extraction Orchestrator
//!
//! Decodes one raw nested-array document and composes the path accessor and
//! the derivers into one populated [`Listing`].
//!
//! The offsets used here are hand-derived from observed documents and tied to
//! one response variant; they are brittle by construction. The engine's job
//! is to make that brittleness safe, not to eliminate it: every lookup goes
//! through [`path`], which absorbs structural mismatches into zero values,
//! and the whole extraction body additionally runs inside a recoverable
//! failure boundary so that a fault deeper than those guards surfaces as an
//! [`ExtractError::UnexpectedFault`] instead of aborting the caller.

pub mod path;

mod about;
mod hours;
mod links;
mod popular_times;
mod reviews;

use crate::errors::ExtractError;
use crate::types::{DetailedAddress, LinkSource, Listing, Owner, PlaceImage};
use serde_json::Value;
use std::any::Any;
use tracing::debug;

/// Offset of the working data array inside the top-level sequence.
const DATA_OFFSET: usize = 6;

/// The top-level sequence must at least reach past [`DATA_OFFSET`].
const MIN_TOP_LEVEL_LEN: usize = 7;

/// Two known layouts for the order-online item list. The primary layout is
/// probed first; the alternate covers older documents where the list sits one
/// slot lower.
const ORDER_ONLINE_PRIMARY: &[usize] = &[75, 0, 1, 2];
const ORDER_ONLINE_ALTERNATE: &[usize] = &[75, 0, 0, 2];

/// Decodes `raw` and extracts one [`Listing`].
///
/// Per-field structural mismatches are absorbed as zero values and never
/// reported; only two things fail the call: input that cannot be decoded into
/// the minimum top-level structure ([`ExtractError::MalformedDocument`]) and
/// an unanticipated fault caught by the extraction boundary
/// ([`ExtractError::UnexpectedFault`]). The returned listing may still be
/// unusable — callers must run [`Listing::validate`] before persisting it.
pub fn listing_from_json(raw: &[u8]) -> Result<Listing, ExtractError> {
    // Last-resort net behind the path accessor's per-step guards. Document
    // variants are effectively unbounded, so a fault one level deeper than
    // any guard anticipated must become a diagnosable error value, not an
    // unwind through the caller.
    std::panic::catch_unwind(|| build_listing(raw))
        .unwrap_or_else(|payload| Err(ExtractError::UnexpectedFault(fault_message(payload))))
}

/// Best-effort diagnostic from a caught panic payload.
fn fault_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "extraction fault with non-textual payload".to_string()
    }
}

fn build_listing(raw: &[u8]) -> Result<Listing, ExtractError> {
    let document: Value = serde_json::from_slice(raw)
        .map_err(|e| ExtractError::MalformedDocument(format!("not decodable: {e}")))?;

    let root = document
        .as_array()
        .filter(|root| root.len() >= MIN_TOP_LEVEL_LEN)
        .ok_or_else(|| {
            ExtractError::MalformedDocument(format!(
                "top-level sequence missing or shorter than {MIN_TOP_LEVEL_LEN} elements"
            ))
        })?;

    let data = root[DATA_OFFSET].as_array().ok_or_else(|| {
        ExtractError::MalformedDocument(format!("no data sequence at offset {DATA_OFFSET}"))
    })?;

    let mut listing = Listing {
        link: path::field(data, &[27]),
        name: path::field(data, &[11]),
        categories: path::field(data, &[13]),
        website: path::field(data, &[7, 0]),
        phone: path::field(data, &[178, 0, 0]),
        plus_code: path::field(data, &[183, 2, 2, 0]),
        review_count: path::field(data, &[4, 8]),
        review_rating: path::field(data, &[4, 7]),
        latitude: path::field(data, &[9, 2]),
        longitude: path::field(data, &[9, 3]),
        // The CID lives outside the data array, relative to the root.
        cid: path::field(root, &[25, 3, 0, 13, 0, 0, 1]),
        status: path::field(data, &[34, 4, 4]),
        description: path::field(data, &[32, 1, 1]),
        reviews_link: path::field(data, &[4, 3, 0]),
        thumbnail: path::field(data, &[72, 0, 1, 6, 0]),
        timezone: path::field(data, &[30]),
        price_range: path::field(data, &[4, 2]),
        data_id: path::field(data, &[10]),
        working_hours: hours::working_hours(data),
        popular_times: popular_times::popular_times(data),
        about: about::about_sections(data),
        user_reviews: reviews::user_reviews(data),
        reviews_per_rating: reviews::reviews_per_rating(data),
        ..Default::default()
    };

    listing.category = listing.categories.first().cloned().unwrap_or_default();

    // The raw address line usually repeats the business name up front.
    let raw_address = path::field::<String>(data, &[18]);
    listing.address = raw_address
        .strip_prefix(&format!("{},", listing.name))
        .unwrap_or(&raw_address)
        .trim()
        .to_string();

    listing.images = links::link_sources(path::sequence(data, &[171, 0]), &[3, 0, 6, 0], &[2])
        .into_iter()
        .map(|pair| PlaceImage {
            title: pair.source,
            image: pair.link,
        })
        .collect();

    listing.reservations = links::link_sources(path::sequence(data, &[46]), &[0], &[1]);

    let mut order_items = path::sequence(data, ORDER_ONLINE_PRIMARY);
    if order_items.is_empty() {
        debug!("order-online list empty at primary offset, probing alternate layout");
        order_items = path::sequence(data, ORDER_ONLINE_ALTERNATE);
    }
    listing.order_online = links::link_sources(order_items, &[1, 2, 0], &[0, 0]);

    listing.services = LinkSource {
        link: path::field(data, &[38, 0]),
        source: path::field(data, &[38, 1]),
    };

    listing.owner = Owner {
        id: path::field(data, &[57, 2]),
        name: path::field(data, &[57, 1]),
        link: String::new(),
    };
    if !listing.owner.id.is_empty() {
        listing.owner.link = format!("https://www.google.com/maps/contrib/{}", listing.owner.id);
    }

    listing.complete_address = DetailedAddress {
        borough: path::field(data, &[183, 1, 0]),
        street: path::field(data, &[183, 1, 1]),
        city: path::field(data, &[183, 1, 3]),
        postal_code: path::field(data, &[183, 1, 4]),
        state: path::field(data, &[183, 1, 5]),
        country: path::field(data, &[183, 1, 6]),
    };

    debug!(
        name = %listing.name,
        reviews = listing.user_reviews.len(),
        "extracted listing"
    );

    Ok(listing)
}
