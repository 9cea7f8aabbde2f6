//! Output data model for one extracted place listing.
//!
//! A [`Listing`] is a one-shot transformation artifact: constructed once per
//! raw document, fully populated in a single pass by the orchestrator, then
//! handed to external formatting/validation. It is never mutated afterwards.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single image attached to the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub title: String,
    pub image: String,
}

/// A generic link plus the label/platform it came from. Used for
/// reservations, online ordering, and the listing's service page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSource {
    pub link: String,
    pub source: String,
}

/// The account that owns the listing. `link` is synthesized from `id` and is
/// empty whenever `id` is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub link: String,
}

/// The structured counterpart of the free-text address line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAddress {
    pub borough: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

/// One boolean attribute inside an about section, e.g. "Wheelchair
/// accessible entrance".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutOption {
    pub name: String,
    pub enabled: bool,
}

/// One "About this place" section (accessibility, amenities, payments, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: String,
    pub name: String,
    pub options: Vec<AboutOption>,
}

/// A single user review. `images` holds the photo URLs attached to the
/// review; it is empty for text-only reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub profile_picture: String,
    pub when: String,
    pub rating: i64,
    pub description: String,
    pub images: Vec<String>,
}

/// The opening hours of one weekday. `open_hours` is the cleaned textual
/// range ("10am–10pm"); `open` is inferred from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHours {
    pub day: String,
    pub open_hours: String,
    pub open: bool,
}

/// One fully extracted business listing.
///
/// Every field is independently optional in the source document: scalars
/// default to zero/empty and collections to empty when extraction fails
/// anywhere along their path, so the absence of one sub-structure never
/// prevents population of the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub link: String,
    pub cid: String,
    pub name: String,
    pub categories: Vec<String>,
    /// The first entry of `categories`, when any exist.
    pub category: String,
    pub address: String,
    pub working_hours: Vec<OpenHours>,
    /// Weekday name to hour-of-day to traffic level.
    pub popular_times: BTreeMap<String, BTreeMap<u8, u32>>,
    pub website: String,
    pub phone: String,
    pub plus_code: String,
    pub review_count: i64,
    pub review_rating: f64,
    /// Pre-aggregated counts of 1-star through 5-star reviews, read straight
    /// from the document rather than recomputed from `user_reviews`.
    pub reviews_per_rating: BTreeMap<u8, u32>,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub description: String,
    pub reviews_link: String,
    pub thumbnail: String,
    pub timezone: String,
    pub price_range: String,
    pub data_id: String,
    pub images: Vec<PlaceImage>,
    pub reservations: Vec<LinkSource>,
    pub order_online: Vec<LinkSource>,
    pub services: LinkSource,
    pub owner: Owner,
    pub complete_address: DetailedAddress,
    pub about: Vec<AboutSection>,
    pub user_reviews: Vec<Review>,
    /// Filled in by a later website-scraping stage, never by extraction.
    pub emails: Vec<String>,
}

/// Column labels for the tabular export surface, in the same order as
/// [`Listing::field_values`].
const FIELD_LABELS: &[&str] = &[
    "link",
    "name",
    "category",
    "address",
    "workingHours",
    "popularTimes",
    "website",
    "phone",
    "plusCode",
    "reviewCount",
    "reviewRating",
    "reviewsPerRating",
    "latitude",
    "longitude",
    "cid",
    "status",
    "description",
    "reviewsLink",
    "thumbnail",
    "timezone",
    "priceRange",
    "dataId",
    "images",
    "reservations",
    "orderOnline",
    "services",
    "owner",
    "completeAddress",
    "about",
    "userReviews",
    "emails",
];

impl Listing {
    /// Checks that the listing is usable downstream: both the name and the
    /// primary category must be non-empty.
    ///
    /// This is deliberately separate from extraction. A structurally valid
    /// document can still describe an unusable listing (e.g. a placeholder
    /// entry), and callers must check before persisting or forwarding it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Whether the listing's website is worth visiting to scrape contact
    /// e-mail addresses. Social-media profiles are excluded: they never
    /// expose a mailbox and the scrape would only burn requests.
    pub fn is_website_valid_for_email(&self) -> bool {
        if self.website.is_empty() {
            return false;
        }

        const SOCIAL_NEEDLES: [&str; 3] = ["facebook", "instragram", "twitter"];
        !SOCIAL_NEEDLES.iter().any(|n| self.website.contains(n))
    }

    /// The stable ordered column labels matching [`Listing::field_values`].
    pub fn field_labels() -> &'static [&'static str] {
        FIELD_LABELS
    }

    /// Renders every field as text, in [`Listing::field_labels`] order.
    ///
    /// Scalars render directly; nested structures render as compact JSON so
    /// that their structural relationships survive flattening into a single
    /// table cell.
    pub fn field_values(&self) -> Vec<String> {
        vec![
            self.link.clone(),
            self.name.clone(),
            self.category.clone(),
            self.address.clone(),
            render_json(&self.working_hours),
            render_json(&self.popular_times),
            self.website.clone(),
            self.phone.clone(),
            self.plus_code.clone(),
            self.review_count.to_string(),
            self.review_rating.to_string(),
            render_json(&self.reviews_per_rating),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.cid.clone(),
            self.status.clone(),
            self.description.clone(),
            self.reviews_link.clone(),
            self.thumbnail.clone(),
            self.timezone.clone(),
            self.price_range.clone(),
            self.data_id.clone(),
            render_json(&self.images),
            render_json(&self.reservations),
            render_json(&self.order_online),
            render_json(&self.services),
            render_json(&self.owner),
            render_json(&self.complete_address),
            render_json(&self.about),
            render_json(&self.user_reviews),
            self.emails.join(", "),
        ]
    }
}

/// Compact JSON rendering for one table cell. Serialization of these types
/// cannot fail, but a flattening helper has no business propagating errors
/// either way.
fn render_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
