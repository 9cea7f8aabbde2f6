//! # `anyplace`: Place-Listing Extraction
//!
//! This crate extracts a structured business listing from the undocumented,
//! positionally-encoded nested-array payload a mapping service returns for a
//! single place. The payload has no field names: every datum lives at a fixed
//! but fragile integer offset inside arbitrarily nested arrays, and an offset
//! may be absent, null, or of an unexpected shape depending on the listing
//! type and response variant.
//!
//! The entry point is [`listing_from_json`], which decodes one raw document
//! and populates one [`Listing`]. Per-field failures never surface as errors:
//! the path accessor in [`extract::path`] absorbs every structural mismatch
//! into the field's zero value, so a partially unrecognized document still
//! yields a usable record. Only whole-document failures are reported, as
//! [`ExtractError`].

pub mod errors;
pub mod extract;
pub mod types;

pub use errors::{ExtractError, ValidationError};
pub use extract::listing_from_json;
pub use types::{
    AboutOption, AboutSection, DetailedAddress, LinkSource, Listing, OpenHours, Owner, PlaceImage,
    Review,
};
