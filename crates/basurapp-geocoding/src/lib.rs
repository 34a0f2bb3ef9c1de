//! Address validation for Santander, Colombia.
//!
//! Free-text addresses go through three stages: the reference table
//! ([`ReferenceMatcher`]), abbreviation expansion ([`normalize_address`]),
//! and a MapTiler lookup whose candidates are filtered to the Santander
//! region and ranked ([`MapTilerClient`]). Every failure degrades to an
//! invalid [`basurapp_core::GeocodingResult`]; nothing is thrown past the
//! [`Geocoder`] boundary.

pub mod client;
pub mod error;
pub mod filter;
pub mod geocoder;
pub mod normalize;
pub mod reference;
pub mod sequence;
pub mod types;

pub use client::MapTilerClient;
pub use error::GeocodingError;
pub use filter::{best_match, filter_candidates, rank_candidates, Candidate};
pub use geocoder::{
    out_of_area_hints, service_error_hints, GeocodeFuture, Geocoder, REVERSE_ERROR_LABEL,
    REVERSE_UNKNOWN_LABEL,
};
pub use normalize::normalize_address;
pub use reference::ReferenceMatcher;
pub use sequence::{RequestSequencer, RequestTicket, SequencedGeocoder};
pub use types::{ContextEntry, Feature, FeatureCollection, FeatureProperties};
