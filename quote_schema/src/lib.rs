//!
//! Typed schema for market quotes received from a quote-provider API.
//!
//! This crate aggregates:
//! - `classification`: closed `InstrumentType` and `MarketState` vocabularies.
//! - `fields`: the field groups a quote is made of.
//! - `quote`: the immutable `Quote` record, its builder and encodings.
//! - `consistency`: cross-field checks that report without rejecting.
//! - `request`: `QuoteRequest` and its cancellation/deadline `RequestContext`.
//! - `error`: unified error type `SchemaError`.
//! - `result`: handy `Result<T, SchemaError>` alias.
//!
//! Fetching quotes is left to a separate client; it builds `Quote` values via
//! [`Quote::from_json_slice`] and honours the request's context.
#![warn(missing_docs)]
pub mod classification;
pub mod consistency;
pub mod error;
pub mod fields;
pub mod quote;
pub mod request;
pub mod result;

pub use classification::{ClassificationKind, InstrumentType, MarketState};
pub use consistency::Inconsistency;
pub use error::SchemaError;
pub use quote::{
    ExtendedSession, InstrumentDetails, Quote, QuoteBuilder, decode_quotes, decode_snapshots,
    encode_snapshots,
};
pub use request::{QuoteRequest, RequestContext};
pub use result::Result;
