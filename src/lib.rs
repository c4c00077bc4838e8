//! Actor snapshot extraction for federated profiles
//!
//! Flattens loosely-typed ActivityPub actor documents into display records:
//! - Link and alt-text resolution over string / Link / array fields
//! - Embedded schema.org `Product` listings with currency-aware offers
//! - Domain derivation from the actor id
//! - Summary link localisation
//!
//! Exposes a C ABI (JSON in, JSON out) alongside the Rust API.

pub mod error;
pub mod extractors;
pub mod ffi;

pub use error::SnapshotError;
pub use extractors::*;
pub use ffi::*;
