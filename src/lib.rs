//! Resolve human-entered language queries — BCP 47 tags or English names —
//! into standardized tags, display names, likely scripts and a set of
//! identical or near-identical related codes.
//!
//! The heavy lifting (tag parsing, alias canonicalization, likely-subtag
//! expansion) comes from ICU4X compiled data; the ISO 639 registry comes
//! from `isolang`. This crate layers a query resolver and a related-code
//! collector on top.

pub mod data;
pub mod distance;
pub mod langspect;
pub mod related;
pub mod resolve;

pub use langspect::Langspect;
pub use resolve::{MatchKind, RelatedCode, Resolution, ResolveError};
