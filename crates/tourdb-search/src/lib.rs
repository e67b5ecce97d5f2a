//! Geo-distance and relevance-ranked place search.
//!
//! The engine is storage-agnostic: it talks to a [`CandidateSource`] for
//! filtered counts and ordered slices, then decorates each page through an
//! [`ImageStore`] and a [`BookmarkStore`]. [`memory`] holds a linear-scan
//! implementation of all three that doubles as the reference ordering.

pub mod enrich;
mod error;
pub mod geo;
pub mod keyword;
pub mod memory;
pub mod nearby;
pub mod page;
pub mod predicate;
pub mod relevance;
mod result;
mod service;
mod source;

pub use error::{SearchError, StoreError};
pub use geo::{distance_km, truncate_km, EARTH_RADIUS_KM};
pub use page::{assemble, Page, PageRequest};
pub use predicate::{OrderSpec, RankKey, SearchPredicate, SearchQuery};
pub use relevance::{MatchTier, RelevanceKey};
pub use result::SearchResult;
pub use service::SearchService;
pub use source::{BookmarkStore, CallerId, CandidateSource, ImageStore};
