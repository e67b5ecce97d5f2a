//! In-process collaborators backed by plain collections.
//!
//! [`InMemoryPlaces`] is the linear-scan reference: it evaluates the
//! predicate on every record and sorts by [`crate::RankKey`]. Other backends
//! must produce the same counts and ordering.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tourdb_core::PlaceRecord;

use crate::error::StoreError;
use crate::predicate::{OrderSpec, SearchPredicate};
use crate::source::{BookmarkStore, CallerId, CandidateSource, ImageStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPlaces {
    places: Arc<Vec<PlaceRecord>>,
}

impl InMemoryPlaces {
    #[must_use]
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        Self {
            places: Arc::new(places),
        }
    }
}

impl CandidateSource for InMemoryPlaces {
    async fn count_matching(&self, predicate: &SearchPredicate) -> Result<i64, StoreError> {
        let count = self.places.iter().filter(|p| predicate.matches(p)).count();
        i64::try_from(count).map_err(|e| StoreError::Query(Box::new(e)))
    }

    async fn fetch_page(
        &self,
        predicate: &SearchPredicate,
        order: &OrderSpec,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PlaceRecord>, StoreError> {
        let offset = usize::try_from(offset).map_err(|e| StoreError::Query(Box::new(e)))?;
        let limit = usize::try_from(limit).map_err(|e| StoreError::Query(Box::new(e)))?;

        let mut matched: Vec<&PlaceRecord> = self
            .places
            .iter()
            .filter(|p| predicate.matches(p))
            .collect();
        matched.sort_by_cached_key(|p| order.rank_key(p));

        Ok(matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Thumbnail URLs keyed by place id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImages {
    thumbnails: Arc<HashMap<i64, String>>,
}

impl InMemoryImages {
    #[must_use]
    pub fn new(thumbnails: HashMap<i64, String>) -> Self {
        Self {
            thumbnails: Arc::new(thumbnails),
        }
    }
}

impl ImageStore for InMemoryImages {
    async fn find_thumbnail_url(&self, place_id: i64) -> Result<Option<String>, StoreError> {
        Ok(self.thumbnails.get(&place_id).cloned())
    }
}

/// `(caller, place)` bookmark pairs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookmarks {
    pairs: Arc<HashSet<(CallerId, i64)>>,
}

impl InMemoryBookmarks {
    #[must_use]
    pub fn new(pairs: HashSet<(CallerId, i64)>) -> Self {
        Self {
            pairs: Arc::new(pairs),
        }
    }
}

impl BookmarkStore for InMemoryBookmarks {
    async fn exists(&self, caller: CallerId, place_id: i64) -> Result<bool, StoreError> {
        Ok(self.pairs.contains(&(caller, place_id)))
    }
}
