//! Collaborator interfaces the engine depends on.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tourdb_core::PlaceRecord;

use crate::error::StoreError;
use crate::predicate::{OrderSpec, SearchPredicate};

/// Identity of an authenticated caller. Anonymous callers have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerId(pub i64);

/// Storage that can count and page through places for a predicate.
///
/// Implementations must apply `predicate` identically in both methods.
/// Searches go through [`CandidateSource::count_and_fetch`]; override it when
/// the two separate calls could observe different data.
pub trait CandidateSource: Send + Sync {
    fn count_matching(
        &self,
        predicate: &SearchPredicate,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    fn fetch_page(
        &self,
        predicate: &SearchPredicate,
        order: &OrderSpec,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, StoreError>> + Send;

    /// Total match count together with one window of matches.
    ///
    /// The default runs both calls concurrently, which is only consistent
    /// when the source cannot change between them.
    fn count_and_fetch(
        &self,
        predicate: &SearchPredicate,
        order: &OrderSpec,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<(i64, Vec<PlaceRecord>), StoreError>> + Send {
        async move {
            tokio::try_join!(
                self.count_matching(predicate),
                self.fetch_page(predicate, order, offset, limit),
            )
        }
    }
}

/// Lookup of the image flagged as a place's thumbnail.
pub trait ImageStore: Send + Sync {
    fn find_thumbnail_url(
        &self,
        place_id: i64,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
}

/// Lookup of whether a caller bookmarked a place.
pub trait BookmarkStore: Send + Sync {
    fn exists(
        &self,
        caller: CallerId,
        place_id: i64,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
