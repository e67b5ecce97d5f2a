//! Postgres-backed search collaborators.

use sqlx::PgPool;
use tourdb_core::PlaceRecord;
use tourdb_search::{
    BookmarkStore, CallerId, CandidateSource, ImageStore, OrderSpec, SearchPredicate, StoreError,
};

use crate::{bookmark_exists, count_places, find_thumbnail_url, list_places_page};

/// One pool serving as candidate source, image store and bookmark store.
///
/// `count_matching` and `fetch_page` each take their own pooled connection.
/// Searches use `count_and_fetch`, which runs both reads inside one
/// `REPEATABLE READ` read-only transaction so a concurrent insert cannot
/// split the count from the page.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CandidateSource for PgStore {
    async fn count_matching(&self, predicate: &SearchPredicate) -> Result<i64, StoreError> {
        count_places(&self.pool, predicate)
            .await
            .map_err(store_error)
    }

    async fn fetch_page(
        &self,
        predicate: &SearchPredicate,
        order: &OrderSpec,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PlaceRecord>, StoreError> {
        let rows = list_places_page(&self.pool, predicate, order, offset, limit)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(PlaceRecord::from).collect())
    }

    async fn count_and_fetch(
        &self,
        predicate: &SearchPredicate,
        order: &OrderSpec,
        offset: i64,
        limit: i64,
    ) -> Result<(i64, Vec<PlaceRecord>), StoreError> {
        let mut snapshot = self.pool.begin().await.map_err(store_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *snapshot)
            .await
            .map_err(store_error)?;

        let total = count_places(&mut *snapshot, predicate)
            .await
            .map_err(store_error)?;
        let rows = list_places_page(&mut *snapshot, predicate, order, offset, limit)
            .await
            .map_err(store_error)?;
        snapshot.commit().await.map_err(store_error)?;

        Ok((total, rows.into_iter().map(PlaceRecord::from).collect()))
    }
}

impl ImageStore for PgStore {
    async fn find_thumbnail_url(&self, place_id: i64) -> Result<Option<String>, StoreError> {
        find_thumbnail_url(&self.pool, place_id)
            .await
            .map_err(store_error)
    }
}

impl BookmarkStore for PgStore {
    async fn exists(&self, caller: CallerId, place_id: i64) -> Result<bool, StoreError> {
        bookmark_exists(&self.pool, caller.0, place_id)
            .await
            .map_err(store_error)
    }
}

/// Connectivity failures become `Unavailable`; everything else is a query error.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
        other => StoreError::Query(Box::new(other)),
    }
}
