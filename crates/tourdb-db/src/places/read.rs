//! Read operations for the `places` table.

use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use tourdb_search::{OrderSpec, SearchPredicate};

use super::query::{push_order, push_predicate};
use super::types::PlaceRow;

const PLACE_COLUMNS: &str = "id, name, country_name, city_name, district_name, \
                             address, detail_address, latitude, longitude, bookmark_count";

/// Count rows satisfying `predicate`.
///
/// Accepts a pool or a transaction so the count can share a snapshot with
/// [`list_places_page`].
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn count_places<'e>(
    executor: impl PgExecutor<'e>,
    predicate: &SearchPredicate,
) -> Result<i64, sqlx::Error> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM places");
    push_predicate(&mut qb, predicate);
    qb.build_query_scalar::<i64>().fetch_one(executor).await
}

/// Fetch one window of rows satisfying `predicate`, in `order`.
///
/// The `WHERE` clause is rendered by the same function [`count_places`] uses,
/// so the two never disagree on which rows qualify.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_places_page<'e>(
    executor: impl PgExecutor<'e>,
    predicate: &SearchPredicate,
    order: &OrderSpec,
    offset: i64,
    limit: i64,
) -> Result<Vec<PlaceRow>, sqlx::Error> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT ");
    qb.push(PLACE_COLUMNS).push(" FROM places");
    push_predicate(&mut qb, predicate);
    push_order(&mut qb, order);
    qb.push(" LIMIT ").push_bind(limit);
    qb.push(" OFFSET ").push_bind(offset);
    qb.build_query_as::<PlaceRow>().fetch_all(executor).await
}

/// Fetch a single place by id.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_place(pool: &PgPool, id: i64) -> Result<Option<PlaceRow>, sqlx::Error> {
    sqlx::query_as::<_, PlaceRow>(
        "SELECT id, name, country_name, city_name, district_name, \
                address, detail_address, latitude, longitude, bookmark_count \
         FROM places \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
