//! Write operations for the `places` table.

use sqlx::PgExecutor;

use super::types::NewPlace;

/// Insert one place and return its id.
///
/// Accepts a pool or an open transaction so seeding can batch inserts.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the insert fails, including when the
/// coordinate violates the table's range checks.
pub async fn insert_place<'e>(
    executor: impl PgExecutor<'e>,
    place: &NewPlace,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO places \
             (name, country_name, city_name, district_name, address, detail_address, \
              latitude, longitude) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING id",
    )
    .bind(&place.name)
    .bind(&place.country_name)
    .bind(&place.city_name)
    .bind(&place.district_name)
    .bind(&place.address)
    .bind(&place.detail_address)
    .bind(place.latitude)
    .bind(place.longitude)
    .fetch_one(executor)
    .await
}
