//! Database operations for the `place_images` table.

use sqlx::{PgExecutor, PgPool};

/// Look up the thumbnail URL for a place, if one is flagged.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn find_thumbnail_url(
    pool: &PgPool,
    place_id: i64,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT url FROM place_images \
         WHERE place_id = $1 AND is_thumbnail \
         LIMIT 1",
    )
    .bind(place_id)
    .fetch_optional(pool)
    .await
}

/// Attach an image to a place and return the image id.
///
/// At most one image per place may carry `is_thumbnail`; a second one fails
/// on the partial unique index.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the insert fails.
pub async fn insert_place_image<'e>(
    executor: impl PgExecutor<'e>,
    place_id: i64,
    url: &str,
    is_thumbnail: bool,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO place_images (place_id, url, is_thumbnail) \
         VALUES ($1, $2, $3) \
         RETURNING id",
    )
    .bind(place_id)
    .bind(url)
    .bind(is_thumbnail)
    .fetch_one(executor)
    .await
}
