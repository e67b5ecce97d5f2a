//! Database operations for the `bookmarks` table.

use sqlx::{PgExecutor, PgPool};

/// Whether `user_id` has bookmarked `place_id`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn bookmark_exists(
    pool: &PgPool,
    user_id: i64,
    place_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM bookmarks WHERE user_id = $1 AND place_id = $2)",
    )
    .bind(user_id)
    .bind(place_id)
    .fetch_one(pool)
    .await
}

/// Record a bookmark and bump the place's `bookmark_count`.
///
/// Idempotent: re-bookmarking leaves the count unchanged. Returns whether a
/// new row was written.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if either statement fails.
pub async fn insert_bookmark(
    conn: &mut sqlx::PgConnection,
    user_id: i64,
    place_id: i64,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        "INSERT INTO bookmarks (user_id, place_id) \
         VALUES ($1, $2) \
         ON CONFLICT (user_id, place_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(place_id)
    .execute(&mut *conn)
    .await?
    .rows_affected()
        > 0;

    if inserted {
        bump_bookmark_count(&mut *conn, place_id).await?;
    }
    Ok(inserted)
}

async fn bump_bookmark_count<'e>(
    executor: impl PgExecutor<'e>,
    place_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE places \
         SET bookmark_count = bookmark_count + 1, updated_at = NOW() \
         WHERE id = $1",
    )
    .bind(place_id)
    .execute(executor)
    .await?;
    Ok(())
}
