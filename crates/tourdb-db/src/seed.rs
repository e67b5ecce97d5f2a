use serde::Deserialize;
use sqlx::PgPool;
use tourdb_core::Coordinate;

use crate::{insert_bookmark, insert_place, insert_place_image, DbError, NewPlace};

/// One entry of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPlace {
    pub name: String,
    pub country_name: String,
    pub city_name: String,
    pub district_name: String,
    pub address: String,
    #[serde(default)]
    pub detail_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Caller ids that have bookmarked this place.
    #[serde(default)]
    pub bookmarked_by: Vec<i64>,
}

impl SeedPlace {
    fn to_new_place(&self) -> NewPlace {
        NewPlace {
            name: self.name.clone(),
            country_name: self.country_name.clone(),
            city_name: self.city_name.clone(),
            district_name: self.district_name.clone(),
            address: self.address.clone(),
            detail_address: self.detail_address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Insert places with their thumbnails and bookmarks.
///
/// Returns the new place ids in input order. Every coordinate is validated
/// before the transaction opens; if any insert fails the whole batch is
/// rolled back.
///
/// # Errors
///
/// Returns [`DbError::InvalidPlace`] for an out-of-range coordinate, or
/// [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_places(pool: &PgPool, places: &[SeedPlace]) -> Result<Vec<i64>, DbError> {
    for place in places {
        Coordinate::new(place.latitude, place.longitude).validate()?;
    }

    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(places.len());

    for place in places {
        let id = insert_place(&mut *tx, &place.to_new_place()).await?;

        if let Some(url) = &place.thumbnail_url {
            insert_place_image(&mut *tx, id, url, true).await?;
        }
        for &user_id in &place.bookmarked_by {
            insert_bookmark(&mut tx, user_id, id).await?;
        }

        ids.push(id);
    }

    tx.commit().await?;
    tracing::info!(count = ids.len(), "seeded places");
    Ok(ids)
}
