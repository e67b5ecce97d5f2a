//! Row types for the `places` table.

use tourdb_core::{Coordinate, PlaceRecord};

/// Input record for inserting a place.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub country_name: String,
    pub city_name: String,
    pub district_name: String,
    pub address: String,
    pub detail_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// The columns search reads from `places`.
///
/// Timestamps are omitted; nothing on the read path needs them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceRow {
    pub id: i64,
    pub name: String,
    pub country_name: String,
    pub city_name: String,
    pub district_name: String,
    pub address: String,
    pub detail_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub bookmark_count: i64,
}

impl From<PlaceRow> for PlaceRecord {
    fn from(row: PlaceRow) -> Self {
        PlaceRecord {
            id: row.id,
            name: row.name,
            country_name: row.country_name,
            city_name: row.city_name,
            district_name: row.district_name,
            address: row.address,
            detail_address: row.detail_address,
            coordinate: Coordinate::new(row.latitude, row.longitude),
            bookmark_count: row.bookmark_count,
        }
    }
}
