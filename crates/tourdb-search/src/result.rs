use serde::Serialize;
use tourdb_core::{Coordinate, PlaceRecord};

use crate::geo::{distance_km, truncate_km};

/// A place as returned to callers, with computed distance and enrichment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub place_id: i64,
    pub name: String,
    pub country_name: String,
    pub city_name: String,
    pub district_name: String,
    pub address: String,
    pub detail_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub bookmark_count: i64,
    /// Floored to one decimal place. Absent when no reference point was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub bookmark_status: bool,
}

impl SearchResult {
    #[must_use]
    pub fn from_place(place: PlaceRecord, origin: Option<Coordinate>) -> Self {
        let distance_km = origin.map(|o| truncate_km(distance_km(o, place.coordinate)));
        Self {
            place_id: place.id,
            name: place.name,
            country_name: place.country_name,
            city_name: place.city_name,
            district_name: place.district_name,
            address: place.address,
            detail_address: place.detail_address,
            latitude: place.coordinate.latitude,
            longitude: place.coordinate.longitude,
            bookmark_count: place.bookmark_count,
            distance_km,
            thumbnail_url: None,
            bookmark_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namsan() -> PlaceRecord {
        PlaceRecord {
            id: 7,
            name: "Namsan Tower".to_string(),
            country_name: "Korea".to_string(),
            city_name: "Seoul".to_string(),
            district_name: "Yongsan".to_string(),
            address: "105 Namsangongwon-gil".to_string(),
            detail_address: None,
            coordinate: Coordinate::new(37.5512, 126.9882),
            bookmark_count: 3,
        }
    }

    #[test]
    fn distance_is_floored_to_one_decimal() {
        let result = SearchResult::from_place(namsan(), Some(Coordinate::new(37.5665, 126.9780)));
        // Raw distance is ~1.924 km.
        assert_eq!(result.distance_km, Some(1.9));
    }

    #[test]
    fn distance_absent_without_origin() {
        let result = SearchResult::from_place(namsan(), None);
        assert!(result.distance_km.is_none());
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json.get("distanceKm").is_none());
    }

    #[test]
    fn defaults_before_enrichment() {
        let result = SearchResult::from_place(namsan(), None);
        assert!(result.thumbnail_url.is_none());
        assert!(!result.bookmark_status);
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json["thumbnailUrl"].is_null());
        assert_eq!(json["bookmarkStatus"], false);
        assert_eq!(json["placeId"], 7);
    }
}
