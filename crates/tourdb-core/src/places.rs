//! Place records as read from storage, and the coordinate type shared by
//! every search path.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check the latitude/longitude ranges.
    ///
    /// Search code assumes valid coordinates; this is meant for the request
    /// edge (HTTP query parsing, CLI args).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when either component is out
    /// of range or not finite.
    pub fn validate(self) -> Result<Self, CoreError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lng_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lng_ok {
            Ok(self)
        } else {
            Err(CoreError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// A travel place snapshot. Storage owns these; search only reads them.
///
/// Country, city and district are flattened display labels, not keys into
/// the region hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: i64,
    pub name: String,
    pub country_name: String,
    pub city_name: String,
    pub district_name: String,
    pub address: String,
    #[serde(default)]
    pub detail_address: Option<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub bookmark_count: i64,
}

/// Trim a caller-supplied keyword and reject it if nothing is left.
///
/// # Errors
///
/// - [`CoreError::EmptyKeyword`] for empty or whitespace-only input.
/// - [`CoreError::ControlCharacterInKeyword`] if any control character
///   (NUL included) survives trimming. Postgres refuses NUL in text binds.
pub fn normalize_keyword(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyKeyword);
    }
    if trimmed.chars().any(char::is_control) {
        return Err(CoreError::ControlCharacterInKeyword);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_range_bounds() {
        assert!(Coordinate::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinate::new(-90.0, -180.0).validate().is_ok());
        assert!(Coordinate::new(37.5665, 126.978).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_latitude() {
        let result = Coordinate::new(90.5, 0.0).validate();
        assert!(
            matches!(result, Err(CoreError::InvalidCoordinate { .. })),
            "expected InvalidCoordinate, got: {result:?}"
        );
    }

    #[test]
    fn validate_rejects_nan_longitude() {
        assert!(Coordinate::new(0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn normalize_keyword_trims_whitespace() {
        assert_eq!(normalize_keyword("  Gangnam ").unwrap(), "Gangnam");
    }

    #[test]
    fn normalize_keyword_rejects_blank() {
        assert!(matches!(
            normalize_keyword(" \t "),
            Err(CoreError::EmptyKeyword)
        ));
    }

    #[test]
    fn normalize_keyword_rejects_nul_and_other_controls() {
        for raw in ["Gang\u{0}nam", "Seoul\u{7}", "a\tb"] {
            assert!(
                matches!(
                    normalize_keyword(raw),
                    Err(CoreError::ControlCharacterInKeyword)
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn normalize_keyword_trims_surrounding_newlines() {
        assert_eq!(normalize_keyword("\nJeju\r\n").unwrap(), "Jeju");
    }

    #[test]
    fn place_record_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "name": "Namsan Tower",
            "country_name": "Korea",
            "city_name": "Seoul",
            "district_name": "Yongsan",
            "address": "105 Namsangongwon-gil",
            "coordinate": { "latitude": 37.5512, "longitude": 126.9882 }
        }"#;
        let record: PlaceRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.id, 7);
        assert!(record.detail_address.is_none());
        assert_eq!(record.bookmark_count, 0);
    }
}
