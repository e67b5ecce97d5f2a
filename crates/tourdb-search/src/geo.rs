//! Great-circle distance on a spherical Earth.

use tourdb_core::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Uses the spherical law of cosines. The `acos` argument is clamped to
/// `[-1.0, 1.0]` because rounding can push it just past 1.0 for identical or
/// near-identical points, which would otherwise yield NaN.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Display rounding for distances: floor to one decimal place.
///
/// `1.46` becomes `1.4`, never `1.5`.
#[must_use]
pub fn truncate_km(km: f64) -> f64 {
    (km * 10.0).floor() / 10.0
}
