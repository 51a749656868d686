use serde::{Deserialize, Serialize};

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// IUGG mean Earth radius `(2a + b) / 3` (meters), used for spherical distances.
pub const MEAN_EARTH_RADIUS_M: f64 = (2.0 * WGS84_A + WGS84_B) / 3.0;

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Exactly (0, 0). Content uses it to mark records with no physical place.
    pub fn is_origin(self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Arithmetic midpoint of two coordinates in degree space.
///
/// This is not the geodesic midpoint; globe arc renderers interpolate their own
/// curve and only want a rough control point between the endpoints.
pub fn midpoint_linear(a: LatLng, b: LatLng) -> LatLng {
    LatLng::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Great-circle distance on the mean-radius sphere (haversine), in meters.
pub fn great_circle_distance_m(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * MEAN_EARTH_RADIUS_M * h.sqrt().asin()
}

pub fn great_circle_distance_km(a: LatLng, b: LatLng) -> f64 {
    great_circle_distance_m(a, b) / 1000.0
}
