use content::LocationRecord;
use foundation::{LatLng, great_circle_distance_km, midpoint_linear};
use serde::{Deserialize, Serialize};

/// Arc heights, as fractions of the globe radius.
///
/// Hops longer than `long_haul_km` are drawn higher so they clear the globe
/// instead of skimming its surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArcStyle {
    pub long_haul_km: f64,
    pub arc_altitude: f64,
    pub waypoint_altitude: f64,
    pub long_haul_arc_altitude: f64,
    pub long_haul_waypoint_altitude: f64,
    pub color: String,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            long_haul_km: 10_000.0,
            arc_altitude: 0.1,
            waypoint_altitude: 0.2,
            long_haul_arc_altitude: 0.35,
            long_haul_waypoint_altitude: 0.33,
            color: "#3b82f6".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arc {
    pub start: LatLng,
    pub end: LatLng,
    /// Single control point between the endpoints.
    pub waypoint: LatLng,
    pub arc_altitude: f64,
    pub waypoint_altitude: f64,
    pub distance_km: f64,
    pub color: String,
}

impl ArcStyle {
    pub fn arc(&self, start: LatLng, end: LatLng) -> Arc {
        let distance_km = great_circle_distance_km(start, end);
        let long_haul = distance_km > self.long_haul_km;
        let (arc_altitude, waypoint_altitude) = if long_haul {
            (self.long_haul_arc_altitude, self.long_haul_waypoint_altitude)
        } else {
            (self.arc_altitude, self.waypoint_altitude)
        };
        Arc {
            start,
            end,
            waypoint: midpoint_linear(start, end),
            arc_altitude,
            waypoint_altitude,
            distance_km,
            color: self.color.clone(),
        }
    }
}

/// One arc per adjacent pair of visible records.
pub fn connecting_arcs(visible: &[&LocationRecord], style: &ArcStyle) -> Vec<Arc> {
    visible
        .windows(2)
        .map(|pair| style.arc(pair[0].coordinates, pair[1].coordinates))
        .collect()
}

#[cfg(test)]
mod tests {
    use content::fallback;
    use foundation::LatLng;

    use super::{ArcStyle, connecting_arcs};

    #[test]
    fn arc_count_is_one_less_than_visible() {
        let records = fallback::journey_points();
        let style = ArcStyle::default();
        for n in 0..=records.len() {
            let visible: Vec<_> = records.iter().take(n).collect();
            assert_eq!(connecting_arcs(&visible, &style).len(), n.saturating_sub(1));
        }
    }

    #[test]
    fn waypoint_is_arithmetic_midpoint() {
        let arc = ArcStyle::default().arc(LatLng::new(10.0, 20.0), LatLng::new(30.0, -40.0));
        assert_eq!(arc.waypoint, LatLng::new(20.0, -10.0));
    }

    #[test]
    fn only_long_hauls_are_elevated() {
        let records = fallback::journey_points();
        let visible: Vec<_> = records.iter().filter(|r| !r.is_global()).collect();
        let arcs = connecting_arcs(&visible, &ArcStyle::default());
        let altitudes: Vec<f64> = arcs.iter().map(|a| a.arc_altitude).collect();
        // India -> Texas is the only hop over 10 000 km.
        assert_eq!(altitudes, vec![0.35, 0.1, 0.1, 0.1]);
        assert_eq!(arcs[0].waypoint_altitude, 0.33);
        assert_eq!(arcs[1].waypoint_altitude, 0.2);
        assert!(arcs[0].distance_km > 14_000.0 && arcs[0].distance_km < 14_500.0);
    }

    #[test]
    fn threshold_is_configurable() {
        let style = ArcStyle {
            long_haul_km: 1_000.0,
            ..ArcStyle::default()
        };
        let arc = style.arc(LatLng::new(51.5074, -0.1278), LatLng::new(45.4215, -75.6972));
        assert_eq!(arc.arc_altitude, 0.35);
    }
}
