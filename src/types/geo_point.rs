/// A geographic coordinate in degrees
///
/// Latitude is expected in `[-90, 90]` and longitude in `(-180, 180]`, but
/// values outside these ranges are accepted as-is. Nothing is wrapped or
/// clamped; callers that need strict input validate upstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Cheap ranking value between two points
    ///
    /// `Δlat² + Δlon² · cos²(midLat)`, with everything in degrees and the
    /// mid-latitude converted to radians for the cosine. There is no square
    /// root and the longitude scaling is approximate, so the result is only
    /// meaningful for ordering candidates against the same target. It is not
    /// a distance in any unit.
    pub fn pseudo_distance(&self, other: &GeoPoint) -> f64 {
        let delta_lat = other.latitude - self.latitude;
        let delta_lon = other.longitude - self.longitude;
        let mid_lat = (self.latitude + other.latitude) / 2.0;
        let cos_mid = mid_lat.to_radians().cos();

        delta_lat * delta_lat + delta_lon * delta_lon * cos_mid * cos_mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pseudo_distance_along_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 10.0);
        assert_eq!(a.pseudo_distance(&b), 100.0);
    }

    #[test]
    fn pseudo_distance_along_meridian_ignores_longitude_scaling() {
        let a = GeoPoint::new(40.0, 5.0);
        let b = GeoPoint::new(43.0, 5.0);
        assert_eq!(a.pseudo_distance(&b), 9.0);
    }

    #[test]
    fn pseudo_distance_scales_longitude_by_mid_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);

        let cos_mid = 1.5f64.to_radians().cos();
        let expected = 9.0 + 16.0 * cos_mid * cos_mid;
        assert_abs_diff_eq!(a.pseudo_distance(&b), expected, epsilon = 1e-12);
    }

    #[test]
    fn pseudo_distance_has_no_square_root() {
        // Twice as far along the equator ranks four times higher
        let origin = GeoPoint::new(0.0, 0.0);
        let near = origin.pseudo_distance(&GeoPoint::new(0.0, 2.0));
        let far = origin.pseudo_distance(&GeoPoint::new(0.0, 4.0));
        assert_eq!(far, near * 4.0);
    }

    #[test]
    fn pseudo_distance_is_symmetric() {
        let pairs = [
            (GeoPoint::new(48.866, 2.316), GeoPoint::new(49.0128, 2.55)),
            (GeoPoint::new(-33.9461, 151.177), GeoPoint::new(40.6398, -73.7789)),
            (GeoPoint::new(89.9, -179.9), GeoPoint::new(-89.9, 179.9)),
            (GeoPoint::new(12.5, 0.0), GeoPoint::new(12.5, 0.0)),
            (GeoPoint::new(120.0, 400.0), GeoPoint::new(-95.0, -200.0)),
        ];

        for (a, b) in pairs {
            assert_eq!(a.pseudo_distance(&b), b.pseudo_distance(&a), "{a:?} <-> {b:?}");
        }
    }

    #[test]
    fn pseudo_distance_to_self_is_zero() {
        let p = GeoPoint::new(51.4706, -0.461941);
        assert_eq!(p.pseudo_distance(&p), 0.0);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let p = GeoPoint::new(123.0, -270.0);
        assert_eq!(p.latitude, 123.0);
        assert_eq!(p.longitude, -270.0);
        assert!(p.is_finite());
    }

    #[test]
    fn non_finite_detection() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }
}
