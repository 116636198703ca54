//! Mapping between geographic coordinates and points on the globe

use crate::error::PickError;
use crate::{CartesianPoint, GeoPoint};

/// Radius of the rendered globe in scene units
pub const DEFAULT_RADIUS: f64 = 300.0;

/// Vertical stretch applied to airport markers
///
/// Empirical factor that lines markers up with the globe texture. It is
/// only used for marker placement, never for picking.
pub const MARKER_LATITUDE_STRETCH: f64 = 1.3;

/// Bidirectional mapping between [`GeoPoint`] and [`CartesianPoint`] on a
/// sphere of fixed radius
///
/// The axis convention is left-handed:
///
/// - `x = R·cos(lat)·sin(lon)`
/// - `y = -R·sin(lat)`
/// - `z = -R·cos(lat)·cos(lon)`
///
/// so positive latitudes end up at negative `y`, which is "up" on a screen
/// whose `y` axis points down. Do not assume the usual right-handed
/// geographic frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    radius: f64,
}

impl Default for SphereProjector {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl SphereProjector {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Project a geographic coordinate onto the sphere (local frame)
    pub fn to_cartesian(&self, geo: GeoPoint) -> CartesianPoint {
        let lat = geo.latitude.to_radians();
        let lon = geo.longitude.to_radians();
        let r = self.radius;

        CartesianPoint {
            x: r * lat.cos() * lon.sin(),
            y: -r * lat.sin(),
            z: -r * lat.cos() * lon.cos(),
        }
    }

    /// Inverse of [`to_cartesian`](Self::to_cartesian) (local frame)
    ///
    /// `p` must lie on the sphere. Points that are only approximately on it
    /// should be rescaled with [`CartesianPoint::with_length`] first.
    ///
    /// # Errors
    ///
    /// [`PickError::DegenerateGeometry`] for the zero vector, or when the
    /// result is not finite (e.g. `p` lies well off the sphere).
    pub fn to_geo(&self, p: CartesianPoint) -> Result<GeoPoint, PickError> {
        if p.length_squared() == 0.0 {
            return Err(PickError::DegenerateGeometry("zero-length point"));
        }

        let geo = GeoPoint {
            latitude: (-(p.y / self.radius).asin()).to_degrees(),
            longitude: p.x.atan2(-p.z).to_degrees(),
        };

        if !geo.is_finite() {
            return Err(PickError::DegenerateGeometry("non-finite coordinates"));
        }

        Ok(geo)
    }

    /// Position of an airport marker, with the latitude axis stretched by
    /// [`MARKER_LATITUDE_STRETCH`]
    pub fn marker_position(&self, geo: GeoPoint) -> CartesianPoint {
        let mut p = self.to_cartesian(geo);
        p.y *= MARKER_LATITUDE_STRETCH;
        p
    }

    /// Rotate a local-frame point into the world frame
    ///
    /// Rotation by `+rotation_deg` around the vertical axis, the same one the
    /// spin animation applies:
    /// `x' = x·cosθ + z·sinθ`, `z' = -x·sinθ + z·cosθ`.
    pub fn to_world(p: CartesianPoint, rotation_deg: f64) -> CartesianPoint {
        rotate_y(p, rotation_deg)
    }

    /// Undo [`to_world`](Self::to_world)
    pub fn to_local(p: CartesianPoint, rotation_deg: f64) -> CartesianPoint {
        rotate_y(p, -rotation_deg)
    }
}

fn rotate_y(p: CartesianPoint, angle_deg: f64) -> CartesianPoint {
    let (sin, cos) = angle_deg.to_radians().sin_cos();

    CartesianPoint {
        x: p.x * cos + p.z * sin,
        y: p.y,
        z: -p.x * sin + p.z * cos,
    }
}
