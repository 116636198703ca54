//! Screen-space pick resolution
//!
//! A pick reaches the same `to_local` / `to_geo` pipeline through one of two
//! entry points:
//!
//! - **direct hit**: the host's own hit test already produced a point on the
//!   sphere, in the sphere's local frame.
//! - **ray cast**: only the click position is known. A ray is built from the
//!   camera through the click, intersected with the sphere in the world
//!   frame, and rotated back into the local frame.

use crate::error::PickError;
use crate::projector::SphereProjector;
use crate::{Camera, CartesianPoint, GeoPoint};

/// Everything needed to resolve one click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickInput {
    /// Click position in pixels, origin at the top-left corner
    pub screen_x: f64,
    pub screen_y: f64,
    pub scene_width: f64,
    pub scene_height: f64,
    pub camera: Camera,
    /// Spin angle sampled when the click is resolved
    pub rotation_angle_deg: f64,
    pub radius: f64,
    /// Point reported by the host's hit test, in the sphere's local frame
    pub hit: Option<CartesianPoint>,
}

/// A half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: CartesianPoint,
    /// Unit direction
    pub direction: CartesianPoint,
}

impl Ray {
    /// Smallest non-negative `t` with `|origin + t·direction| = radius`
    ///
    /// Returns `None` when the ray misses the sphere or the sphere lies
    /// entirely behind the origin.
    pub fn intersect_sphere(&self, radius: f64) -> Option<f64> {
        let along = self.origin.dot(&self.direction);
        let discriminant = along * along - (self.origin.length_squared() - radius * radius);
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -along - root;
        if near >= 0.0 {
            return Some(near);
        }

        let far = -along + root;
        (far >= 0.0).then_some(far)
    }

    /// Point at parameter `t`
    pub fn at(&self, t: f64) -> CartesianPoint {
        self.origin + self.direction.scale(t)
    }
}

/// Turns a click plus camera and spin state into a [`GeoPoint`]
pub struct PickResolver;

impl PickResolver {
    /// Resolve a pick, preferring the host's hit point when there is one
    ///
    /// [`PickError::DegenerateGeometry`] is logged as a warning; a miss is
    /// only logged at debug level.
    pub fn resolve(input: &PickInput) -> Result<GeoPoint, PickError> {
        let result = match input.hit {
            Some(hit) => Self::resolve_hit(hit, input.radius),
            None => Self::resolve_ray(input),
        };

        match &result {
            Ok(geo) => tracing::trace!(?geo, "Resolved pick"),
            Err(PickError::NoIntersection) => {
                tracing::debug!(
                    x = input.screen_x,
                    y = input.screen_y,
                    "Pick missed the globe"
                );
            }
            Err(err) => {
                tracing::warn!(
                    x = input.screen_x,
                    y = input.screen_y,
                    "Discarding pick: {err}"
                );
            }
        }

        result
    }

    /// Direct-hit path: `point` is already on the sphere in the local frame
    pub fn resolve_hit(point: CartesianPoint, radius: f64) -> Result<GeoPoint, PickError> {
        to_geo_on_sphere(point, radius)
    }

    /// Ray-cast path
    pub fn resolve_ray(input: &PickInput) -> Result<GeoPoint, PickError> {
        let world = Self::intersect(input)?;
        let local = SphereProjector::to_local(world, input.rotation_angle_deg);
        to_geo_on_sphere(local, input.radius)
    }

    /// Camera ray through the click position, in the world frame
    pub fn camera_ray(input: &PickInput) -> Result<Ray, PickError> {
        let nx = (input.screen_x / input.scene_width) * 2.0 - 1.0;
        let ny = 1.0 - (input.screen_y / input.scene_height) * 2.0;

        let focal_length = input.camera.focal_length();
        let aspect_ratio = input.scene_width / input.scene_height;

        let direction = CartesianPoint::new(
            (nx / focal_length) * aspect_ratio,
            ny / focal_length,
            -1.0,
        )
        .with_length(1.0)
        .ok_or(PickError::DegenerateGeometry("degenerate ray direction"))?;

        let origin = CartesianPoint::new(
            input.camera.translate_x,
            input.camera.translate_y,
            input.camera.translate_z,
        );

        Ok(Ray { origin, direction })
    }

    /// World-frame point where the camera ray meets the sphere
    pub fn intersect(input: &PickInput) -> Result<CartesianPoint, PickError> {
        let ray = Self::camera_ray(input)?;
        let t = ray
            .intersect_sphere(input.radius)
            .ok_or(PickError::NoIntersection)?;

        Ok(ray.at(t))
    }
}

/// Snap `p` onto the sphere to absorb floating-point drift, then convert
fn to_geo_on_sphere(p: CartesianPoint, radius: f64) -> Result<GeoPoint, PickError> {
    let p = p
        .with_length(radius)
        .ok_or(PickError::DegenerateGeometry("zero-length point"))?;

    SphereProjector::new(radius).to_geo(p)
}
