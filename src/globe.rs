//! Pick-to-airport control flow

use crate::error::PickError;
use crate::pick::{PickInput, PickResolver};
use crate::projector::SphereProjector;
use crate::{Airport, AirportIndex, CartesianPoint, GeoPoint, GlobeConfig};

/// A click reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenClick {
    /// Position in pixels, origin at the top-left corner
    pub x: f64,
    pub y: f64,
    /// Point from the host's own hit test, in the sphere's local frame
    pub hit: Option<CartesianPoint>,
}

impl ScreenClick {
    /// Click with no hit-test result; resolved by casting a ray
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, hit: None }
    }

    /// Attach the host's hit-test point
    pub fn with_hit(mut self, hit: CartesianPoint) -> Self {
        self.hit = Some(hit);
        self
    }
}

/// Result of picking an airport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    /// Where the click landed on the globe
    pub geo: GeoPoint,
    /// Airport nearest to `geo`
    pub airport: &'a Airport,
}

/// Airport globe: scene settings plus the loaded airports
///
/// Holds no mutable state. The spin angle is passed in on every pick.
#[derive(Debug, Clone, Default)]
pub struct Globe {
    config: GlobeConfig,
    index: AirportIndex,
}

impl Globe {
    pub fn new(config: GlobeConfig, index: AirportIndex) -> Self {
        Self { config, index }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn index(&self) -> &AirportIndex {
        &self.index
    }

    /// Projector for the configured radius
    pub fn projector(&self) -> SphereProjector {
        SphereProjector::new(self.config.radius)
    }

    /// Pick input for `click` under the configured scene and camera
    pub fn pick_input(&self, click: ScreenClick, rotation_angle_deg: f64) -> PickInput {
        PickInput {
            screen_x: click.x,
            screen_y: click.y,
            scene_width: self.config.scene_width,
            scene_height: self.config.scene_height,
            camera: self.config.camera,
            rotation_angle_deg,
            radius: self.config.radius,
            hit: click.hit,
        }
    }

    /// Geographic point under `click`
    pub fn pick(
        &self,
        click: ScreenClick,
        rotation_angle_deg: f64,
    ) -> Result<GeoPoint, PickError> {
        PickResolver::resolve(&self.pick_input(click, rotation_angle_deg))
    }

    /// Airport nearest to the point under `click`
    ///
    /// # Errors
    ///
    /// The [`pick`](Self::pick) errors, or [`PickError::EmptyIndex`] when no
    /// airports are loaded.
    pub fn pick_airport(
        &self,
        click: ScreenClick,
        rotation_angle_deg: f64,
    ) -> Result<Pick<'_>, PickError> {
        let geo = self.pick(click, rotation_angle_deg)?;
        let airport = self.index.nearest(geo).ok_or(PickError::EmptyIndex)?;
        Ok(Pick { geo, airport })
    }

    /// Marker positions for every airport, in dataset order
    pub fn markers(&self) -> impl Iterator<Item = (&Airport, CartesianPoint)> {
        let projector = self.projector();
        self.index
            .iter()
            .map(move |airport| (airport, projector.marker_position(airport.geo)))
    }
}
