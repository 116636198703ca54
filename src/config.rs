//! Scene configuration

use crate::projector::DEFAULT_RADIUS;
use crate::spin::{DEFAULT_SPIN_PERIOD, Spin};
use crate::{Camera, ZoomLimits};
use std::time::Duration;

/// Globe scene settings
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// let config: airglobe::GlobeConfig =
///     serde_json::from_str(r#"{"radius": 250.0, "camera": {"translate_z": 900.0}}"#)?;
///
/// assert_eq!(config.radius, 250.0);
/// assert_eq!(config.camera.translate_z, 900.0);
/// assert_eq!(config.camera.field_of_view_deg, 35.0);
/// assert_eq!(config.scene_width, 1200.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in scene units
    pub radius: f64,
    /// Scene size in pixels
    pub scene_width: f64,
    pub scene_height: f64,
    pub camera: Camera,
    /// Seconds per revolution of the globe
    pub spin_period_secs: f64,
    pub zoom: ZoomLimits,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            scene_width: 1200.0,
            scene_height: 800.0,
            camera: Camera::default(),
            spin_period_secs: DEFAULT_SPIN_PERIOD.as_secs_f64(),
            zoom: ZoomLimits::default(),
        }
    }
}

impl GlobeConfig {
    /// Override the sphere radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Override the scene size in pixels
    pub fn with_scene_size(mut self, width: f64, height: f64) -> Self {
        self.scene_width = width;
        self.scene_height = height;
        self
    }

    /// Override the camera placement
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Override the time per revolution
    pub fn with_spin_period(mut self, period: Duration) -> Self {
        self.spin_period_secs = period.as_secs_f64();
        self
    }

    /// Override the zoom bounds
    pub fn with_zoom(mut self, zoom: ZoomLimits) -> Self {
        self.zoom = zoom;
        self
    }

    /// Spin driven by the configured period
    ///
    /// Negative or non-finite periods are treated as zero (no spin).
    pub fn spin(&self) -> Spin {
        let period = Duration::try_from_secs_f64(self.spin_period_secs).unwrap_or_default();
        Spin::new(period)
    }
}
