/// Perspective camera placement
///
/// The camera sits at its translation and looks down the negative z axis.
/// The field of view is the vertical opening angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Camera {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub field_of_view_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 1000.0,
            field_of_view_deg: 35.0,
        }
    }
}

/// Bounds and speed for drag-to-zoom
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    /// Closest allowed camera z
    pub near: f64,
    /// Farthest allowed camera z
    pub far: f64,
    /// Camera units moved per dragged pixel
    pub factor: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            near: 300.0,
            far: 2000.0,
            factor: 2.0,
        }
    }
}

impl Camera {
    /// Move the camera along z after a vertical mouse drag
    ///
    /// Dragging down (positive `delta_y`) moves toward the globe. The result
    /// is clamped to `[limits.near, limits.far]`.
    pub fn drag_zoom(&mut self, delta_y: f64, limits: &ZoomLimits) {
        let z = self.translate_z - delta_y * limits.factor;
        self.translate_z = z.clamp(limits.near, limits.far);
    }

    /// Camera-space focal length for the configured field of view
    pub fn focal_length(&self) -> f64 {
        1.0 / (self.field_of_view_deg.to_radians() / 2.0).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn drag_down_moves_closer() {
        let mut camera = Camera::default();
        camera.drag_zoom(50.0, &ZoomLimits::default());
        assert_eq!(camera.translate_z, 900.0);
    }

    #[test]
    fn drag_up_moves_away() {
        let mut camera = Camera::default();
        camera.drag_zoom(-25.0, &ZoomLimits::default());
        assert_eq!(camera.translate_z, 1050.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let limits = ZoomLimits::default();
        let mut camera = Camera::default();

        camera.drag_zoom(10_000.0, &limits);
        assert_eq!(camera.translate_z, 300.0);

        camera.drag_zoom(-10_000.0, &limits);
        assert_eq!(camera.translate_z, 2000.0);
    }

    #[test]
    fn focal_length_for_right_angle_fov() {
        let camera = Camera {
            field_of_view_deg: 90.0,
            ..Camera::default()
        };
        assert_abs_diff_eq!(camera.focal_length(), 1.0, epsilon = 1e-12);
    }
}
