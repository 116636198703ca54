/// A point (or vector) in 3D space
///
/// Relative to the sphere's local frame, before the spin rotation is applied,
/// unless a function says it works in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    pub fn dot(&self, other: &CartesianPoint) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean length
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Multiply every coordinate by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Rescale to the given length
    ///
    /// Each coordinate is divided by the current length and multiplied by
    /// `length`. Returns `None` for a zero-length (or non-finite) vector.
    pub fn with_length(&self, length: f64) -> Option<Self> {
        let current = self.length();
        if current == 0.0 || !current.is_finite() {
            return None;
        }

        Some(Self::new(
            self.x / current * length,
            self.y / current * length,
            self.z / current * length,
        ))
    }
}

impl std::ops::Add for CartesianPoint {
    type Output = CartesianPoint;

    fn add(self, other: CartesianPoint) -> CartesianPoint {
        CartesianPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
