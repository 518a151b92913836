//! Two-dimensional Euclidean vectors.

use core::fmt;
use core::ops::{Add, Mul};

/// A 2D vector with `f64` components.
///
/// Arithmetic always produces a new value; operands are `Copy` and never
/// modified.
///
/// # Example
///
/// ```
/// use deckvec::Vector2D;
///
/// let v = Vector2D::new(5.0, 3.0);
/// assert_eq!(v.to_string(), "Vector2D(5, 3)");
/// assert_eq!(v + Vector2D::new(1.0, 1.0), Vector2D::new(6.0, 4.0));
/// assert_eq!(v * 3.0, Vector2D::new(15.0, 9.0));
/// assert!(v.is_non_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2D {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean length, computed with `hypot` so large or tiny
    /// components do not overflow or underflow in the intermediate squares.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the Euclidean length, computed with `hypot` so large or tiny
    /// components do not overflow or underflow in the intermediate squares.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// Returns whether the magnitude is greater than zero.
    #[must_use]
    pub fn is_non_zero(&self) -> bool {
        self.magnitude() > 0.0
    }

    /// Multiplies both components by `scalar`.
    #[must_use]
    pub const fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        vector.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_round_trips_components() {
        assert_eq!(Vector2D::default().to_string(), "Vector2D(0, 0)");
        assert_eq!(
            Vector2D::new(0.1, -2.5).to_string(),
            "Vector2D(0.1, -2.5)"
        );
        let third = Vector2D::new(1.0 / 3.0, 2.0);
        let text = third.to_string();
        let x = text
            .trim_start_matches("Vector2D(")
            .split(',')
            .next()
            .and_then(|s| s.parse::<f64>().ok());
        assert_eq!(x, Some(third.x));
    }

    #[test]
    fn magnitude_survives_large_components() {
        let v = Vector2D::new(3e200, 4e200);
        assert!((v.magnitude() / 5e200 - 1.0).abs() < 1e-12);
        assert!(v.is_non_zero());
    }

    #[test]
    fn tiny_components_are_non_zero() {
        assert!(Vector2D::new(0.0, f64::MIN_POSITIVE).is_non_zero());
        assert!(!Vector2D::new(0.0, -0.0).is_non_zero());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn magnitude_agrees_with_libm() {
        for (x, y) in [(5.0, 3.0), (-1e-300, 2e-300), (1e300, -1e300), (0.0, 7.5)] {
            let expected = libm::hypot(x, y);
            let got = Vector2D::new(x, y).magnitude();
            assert!((got - expected).abs() <= f64::EPSILON * expected);
        }
    }

    #[test]
    fn scalar_multiplication_is_symmetric() {
        let v = Vector2D::from((2.0, -1.5));
        assert_eq!(v * 4.0, 4.0 * v);
        assert_eq!(v.scale(0.0), Vector2D::new(0.0, -0.0));
    }
}
