// src/vector.rs

use std::ops::{Add, Mul, Sub};

use crate::error::GeometryError;

/// Vectors at or below this length cannot be normalized.
pub const MIN_MAGNITUDE: f64 = 1e-12;

/// A displacement in the plane. Locations are [`crate::geometry::Point`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    /// Returns `self - other`.
    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalize(&self) -> Result<Vector, GeometryError> {
        let magnitude = self.magnitude();
        // `!(a > b)` also rejects NaN
        if !(magnitude > MIN_MAGNITUDE) || !magnitude.is_finite() {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(Vector::new(self.x / magnitude, self.y / magnitude))
    }

    /// Dot product of the unit directions of `self` and `other`, i.e. the
    /// cosine of the angle between them. Magnitudes never contribute.
    pub fn dot(&self, other: &Vector) -> Result<f64, GeometryError> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Ok(a.x * b.x + a.y * b.y)
    }

    /// 2D cross product of the unit directions of `self` and `other`: the sine
    /// of the signed angle from `self` to `other`. Zero means collinear.
    pub fn cross(&self, other: &Vector) -> Result<f64, GeometryError> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Ok(a.x * b.y - a.y * b.x)
    }

    /// Magnitude-weighted 2D cross product of the raw components.
    pub fn perp_dot(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_subtract_is_self_minus_other() {
        let a = Vector::new(5.0, 3.0);
        let b = Vector::new(1.0, 4.0);
        assert_eq!(a.subtract(b), Vector::new(4.0, -1.0));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a.add(b), a + b);
    }

    #[test]
    fn test_add_and_scale() {
        let v = Vector::new(1.0, -2.0) + Vector::new(0.5, 0.5);
        assert_eq!(v, Vector::new(1.5, -1.5));
        assert_eq!(v * 2.0, Vector::new(3.0, -3.0));
    }

    #[test]
    fn test_magnitude() {
        assert_approx_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize_has_unit_length() {
        let samples = [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 0.0),
            Vector::new(1e6, -2e6),
            Vector::new(0.0, 7.5),
        ];
        for v in samples {
            let unit = v.normalize().unwrap();
            assert_approx_eq!(unit.magnitude(), 1.0, 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_vector_is_an_error() {
        assert_eq!(Vector::ZERO.normalize(), Err(GeometryError::ZeroLengthVector));
        assert_eq!(
            Vector::new(f64::NAN, 1.0).normalize(),
            Err(GeometryError::ZeroLengthVector)
        );
    }

    #[test]
    fn test_dot_and_cross_ignore_magnitude() {
        let a = Vector::new(10.0, 0.0);
        let b = Vector::new(0.0, 0.25);
        assert_approx_eq!(a.dot(&b).unwrap(), 0.0);
        assert_approx_eq!(a.cross(&b).unwrap(), 1.0);
        assert_approx_eq!(b.cross(&a).unwrap(), -1.0);

        let c = Vector::new(-3.0, 0.0);
        assert_approx_eq!(a.dot(&c).unwrap(), -1.0);
        assert_approx_eq!(a.cross(&c).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_with_zero_vector_fails() {
        assert!(Vector::new(1.0, 1.0).dot(&Vector::ZERO).is_err());
        assert!(Vector::ZERO.cross(&Vector::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_perp_dot_keeps_magnitude() {
        let a = Vector::new(2.0, 0.0);
        let b = Vector::new(0.0, 3.0);
        assert_eq!(a.perp_dot(&b), 6.0);
        assert_eq!(b.perp_dot(&a), -6.0);
    }
}
