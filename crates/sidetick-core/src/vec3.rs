//! World-space 3-vector used for positions, velocities, and wander impulses.
//!
//! Double precision matches what hosts hand out for entity coordinates; the
//! snapshot layer copies these by value, so `Vec3` must stay a plain `Copy`
//! struct with no heap data.

use std::ops::{Add, Mul, Neg, Sub};

/// A 3-component `f64` vector.  Y is the vertical axis.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Horizontal unit vector at the given yaw angle (radians).
    ///
    /// Wander impulses are horizontal: ground entities drift in the XZ plane
    /// and never wander vertically.
    #[inline]
    pub fn unit_yaw(yaw: f64) -> Self {
        Self { x: yaw.cos(), y: 0.0, z: yaw.sin() }
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance_sq(self, other: Vec3) -> f64 {
        (other - self).length_sq()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// The zero vector (and anything shorter than 1e-12) normalizes to
    /// `Vec3::ZERO` rather than NaN, so a degenerate chase direction becomes
    /// a no-op move instead of corrupting a live velocity.
    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len < 1e-12 {
            Vec3::ZERO
        } else {
            Vec3 { x: self.x / len, y: self.y / len, z: self.z / len }
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
