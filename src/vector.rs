//! Two-dimensional point/vector type used for every coordinate and delta.
//!
//! `Vector2` is `Copy`, so passing it by value never aliases. The chainable
//! methods (`set`, `translate`, `add_vec`, `sub_vec`, `scale`, `div_scalar`)
//! mutate in place and return `&mut Self`; call sites that track the pointer
//! continuously reuse one value instead of building a new one per event. The
//! arithmetic operators are the non-mutating counterparts.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use serde::{Deserialize, Serialize};

/// A point or displacement in either screen or canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The origin / zero displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Add raw deltas to both components.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Add another vector component-wise.
    pub fn add_vec(&mut self, other: &Self) -> &mut Self {
        self.translate(other.x, other.y)
    }

    /// Subtract another vector component-wise.
    pub fn sub_vec(&mut self, other: &Self) -> &mut Self {
        self.translate(-other.x, -other.y)
    }

    /// Multiply both components by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Divide both components by `divisor`. No zero check.
    pub fn div_scalar(&mut self, divisor: f64) -> &mut Self {
        self.x /= divisor;
        self.y /= divisor;
        self
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_vec(&rhs);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_vec(&rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.div_scalar(rhs);
    }
}
