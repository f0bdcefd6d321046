//! Simple geometric value types.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// A circle described by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from the center to the edge.
    pub radius: f64,
}

impl Circle {
    /// Create a circle with the given radius.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// `PI * radius^2`
    #[must_use]
    pub fn area(self) -> f64 {
        PI * self.radius * self.radius
    }
}
