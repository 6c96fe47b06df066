use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::ops;

/// A 2-D vector value. Fields are stored verbatim; no validation or
/// normalization happens at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Field-wise addition with a runtime operand check.
    ///
    /// Declines with `NotApplicable` when `other` is not a `Vector2D`,
    /// leaving further handling to the caller.
    pub fn add(self, other: &dyn Any) -> Result<Vector2D> {
        match other.downcast_ref::<Vector2D>() {
            Some(rhs) => Ok(self + *rhs),
            None => Err(DemoError::NotApplicable { op: "+" }),
        }
    }
}

// Operator sugar: `+` between two vectors is type-checked at compile
// time, so it performs the field-wise sum directly.
impl ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vector2D {
    // Integral values render without a fractional part: `Vector(6, 8)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}
