use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Coefficients of `a*x^4 + b*x^2 + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Build coefficients without validation. The solver accepts any value,
    /// non-finite inputs simply produce no roots.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Build coefficients, rejecting NaN and infinities.
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self, InputError> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(InputError::non_finite(name, value));
            }
        }
        Ok(Self { a, b, c })
    }

    pub fn is_identity(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

impl From<(f64, f64, f64)> for Coefficients {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}
