use serde::{Deserialize, Serialize};

/// Default multiple of `f64::EPSILON` within which a discriminant counts as
/// zero. Covers the rounding of `b*b - 4*a*c` for an exact double root while
/// still separating y-roots whose relative gap is around `1e-7`.
pub const DEFAULT_DISCRIMINANT_FACTOR: f64 = 4.0;

/// Rule for deciding that the quadratic in `y` has a double root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Only a discriminant of exactly zero.
    Exact,
    /// `|delta| <= factor * f64::EPSILON * (b^2 + |4ac|)`.
    Discriminant { factor: f64 },
}

impl TieBreak {
    /// `magnitude` is `b^2 + |4ac|`, the size of the terms that cancel in
    /// `delta`.
    pub fn is_double_root(self, delta: f64, magnitude: f64) -> bool {
        match self {
            TieBreak::Exact => delta == 0.0,
            TieBreak::Discriminant { factor } => {
                delta.abs() <= factor * f64::EPSILON * magnitude
            }
        }
    }
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Discriminant {
            factor: DEFAULT_DISCRIMINANT_FACTOR,
        }
    }
}

/// What to emit when a y-root is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRootPolicy {
    /// Emit `+0` and `-0`, keeping every root paired with its negation.
    #[default]
    Preserve,
    /// Emit a single `0`. Produces odd root counts.
    Collapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    pub tie_break: TieBreak,
    pub zero_roots: ZeroRootPolicy,
}

impl SolverConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_zero_roots(mut self, zero_roots: ZeroRootPolicy) -> Self {
        self.zero_roots = zero_roots;
        self
    }
}
