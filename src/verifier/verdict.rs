use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureReason {
    CountMismatch { expected: i32, reported: i32 },
    ResidualTooLarge { root: f64, residual: f64 },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::CountMismatch { expected, reported } => {
                write!(f, "expected {expected} roots, solver reported {reported}")
            }
            FailureReason::ResidualTooLarge { root, residual } => {
                write!(f, "root {root} leaves residual {residual:e}")
            }
        }
    }
}

/// Logical defects detected on otherwise-valid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Defect {
    /// x = 0 reported twice where it is the single root.
    DuplicateZero,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::DuplicateZero => write!(f, "duplicate zero roots returned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail(FailureReason),
    Flagged(Defect),
}

impl Verdict {
    /// Only a clean pass counts. Flagged results are treated as failures.
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}
