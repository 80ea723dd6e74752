use serde::Serialize;

use crate::solver::{Coefficients, RootCount};

/// A single verification row: coefficients, the mathematically expected
/// number of distinct real roots, and a human note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    #[serde(flatten)]
    pub coefficients: Coefficients,
    #[serde(serialize_with = "serialize_count")]
    pub expected: RootCount,
    pub note: String,
}

impl TestCase {
    pub fn new(a: f64, b: f64, c: f64, expected: RootCount, note: impl Into<String>) -> Self {
        Self {
            coefficients: Coefficients::new(a, b, c),
            expected,
            note: note.into(),
        }
    }
}

fn serialize_count<S: serde::Serializer>(count: &RootCount, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i32(count.as_i32())
}

/// The fixed regression table. The last row expects a single root at x = 0,
/// which the solver reports twice; it is meant to fail.
pub fn builtin_cases() -> Vec<TestCase> {
    use RootCount::{Finite, Infinite};

    vec![
        TestCase::new(0.0, 0.0, 0.0, Infinite, "all zero -> infinite"),
        TestCase::new(0.0, 0.0, 1.0, Finite(0), "a=0,b=0,c!=0 -> no solution"),
        TestCase::new(0.0, 1.0, -4.0, Finite(2), "linear in y -> y=4 -> x=+-2"),
        TestCase::new(0.0, 1.0, 4.0, Finite(0), "linear in y -> y=-4 -> no real x"),
        TestCase::new(1.0, 0.0, 1.0, Finite(0), "delta < 0 in y -> no real x"),
        TestCase::new(1.0, -5.0, 4.0, Finite(4), "y roots 4 and 1 -> x=+-2,+-1"),
        TestCase::new(1.0, -2.0, 1.0, Finite(2), "double y root 1 -> x=+-1"),
        TestCase::new(1.0, 0.0, -1.0, Finite(2), "y roots 1 and -1 -> only y=1 -> +-1"),
        TestCase::new(
            1.0,
            0.0,
            0.0,
            Finite(1),
            "y double root 0 -> x=0 is the unique root, duplicate zeros are a defect",
        ),
    ]
}
