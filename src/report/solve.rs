use serde::Serialize;

use crate::solver::{Coefficients, EquationKind, Solution};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveOutput {
    #[serde(flatten)]
    pub coefficients: Coefficients,
    pub kind: EquationKind,
    pub count: i32,
    pub roots: Vec<f64>,
}

impl SolveOutput {
    pub fn new(coefficients: Coefficients, solution: &Solution) -> Self {
        Self {
            coefficients,
            kind: EquationKind::of(&coefficients),
            count: solution.count().as_i32(),
            roots: solution.roots().to_vec(),
        }
    }
}
