mod biquadratic;
mod coefficients;
mod config;
mod roots;

pub use biquadratic::{solve, solve_into, EquationKind, Solver};
pub use coefficients::Coefficients;
pub use config::{SolverConfig, TieBreak, ZeroRootPolicy, DEFAULT_DISCRIMINANT_FACTOR};
pub use roots::{RootCount, RootSet, Solution, MAX_ROOTS};
