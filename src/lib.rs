//! Biquad Solver
//!
//! Closed-form real-root solver for biquadratic equations
//! `a*x^4 + b*x^2 + c = 0`, with a verifier that checks reported roots
//! against the polynomial and an expected root count.

pub mod cases;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod solver;
pub mod verifier;

pub use error::{Error, Result};
pub use solver::{solve, solve_into, Coefficients, RootCount, Solution, Solver};
pub use verifier::{poly, Verdict, Verifier};
