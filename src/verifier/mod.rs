mod verdict;

pub use verdict::{Defect, FailureReason, Verdict};

use serde::Serialize;
use tracing::{debug, info};

use crate::cases::TestCase;
use crate::solver::{Coefficients, RootCount, Solution, Solver};

/// Residual tolerance applied to every reported root.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Roots closer to zero than this are treated as zero by the defect check.
const ZERO_THRESHOLD: f64 = 1e-12;

/// Evaluates `a*x^4 + b*x^2 + c`.
pub fn poly(a: f64, b: f64, c: f64, x: f64) -> f64 {
    ((a * x * x) * (x * x)) + (b * x * x) + c
}

/// Outcome of checking one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub case: TestCase,
    pub reported: i32,
    pub roots: Vec<f64>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationRun {
    pub passed: usize,
    pub total: usize,
    pub reports: Vec<CaseReport>,
}

impl VerificationRun {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Checks solver output against the polynomial and an expected root count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verifier {
    solver: Solver,
    tolerance: f64,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(Solver::default())
    }
}

impl Verifier {
    pub fn new(solver: Solver) -> Self {
        Self {
            solver,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Judge a solution. Count and residual failures take precedence over
    /// defect flags.
    pub fn check(&self, coeffs: &Coefficients, solution: &Solution, expected: RootCount) -> Verdict {
        let reported = solution.count();
        if reported != expected {
            return Verdict::Fail(FailureReason::CountMismatch {
                expected: expected.as_i32(),
                reported: reported.as_i32(),
            });
        }

        for &root in solution.roots() {
            let residual = poly(coeffs.a, coeffs.b, coeffs.c, root);
            if residual.is_nan() || residual.abs() > self.tolerance {
                return Verdict::Fail(FailureReason::ResidualTooLarge { root, residual });
            }
        }

        if has_duplicate_zero(solution.roots()) {
            return Verdict::Flagged(Defect::DuplicateZero);
        }

        Verdict::Pass
    }

    pub fn verify_case(&self, index: usize, case: &TestCase) -> CaseReport {
        let solution = self.solver.solve(case.coefficients);
        let verdict = self.check(&case.coefficients, &solution, case.expected);
        debug!(index, ?verdict, note = %case.note, "verified case");

        CaseReport {
            index,
            case: case.clone(),
            reported: solution.count().as_i32(),
            roots: solution.roots().to_vec(),
            verdict,
        }
    }

    /// Verify every case. Report indices are 1-based.
    pub fn run(&self, cases: &[TestCase]) -> VerificationRun {
        let reports: Vec<CaseReport> = cases
            .iter()
            .enumerate()
            .map(|(i, case)| self.verify_case(i + 1, case))
            .collect();

        let passed = reports.iter().filter(|r| r.verdict.is_pass()).count();
        let total = reports.len();
        info!(passed, total, "verification finished");

        VerificationRun {
            passed,
            total,
            reports,
        }
    }
}

fn has_duplicate_zero(roots: &[f64]) -> bool {
    roots.iter().filter(|x| x.abs() < ZERO_THRESHOLD).count() > 1
}
