use serde::Serialize;
use tracing::trace;

use super::config::{SolverConfig, ZeroRootPolicy};
use super::roots::{RootCount, RootSet, Solution, MAX_ROOTS};
use super::Coefficients;

/// Shape of the equation once zero leading coefficients are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    /// `0 = 0`, every x is a solution.
    Identity,
    /// `c = 0` with `c != 0`.
    Contradiction,
    /// `b*x^2 + c = 0`.
    Quadratic,
    /// `a*x^4 + b*x^2 + c = 0` with `a != 0`.
    Biquadratic,
}

impl EquationKind {
    pub fn of(coeffs: &Coefficients) -> Self {
        match (coeffs.a == 0.0, coeffs.b == 0.0, coeffs.c == 0.0) {
            (true, true, true) => EquationKind::Identity,
            (true, true, false) => EquationKind::Contradiction,
            (true, false, _) => EquationKind::Quadratic,
            (false, _, _) => EquationKind::Biquadratic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquationKind::Identity => "identity",
            EquationKind::Contradiction => "contradiction",
            EquationKind::Quadratic => "quadratic",
            EquationKind::Biquadratic => "biquadratic",
        }
    }
}

/// Closed-form real-root solver for `a*x^4 + b*x^2 + c = 0`.
///
/// Substitutes `y = x^2`, solves the quadratic in `y`, then emits `+sqrt(y)`
/// and `-sqrt(y)` for every non-negative `y`. Stateless; a single value can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, coeffs: Coefficients) -> Solution {
        let mut buf = [0.0; MAX_ROOTS];
        match self.solve_into(coeffs, &mut buf) {
            RootCount::Infinite => Solution::Infinite,
            RootCount::Finite(len) => Solution::Roots(RootSet::from_buffer(buf, len)),
        }
    }

    /// Writes roots into `out` and returns how many were written. Slots past
    /// the returned count are left untouched. Non-finite coefficients produce
    /// no roots.
    pub fn solve_into(&self, coeffs: Coefficients, out: &mut [f64; MAX_ROOTS]) -> RootCount {
        let kind = EquationKind::of(&coeffs);
        let count = if !coeffs.is_finite() {
            RootCount::Finite(0)
        } else {
            match kind {
                EquationKind::Identity => RootCount::Infinite,
                EquationKind::Contradiction => RootCount::Finite(0),
                EquationKind::Quadratic => RootCount::Finite(self.solve_quadratic(coeffs, out)),
                EquationKind::Biquadratic if coeffs.b == 0.0 => {
                    RootCount::Finite(self.solve_pure_quartic(coeffs, out))
                }
                EquationKind::Biquadratic => {
                    RootCount::Finite(self.solve_biquadratic(coeffs, out))
                }
            }
        };

        trace!(
            a = coeffs.a,
            b = coeffs.b,
            c = coeffs.c,
            kind = kind.as_str(),
            count = count.as_i32(),
            "solved"
        );
        count
    }

    fn solve_quadratic(&self, coeffs: Coefficients, out: &mut [f64; MAX_ROOTS]) -> usize {
        self.push_root(out, 0, -coeffs.c / coeffs.b)
    }

    /// `a*x^4 + c = 0`. Taking the square roots separately keeps `c/a` from
    /// overflowing.
    fn solve_pure_quartic(&self, coeffs: Coefficients, out: &mut [f64; MAX_ROOTS]) -> usize {
        let Coefficients { a, c, .. } = coeffs;
        if c == 0.0 {
            // Double y-root at zero.
            return self.push_root(out, 0, 0.0);
        }
        if (a > 0.0) == (c > 0.0) {
            return 0;
        }
        self.push_root(out, 0, c.abs().sqrt() / a.abs().sqrt())
    }

    fn solve_biquadratic(&self, coeffs: Coefficients, out: &mut [f64; MAX_ROOTS]) -> usize {
        let Coefficients { a, b, c } = scale_to_unit(coeffs);

        let delta = discriminant(a, b, c);
        let magnitude = b * b + (4.0 * a * c).abs();
        if self.config.tie_break.is_double_root(delta, magnitude) {
            return self.push_root(out, 0, -b / (2.0 * a));
        }
        if delta < 0.0 {
            return 0;
        }

        // q carries the sign of -b so the two terms never cancel. The roots
        // are reported in the order of (-b + sqrt(delta)) / 2a, then
        // (-b - sqrt(delta)) / 2a.
        let q = -0.5 * (b + delta.sqrt().copysign(b));
        let (y1, y2) = if b < 0.0 { (q / a, c / q) } else { (c / q, q / a) };

        let len = self.push_root(out, 0, y1);
        if y2 == y1 {
            return len;
        }
        self.push_root(out, len, y2)
    }

    /// Emits the x-roots of a single y-root. Negative or unrepresentable
    /// y-roots contribute nothing.
    fn push_root(&self, out: &mut [f64; MAX_ROOTS], len: usize, y: f64) -> usize {
        if !(y.is_finite() && y >= 0.0) {
            return len;
        }
        if y == 0.0 && self.config.zero_roots == ZeroRootPolicy::Collapse {
            out[len] = 0.0;
            return len + 1;
        }
        let x = y.sqrt();
        out[len] = x;
        out[len + 1] = -x;
        len + 2
    }
}

/// Divides all coefficients by the power of two nearest below the largest
/// magnitude. Exact, and leaves the roots unchanged, but keeps `b*b` and
/// `4*a*c` from overflowing.
fn scale_to_unit(coeffs: Coefficients) -> Coefficients {
    let Coefficients { a, b, c } = coeffs;
    let largest = a.abs().max(b.abs()).max(c.abs());
    let exponent = ((largest.to_bits() >> 52) & 0x7ff) as i32 - 1023;
    let factor = 2f64.powi(-exponent.clamp(-1022, 1022));
    Coefficients::new(a * factor, b * factor, c * factor)
}

/// `b^2 - 4ac`, recomputed with the exact rounding errors of both products
/// when the plain difference is dominated by cancellation.
fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    let bb = b * b;
    let ac4 = 4.0 * a * c;
    let delta = bb - ac4;
    if 3.0 * delta.abs() >= bb + ac4.abs() {
        return delta;
    }
    let bb_err = b.mul_add(b, -bb);
    let ac4_err = (4.0 * a).mul_add(c, -ac4);
    delta + (bb_err - ac4_err)
}

/// Solves with the default configuration.
pub fn solve(coeffs: Coefficients) -> Solution {
    Solver::default().solve(coeffs)
}

/// Buffer-filling form of [`solve`].
pub fn solve_into(coeffs: Coefficients, out: &mut [f64; MAX_ROOTS]) -> RootCount {
    Solver::default().solve_into(coeffs, out)
}
