use biquad_solver::solver::{SolverConfig, TieBreak, ZeroRootPolicy, MAX_ROOTS};
use biquad_solver::{poly, solve, solve_into, Coefficients, RootCount, Solution, Solver};
use pretty_assertions::assert_eq;

const GRID: &[f64] = &[-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];

fn grid() -> impl Iterator<Item = Coefficients> {
    GRID.iter().flat_map(|&a| {
        GRID.iter()
            .flat_map(move |&b| GRID.iter().map(move |&c| Coefficients::new(a, b, c)))
    })
}

/// Magnitudes far from 1 in both directions, including values whose squares
/// overflow or underflow.
const EDGE: &[f64] = &[
    -1e200, -1e8, -3.0, -1.0, -1e-8, 0.0, 1e-8, 0.5, 1.0, 2.0, 1e8, 1e200,
];

fn edge_grid() -> impl Iterator<Item = Coefficients> {
    EDGE.iter().flat_map(|&a| {
        EDGE.iter()
            .flat_map(move |&b| EDGE.iter().map(move |&c| Coefficients::new(a, b, c)))
    })
}

/// `|p(x)|` measured against the size of its terms, after normalising the
/// coefficients. An absolute bound is meaningless once `a*x^4` reaches 1e16.
fn assert_small_relative_residual(coeffs: Coefficients, x: f64) {
    let m = coeffs.a.abs().max(coeffs.b.abs()).max(coeffs.c.abs());
    let (a, b, c) = (coeffs.a / m, coeffs.b / m, coeffs.c / m);
    let terms = (a * x * x * (x * x)).abs() + (b * x * x).abs() + c.abs();
    let residual = poly(a, b, c, x).abs();
    assert!(
        residual <= 1e-10 * terms,
        "{coeffs:?}: root {x} leaves residual {residual} against terms {terms}"
    );
}

const ROOT_SCALES: &[f64] = &[0.3, 7.0, 1e-4, 1e4, 1.0 / 97.0, 2.5e100];
const LEADING: &[f64] = &[1.0, 3.0, -2.5, 1e-6, 1e6];

fn solve_abc(a: f64, b: f64, c: f64) -> Solution {
    solve(Coefficients::new(a, b, c))
}

#[test]
fn test_all_zero_is_infinite() {
    assert_eq!(solve_abc(0.0, 0.0, 0.0).count(), RootCount::Infinite);
}

#[test]
fn test_constant_nonzero_has_no_solution() {
    assert_eq!(solve_abc(0.0, 0.0, 1.0).count(), RootCount::Finite(0));
}

#[test]
fn test_quadratic_two_roots() {
    assert_eq!(solve_abc(0.0, 1.0, -4.0).roots(), &[2.0, -2.0]);
}

#[test]
fn test_quadratic_negative_y() {
    assert_eq!(solve_abc(0.0, 1.0, 4.0).count(), RootCount::Finite(0));
}

#[test]
fn test_negative_discriminant() {
    assert_eq!(solve_abc(1.0, 0.0, 1.0).count(), RootCount::Finite(0));
}

#[test]
fn test_both_y_roots_negative() {
    // y^2 + 3y + 2 = 0 -> y = -1, -2
    assert_eq!(solve_abc(1.0, 3.0, 2.0).count(), RootCount::Finite(0));
}

#[test]
fn test_four_roots() {
    assert_eq!(solve_abc(1.0, -5.0, 4.0).roots(), &[2.0, -2.0, 1.0, -1.0]);
}

#[test]
fn test_double_y_root() {
    assert_eq!(solve_abc(1.0, -2.0, 1.0).roots(), &[1.0, -1.0]);
}

#[test]
fn test_one_positive_one_negative_y_root() {
    assert_eq!(solve_abc(1.0, 0.0, -1.0).roots(), &[1.0, -1.0]);
}

#[test]
fn test_zero_y_root_reports_two_zeros() {
    // x = 0 is the unique real root; the default policy still reports it twice.
    let solution = solve_abc(1.0, 0.0, 0.0);
    assert_eq!(solution.count(), RootCount::Finite(2));
    assert!(solution.roots().iter().all(|x| *x == 0.0));
}

#[test]
fn test_zero_y_root_collapsed_on_request() {
    let solver = Solver::new(SolverConfig::default().with_zero_roots(ZeroRootPolicy::Collapse));
    let solution = solver.solve(Coefficients::new(1.0, 0.0, 0.0));
    assert_eq!(solution.count(), RootCount::Finite(1));
    assert_eq!(solution.roots(), &[0.0]);
}

#[test]
fn test_rounded_double_root_depends_on_tie_break() {
    // Mathematically (y - s)^2 with s = 1/97, but the computed discriminant
    // comes out slightly positive.
    let coeffs = Coefficients::new(3.0, -0.061855670103092786, 0.0003188436603252205);

    let exact = Solver::new(SolverConfig::default().with_tie_break(TieBreak::Exact));
    assert_eq!(exact.solve(coeffs).count(), RootCount::Finite(4));

    assert_eq!(solve(coeffs).count(), RootCount::Finite(2));
}

#[test]
fn test_solve_into_matches_solve() {
    for coeffs in grid() {
        let mut buf = [0.0; MAX_ROOTS];
        let count = solve_into(coeffs, &mut buf);
        let solution = solve(coeffs);
        assert_eq!(count, solution.count());
        if let RootCount::Finite(n) = count {
            assert_eq!(&buf[..n], solution.roots());
        }
    }
}

#[test]
fn test_every_root_satisfies_polynomial() {
    for coeffs in grid() {
        for &x in solve(coeffs).roots() {
            let residual = poly(coeffs.a, coeffs.b, coeffs.c, x);
            assert!(
                residual.abs() <= 1e-5,
                "{coeffs:?}: root {x} leaves residual {residual}"
            );
        }
    }
}

#[test]
fn test_infinite_iff_all_zero() {
    for coeffs in grid() {
        assert_eq!(
            solve(coeffs).count().is_infinite(),
            coeffs.is_identity(),
            "{coeffs:?}"
        );
    }
}

#[test]
fn test_count_is_never_odd() {
    for coeffs in grid() {
        let count = solve(coeffs).count().as_i32();
        assert!(matches!(count, -1 | 0 | 2 | 4), "{coeffs:?}: count {count}");
    }
}

#[test]
fn test_roots_come_in_plus_minus_pairs() {
    for coeffs in grid() {
        let solution = solve(coeffs);
        let roots = solution.roots();
        for r in roots {
            assert!(roots.contains(&-r), "{coeffs:?}: {r} has no negation in {roots:?}");
        }
    }
}

#[test]
fn test_concurrent_solves_agree() {
    let expected: Vec<Solution> = grid().map(solve).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| grid().map(solve).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_extreme_magnitudes_keep_invariants() {
    for coeffs in edge_grid() {
        let solution = solve(coeffs);
        let count = solution.count().as_i32();
        assert!(matches!(count, -1 | 0 | 2 | 4), "{coeffs:?}: count {count}");
        assert_eq!(solution.count().is_infinite(), coeffs.is_identity());

        let roots = solution.roots();
        for &x in roots {
            assert!(x.is_finite(), "{coeffs:?}: root {x}");
            assert!(roots.contains(&-x), "{coeffs:?}: {x} has no negation in {roots:?}");
            assert_small_relative_residual(coeffs, x);
        }
    }
}

#[test]
fn test_extreme_magnitudes_solve_into_matches_solve() {
    for coeffs in edge_grid() {
        let mut buf = [0.0; MAX_ROOTS];
        let count = solve_into(coeffs, &mut buf);
        assert_eq!(count, solve(coeffs).count(), "{coeffs:?}");
    }
}

#[test]
fn test_near_double_roots_collapse_to_one_pair() {
    // a*(y - r)^2 with rounded coefficients.
    for &r in ROOT_SCALES {
        for &a in LEADING {
            let coeffs = Coefficients::new(a, -2.0 * a * r, a * r * r);
            let solution = solve(coeffs);
            assert_eq!(solution.count(), RootCount::Finite(2), "{coeffs:?}");
            for &x in solution.roots() {
                assert_small_relative_residual(coeffs, x);
            }
        }
    }
}

#[test]
fn test_close_but_distinct_roots_stay_split() {
    for &r in ROOT_SCALES {
        for &a in LEADING {
            for split in [1e-6, 1e-5, 1e-3] {
                let r2 = r * (1.0 + split);
                let coeffs = Coefficients::new(a, -a * (r + r2), a * r * r2);
                let solution = solve(coeffs);
                assert_eq!(solution.count(), RootCount::Finite(4), "{coeffs:?}");
                for &x in solution.roots() {
                    assert_small_relative_residual(coeffs, x);
                }
            }
        }
    }
}

#[test]
fn test_close_roots_survive_default_tie_break() {
    // y-roots 1 and 1 + 5e-7, an order of magnitude above double-root rounding.
    let roots = solve_abc(1.0, -(2.0 + 5e-7), 1.0 + 5e-7).roots().to_vec();
    assert_eq!(roots.len(), 4);
    assert!(roots.contains(&1.0));
    assert!(roots.contains(&-1.0));
}
