#![allow(non_snake_case)]
//! One-call entry point for problems held as nested rows.
//!
//! [`linprog`] validates the nested input, builds the [`Problem`] and runs the [`Simplex`] solver with the given
//! options. Callers that already have `ndarray` arrays should use [`Problem::target`] and a [`Simplex`] directly.
use ndarray::Array1;

use crate::error::LinearProgramError;
use crate::linear_program::Problem;
use crate::matrix::rows_to_array;
use crate::observer::Observer;
use crate::solvers::{OptimizeResult, Simplex, Solver};

/// Minimize `c'x` subject to `a_ub x <= b_ub`, `a_eq x == b_eq` and `bounds`.
///
/// Matrices are given row by row and must be rectangular with at least two columns. A matrix and its right hand side
/// are given together or not at all. `bounds` holds one `(lower, upper)` pair per variable, or a single pair that
/// applies to every variable; without bounds every variable is non-negative.
///
/// ```rust
/// use lp_simplex::linprog::linprog;
///
/// let a_ub = vec![vec![-3., 1.], vec![1., 2.]];
/// let res = linprog(
///     &[-1., 4.],
///     Some(&a_ub),
///     Some(&[6., 4.]),
///     None,
///     None,
///     Some(&[(f64::NEG_INFINITY, f64::INFINITY), (-3., f64::INFINITY)]),
///     None,
///     false,
///     1000,
///     1e-12,
///     false,
/// )
/// .unwrap();
///
/// assert!(res.success());
/// assert_eq!(res.iteration(), 1);
/// assert!((res.fun() + 22.).abs() < 1e-9);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn linprog(
    c: &[f64],
    a_ub: Option<&[Vec<f64>]>,
    b_ub: Option<&[f64]>,
    a_eq: Option<&[Vec<f64>]>,
    b_eq: Option<&[f64]>,
    bounds: Option<&[(f64, f64)]>,
    observer: Option<&mut dyn Observer<f64>>,
    disp: bool,
    max_iter: usize,
    tol: f64,
    bland: bool,
) -> Result<OptimizeResult<f64>, LinearProgramError> {
    let c = Array1::from(c.to_vec());
    let a_ub = a_ub.map(rows_to_array).transpose()?;
    let a_eq = a_eq.map(rows_to_array).transpose()?;
    let b_ub = b_ub.map(|b| Array1::from(b.to_vec()));
    let b_eq = b_eq.map(|b| Array1::from(b.to_vec()));

    let mut builder = Problem::target(&c);
    match (&a_ub, &b_ub) {
        (Some(A), Some(b)) => builder = builder.ub(A, b),
        (None, None) => {}
        _ => return Err(unpaired("a_ub", "b_ub")),
    }
    match (&a_eq, &b_eq) {
        (Some(A), Some(b)) => builder = builder.eq(A, b),
        (None, None) => {}
        _ => return Err(unpaired("a_eq", "b_eq")),
    }
    builder = match bounds {
        Some(&[(lower, upper)]) => builder.uniform_bounds(lower, upper),
        Some(bounds) => builder.bounds(bounds),
        None => builder,
    };
    let problem = builder.build()?;

    let solver = Simplex::custom()
        .disp(disp)
        .max_iter(max_iter)
        .tol(tol)
        .bland(bland)
        .build()?;
    match observer {
        Some(observer) => solver.solve_with_observer(&problem, observer),
        None => solver.solve(&problem),
    }
}

fn unpaired(A_name: &str, b_name: &str) -> LinearProgramError {
    LinearProgramError::IncompatibleInputDimensions(format!(
        "{A_name} and {b_name} must be given together"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ShapeError;
    use crate::observer::Progress;
    use crate::solvers::Status;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn solve(
        c: &[f64],
        a_ub: Option<&[Vec<f64>]>,
        b_ub: Option<&[f64]>,
        a_eq: Option<&[Vec<f64>]>,
        b_eq: Option<&[f64]>,
        bounds: Option<&[(f64, f64)]>,
    ) -> Result<OptimizeResult<f64>, LinearProgramError> {
        linprog(c, a_ub, b_ub, a_eq, b_eq, bounds, None, false, 1000, 1e-12, false)
    }

    #[test]
    fn test_linprog_ub_only() {
        let A_ub = vec![vec![-1., 2., 1., 0.], vec![3., 1., 0., 1.]];
        let res = solve(&[-1., -2., 0., 0.], Some(&A_ub), Some(&[4., 9.]), None, None, None).unwrap();

        assert!(res.success());
        assert_eq!(res.iteration(), 2);
        assert_abs_diff_eq!(*res.fun(), -8., epsilon = 1e-12);
        assert_abs_diff_eq!(*res.x(), array![2., 3., 0., 0.], epsilon = 1e-12);
    }

    #[test]
    fn test_linprog_with_bounds_and_equalities() {
        let inf = f64::INFINITY;
        let A_ub = vec![vec![4., -1., 0., 1.], vec![7., -8., -1., 0.]];
        let A_eq = vec![vec![1., 1., 0., 4.]];
        let res = solve(
            &[-3., 2., 1., -1.],
            Some(&A_ub),
            Some(&[6., -7.]),
            Some(&A_eq),
            Some(&[12.]),
            Some(&[(0., inf), (0., inf), (0., inf), (-inf, inf)]),
        )
        .unwrap();

        assert!(res.success());
        assert_eq!(res.iteration(), 3);
        assert_abs_diff_eq!(*res.fun(), -38. / 17., epsilon = 1e-12);
    }

    #[test]
    fn test_linprog_eq_only() {
        let A_eq = vec![vec![1., 1.], vec![2., 2.]];
        let res = solve(&[1., 1.], None, None, Some(&A_eq), Some(&[2., 4.]), None).unwrap();

        assert!(res.success());
        assert_abs_diff_eq!(*res.fun(), 2., epsilon = 1e-12);
        assert_eq!(res.slack().len(), 0);
    }

    #[test]
    fn test_single_bound_applies_to_all_variables() {
        let res = solve(&[-1., -1.], None, None, None, None, Some(&[(0., 2.)])).unwrap();

        assert!(res.success());
        assert_abs_diff_eq!(*res.x(), array![2., 2.], epsilon = 1e-12);
    }

    #[test]
    fn test_ragged_matrix() {
        let A_ub = vec![vec![1., 2.], vec![3., 4., 10.]];
        let err = solve(&[1., 1.], Some(&A_ub), Some(&[1., 1.]), None, None, None).unwrap_err();
        assert_eq!(err, LinearProgramError::Shape(ShapeError::RaggedRows));
        assert_eq!(err.to_string(), "Invalid input, all rows must have the same length");
    }

    #[test]
    fn test_single_column_matrix_is_rejected() {
        let A_ub = vec![vec![1.], vec![2.]];
        let err = solve(&[1.], Some(&A_ub), Some(&[1., 1.]), None, None, None).unwrap_err();
        assert_eq!(err, LinearProgramError::Shape(ShapeError::NotTwoDimensional));
    }

    #[test]
    fn test_dimension_errors() {
        let A_ub = vec![vec![1., 2.], vec![3., 4.]];
        assert!(matches!(
            solve(&[1., 1.], Some(&A_ub), None, None, None, None),
            Err(LinearProgramError::IncompatibleInputDimensions(_))
        ));
        assert!(matches!(
            solve(&[1., 1.], None, None, None, Some(&[1.]), None),
            Err(LinearProgramError::IncompatibleInputDimensions(_))
        ));
        assert!(matches!(
            solve(&[1., 1.], Some(&A_ub), Some(&[1.]), None, None, None),
            Err(LinearProgramError::IncompatibleInputDimensions(_))
        ));
        assert!(matches!(
            solve(&[1., 1., 1.], Some(&A_ub), Some(&[1., 1.]), None, None, None),
            Err(LinearProgramError::IncompatibleInputDimensions(_))
        ));
    }

    #[test]
    fn test_invalid_bound() {
        let err = solve(&[1., 1.], None, None, None, None, Some(&[(0., 1.), (2., 1.)])).unwrap_err();
        assert_eq!(
            err,
            LinearProgramError::InvalidBound {
                index: 1,
                lower: 2.,
                upper: 1.
            }
        );
    }

    #[test]
    fn test_invalid_tolerance() {
        let A_ub = vec![vec![1., 1.]];
        let res = linprog(
            &[1., 1.],
            Some(&A_ub),
            Some(&[1.]),
            None,
            None,
            None,
            None,
            false,
            1000,
            -1.,
            false,
        );
        assert!(matches!(res, Err(LinearProgramError::InvalidParameter(_))));
    }

    #[test]
    fn test_options_reach_the_solver() {
        let A_ub = vec![
            vec![0.25, -8., -1., 9.],
            vec![0.5, -12., -0.5, 3.],
            vec![0., 0., 1., 0.],
        ];
        let c = [-0.75, 20., -0.5, 6.];
        let b_ub = [0., 0., 1.];

        let cycling =
            linprog(&c, Some(&A_ub), Some(&b_ub), None, None, None, None, false, 20, 1e-12, false)
                .unwrap();
        assert_eq!(cycling.status(), Status::IterationLimit);
        assert_eq!(cycling.iteration(), 20);

        let bland =
            linprog(&c, Some(&A_ub), Some(&b_ub), None, None, None, None, false, 20, 1e-12, true)
                .unwrap();
        assert_eq!(bland.status(), Status::Optimal);
        assert_abs_diff_eq!(*bland.fun(), -1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_observer_is_called() {
        let A_ub = vec![vec![-3., 1.], vec![1., 2.]];
        let mut reports = 0;
        let mut observer = |_: &Progress<'_, f64>| reports += 1;
        let res = linprog(
            &[-1., 4.],
            Some(&A_ub),
            Some(&[6., 4.]),
            None,
            None,
            None,
            Some(&mut observer),
            false,
            1000,
            1e-12,
            false,
        )
        .unwrap();

        assert!(res.success());
        // Start, one pivot, completion.
        assert_eq!(reports, 3);
    }
}
