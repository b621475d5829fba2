#![allow(non_snake_case)]
//! Conversion of a general [`Problem`] into an initial simplex tableau.
//!
//! Given
//! ```text
//! min_x c'x
//! st    A_ub x <= b_ub
//!       A_eq x == b_eq
//!       lower <= x <= upper
//! ```
//! every variable is rewritten into non-negative standard form variables (see [`BoundTransform`]), finite upper
//! bounds that survive the rewrite become extra inequality rows, every inequality row receives a slack variable, and
//! every equality row or row with a negative right hand side receives an artificial variable.
//!
//! Column layout of the resulting tableau:
//! ```text
//! | structural (n) | negative parts of free variables | slack | artificial | rhs |
//! ```
//! Row layout: caller inequality rows, bound rows, equality rows, cost row, phase-1 cost row (only when there are
//! artificial variables).
use std::ops::Range;

use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1};

use crate::float::Float;
use crate::linear_program::{Bound, Problem};

use super::tableau::Tableau;

/// How an original variable maps onto non-negative standard form variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum BoundTransform<F> {
    /// `x = x'`, for bounds `[0, upper]`.
    Identity,
    /// `x = x' + offset`, for a finite non-zero lower bound.
    Shifted { offset: F },
    /// `x = upper - x'`, for bounds `(-inf, upper]`.
    Mirrored { upper: F },
    /// `x = x'[positive] - x'[negative]`, for a free variable.
    SplitFree { positive: usize, negative: usize },
}

impl<F: Float> BoundTransform<F> {
    /// Value of original variable `index` given the standard form solution.
    fn recover(&self, index: usize, solution: ArrayView1<F>) -> F {
        match *self {
            BoundTransform::Identity => solution[index],
            BoundTransform::Shifted { offset } => solution[index] + offset,
            BoundTransform::Mirrored { upper } => upper - solution[index],
            BoundTransform::SplitFree { positive, negative } => {
                solution[positive] - solution[negative]
            }
        }
    }
}

/// Map a standard form solution back onto the original variables.
pub(crate) fn recover_x<F: Float>(
    transforms: &[BoundTransform<F>],
    solution: ArrayView1<F>,
) -> Array1<F> {
    transforms
        .iter()
        .enumerate()
        .map(|(i, transform)| transform.recover(i, solution))
        .collect()
}

pub(crate) struct StandardForm<F> {
    pub(crate) tableau: Tableau<F>,
    pub(crate) basis: Vec<usize>,
    pub(crate) transforms: Vec<BoundTransform<F>>,
    /// Number of structural columns, including the negative parts of free variables.
    pub(crate) n_struct: usize,
    pub(crate) n_slack: usize,
    pub(crate) n_artificial: usize,
}

impl<F: Float> StandardForm<F> {
    pub(crate) fn build(problem: &Problem<F>) -> StandardForm<F> {
        let n = problem.n_vars();
        let (transforms, n_struct) = bound_transforms(problem.bounds());

        let mut rows: Vec<(Array1<F>, F)> = Vec::new();
        for (a, &b) in problem.A_ub().rows().into_iter().zip(problem.b_ub()) {
            rows.push(substitute(&transforms, n_struct, a, b));
        }
        for (i, (bound, transform)) in problem.bounds().iter().zip(&transforms).enumerate() {
            let lower = match transform {
                BoundTransform::Identity => F::zero(),
                BoundTransform::Shifted { offset } => *offset,
                _ => continue,
            };
            if bound.upper.is_finite() {
                let mut a = Array1::zeros(n_struct);
                a[i] = F::one();
                rows.push((a, bound.upper - lower));
            }
        }
        let n_slack = rows.len();
        for (a, &b) in problem.A_eq().rows().into_iter().zip(problem.b_eq()) {
            rows.push(substitute(&transforms, n_struct, a, b));
        }

        let m = rows.len();
        let n_artificial = (m - n_slack)
            + rows[..n_slack]
                .iter()
                .filter(|(_, b)| *b < F::zero())
                .count();
        let n_cols = n_struct + n_slack + n_artificial + 1;
        let n_rows = if n_artificial > 0 { m + 2 } else { m + 1 };
        let rhs = n_cols - 1;

        let mut T = Array2::zeros((n_rows, n_cols));
        let mut basis = vec![0; m];
        let mut artificial_rows = Vec::with_capacity(n_artificial);
        for (i, (a, b)) in rows.into_iter().enumerate() {
            T.slice_mut(s![i, ..n_struct]).assign(&a);
            T[[i, rhs]] = b;
            if i < n_slack {
                T[[i, n_struct + i]] = F::one();
            }
            if i >= n_slack || b < F::zero() {
                if b < F::zero() {
                    T.row_mut(i).mapv_inplace(|v| -v);
                }
                let col = n_struct + n_slack + artificial_rows.len();
                T[[i, col]] = F::one();
                T[[n_rows - 1, col]] = F::one();
                basis[i] = col;
                artificial_rows.push(i);
            } else {
                basis[i] = n_struct + i;
            }
        }

        // The rhs keeps the negated constant that shifted and mirrored variables add to the cost.
        let (cost, constant) = substitute(&transforms, n_struct, problem.c().view(), F::zero());
        T.slice_mut(s![m, ..n_struct]).assign(&cost);
        T[[m, rhs]] = constant;

        if n_artificial > 0 {
            for &r in &artificial_rows {
                let row = T.row(r).to_owned();
                let mut phase_one = T.row_mut(m + 1);
                phase_one -= &row;
            }
        }

        debug!(
            "standard form: variables: {}, structural columns: {}, constraints: {}, slack: {}, artificial: {}",
            n, n_struct, m, n_slack, n_artificial
        );

        StandardForm {
            tableau: Tableau::new(T, m),
            basis,
            transforms,
            n_struct,
            n_slack,
            n_artificial,
        }
    }

    pub(crate) fn artificial_cols(&self) -> Range<usize> {
        let start = self.n_struct + self.n_slack;
        start..start + self.n_artificial
    }
}

fn bound_transforms<F: Float>(bounds: &[Bound<F>]) -> (Vec<BoundTransform<F>>, usize) {
    let mut n_struct = bounds.len();
    let transforms = bounds
        .iter()
        .enumerate()
        .map(|(i, bound)| {
            match (bound.lower.is_finite(), bound.upper.is_finite()) {
                (true, _) if bound.lower == F::zero() => BoundTransform::Identity,
                (true, _) => BoundTransform::Shifted {
                    offset: bound.lower,
                },
                (false, true) => BoundTransform::Mirrored { upper: bound.upper },
                (false, false) => {
                    n_struct += 1;
                    BoundTransform::SplitFree {
                        positive: i,
                        negative: n_struct - 1,
                    }
                }
            }
        })
        .collect();
    (transforms, n_struct)
}

/// Rewrite the constraint `a'x <= b` (or `== b`) in terms of the standard form variables.
fn substitute<F: Float>(
    transforms: &[BoundTransform<F>],
    n_struct: usize,
    a: ArrayView1<F>,
    mut b: F,
) -> (Array1<F>, F) {
    let mut row = Array1::zeros(n_struct);
    for (i, (&a_i, transform)) in a.iter().zip(transforms).enumerate() {
        match *transform {
            BoundTransform::Identity => row[i] += a_i,
            BoundTransform::Shifted { offset } => {
                row[i] += a_i;
                b -= a_i * offset;
            }
            BoundTransform::Mirrored { upper } => {
                row[i] -= a_i;
                b -= a_i * upper;
            }
            BoundTransform::SplitFree { positive, negative } => {
                row[positive] += a_i;
                row[negative] -= a_i;
            }
        }
    }
    (row, b)
}
