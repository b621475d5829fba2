#![allow(non_snake_case)]
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};

use crate::float::Float;

/// Dense simplex tableau.
///
/// Layout, top to bottom: one row per constraint, the cost row, and during phase 1 the phase-1 cost row.
/// The last column holds the right hand side. Every other column `j` belongs to variable `j` of the standard form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tableau<F> {
    T: Array2<F>,
    n_constraints: usize,
}

impl<F: Float> Tableau<F> {
    pub(crate) fn new(T: Array2<F>, n_constraints: usize) -> Self {
        debug_assert!(T.nrows() > n_constraints);
        Tableau { T, n_constraints }
    }

    pub(crate) fn view(&self) -> ArrayView2<F> {
        self.T.view()
    }

    pub(crate) fn n_constraints(&self) -> usize {
        self.n_constraints
    }

    pub(crate) fn rhs_col(&self) -> usize {
        self.T.ncols() - 1
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> F {
        self.T[[row, col]]
    }

    pub(crate) fn rhs(&self, row: usize) -> F {
        self.T[[row, self.rhs_col()]]
    }

    /// The objective row currently driving the pivots: the phase-1 row while it exists, the cost row otherwise.
    pub(crate) fn objective_row(&self) -> ArrayView1<F> {
        let last = self.T.nrows() - 1;
        self.T.slice(s![last, ..-1])
    }

    /// Value of the active objective, as stored in the right hand side of the objective row.
    pub(crate) fn objective_value(&self) -> F {
        -self.T[[self.T.nrows() - 1, self.rhs_col()]]
    }

    /// Values of all standard form variables: the right hand side for basic variables, zero otherwise.
    ///
    /// Basis entries pointing past the remaining columns (artificial variables that were already dropped) are skipped.
    pub(crate) fn basic_solution(&self, basis: &[usize]) -> Array1<F> {
        let mut solution = Array1::zeros(self.rhs_col());
        for (row, &col) in basis.iter().enumerate() {
            if col < solution.len() {
                solution[col] = self.rhs(row);
            }
        }
        solution
    }

    /// Gauss-Jordan elimination around `T[row, col]`, after which `col` is the identity column of `row`.
    ///
    /// Every other row, objective rows included, is updated. The caller guarantees the pivot element is non-zero.
    pub(crate) fn pivot(&mut self, row: usize, col: usize, basis: &mut [usize]) {
        let pivot = self.T[[row, col]];
        debug_assert!(pivot != F::zero());
        self.T.row_mut(row).mapv_inplace(|v| v / pivot);
        let pivot_row = self.T.row(row).to_owned();
        for (i, mut other) in self.T.axis_iter_mut(Axis(0)).enumerate() {
            if i == row {
                continue;
            }
            let factor = other[col];
            if factor == F::zero() {
                continue;
            }
            Zip::from(&mut other)
                .and(&pivot_row)
                .for_each(|t, &p| *t = *t - factor * p);
        }
        basis[row] = col;
    }

    /// Remove the phase-1 cost row and every column in `artificial`, leaving the cost row as the objective row.
    pub(crate) fn drop_phase_one(&mut self, artificial: std::ops::Range<usize>) {
        let nrows = self.T.nrows() - 1;
        let keep: Vec<usize> = (0..self.T.ncols())
            .filter(|j| !artificial.contains(j))
            .collect();
        self.T = self.T.slice(s![..nrows, ..]).select(Axis(1), &keep);
    }

    /// Remove a constraint row, typically one made redundant by a linearly dependent equality.
    pub(crate) fn remove_row(&mut self, row: usize) {
        let keep: Vec<usize> = (0..self.T.nrows()).filter(|&i| i != row).collect();
        self.T = self.T.select(Axis(0), &keep);
        self.n_constraints -= 1;
    }
}
