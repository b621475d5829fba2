#![allow(non_snake_case)]
//! Two-phase tableau simplex solver for linear programs.
//!
//! The problem is first brought into standard form (non-negative variables, a slack per inequality and an artificial
//! variable per row that has no feasible slack). Phase one then searches for a basic feasible solution, and phase two
//! optimizes from it. The solution is finally mapped back onto the variables of the original problem.
//!
//! This follows the simplex method of the Python package SciPy (`linprog(method='simplex')`). Lower bounds and free
//! variables are handled by substitution; finite upper bounds become extra inequality rows.
//!
//! .. \[1\] Dantzig, George B., "Linear programming and extensions", Chapter 5.2, Princeton University Press, 1963.
//!
//! .. \[2\] Bland, Robert G. "New finite pivoting rules for the simplex method." Mathematics of Operations Research
//!        (2), 1977: pp. 103-107.
mod phase;
mod selector;
mod standard_form;
mod tableau;
mod tolerance;

use log::debug;

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::observer::{NoObserver, Observer};

use phase::PhaseController;
pub use selector::PivotRule;
use standard_form::StandardForm;

use super::{OptimizeResult, Solver, Status};

/// Builder struct to customize the [`Simplex`] solver.
///
/// After constructing the default solver with [`Simplex::custom`],
/// use the other methods to update specific settings, and finally call [`build`](SimplexBuilder::build) to validate
/// the customized settings and create the solver.
pub struct SimplexBuilder<F> {
    tol: F,
    disp: bool,
    rule: PivotRule,
    max_iter: usize,
}

impl<F: Float> SimplexBuilder<F> {
    pub(crate) fn new() -> SimplexBuilder<F> {
        SimplexBuilder {
            tol: F::cast(1e-12),
            disp: false,
            rule: PivotRule::Dantzig,
            max_iter: 1000,
        }
    }

    /// Set the tolerance. Reduced costs above `-tol` count as non-negative, pivot elements must exceed `tol`, and
    /// phase one must end with an infeasibility of at most `tol`. Should be a small non-negative value.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Set to true to print the termination status, objective value and iteration count to stdout.
    pub fn disp(mut self, disp: bool) -> Self {
        self.disp = disp;
        self
    }

    /// Set to true to use Bland's rule for choosing the entering variable, which prevents cycling on degenerate
    /// problems at the cost of more iterations. Shorthand for [`pivot_rule`](Self::pivot_rule).
    pub fn bland(mut self, bland: bool) -> Self {
        self.rule = if bland {
            PivotRule::Bland
        } else {
            PivotRule::Dantzig
        };
        self
    }

    /// Rule used to choose the entering variable.
    pub fn pivot_rule(mut self, rule: PivotRule) -> Self {
        self.rule = rule;
        self
    }

    /// Maximum number of pivots, summed over both phases, before we give up on trying to solve the problem.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Construct the solver, validating the settings.
    /// Returns an `InvalidParameter` error if the tolerance is negative or not finite.
    pub fn build(self) -> Result<Simplex<F>, LinearProgramError> {
        if !self.tol.is_finite() || self.tol < F::zero() {
            return Err(LinearProgramError::InvalidParameter(
                "The tolerance must be finite and nonnegative.",
            ));
        }
        Ok(Simplex {
            tol: self.tol,
            disp: self.disp,
            rule: self.rule,
            max_iter: self.max_iter,
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// Simplex struct that can be used to solve linear programs.
///
/// To get started quickly, use the [`default`](Simplex::default()) method to initialize the solver with default parameters.
/// See the [`custom`](Simplex::custom()) for customization options through the builder pattern.
///
/// The solver holds configuration only; every call to [`solve`](Solver::solve) works on its own tableau, so a single
/// solver can be shared between threads.
pub struct Simplex<F> {
    tol: F,
    disp: bool,
    rule: PivotRule,
    max_iter: usize,
}

impl<F: Float> Default for Simplex<F> {
    /// The simplex solver with default configuration.
    fn default() -> Self {
        Simplex {
            tol: F::cast(1e-12),
            disp: false,
            rule: PivotRule::Dantzig,
            max_iter: 1000,
        }
    }
}

impl<F: Float> Solver<F> for Simplex<F> {
    fn solve(&self, problem: &Problem<F>) -> Result<OptimizeResult<F>, LinearProgramError> {
        self.solve_with_observer(problem, &mut NoObserver)
    }
}

impl<F: Float> Simplex<F> {
    /// Construct a new simplex solver, to be customized through the builder pattern.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use lp_simplex::prelude::*;
    /// use ndarray::array;
    ///
    ///
    /// let A_ub = array![[-3f64, 1.], [1., 2.]];
    /// let b_ub = array![6., 4.];
    /// let c = array![-1., 4.];
    ///
    /// let problem = Problem::target(&c)
    ///     .ub(&A_ub, &b_ub)
    ///     .build()
    ///     .unwrap();
    /// let solver = Simplex::custom().bland(true).build().unwrap();
    /// let res = solver.solve(&problem).unwrap();
    ///
    /// assert!(res.success());
    /// assert_abs_diff_eq!(*res.x(), array![4., 0.], epsilon = 1e-12);
    /// ```
    pub fn custom() -> SimplexBuilder<F> {
        SimplexBuilder::new()
    }

    /// Solve `problem`, reporting progress to `observer` at the start of each phase, after every pivot, and when each
    /// phase completes.
    pub fn solve_with_observer<O: Observer<F> + ?Sized>(
        &self,
        problem: &Problem<F>,
        observer: &mut O,
    ) -> Result<OptimizeResult<F>, LinearProgramError> {
        let standard_form = StandardForm::build(problem);
        let outcome =
            PhaseController::new(standard_form, self.rule, self.tol, self.max_iter, observer).run();

        let fun = problem.target_value(&outcome.x);
        let slack = problem.slack(&outcome.x);
        debug!(
            "simplex terminated: {:?} after {} iterations, objective {}",
            outcome.status, outcome.iteration, fun
        );
        if self.disp {
            println!("{}", outcome.status.message());
            if matches!(outcome.status, Status::Optimal | Status::IterationLimit) {
                println!("         Current function value: {fun:<12.6}");
                println!("         Iterations: {}", outcome.iteration);
            }
        }
        Ok(OptimizeResult::new(
            outcome.x,
            fun,
            slack,
            outcome.iteration,
            outcome.status,
        ))
    }
}
