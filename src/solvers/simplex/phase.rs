//! The two-phase pivoting loop.
//!
//! Phase one minimizes the sum of the artificial variables. If that sum cannot be driven to zero the problem is
//! infeasible. Otherwise the artificial columns and the phase-one cost row are dropped, artificial variables that are
//! still basic (at zero) are pivoted out, and phase two minimizes the actual cost starting from the feasible basis.
//!
//! Reference: Thie, Paul R., and Gerard E. Keough. "An Introduction to Linear Programming and Game Theory",
//! 3rd edition, chapter 3.7 on redundant systems.
use std::ops::Range;

use log::{debug, trace};
use ndarray::Array1;

use crate::float::Float;
use crate::observer::{Observer, Phase, Progress};
use crate::solvers::Status;

use super::selector::{pivot_col, pivot_row, PivotRule};
use super::standard_form::{recover_x, BoundTransform, StandardForm};
use super::tableau::Tableau;
use super::tolerance::Tolerance;

/// Final state of the pivoting loop.
pub(crate) struct Outcome<F> {
    pub(crate) status: Status,
    /// Last basic solution, in the variables of the original problem.
    pub(crate) x: Array1<F>,
    pub(crate) iteration: usize,
}

pub(crate) struct PhaseController<'o, F, O: ?Sized> {
    tableau: Tableau<F>,
    basis: Vec<usize>,
    transforms: Vec<BoundTransform<F>>,
    artificial: Range<usize>,
    rule: PivotRule,
    tol: Tolerance<F>,
    max_iter: usize,
    iteration: usize,
    observer: &'o mut O,
}

impl<'o, F: Float, O: Observer<F> + ?Sized> PhaseController<'o, F, O> {
    pub(crate) fn new(
        standard_form: StandardForm<F>,
        rule: PivotRule,
        tol: F,
        max_iter: usize,
        observer: &'o mut O,
    ) -> Self {
        let artificial = standard_form.artificial_cols();
        PhaseController {
            tableau: standard_form.tableau,
            basis: standard_form.basis,
            transforms: standard_form.transforms,
            artificial,
            rule,
            tol: Tolerance::new(tol),
            max_iter,
            iteration: 0,
            observer,
        }
    }

    pub(crate) fn run(mut self) -> Outcome<F> {
        if !self.artificial.is_empty() {
            match self.iterate(Phase::One) {
                Status::Optimal => {}
                Status::IterationLimit => return self.finish(Status::IterationLimit),
                // The phase one cost is bounded below by zero, so an unbounded column means numerical trouble on a
                // problem without a feasible basis.
                Status::Unbounded | Status::Infeasible => return self.finish(Status::Infeasible),
            }
            let infeasibility = self.tableau.objective_value();
            if !self.tol.is_zero(infeasibility) {
                debug!("phase 1 ended with infeasibility {}", infeasibility);
                return self.finish(Status::Infeasible);
            }
            self.tableau.drop_phase_one(self.artificial.clone());
            if let Err(status) = self.drive_out_artificials() {
                return self.finish(status);
            }
        }
        let status = self.iterate(Phase::Two);
        self.finish(status)
    }

    /// Pivot on the active objective row until it has no negative reduced cost, a column is unbounded, or the
    /// iteration limit is hit.
    fn iterate(&mut self, phase: Phase) -> Status {
        self.report(phase, None, false);
        let status = loop {
            let col = match pivot_col(&self.tableau, self.rule, &self.tol) {
                Some(col) => col,
                None => break Status::Optimal,
            };
            let row = match pivot_row(&self.tableau, col, &self.basis, &self.tol) {
                Some(row) => row,
                None => break Status::Unbounded,
            };
            if self.iteration >= self.max_iter {
                break Status::IterationLimit;
            }
            trace!(
                "phase {}, iteration {}: variable {} enters, variable {} leaves",
                phase,
                self.iteration + 1,
                col,
                self.basis[row]
            );
            self.tableau.pivot(row, col, &mut self.basis);
            self.iteration += 1;
            self.report(phase, Some((row, col)), false);
        };
        self.report(phase, None, true);
        debug!(
            "phase {} finished after {} iterations: {:?}, objective {}",
            phase,
            self.iteration,
            status,
            self.tableau.objective_value()
        );
        status
    }

    /// Replace every artificial variable left in the basis after phase one.
    ///
    /// The artificial is at zero, so pivoting on any non-zero entry in its row keeps the basis feasible. The lowest
    /// indexed such column is used. A row without one is a linear combination of the other rows and is removed.
    fn drive_out_artificials(&mut self) -> Result<(), Status> {
        let first_artificial = self.artificial.start;
        let mut row = 0;
        while row < self.tableau.n_constraints() {
            if self.basis[row] < first_artificial {
                row += 1;
                continue;
            }
            let replacement =
                (0..first_artificial).find(|&col| !self.tol.is_zero(self.tableau.get(row, col)));
            match replacement {
                Some(col) => {
                    if self.iteration >= self.max_iter {
                        return Err(Status::IterationLimit);
                    }
                    trace!("pivoting artificial out of row {} in favour of variable {}", row, col);
                    self.tableau.pivot(row, col, &mut self.basis);
                    self.iteration += 1;
                    self.report(Phase::One, Some((row, col)), false);
                    row += 1;
                }
                None => {
                    debug!("removing redundant constraint row {}", row);
                    self.tableau.remove_row(row);
                    self.basis.remove(row);
                }
            }
        }
        Ok(())
    }

    fn current_x(&self) -> Array1<F> {
        let solution = self.tableau.basic_solution(&self.basis);
        recover_x(&self.transforms, solution.view())
    }

    fn report(&mut self, phase: Phase, pivot: Option<(usize, usize)>, complete: bool) {
        let x = self.current_x();
        self.observer.report(&Progress {
            x: x.view(),
            tableau: self.tableau.view(),
            iteration: self.iteration,
            pivot,
            phase,
            basis: &self.basis,
            complete,
        });
    }

    fn finish(self, status: Status) -> Outcome<F> {
        Outcome {
            status,
            x: self.current_x(),
            iteration: self.iteration,
        }
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_program::Problem;
    use crate::observer::NoObserver;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn run(problem: &Problem<f64>, rule: PivotRule, max_iter: usize) -> Outcome<f64> {
        let standard_form = StandardForm::build(problem);
        PhaseController::new(standard_form, rule, 1e-12, max_iter, &mut NoObserver).run()
    }

    #[test]
    fn test_slack_basis_skips_phase_one() {
        let c = array![-1., -2., 0., 0.];
        let A_ub = array![[-1., 2., 1., 0.], [3., 1., 0., 1.]];
        let b_ub = array![4., 9.];
        let problem = Problem::target(&c).ub(&A_ub, &b_ub).build().unwrap();

        let mut phases = Vec::new();
        let mut observer = |progress: &Progress<'_, f64>| phases.push(progress.phase);
        let standard_form = StandardForm::build(&problem);
        let outcome =
            PhaseController::new(standard_form, PivotRule::Dantzig, 1e-12, 100, &mut observer).run();

        assert_eq!(outcome.status, Status::Optimal);
        assert_eq!(outcome.iteration, 2);
        assert!(phases.iter().all(|&phase| phase == Phase::Two));
    }

    #[test]
    fn test_redundant_equality_row_is_removed() {
        let c = array![1., 1.];
        let A_eq = array![[1., 1.], [2., 2.]];
        let b_eq = array![2., 4.];
        let problem = Problem::target(&c).eq(&A_eq, &b_eq).build().unwrap();

        let outcome = run(&problem, PivotRule::Dantzig, 100);
        assert_eq!(outcome.status, Status::Optimal);
        assert_eq!(outcome.iteration, 1);
        assert_eq!(outcome.x.sum(), 2.);
    }

    #[test]
    fn test_infeasible() {
        let c = array![1., 1.];
        let A_ub = array![[1., 1.]];
        let b_ub = array![1.];
        let A_eq = array![[1., 1.]];
        let b_eq = array![3.];
        let problem = Problem::target(&c)
            .ub(&A_ub, &b_ub)
            .eq(&A_eq, &b_eq)
            .build()
            .unwrap();

        let outcome = run(&problem, PivotRule::Dantzig, 100);
        assert_eq!(outcome.status, Status::Infeasible);
        assert_eq!(outcome.iteration, 1);
    }

    #[test]
    fn test_iteration_limit_in_phase_one() {
        let c = array![1., 1.];
        let A_ub = array![[-1., -1.]];
        let b_ub = array![-3.];
        let problem = Problem::target(&c).ub(&A_ub, &b_ub).build().unwrap();

        let outcome = run(&problem, PivotRule::Dantzig, 0);
        assert_eq!(outcome.status, Status::IterationLimit);
        assert_eq!(outcome.iteration, 0);

        let outcome = run(&problem, PivotRule::Dantzig, 10);
        assert_eq!(outcome.status, Status::Optimal);
        assert_eq!(outcome.iteration, 1);
    }

    fn dependent_rows() -> Problem<f64> {
        // The third row is twice the first minus the second.
        let c = array![0., 2., 1., 1.];
        let A_eq = array![[2., 3., 1., 3.], [3., 2., -1., 2.], [1., 4., 3., 4.]];
        let b_eq = array![24., 16., 32.];
        Problem::target(&c).eq(&A_eq, &b_eq).build().unwrap()
    }

    #[test]
    fn test_basic_artificial_is_pivoted_out() {
        let problem = dependent_rows();
        let mut pivots = Vec::new();
        let mut observer = |progress: &Progress<'_, f64>| {
            if let Some(pivot) = progress.pivot {
                pivots.push((progress.phase, pivot));
            }
        };
        let standard_form = StandardForm::build(&problem);
        let outcome =
            PhaseController::new(standard_form, PivotRule::Dantzig, 1e-12, 100, &mut observer).run();

        assert_eq!(outcome.status, Status::Optimal);
        assert_eq!(outcome.iteration, 3);
        assert_abs_diff_eq!(outcome.x, array![0., 0., 0., 8.], epsilon = 1e-9);
        assert_eq!(pivots.len(), outcome.iteration);
        // The second pivot replaces the artificial of row 1 by the first structural column.
        assert_eq!(pivots[1], (Phase::One, (1, 0)));
        assert_eq!(pivots[2].0, Phase::Two);
    }

    #[test]
    fn test_iteration_limit_during_artificial_cleanup() {
        let problem = dependent_rows();

        let outcome = run(&problem, PivotRule::Dantzig, 1);
        assert_eq!(outcome.status, Status::IterationLimit);
        assert_eq!(outcome.iteration, 1);

        let outcome = run(&problem, PivotRule::Dantzig, 2);
        assert_eq!(outcome.status, Status::IterationLimit);
        assert_eq!(outcome.iteration, 2);
    }
}
