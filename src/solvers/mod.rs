//! Solvers for linear programs.
pub mod simplex;

pub use simplex::Simplex;
use ndarray::Array1;

use std::fmt::{self, Debug};

use crate::{error::LinearProgramError, linear_program::Problem};

/// Solver trait that any solver should implement to make experimentation with different solvers more easy.
pub trait Solver<F: Debug> {
    /// Solve a linear programming problem.
    ///
    /// Returns a [`LinearProgramError`] only for problems the solver cannot start on. A solve that runs but does not
    /// reach an optimum is still `Ok`, with the outcome given by [`OptimizeResult::status`].
    fn solve(&self, problem: &Problem<F>) -> Result<OptimizeResult<F>, LinearProgramError>;
}

/// How a solve attempt terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An optimal solution was found.
    Optimal,
    /// The maximum number of iterations was reached before the solver terminated.
    IterationLimit,
    /// The constraints admit no solution.
    Infeasible,
    /// The cost function can be decreased without limit.
    Unbounded,
}

impl Status {
    /// Numeric status code: 0 optimal, 1 iteration limit, 2 infeasible, 3 unbounded.
    pub fn code(self) -> u8 {
        match self {
            Status::Optimal => 0,
            Status::IterationLimit => 1,
            Status::Infeasible => 2,
            Status::Unbounded => 3,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Optimal => "Optimization terminated successfully.",
            Status::IterationLimit => "Iteration limit reached.",
            Status::Infeasible => "Optimization failed. Unable to find a feasible starting point.",
            Status::Unbounded => "Optimization failed. The problem appears to be unbounded.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult<F> {
    /// The solution vector
    x: Array1<F>,

    /// The cost function value
    fun: F,

    /// Slack of every inequality constraint, `b_ub - A_ub x`
    slack: Array1<F>,

    /// The number of iterations needed to find the solution
    iteration: usize,

    status: Status,
}

impl<F> OptimizeResult<F> {
    pub(crate) fn new(x: Array1<F>, fun: F, slack: Array1<F>, iteration: usize, status: Status) -> Self {
        Self {
            x,
            fun,
            slack,
            iteration,
            status,
        }
    }

    /// The number of iterations (pivots) performed, over all phases
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The cost function value
    pub fn fun(&self) -> &F {
        &self.fun
    }

    /// The solution vector
    pub fn x(&self) -> &Array1<F> {
        &self.x
    }

    /// The slack of every inequality constraint, in the order they were given
    pub fn slack(&self) -> &Array1<F> {
        &self.slack
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether an optimal solution was found. If not, [`x`](Self::x) is the last basic solution visited.
    pub fn success(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Human readable description of the status
    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}
