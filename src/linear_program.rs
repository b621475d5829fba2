#![allow(non_snake_case)]
//! Definition of a linear program.
//!
//! To get started, see the documentation of [`Problem`] on how to build a [`Problem`] through the builder pattern.
use crate::{error::LinearProgramError, float::Float};
use ndarray::prelude::*;

/// Lower and upper bound of a single decision variable. Either side may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<F> {
    pub lower: F,
    pub upper: F,
}

impl<F: Float> Bound<F> {
    pub fn new(lower: F, upper: F) -> Self {
        Bound { lower, upper }
    }

    /// A variable without any bound, `(-inf, inf)`.
    pub fn free() -> Self {
        Bound::new(F::neg_infinity(), F::infinity())
    }

    fn is_valid(&self) -> bool {
        !self.lower.is_nan()
            && !self.upper.is_nan()
            && self.lower <= self.upper
            && self.lower != F::infinity()
            && self.upper != F::neg_infinity()
    }
}

impl<F: Float> Default for Bound<F> {
    /// The non-negativity bound `[0, inf)`.
    fn default() -> Self {
        Bound::new(F::zero(), F::infinity())
    }
}

impl<F: Float> From<(F, F)> for Bound<F> {
    fn from((lower, upper): (F, F)) -> Self {
        Bound::new(lower, upper)
    }
}

/// A linear program in general form.
///
/// Variables throughout this crate use the following naming convention:
/// ```text
/// min_x c ' x
/// st    A_ub ' x <= b_ub
///       A_eq ' x == b_eq
///       lower <= x <= upper
/// ```
/// With `c` the cost vector or target function, inequality constraints given by `A_ub` and `b_ub`, equality
/// constraints given by `A_eq` and `b_eq`, and one [`Bound`] per variable.
///
/// A problem is always validated on construction, see [`ProblemBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<F> {
    c: Array1<F>,
    A_ub: Array2<F>,
    b_ub: Array1<F>,
    A_eq: Array2<F>,
    b_eq: Array1<F>,
    bounds: Vec<Bound<F>>,
}

impl<F: Float> Problem<F> {
    /// Build a problem using the builder pattern.
    ///
    /// Specify the cost vector `c` for which we will minimize `c'x`.
    /// Returns a [`ProblemBuilder`] object that can be further configured with constraints and bounds.
    pub fn target(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(c)
    }

    /// Return the cost vector
    pub fn c(&self) -> &Array1<F> {
        &self.c
    }

    /// Return the inequality constraint matrix
    pub fn A_ub(&self) -> &Array2<F> {
        &self.A_ub
    }

    /// Return the inequality constraint vector
    pub fn b_ub(&self) -> &Array1<F> {
        &self.b_ub
    }

    /// Return the equality constraint matrix
    pub fn A_eq(&self) -> &Array2<F> {
        &self.A_eq
    }

    /// Return the equality constraint vector
    pub fn b_eq(&self) -> &Array1<F> {
        &self.b_eq
    }

    /// Return the bounds, one per variable
    pub fn bounds(&self) -> &[Bound<F>] {
        &self.bounds
    }

    /// The number of decision variables
    pub fn n_vars(&self) -> usize {
        self.c.len()
    }

    /// The cost function value at `x`.
    pub(crate) fn target_value(&self, x: &Array1<F>) -> F {
        self.c.dot(x)
    }

    /// Slack of every inequality constraint at `x`, i.e. `b_ub - A_ub x`.
    pub(crate) fn slack(&self, x: &Array1<F>) -> Array1<F> {
        &self.b_ub - &self.A_ub.dot(x)
    }
}

/// Construct a problem from cost vector, constraints and bounds.
pub struct ProblemBuilder<'a, F> {
    c: &'a Array1<F>,
    ub: Option<(&'a Array2<F>, &'a Array1<F>)>,
    eq: Option<(&'a Array2<F>, &'a Array1<F>)>,
    bounds: Vec<Bound<F>>,
}

impl<'a, F: Float> ProblemBuilder<'a, F> {
    /// Start building a problem. Takes the cost vector `c` for which the goal is to minimize `c'x`.
    pub fn new(c: &'a Array1<F>) -> ProblemBuilder<'a, F> {
        ProblemBuilder {
            c,
            ub: None,
            eq: None,
            bounds: Vec::new(),
        }
    }

    /// Set inequality constraints for the problem, such that `A ' x <= b`.
    pub fn ub(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.ub = Some((A, b));
        self
    }

    /// Set equality constraints for the problem, such that `A ' x == b`.
    pub fn eq(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.eq = Some((A, b));
        self
    }

    /// Set one `(lower, upper)` bound per variable. Use `F::infinity()` / `F::neg_infinity()` for an absent side.
    ///
    /// Without bounds, or with an empty slice, every variable is non-negative.
    pub fn bounds<B: Into<Bound<F>> + Copy>(mut self, bounds: &[B]) -> Self {
        self.bounds = bounds.iter().map(|&b| b.into()).collect();
        self
    }

    /// Apply the same `(lower, upper)` bound to every variable.
    pub fn uniform_bounds(mut self, lower: F, upper: F) -> Self {
        self.bounds = vec![Bound::new(lower, upper); self.c.len()];
        self
    }

    /// Construct a linear program from the provided inputs, validating the input values.
    ///
    /// Returns [`LinearProgramError::IncompatibleInputDimensions`] if the constraint arrays do not conform to the cost
    /// vector, and [`LinearProgramError::InvalidBound`] if a lower bound exceeds its upper bound, or if a bound is
    /// infinite on the wrong side.
    pub fn build(self) -> Result<Problem<F>, LinearProgramError> {
        let n = self.c.len();
        if n == 0 {
            return Err(LinearProgramError::IncompatibleInputDimensions(
                "the cost vector is empty".to_string(),
            ));
        }
        let (A_ub, b_ub) = validate_constraints("A_ub", "b_ub", n, self.ub)?;
        let (A_eq, b_eq) = validate_constraints("A_eq", "b_eq", n, self.eq)?;

        let bounds = if self.bounds.is_empty() {
            vec![Bound::default(); n]
        } else if self.bounds.len() != n {
            return Err(LinearProgramError::IncompatibleInputDimensions(format!(
                "{} bounds were given for {} variables",
                self.bounds.len(),
                n
            )));
        } else {
            self.bounds
        };
        if let Some((index, bound)) = bounds.iter().enumerate().find(|(_, b)| !b.is_valid()) {
            return Err(LinearProgramError::InvalidBound {
                index,
                lower: bound.lower.to_f64_lossy(),
                upper: bound.upper.to_f64_lossy(),
            });
        }

        Ok(Problem {
            c: self.c.to_owned(),
            A_ub,
            b_ub,
            A_eq,
            b_eq,
            bounds,
        })
    }
}

fn validate_constraints<F: Float>(
    A_name: &str,
    b_name: &str,
    n: usize,
    constraints: Option<(&Array2<F>, &Array1<F>)>,
) -> Result<(Array2<F>, Array1<F>), LinearProgramError> {
    let (A, b) = match constraints {
        Some((A, b)) => (A, b),
        None => return Ok((Array2::zeros((0, n)), Array1::zeros(0))),
    };
    let (nrows, ncols) = A.dim();
    if nrows != b.len() {
        return Err(LinearProgramError::IncompatibleInputDimensions(format!(
            "{A_name} has {nrows} rows but {b_name} has {} entries",
            b.len()
        )));
    }
    if nrows == 0 {
        return Ok((Array2::zeros((0, n)), Array1::zeros(0)));
    }
    if ncols != n {
        return Err(LinearProgramError::IncompatibleInputDimensions(format!(
            "{A_name} has {ncols} columns but c has {n} entries"
        )));
    }
    Ok((A.to_owned(), b.to_owned()))
}
