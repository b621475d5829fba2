//! A pure-Rust two-phase Simplex solver for linear programs with bounds, equality and inequality constraints.
//!
//! # Linear programs
//!
//! A linear program is a mathematical optimization problem defined as:
//!
//! ```text
//!    min_x c'x
//!    st A_eq'x == b_eq
//!       A_ub'x <= b_ub
//!       lower <= x <= upper
//! ```
//!
//! Without explicit bounds every variable is non-negative.
//!
//! # Example
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::array;
//!
//! use lp_simplex::Problem;
//! use lp_simplex::solvers::{Simplex, Solver};
//!
//!
//! let A_ub = array![[-3f64, 1.], [1., 2.]];
//! let b_ub = array![6., 4.];
//! let A_eq = array![[1., 1.]];
//! let b_eq = array![1.];
//! let c = array![-1., 4.];
//!
//! let problem = Problem::target(&c)
//!     // If you define neither equality nor inequality constraints,
//!     // only the bounds restrict the solution.
//!     .ub(&A_ub, &b_ub)
//!     .eq(&A_eq, &b_eq)
//!     .build()
//!     .unwrap();
//!
//!     // These are the default values you can overwrite.
//!     // You may omit any option for which the default is good enough for you
//! let solver = Simplex::custom()
//!     .tol(1e-12)
//!     .disp(false)
//!     .bland(false)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//!
//! let res = solver.solve(&problem).unwrap();
//!
//! assert_abs_diff_eq!(res.x(), &array![1., 0.], epsilon = 1e-12);
//! ```
//!
//! Problems held as nested `Vec`s can be solved in one call with [`linprog::linprog`]. Progress inside the
//! iterations can be followed with an [`Observer`](observer::Observer), see [`observer`].
//!
//! # Logging
//!
//! The solver logs through the [`log`] facade: problem dimensions and phase results at `debug` level, every pivot at
//! `trace` level. No logger is installed by this crate.

pub mod display;
pub mod error;
pub(crate) mod float;
pub mod linear_program;
pub mod linprog;
pub mod matrix;
pub mod observer;
pub mod prelude;
pub mod solvers;

pub use linear_program::{Bound, Problem, ProblemBuilder};
pub use solvers::{OptimizeResult, Status};
