//! Progress reporting from inside the simplex iterations.
//!
//! An [`Observer`] is handed a read-only [`Progress`] snapshot at the start of each phase, after every pivot, and once
//! more when the phase completes. Snapshots borrow the solver's working state, so an observer that wants to keep one
//! must copy it. Observers run on the solving thread: a slow observer slows down the solve.
//!
//! Any `FnMut(&Progress<F>)` closure is an observer:
//! ```rust
//! use lp_simplex::prelude::*;
//! use ndarray::array;
//!
//! let c = array![-1., 4.];
//! let A_ub = array![[-3., 1.], [1., 2.]];
//! let b_ub = array![6., 4.];
//! let problem = Problem::target(&c).ub(&A_ub, &b_ub).build().unwrap();
//!
//! let mut pivots = Vec::new();
//! let mut observer = |progress: &Progress<'_, f64>| {
//!     if let Some(pivot) = progress.pivot {
//!         pivots.push(pivot);
//!     }
//! };
//! Simplex::default().solve_with_observer(&problem, &mut observer).unwrap();
//! assert_eq!(pivots, vec![(1, 0)]);
//! ```
use std::fmt;
use std::io::{self, Write};

use log::warn;
use ndarray::{ArrayView1, ArrayView2};

use crate::display::{format_array, format_index_array, format_matrix};
use crate::float::Float;

/// The two phases of the simplex method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Search for a basic feasible solution by driving the artificial variables to zero.
    One,
    /// Optimize the cost function starting from a basic feasible solution.
    Two,
}

impl Phase {
    pub fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Snapshot of the solver state.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a, F> {
    /// Current basic solution, in the variables of the original problem.
    pub x: ArrayView1<'a, F>,
    /// The complete tableau, objective row(s) at the bottom and right hand side in the last column.
    pub tableau: ArrayView2<'a, F>,
    /// Number of pivots performed so far, over both phases.
    pub iteration: usize,
    /// The `(row, column)` of the pivot that produced this state, if any.
    pub pivot: Option<(usize, usize)>,
    pub phase: Phase,
    /// Column index of the basic variable of every constraint row.
    pub basis: &'a [usize],
    /// Set on the final report of a phase.
    pub complete: bool,
}

impl<'a, F: Float> Progress<'a, F> {
    /// Value of the objective currently driving the pivots: the infeasibility in phase one, the cost in phase two.
    pub fn objective(&self) -> F {
        let (rows, cols) = self.tableau.dim();
        -self.tableau[[rows - 1, cols - 1]]
    }
}

pub trait Observer<F> {
    fn report(&mut self, progress: &Progress<'_, F>);
}

/// Observer that ignores every report. Used when the caller does not supply one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<F> Observer<F> for NoObserver {
    #[inline]
    fn report(&mut self, _progress: &Progress<'_, F>) {}
}

impl<F, T> Observer<F> for T
where
    T: FnMut(&Progress<'_, F>),
{
    fn report(&mut self, progress: &Progress<'_, F>) {
        self(progress)
    }
}

/// Prints the full tableau, basis and current solution at every report.
pub struct VerboseObserver<W> {
    out: W,
}

impl VerboseObserver<io::Stdout> {
    pub fn stdout() -> Self {
        VerboseObserver { out: io::stdout() }
    }
}

impl<W: Write> VerboseObserver<W> {
    pub fn new(out: W) -> Self {
        VerboseObserver { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_progress<F: Float>(&mut self, progress: &Progress<'_, F>) -> io::Result<()> {
        let out = &mut self.out;
        if progress.complete {
            writeln!(out, "--------- Iteration Complete - Phase {} -------", progress.phase)?;
        } else if progress.pivot.is_none() {
            writeln!(out, "--------- Initial Tableau - Phase {} ----------", progress.phase)?;
        } else {
            writeln!(
                out,
                "--------- Iteration {} - Phase {} --------",
                progress.iteration, progress.phase
            )?;
        }
        writeln!(out, "Tableau:")?;
        write!(out, "{}", format_matrix(progress.tableau))?;
        if let Some((row, col)) = progress.pivot {
            writeln!(out, "Pivot Element: T[{row}, {col}]")?;
        }
        writeln!(out, "Basic Variables:")?;
        write!(out, "{}", format_index_array(progress.basis))?;
        writeln!(out, "Current Solution:")?;
        writeln!(out, "x = ")?;
        write!(out, "{}", format_array(progress.x))?;
        writeln!(out, "Current Objective Value:")?;
        writeln!(out, "f = {:.6}", progress.objective())?;
        writeln!(out)
    }
}

impl<F: Float, W: Write> Observer<F> for VerboseObserver<W> {
    fn report(&mut self, progress: &Progress<'_, F>) {
        // Progress output is best effort and never interrupts a solve.
        if let Err(err) = self.write_progress(progress) {
            warn!("failed to write simplex progress: {}", err);
        }
    }
}

/// Prints one line per report: phase, iteration, objective and current solution.
pub struct TerseObserver<W> {
    out: W,
}

impl TerseObserver<io::Stdout> {
    pub fn stdout() -> Self {
        TerseObserver { out: io::stdout() }
    }
}

impl<W: Write> TerseObserver<W> {
    pub fn new(out: W) -> Self {
        TerseObserver { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: Float, W: Write> Observer<F> for TerseObserver<W> {
    fn report(&mut self, progress: &Progress<'_, F>) {
        let marker = if progress.complete { "*" } else { " " };
        let written = write!(
            self.out,
            "{marker}phase {} nit {:>4} f = {:>14.6} x = {}",
            progress.phase,
            progress.iteration,
            progress.objective(),
            format_array(progress.x)
        );
        if let Err(err) = written {
            warn!("failed to write simplex progress: {}", err);
        }
    }
}
