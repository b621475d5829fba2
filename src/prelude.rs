#[doc(no_inline)]
pub use crate::error::LinearProgramError;
#[doc(no_inline)]
pub use crate::linear_program::{Bound, Problem};
#[doc(no_inline)]
pub use crate::observer::{NoObserver, Observer, Phase, Progress, TerseObserver, VerboseObserver};
#[doc(no_inline)]
pub use crate::solvers::simplex::PivotRule;
#[doc(no_inline)]
pub use crate::solvers::{OptimizeResult, Simplex, Solver, Status};
