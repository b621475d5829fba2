//! Validation of nested, row-major matrix input.
//!
//! The solver itself works on [`ndarray`] arrays, which are rectangular by construction. Callers that hold their
//! coefficients as `Vec<Vec<_>>` go through [`check_rectangle`] / [`rows_to_array`] first.
use ndarray::Array2;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Invalid input, must be two-dimensional")]
    NotTwoDimensional,
    #[error("Invalid input, all rows must have the same length")]
    RaggedRows,
}

/// Verify that `a` is a proper two-dimensional matrix and return its `(rows, cols)`.
///
/// Absent input is valid and has shape `(0, 0)`. An empty matrix, or one whose first row holds fewer than two
/// entries, is rejected as not two-dimensional: a list of singletons is a flat list in disguise.
///
/// ```rust
/// use lp_simplex::matrix::{check_rectangle, ShapeError};
///
/// let a = vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]];
/// assert_eq!(check_rectangle(Some(&a)), Ok((3, 2)));
///
/// let ragged = vec![vec![1., 2.], vec![3., 4., 10.]];
/// assert_eq!(check_rectangle(Some(&ragged)), Err(ShapeError::RaggedRows));
/// ```
pub fn check_rectangle<T>(a: Option<&[Vec<T>]>) -> Result<(usize, usize), ShapeError> {
    let a = match a {
        Some(a) => a,
        None => return Ok((0, 0)),
    };
    let cols = match a.first() {
        Some(first) if first.len() >= 2 => first.len(),
        _ => return Err(ShapeError::NotTwoDimensional),
    };
    if a.iter().any(|row| row.len() != cols) {
        return Err(ShapeError::RaggedRows);
    }
    Ok((a.len(), cols))
}

/// Validate nested rows with [`check_rectangle`] and copy them into an [`Array2`].
pub fn rows_to_array<T: Clone>(rows: &[Vec<T>]) -> Result<Array2<T>, ShapeError> {
    let (nrows, ncols) = check_rectangle(Some(rows))?;
    let flat: Vec<T> = rows.iter().flatten().cloned().collect();
    Array2::from_shape_vec((nrows, ncols), flat).or(Err(ShapeError::RaggedRows))
}
