//! Fixed-width rendering of tableaus and vectors for terminal inspection.
//!
//! Used by the printing observers in [`crate::observer`]; nothing here influences a solve.
use std::fmt::Write;

use ndarray::{ArrayView1, ArrayView2};

use crate::float::Float;

const WIDTH: usize = 10;
const PRECISION: usize = 4;

fn push_value<F: Float>(out: &mut String, value: F) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{:>width$.prec$}", value, width = WIDTH, prec = PRECISION);
}

/// Render a matrix, one row per line, every entry right aligned in a column of equal width.
pub fn format_matrix<F: Float>(a: ArrayView2<F>) -> String {
    let mut out = String::new();
    for row in a.rows() {
        for &value in row {
            push_value(&mut out, value);
        }
        out.push('\n');
    }
    out
}

/// Render a vector on a single line.
pub fn format_array<F: Float>(a: ArrayView1<F>) -> String {
    let mut out = String::new();
    for &value in a {
        push_value(&mut out, value);
    }
    out.push('\n');
    out
}

/// Render a list of column indices, e.g. a basis, on a single line.
pub fn format_index_array(a: &[usize]) -> String {
    let mut out = String::new();
    for value in a {
        let _ = write!(out, "{:>width$}", value, width = WIDTH);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_matrix() {
        let a = array![[-1., 2.], [3., 0.5]];
        let rendered = format_matrix(a.view());
        assert_eq!(
            rendered,
            "   -1.0000    2.0000\n    3.0000    0.5000\n"
        );
    }

    #[test]
    fn test_format_matrix_columns_align() {
        let a = array![
            [-1., 2., 3., 4., 5., 6., 7., 8., 9.],
            [-12., 2., 3., 4., 5., 6., 7., 8., 9.]
        ];
        let rendered = format_matrix(a.view());
        let widths: Vec<usize> = rendered.lines().map(str::len).collect();
        assert_eq!(widths, vec![9 * WIDTH, 9 * WIDTH]);
    }

    #[test]
    fn test_format_array_and_indices() {
        assert_eq!(format_array(array![1.5f64, -2.].view()), "    1.5000   -2.0000\n");
        assert_eq!(format_index_array(&[4, 12]), "         4        12\n");
        assert_eq!(format_index_array(&[]), "\n");
    }
}
