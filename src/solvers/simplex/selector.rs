use crate::float::Float;

use super::tableau::Tableau;
use super::tolerance::Tolerance;

/// Rule used to choose the entering variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotRule {
    /// Enter the column with the most negative reduced cost. Usually needs the fewest iterations, but may cycle on
    /// degenerate problems.
    #[default]
    Dantzig,
    /// Enter the lowest indexed column with a negative reduced cost. Slower, but guaranteed to terminate.
    Bland,
}

/// Choose the entering column, or `None` if no reduced cost is negative and the current phase is optimal.
pub(crate) fn pivot_col<F: Float>(
    tableau: &Tableau<F>,
    rule: PivotRule,
    tol: &Tolerance<F>,
) -> Option<usize> {
    let mut candidates = tableau
        .objective_row()
        .into_iter()
        .enumerate()
        .filter(|(_, &cost)| tol.is_negative(cost));
    match rule {
        PivotRule::Bland => candidates.next().map(|(j, _)| j),
        // Strict comparison keeps the lowest index among equal costs.
        PivotRule::Dantzig => candidates
            .fold(None, |best: Option<(usize, F)>, (j, &cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((j, cost)),
            })
            .map(|(j, _)| j),
    }
}

/// Choose the leaving row for entering column `col` with the minimum ratio test, or `None` if the column is unbounded.
///
/// Ratios within tolerance of the minimum are tied; the tie goes to the row whose basic variable has the lowest index.
pub(crate) fn pivot_row<F: Float>(
    tableau: &Tableau<F>,
    col: usize,
    basis: &[usize],
    tol: &Tolerance<F>,
) -> Option<usize> {
    let ratios: Vec<(usize, F)> = (0..tableau.n_constraints())
        .filter(|&i| tol.is_positive(tableau.get(i, col)))
        .map(|i| (i, tableau.rhs(i) / tableau.get(i, col)))
        .collect();
    let min_ratio = ratios
        .iter()
        .map(|&(_, q)| q)
        .fold(None, |min: Option<F>, q| match min {
            Some(m) if m <= q => Some(m),
            _ => Some(q),
        })?;
    ratios
        .into_iter()
        .filter(|&(_, q)| tol.approx_eq(q, min_ratio))
        .min_by_key(|&(i, _)| basis[i])
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn tol() -> Tolerance<f64> {
        Tolerance::new(1e-12)
    }

    #[test]
    fn test_dantzig_picks_most_negative() {
        let tableau = Tableau::new(array![[1., 1., 1., 1., 1.], [-1., -3., 2., -3., 0.]], 1);
        assert_eq!(pivot_col(&tableau, PivotRule::Dantzig, &tol()), Some(1));
    }

    #[test]
    fn test_bland_picks_lowest_index() {
        let tableau = Tableau::new(array![[1., 1., 1., 1., 1.], [2., -1., -3., 0., 0.]], 1);
        assert_eq!(pivot_col(&tableau, PivotRule::Bland, &tol()), Some(1));
        assert_eq!(pivot_col(&tableau, PivotRule::Dantzig, &tol()), Some(2));
    }

    #[test]
    fn test_optimal_when_no_negative_cost() {
        let tableau = Tableau::new(array![[1., 1., 1.], [0., -1e-14, -5.]], 1);
        assert_eq!(pivot_col(&tableau, PivotRule::Dantzig, &tol()), None);
        assert_eq!(pivot_col(&tableau, PivotRule::Bland, &tol()), None);
    }

    #[test]
    fn test_minimum_ratio() {
        let tableau = Tableau::new(
            array![[-1., 2., 1., 0., 4.], [3., 1., 0., 1., 9.], [-1., -2., 0., 0., 0.]],
            2,
        );
        assert_eq!(pivot_row(&tableau, 1, &[2, 3], &tol()), Some(0));
        assert_eq!(pivot_row(&tableau, 0, &[2, 3], &tol()), Some(1));
    }

    #[test]
    fn test_ratio_tie_prefers_lowest_basic_variable() {
        let tableau = Tableau::new(array![[1., 1., 0., 2.], [2., 0., 1., 4.], [-1., 0., 0., 0.]], 2);
        assert_eq!(pivot_row(&tableau, 0, &[2, 1], &tol()), Some(1));
        assert_eq!(pivot_row(&tableau, 0, &[1, 2], &tol()), Some(0));
    }

    #[test]
    fn test_unbounded_column() {
        let tableau = Tableau::new(array![[-1., 1., 1.], [0., 1., 2.], [-1., 0., 0.]], 2);
        assert_eq!(pivot_row(&tableau, 0, &[1, 2], &tol()), None);
    }
}
