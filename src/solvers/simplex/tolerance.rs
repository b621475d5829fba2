use crate::float::Float;

/// Sign classification of tableau entries.
///
/// Every comparison against zero in the simplex engine goes through this type, so that pivot selection and
/// termination checks agree on what counts as negative, positive or zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tolerance<F> {
    tol: F,
}

impl<F: Float> Tolerance<F> {
    pub(crate) fn new(tol: F) -> Self {
        Tolerance { tol }
    }

    pub(crate) fn is_negative(&self, value: F) -> bool {
        value < -self.tol
    }

    pub(crate) fn is_positive(&self, value: F) -> bool {
        value > self.tol
    }

    pub(crate) fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.tol
    }

    pub(crate) fn approx_eq(&self, a: F, b: F) -> bool {
        self.is_zero(a - b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_exclusive() {
        let tol = Tolerance::new(1e-9);
        for value in [-1., -1e-8, -1e-10, 0., 1e-10, 1e-8, 1.] {
            let classes = [
                tol.is_negative(value),
                tol.is_zero(value),
                tol.is_positive(value),
            ];
            assert_eq!(classes.iter().filter(|&&c| c).count(), 1, "{value}");
        }
        assert!(tol.is_zero(-1e-10));
        assert!(tol.is_negative(-1e-8));
        assert!(tol.approx_eq(0.1 + 0.2, 0.3));
    }

    #[test]
    fn test_zero_tolerance_is_exact() {
        let tol = Tolerance::new(0.);
        assert!(tol.is_negative(-1e-300));
        assert!(tol.is_zero(0.));
        assert!(!tol.approx_eq(0.1 + 0.2, 0.3));
    }
}
