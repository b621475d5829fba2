use ndarray::NdFloat;
use num_traits::NumCast;

pub trait Float: NdFloat {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }

    /// Lossy conversion used when reporting values in error messages.
    fn to_f64_lossy(self) -> f64 {
        NumCast::from(self).unwrap_or(f64::NAN)
    }
}

impl Float for f64 {}
impl Float for f32 {}
