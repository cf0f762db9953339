use super::ApproxEq;

macro_rules! floats {
    ($($ty:ty),+) => {$(
        impl ApproxEq for $ty {
            type Tolerance = $ty;

            fn abs_diff_eq(&self, other: &$ty, tolerance: $ty) -> bool {
                if self.is_finite() && other.is_finite() {
                    (self - other).abs() <= tolerance
                } else {
                    // inf == inf, but NaN != NaN
                    self == other
                }
            }
        }
    )+};
}
floats!(f32, f64);

/// Slices of different length are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], tolerance: T::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(l, r)| l.abs_diff_eq(r, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: T::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], tolerance)
    }
}
