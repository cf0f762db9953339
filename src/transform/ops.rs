use std::ops::{Mul, MulAssign};

use crate::{approx::ApproxEq, traits::Float, Transform};

impl<T, U> PartialEq<Transform<U>> for Transform<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Transform<U>) -> bool {
        self.position == other.position && self.orientation == other.orientation
    }
}

impl<T: Eq> Eq for Transform<T> {}

impl<T: ApproxEq> ApproxEq for Transform<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.position.abs_diff_eq(&other.position, tolerance)
            && self.orientation.abs_diff_eq(&other.orientation, tolerance)
    }
}

/// Composition: `a * b` applies `b` first, then `a`.
impl<T: Float> Mul for Transform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Transform {
            position: self.orientation.rotate(rhs.position) + self.position,
            orientation: self.orientation * rhs.orientation,
        }
    }
}

impl<T: Float> MulAssign for Transform<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
