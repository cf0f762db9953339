use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[col][row]
    }
}

impl<T: PartialEq<U>, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: ApproxEq, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }
}

/// Transforms a column vector.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::ZERO;
        for col in 0..C {
            out += self.column(col) * v[col];
        }
        out
    }
}

/// Matrix product. `a * b` applies `b` first, then `a`.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        Matrix::from_columns(rhs.0.map(|col| self * Vector::from(col)))
    }
}

impl<T: Number, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

macro_rules! with_matrix {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {$(
        impl<T: Number, const R: usize, const C: usize> $op for Matrix<T, R, C> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Matrix::from_fn(|row, col| self[(row, col)] $sym rhs[(row, col)])
            }
        }

        impl<T: Number, const R: usize, const C: usize> $assign for Matrix<T, R, C> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    )+};
}

macro_rules! with_scalar {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {$(
        impl<T: Number, const R: usize, const C: usize> $op<T> for Matrix<T, R, C> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|e| e $sym rhs)
            }
        }

        impl<T: Number, const R: usize, const C: usize> $assign<T> for Matrix<T, R, C> {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    )+};
}

with_matrix! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
}

with_scalar! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

// `impl<T> Mul<Matrix<T, R, C>> for T` is rejected by the orphan rules.
macro_rules! scale_by_lhs {
    ($($ty:ty),+) => {$(
        impl<const R: usize, const C: usize> Mul<Matrix<$ty, R, C>> for $ty {
            type Output = Matrix<$ty, R, C>;

            fn mul(self, m: Matrix<$ty, R, C>) -> Matrix<$ty, R, C> {
                m * self
            }
        }
    )+};
}
scale_by_lhs!(f32, f64);
