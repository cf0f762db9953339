use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for [T; N] {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for Vector<T, N> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }
}

impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

// Each operator is implemented element-wise between two vectors, and between a vector and a
// scalar, which applies the scalar to every element. Having both rules out a blanket
// `Op<U> for Vector<T, N>`.
macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {$(
        impl<T: Copy + $op<Output = T>, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_fn(|i| self[i] $sym rhs[i])
            }
        }

        impl<T: Copy + $op<Output = T>, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|e| e $sym rhs)
            }
        }

        impl<T: Copy + $op<Output = T>, const N: usize> $assign for Vector<T, N> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<T: Copy + $op<Output = T>, const N: usize> $assign<T> for Vector<T, N> {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    )+};
}

elementwise! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

// `impl<T> Mul<Vector<T, N>> for T` is rejected by the orphan rules.
macro_rules! scale_by_lhs {
    ($($ty:ty),+) => {$(
        impl<const N: usize> Mul<Vector<$ty, N>> for $ty {
            type Output = Vector<$ty, N>;

            fn mul(self, v: Vector<$ty, N>) -> Vector<$ty, N> {
                v * self
            }
        }
    )+};
}
scale_by_lhs!(f32, f64);
