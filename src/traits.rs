use std::{fmt, ops};

/// Additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// Element types that vectors, matrices and quaternions can do arithmetic with.
///
/// This is implemented automatically for every signed [`Copy`] type with a [`Zero`] and [`One`]
/// and the four arithmetic operators, which covers the signed integers, [`f32`] and [`f64`].
pub trait Number:
    Zero
    + One
    + Copy
    + PartialEq
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
{
}

impl<T> Number for T where
    T: Zero
        + One
        + Copy
        + PartialEq
        + ops::Neg<Output = T>
        + ops::Add<Output = T>
        + ops::Sub<Output = T>
        + ops::Mul<Output = T>
        + ops::Div<Output = T>
{
}

/// Real numbers, as needed by rotations, normalization and inversion.
///
/// Implemented for [`f32`] and [`f64`] by forwarding to their inherent methods. Integer element
/// types can still be stored in vectors and matrices, but only support the operations that don't
/// require this trait.
pub trait Float: Number + PartialOrd + fmt::Debug {
    /// Tolerance used by the library to detect degenerate inputs.
    ///
    /// Operations that would divide by a value smaller than this (normalizing a zero-length
    /// vector, inverting a singular matrix, extracting the axis of a zero rotation) take a
    /// well-defined fallback path instead. It is also the tolerance of
    /// [`ApproxEq::approx_eq`][crate::approx::ApproxEq::approx_eq]. The value is `4.37114e-07`
    /// for both [`f32`] and [`f64`].
    const TOLERANCE: Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sin(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Restricts `self` to `[min, max]`.
    ///
    /// Unlike [`f32::clamp`], this does not panic when `min > max` and passes `NaN` through.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Converts an [`f64`] literal to `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;

    fn half() -> Self {
        Self::ONE / Self::two()
    }

    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}

/// Per-element conversion between numeric types, with the semantics of an `as` cast.
///
/// Floats are truncated towards zero (saturating at the bounds of the target type) when
/// converted to integers, and [`f64`] values are rounded to the nearest [`f32`].
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! identities {
    ($zero:literal, $one:literal: $($ty:ty),+) => {$(
        impl Zero for $ty {
            const ZERO: Self = $zero;
        }

        impl One for $ty {
            const ONE: Self = $one;
        }
    )+};
}
identities!(0, 1: u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
identities!(0.0, 1.0: f32, f64);

macro_rules! casts {
    (@to $from:ty: $($to:ty),+) => {$(
        impl Cast<$to> for $from {
            #[inline]
            fn cast(self) -> $to {
                self as $to
            }
        }
    )+};
    ($($from:ty),+) => {$(
        casts!(@to $from: u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
    )+};
}
casts!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

macro_rules! floats {
    ($($ty:ident),+) => {$(
        impl Float for $ty {
            const TOLERANCE: Self = 4.37114e-07;

            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $ty::sin_cos(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $ty::sin(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $ty::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $ty::acos(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $ty::atan2(self, other)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    )+};
}
floats!(f32, f64);
