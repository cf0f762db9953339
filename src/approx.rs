//! Approximate equality.
//!
//! Floating-point results of rotations, inversions and interpolations are rarely bit-identical
//! to the mathematically expected value. All types in this crate implement [`ApproxEq`], which
//! compares them element-wise within an absolute tolerance, and [`assert_approx_eq!`] /
//! [`assert_approx_ne!`] build test assertions on top of it.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location, thread};

use crate::Float;

/// Types that can be compared for *approximate equality*.
///
/// Compound types are approximately equal when every pair of corresponding elements is. This
/// means that a [`Quat`] and its negation are *not* approximately equal, even though they
/// represent the same rotation. Use [`Quat::orientation_eq`] to compare rotations.
///
/// [`Quat`]: crate::Quat
/// [`Quat::orientation_eq`]: crate::Quat::orientation_eq
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type of the tolerance, [`f32`] or [`f64`].
    type Tolerance: Float;

    /// Returns whether no element of `self` differs from the one in `other` by more than
    /// `tolerance`.
    ///
    /// `NaN` is never equal to anything. Infinities are only equal to an infinity of the same
    /// sign.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` with the library's tolerance, [`Float::TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::{*, approx::ApproxEq};
    /// let a = vec3(1.0, 2.0, 3.0);
    /// assert!(a.approx_eq(&vec3(1.0, 2.0, 3.0000001)));
    /// assert!(!a.approx_eq(&vec3(1.0, 2.0, 3.00001)));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Tolerance::TOLERANCE)
    }
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the guard is dropped, at the end of the statement. Until then,
/// [`Asserter::abs`] can replace the default tolerance ([`Float::TOLERANCE`]).
pub struct Asserter<'a, T: ApproxEq + fmt::Debug> {
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    tolerance: T::Tolerance,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
}

impl<'a, T: ApproxEq + fmt::Debug> Asserter<'a, T> {
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            tolerance: T::Tolerance::TOLERANCE,
            // `#[track_caller]` has no effect on `Drop::drop`.
            location: Location::caller(),
            msg,
        }
    }

    /// Compares the values with the absolute tolerance `tolerance` instead of the default one.
    ///
    /// Elements are considered equal when they differ by at most `tolerance`.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.tolerance = tolerance;
        self
    }
}

impl<'a, T: ApproxEq + fmt::Debug> Drop for Asserter<'a, T> {
    fn drop(&mut self) {
        // Don't turn an unrelated panic into an abort.
        if thread::panicking() {
            return;
        }

        if self.left.abs_diff_eq(self.right, self.tolerance) == self.expect_equal {
            return;
        }

        let op = if self.expect_equal { "==" } else { "!=" };
        let (left, right, tolerance, location) =
            (self.left, self.right, self.tolerance, self.location);
        match self.msg {
            Some(msg) => panic!(
                "assertion `left {op} right` failed at {location} (tolerance {tolerance:?}): {msg}\n  left: {left:?}\n right: {right:?}"
            ),
            None => panic!(
                "assertion `left {op} right` failed at {location} (tolerance {tolerance:?})\n  left: {left:?}\n right: {right:?}"
            ),
        }
    }
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] whose [`abs`][Asserter::abs] method
/// sets the tolerance. Without it, [`Float::TOLERANCE`] is used.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use rigid_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// let q = Quat::from_euler_321(0.0, 0.0, 1.0);
/// assert_approx_eq!(q, Quat::new(0.8775826, 0.0, 0.0, 0.4794255)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($args:tt)+) => {
        $crate::__approx_assert!(true, $($args)+)
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use rigid_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
///
/// // Same rotation, but not the same quaternion.
/// let q = Quatf::from_rotation_z(1.0);
/// assert_approx_ne!(q, -q);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($args:tt)+) => {
        $crate::__approx_assert!(false, $($args)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_assert {
    ($equal:literal, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $equal, ::core::option::Option::None)
    };
    ($equal:literal, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $equal,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
