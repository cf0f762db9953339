use std::{array, fmt};

use crate::{
    error::{check_len, Error},
    traits::{Cast, Float, Number, One, Zero},
};

mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

/// A column vector of `N` elements of type `T`.
///
/// Positions and directions are [`Vec3`]s. [`Vec4`] is what a [`Mat4`][crate::Mat4] multiplies,
/// and is also used for colors and homogeneous points.
///
/// # Construction
///
/// - [`vec2`], [`vec3`] and [`vec4`] take the elements as arguments.
/// - [`Vector::splat`] repeats one value, [`Vector::from_fn`] computes each element from its
///   index.
/// - [`From<[T; N]>`][From] converts an array, [`TryFrom<&[T]>`][TryFrom] copies a slice of the
///   right length.
/// - [`Vector::ZERO`], and the unit vectors `X`, `Y`, `Z` and `W` (as far as the dimension
///   allows).
///
/// # Element Access
///
/// Elements are fields named `x`, `y`, `z` and `w`, with `r`, `g`, `b` and `a` as aliases. They
/// can also be indexed like an array. The element buffer is exposed in `x, y, z, w` order by
/// [`Vector::as_slice`] and friends, and through [`bytemuck::Pod`] when `T` allows it.
///
/// ```
/// # use rigid_linalg::*;
/// let mut color = vec4(0.2, 0.4, 0.6, 1.0);
/// color.a = 0.5;
/// assert_eq!(color[3], 0.5);
/// assert_eq!(color.w, 0.5);
/// ```
///
/// # Equality
///
/// [`PartialEq`] compares elements exactly. Computed results should be compared with
/// [`ApproxEq`][crate::approx::ApproxEq] instead.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The zero vector.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! unit_vectors {
    ($($n:literal { $($axis:ident = [$($elem:ident),+]),+ })+) => {$(
        impl<T: Zero + One> Vector<T, $n> {
            $(
                #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                pub const $axis: Self = Self([$(T::$elem),+]);
            )+
        }
    )+};
}

unit_vectors! {
    2 {
        X = [ONE, ZERO],
        Y = [ZERO, ONE]
    }
    3 {
        X = [ONE, ZERO, ZERO],
        Y = [ZERO, ONE, ZERO],
        Z = [ZERO, ZERO, ONE]
    }
    4 {
        X = [ONE, ZERO, ZERO, ZERO],
        Y = [ZERO, ONE, ZERO, ZERO],
        Z = [ZERO, ZERO, ONE, ZERO],
        W = [ZERO, ZERO, ZERO, ONE]
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(Vec3f::splat(0.5), vec3(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Creates a vector by calling `f` with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let v: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(v, vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    /// Returns a vector with `f` applied to each element.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Converts each element to `U` as if by an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(vec3(0.9f64, -7.5, 2.0).cast::<i32>(), vec3(0, -7, 2));
    ///
    /// let v: Vec3d = vec3(1, 2, 3).cast();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(T::cast)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns the elements as a slice, in `x, y, z, w` order.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(vec3(2, -1, 4).dot(vec3(3, 5, 1)), 5);
    /// assert_eq!(Vec3f::X.dot(Vec3f::Z), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum = sum + self[i] * other[i];
        }
        sum
    }

    /// Returns the squared length of this vector, `self.dot(self)`.
    pub fn length2(self) -> T {
        self.dot(self)
    }

    /// Interpolates linearly between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let a = vec3(0.0, 10.0, -4.0);
    /// let b = vec3(2.0, 20.0, 4.0);
    /// assert_eq!(a.lerp(b, 0.25), vec3(0.5, 12.5, -2.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the Euclidean length of this vector.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(self) -> T {
        self.length2().sqrt()
    }

    /// Scales this vector to unit length.
    ///
    /// A vector shorter than [`Float::TOLERANCE`] has no meaningful direction and is returned
    /// unchanged. [`Vector::try_normalize`] reports that case as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(vec3(0.0, -3.0, 0.0).normalize(), vec3(0.0, -1.0, 0.0));
    /// assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(|_| {
            log::trace!("normalizing zero-length vector {self:?}, leaving it unchanged");
            self
        })
    }

    /// Scales this vector to unit length, or returns [`Error::ZeroLength`] if it is shorter than
    /// [`Float::TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(vec2(0.0, 0.5).try_normalize(), Ok(vec2(0.0, 1.0)));
    /// assert_eq!(Vec2d::ZERO.try_normalize(), Err(Error::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> Result<Self, Error> {
        let length = self.length();
        if length < T::TOLERANCE {
            return Err(Error::ZeroLength);
        }
        Ok(self / length)
    }
}

impl<T> Vector<T, 2> {
    /// Appends `z`, yielding a [`Vec3`].
    pub fn extend(self, z: T) -> Vec3<T> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

impl<T> Vector<T, 3> {
    /// Appends `w`, yielding a [`Vec4`].
    ///
    /// Points are extended with `w = 1` so that a [`Mat4`][crate::Mat4] translates them,
    /// directions with `w = 0`.
    pub fn extend(self, w: T) -> Vec4<T> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }

    /// Drops the `z` element, yielding a [`Vec2`].
    pub fn truncate(self) -> Vec2<T> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Returns the cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule, so swapping
    /// the operands negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    /// assert_eq!(Vec3f::Z.cross(Vec3f::Y), -Vec3f::X);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` element, yielding a [`Vec3`].
    pub fn truncate(self) -> Vec3<T> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Copies the elements out of a slice of exactly `N` elements.
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self, Error> {
        check_len(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Writes `elems` as `(a, b, c)`, formatting each one with `elem`.
pub(crate) fn fmt_tuple<T>(
    f: &mut fmt::Formatter<'_>,
    elems: &[T],
    elem: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, e) in elems.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        elem(e, f)?;
    }
    f.write_str(")")
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_tuple(f, &self.0, fmt::Debug::fmt)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_tuple(f, &self.0, fmt::Display::fmt)
    }
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
