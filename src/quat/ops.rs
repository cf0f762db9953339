use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, traits::Number, Float, Quat, Vec3, Vec4};

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Component-wise comparison. `q` and `-q` are *not* considered equal; use
/// [`Quat::orientation_eq`] to compare rotations.
impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }
}

/// Hamilton product.
///
/// For unit quaternions, `a * b` is the rotation that first rotates by `b`, then by `a`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [w1, x1, y1, z1] = self.into_array();
        let [w2, x2, y2, z2] = rhs.into_array();

        Quat::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Float> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Rotates the `x`, `y`, `z` part of a vector. `w` is passed through unchanged.
impl<T: Float> Mul<Vec4<T>> for Quat<T> {
    type Output = Vec4<T>;

    fn mul(self, rhs: Vec4<T>) -> Self::Output {
        self.rotate(rhs.truncate()).extend(rhs.w)
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Quaternion-scalar operations apply to all four components.
macro_rules! scalar_ops {
    ($($trait:ident::$f:ident, $assign:ident::$assign_f:ident, $op:tt;)+) => {
        $(
            impl<T: Number> $trait<T> for Quat<T> {
                type Output = Self;

                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $op rhs)
                }
            }

            impl<T: Number> $assign<T> for Quat<T> {
                fn $assign_f(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

scalar_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! scalar_lhs {
    ($($ty:ty),+) => {
        $(
            impl Add<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn add(self, rhs: Quat<$ty>) -> Self::Output {
                    rhs + self
                }
            }

            /// Subtracts each component of the quaternion from the scalar.
            impl Sub<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn sub(self, rhs: Quat<$ty>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl Mul<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn mul(self, rhs: Quat<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64);
