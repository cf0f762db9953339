use std::fmt;

use crate::{
    error::{check_len, Error},
    traits::{Cast, Float, Number, One, Zero},
    vec3, vec4, Mat3, Mat4, Matrix, Vec3, Vector,
};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real number and 3 imaginary numbers.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// The components are accessible as the fields `w` (the real part) and `x`, `y`, `z` (the `i`,
/// `j`, `k` imaginary parts), and are stored in `w, x, y, z` order. That is also the order used
/// by [`Quat::new`], [`Quat::as_slice`] and the [`bytemuck::Pod`] representation.
///
/// # Rotations
///
/// Rotation quaternions can be created from an axis and an angle ([`Quat::from_axis_angle`]),
/// from Euler angles ([`Quat::from_euler_321`]), or from a rotation matrix ([`Quat::from_mat3`]).
/// Multiplying two quaternions (the Hamilton product) composes their rotations, and multiplying a
/// quaternion with a [`Vec3`] rotates the vector.
///
/// Every rotation is represented by two unit quaternions, `q` and `-q`. [`PartialEq`] and
/// [`ApproxEq`] compare the components and will consider them different;
/// [`Quat::orientation_eq`] compares the rotations they represent instead.
///
/// All rotation operations assume a unit quaternion. Composing or interpolating quaternions many
/// times can make their length drift away from 1, so they should be [normalized] from time to
/// time.
///
/// [`ApproxEq`]: crate::approx::ApproxEq
/// [normalized]: Quat::normalize
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    ///
    /// No normalization is performed.
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(w, x, y, z),
        }
    }

    /// Creates a quaternion from its scalar (real) and vector (imaginary) parts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quat::from_scalar_vector(1.0, vec3(2.0, 3.0, 4.0));
    /// assert_eq!(q, Quat::new(1.0, 2.0, 3.0, 4.0));
    /// assert_eq!(q.vector(), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn from_scalar_vector(scalar: T, vector: Vec3<T>) -> Self {
        let [x, y, z] = vector.into_array();
        Self::new(scalar, x, y, z)
    }

    /// Returns the scalar (real) part `w`.
    #[inline]
    pub fn scalar(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    /// Returns the vector (imaginary) part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vec3<T>
    where
        T: Copy,
    {
        vec3(self.vec[1], self.vec[2], self.vec[3])
    }

    /// Returns a reference to the components, in `w, x, y, z` order.
    #[inline]
    pub const fn as_array(&self) -> &[T; 4] {
        self.vec.as_array()
    }

    /// Returns the components as a slice, in `w, x, y, z` order.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }

    /// Returns the components as a mutable slice, in `w, x, y, z` order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vec.as_mut_slice()
    }

    /// Converts this quaternion into an array of its components, in `w, x, y, z` order.
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        self.vec.into_array()
    }

    /// Converts each component to another numeric type, as if by an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q: Quatd = Quatf::IDENTITY.cast();
    /// assert_eq!(q, Quatd::IDENTITY);
    /// ```
    pub fn cast<U>(self) -> Quat<U>
    where
        T: Cast<U>,
    {
        Quat {
            vec: self.vec.cast(),
        }
    }

    fn map<U>(self, f: impl FnMut(T) -> U) -> Quat<U> {
        Quat {
            vec: self.vec.map(f),
        }
    }
}

impl<T: Number> Quat<T> {
    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions, this is the cosine of half the angle between the two rotations.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate `(w, -x, -y, -z)` of this quaternion.
    ///
    /// For unit quaternions, this is the inverse rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, -3.0, -4.0));
    /// ```
    pub fn conjugate(self) -> Self {
        let [w, x, y, z] = self.into_array();
        Self::new(w, -x, -y, -z)
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`), component-wise.
    ///
    /// The result is not normalized. See [`Quat::slerp`] for interpolating between rotations.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}

impl<T: Float> Quat<T> {
    /// Creates a rotation of `radians` around `axis`, following the right-hand rule.
    ///
    /// `axis` is expected to be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quat::from_axis_angle(Vec3f::Z, 1.0);
    /// assert_approx_eq!(q, Quat::new(0.8775826, 0.0, 0.0, 0.4794255));
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians * T::half()).sin_cos();
        Self::from_scalar_vector(cos, axis * sin)
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        Self::from_axis_angle(Vec3::X, radians)
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        Self::from_axis_angle(Vec3::Y, radians)
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        Self::from_axis_angle(Vec3::Z, radians)
    }

    /// Creates a rotation from Euler angles in the body 3-2-1 sequence.
    ///
    /// The rotation first turns by `z` (yaw) around the Z axis, then by `y` (pitch) around the
    /// rotated Y axis, then by `x` (roll) around the twice rotated X axis. This is the same
    /// rotation as `from_rotation_z(z) * from_rotation_y(y) * from_rotation_x(x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quatf::from_euler_321(0.1, 0.2, 0.3);
    /// assert_approx_eq!(q, Quat::new(0.9833474, 0.0342708, 0.1060205, 0.1435722));
    /// ```
    #[doc(alias = "euler")]
    pub fn from_euler_321(x: T, y: T, z: T) -> Self {
        let (sr, cr) = (x * T::half()).sin_cos();
        let (sp, cp) = (y * T::half()).sin_cos();
        let (sy, cy) = (z * T::half()).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Converts this rotation to Euler angles in the body 3-2-1 sequence, returned as a vector of
    /// the `(x, y, z)` angles.
    ///
    /// This is the inverse of [`Quat::from_euler_321`]. The `y` angle is in the range `[-π/2,
    /// π/2]`, the others in `[-π, π]`.
    ///
    /// Near `y = ±π/2` (gimbal lock) the `x` and `z` angles describe rotations around the same
    /// axis, so only their sum (or difference) is meaningful. The `y` angle is clamped there
    /// instead of turning into NaN.
    pub fn to_euler_321(self) -> Vec3<T> {
        let [w, x, y, z] = self.into_array();
        let two = T::two();

        let roll = (two * (w * x + y * z)).atan2(T::ONE - two * (x * x + y * y));

        let sin_pitch = two * (w * y - z * x);
        if sin_pitch.abs() >= T::ONE {
            log::trace!("gimbal lock: sin(pitch) = {sin_pitch:?}, clamping");
        }
        let pitch = sin_pitch.clamp(-T::ONE, T::ONE).asin();

        let yaw = (two * (w * z + x * y)).atan2(T::ONE - two * (y * y + z * z));

        vec3(roll, pitch, yaw)
    }

    /// Creates a quaternion from the rotation matrix `mat`.
    ///
    /// `mat` is expected to be orthonormal with a determinant of 1. This uses Shepperd's method:
    /// if the trace of `mat` is positive, the quaternion is derived from it, otherwise from the
    /// largest diagonal element (ties are resolved in favor of the earlier one). Either way, the
    /// square root is taken of a number that is bounded away from zero.
    ///
    /// Since `q` and `-q` describe the same rotation, the sign of the result depends on the branch
    /// taken. Compare results with [`Quat::orientation_eq`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quatd::from_euler_321(0.3, -1.0, 2.5);
    /// assert!(Quat::from_mat3(&q.to_mat3()).orientation_eq(q, 1e-9));
    /// ```
    pub fn from_mat3(mat: &Mat3<T>) -> Self {
        let m = |row: usize, col: usize| mat[(row, col)];
        let one = T::ONE;
        let quarter = T::half() * T::half();

        let trace = mat.trace();
        if trace >= T::TOLERANCE {
            log::trace!("from_mat3: trace branch (trace = {trace:?})");
            let s = T::half() / (trace + one).sqrt();
            return Self::new(
                quarter / s,
                (m(2, 1) - m(1, 2)) * s,
                (m(0, 2) - m(2, 0)) * s,
                (m(1, 0) - m(0, 1)) * s,
            );
        }

        let (xx, yy, zz) = (m(0, 0), m(1, 1), m(2, 2));
        if xx >= yy && xx >= zz {
            log::trace!("from_mat3: x branch (trace = {trace:?})");
            let s = T::two() * (one + xx - yy - zz).sqrt();
            Self::new(
                (m(2, 1) - m(1, 2)) / s,
                quarter * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
            )
        } else if yy >= zz {
            log::trace!("from_mat3: y branch (trace = {trace:?})");
            let s = T::two() * (one + yy - xx - zz).sqrt();
            Self::new(
                (m(0, 2) - m(2, 0)) / s,
                (m(0, 1) + m(1, 0)) / s,
                quarter * s,
                (m(1, 2) + m(2, 1)) / s,
            )
        } else {
            log::trace!("from_mat3: z branch (trace = {trace:?})");
            let s = T::two() * (one + zz - xx - yy).sqrt();
            Self::new(
                (m(1, 0) - m(0, 1)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                quarter * s,
            )
        }
    }

    /// Creates a quaternion from the rotation in the upper-left 3x3 block of `mat`.
    ///
    /// The translation and the last row are ignored.
    pub fn from_mat4(mat: &Mat4<T>) -> Self {
        Self::from_mat3(&mat.rotation())
    }

    /// Returns the 3x3 rotation matrix describing the same rotation as `self`.
    ///
    /// `self` is expected to have unit length.
    #[doc(alias = "rot_matrix")]
    pub fn to_mat3(self) -> Mat3<T> {
        let [w, x, y, z] = self.into_array();
        let (one, two) = (T::ONE, T::two());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        Matrix::from_rows([
            [one - two * (yy + zz), two * (xy - zw), two * (xz + yw)],
            [two * (xy + zw), one - two * (xx + zz), two * (yz - xw)],
            [two * (xz - yw), two * (yz + xw), one - two * (xx + yy)],
        ])
    }

    /// Returns the 4x4 transformation matrix describing the same rotation as `self`, without
    /// translation.
    pub fn to_mat4(self) -> Mat4<T> {
        let mut mat = self.to_mat3().resize::<4, 4>();
        mat[(3, 3)] = T::ONE;
        mat
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A quaternion whose length is below [`Float::TOLERANCE`] has no meaningful direction;
    /// [`Quat::IDENTITY`] is returned for it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quat::new(2.0, 0.0, 0.0, 0.0);
    /// assert_eq!(q.normalize(), Quat::IDENTITY);
    /// assert_eq!(Quatf::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    /// ```
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(|_| {
            log::trace!("normalizing zero-length quaternion, returning identity");
            Self::IDENTITY
        })
    }

    /// Returns a normalized copy of this quaternion, or [`Error::ZeroLength`] if its length is
    /// below [`Float::TOLERANCE`].
    pub fn try_normalize(self) -> Result<Self, Error> {
        self.vec.try_normalize().map(|vec| Self { vec })
    }

    /// Returns the multiplicative inverse, `conjugate / length²`.
    ///
    /// For unit quaternions, this equals the [conjugate][Quat::conjugate]. A quaternion whose
    /// length is below [`Float::TOLERANCE`] has no inverse; it is returned unchanged.
    pub fn inverse(self) -> Self {
        let length2 = self.length2();
        if length2 < T::TOLERANCE * T::TOLERANCE {
            log::trace!("inverting zero-length quaternion, returning it unchanged");
            return self;
        }
        self.conjugate() / length2
    }

    /// Returns the angle of the rotation, in radians, in the range `[0, 2π]`.
    pub fn angle(&self) -> T {
        T::two() * self.scalar().clamp(-T::ONE, T::ONE).acos()
    }

    /// Returns the normalized axis of the rotation.
    ///
    /// A rotation by (close to) zero has no meaningful axis; `(1, 0, 0)` is returned for it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quatd::from_axis_angle(Vec3::Y, 0.5);
    /// assert_approx_eq!(q.axis(), Vec3::Y);
    /// assert_approx_eq!(q.angle(), 0.5);
    ///
    /// assert_eq!(Quatd::IDENTITY.axis(), Vec3::X);
    /// ```
    pub fn axis(&self) -> Vec3<T> {
        let w = self.scalar();
        let sin2 = T::ONE - w * w;
        if (w - T::ONE).abs() < T::TOLERANCE || sin2 <= T::ZERO {
            return Vec3::X;
        }
        self.vector() / sin2.sqrt()
    }

    /// Rotates `vector` by `self`.
    ///
    /// This is the sandwich product `q * v * q⁻¹`, evaluated directly. `self` is expected to have
    /// unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quatf::from_rotation_z(std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotate(self, vector: Vec3<T>) -> Vec3<T> {
        let [w, qx, qy, qz] = self.into_array();
        let [vx, vy, vz] = vector.into_array();

        // `q * (0, v)`
        let rw = -(qx * vx + qy * vy + qz * vz);
        let rx = w * vx + qy * vz - qz * vy;
        let ry = w * vy - qx * vz + qz * vx;
        let rz = w * vz + qx * vy - qy * vx;

        // `(q * (0, v)) * conj(q)`, discarding the real part
        vec3(
            -rw * qx + rx * w - ry * qz + rz * qy,
            -rw * qy + rx * qz + ry * w - rz * qx,
            -rw * qz - rx * qy + ry * qx + rz * w,
        )
    }

    /// Spherical linear interpolation between the rotations `self` (at `t = 0`) and `other` (at
    /// `t = 1`).
    ///
    /// The interpolation follows the shorter arc: if the quaternions lie in opposite hemispheres,
    /// `other` is negated first. When the rotations are very close, this falls back to linear
    /// interpolation to avoid dividing by `sin(θ) ≈ 0`.
    ///
    /// Both quaternions are expected to have unit length. The result is not renormalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let a = Quatd::from_rotation_z(0.2);
    /// let b = Quatd::from_rotation_z(1.0);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quatd::from_rotation_z(0.6));
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut other = other;
        if cos < T::ZERO {
            cos = -cos;
            other = -other;
        }

        let (scale_self, scale_other) = if T::ONE - cos > T::from_f64(1e-4) {
            let theta = cos.acos();
            let sin = theta.sin();
            (
                ((T::ONE - t) * theta).sin() / sin,
                (t * theta).sin() / sin,
            )
        } else {
            (T::ONE - t, t)
        };

        self * scale_self + other * scale_other
    }

    /// Returns whether `self` and `other` describe the same orientation.
    ///
    /// The quaternions are considered equal if every component differs by less than `tolerance`,
    /// either as given or after negating one of them (since `q` and `-q` describe the same
    /// rotation).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let q = Quatf::from_euler_321(1.0, 2.0, 3.0);
    /// assert!(q.orientation_eq(-q, 1e-6));
    /// assert_ne!(q, -q);
    /// ```
    pub fn orientation_eq(self, other: Self, tolerance: T) -> bool {
        let within = |a: Self, b: Self| {
            a.as_array()
                .iter()
                .zip(b.as_array())
                .all(|(&a, &b)| (a - b).abs() < tolerance)
        };
        within(self, other) || within(self, -other)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Creates a quaternion from its components in `w, x, y, z` order.
impl<T> From<[T; 4]> for Quat<T> {
    fn from([w, x, y, z]: [T; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

impl<T> From<Quat<T>> for [T; 4] {
    fn from(q: Quat<T>) -> Self {
        q.into_array()
    }
}

/// Copies the components out of a slice of exactly 4 elements, in `w, x, y, z` order.
impl<T: Copy> TryFrom<&[T]> for Quat<T> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        check_len(4, slice.len())?;
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }
}

impl<T: Float> From<Quat<T>> for Mat3<T> {
    fn from(q: Quat<T>) -> Self {
        q.to_mat3()
    }
}

impl<T: Float> From<Quat<T>> for Mat4<T> {
    fn from(q: Quat<T>) -> Self {
        q.to_mat4()
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w, x, y, z] = self.as_array();
        f.debug_struct("Quat")
            .field("w", w)
            .field("x", x)
            .field("y", y)
            .field("z", z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec3, Vec3d};

    use super::*;

    const LOG: bool = false;

    fn init_logger() {
        if LOG {
            env_logger::builder()
                .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
                .try_init()
                .ok();
        }
    }

    #[test]
    fn construction() {
        let q = Quatd::default();
        assert_eq!((q.w, q.x, q.y, q.z), (1.0, 0.0, 0.0, 0.0));

        let q = Quat::new(2.0, 3.1, 4.2, 5.3);
        assert_eq!((q.w, q.x, q.y, q.z), (2.0, 3.1, 4.2, 5.3));
        assert_eq!(q.scalar(), 2.0);
        assert_eq!(q.vector(), vec3(3.1, 4.2, 5.3));
        assert_eq!(q.as_slice(), &[2.0, 3.1, 4.2, 5.3]);
        assert_eq!(Quat::from([2.0, 3.1, 4.2, 5.3]), q);
        assert_eq!(<[f64; 4]>::from(q), [2.0, 3.1, 4.2, 5.3]);

        let q = Quatf::new(1.0, 2.0, 3.0, 4.0).cast::<f64>();
        assert_eq!(q, Quatd::new(1.0, 2.0, 3.0, 4.0));

        let data = [1.0, 0.0, 0.0, 0.0, 9.0];
        assert_eq!(Quat::try_from(&data[..4]), Ok(Quatd::IDENTITY));
        assert_eq!(
            Quat::try_from(&data[..]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn fields() {
        let mut q = Quatf::IDENTITY;
        q.x = 0.5;
        q.w = -1.0;
        assert_eq!(q.into_array(), [-1.0, 0.5, 0.0, 0.0]);
        assert_eq!(bytemuck::cast::<_, [f32; 4]>(q), [-1.0, 0.5, 0.0, 0.0]);

        let q = Quat::new(1, 2, 3, 4);
        assert_eq!(format!("{q}"), "(1, 2, 3, 4)");
        assert_eq!(format!("{q:?}"), "Quat { w: 1, x: 2, y: 3, z: 4 }");
    }

    #[test]
    fn conjugate() {
        let q = Quat::new(1.1, 2.2, 3.3, 4.4);
        assert_eq!(q.conjugate(), Quat::new(1.1, -2.2, -3.3, -4.4));
        assert_eq!(-q, Quat::new(-1.1, -2.2, -3.3, -4.4));

        let q = Quatd::from_euler_321(0.4, -0.2, 1.3);
        assert_approx_eq!(q * q.conjugate(), Quat::IDENTITY);
        assert_approx_eq!(q.inverse(), q.conjugate());

        let q = Quat::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q.inverse(), Quat::new(0.5, 0.0, 0.0, 0.0));
        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).inverse(), Quat::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn normalize() {
        init_logger();

        let q = Quat::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert_approx_eq!(q.length(), 1.0);
        assert_approx_eq!(q, Quat::new(1.0, 2.0, 3.0, 4.0) / 30.0f64.sqrt());

        let zero = Quatd::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Quat::IDENTITY);
        assert_eq!(zero.try_normalize(), Err(Error::ZeroLength));
    }

    #[test]
    fn axis_angle() {
        let q = Quatf::from_axis_angle(vec3(1.0, 2.0, 3.0).normalize(), 1.0);
        assert_approx_eq!(q, Quat::new(0.8775826, 0.1281319, 0.2562637, 0.3843956));
        let q = Quatf::from_axis_angle(vec3(5.0, 2.0, 3.0).normalize(), 0.5);
        assert_approx_eq!(q, Quat::new(0.9689124, 0.2006711, 0.0802684, 0.1204027));

        let axis = vec3(1.0, 2.0, 3.0).normalize();
        let q = Quatd::from_axis_angle(axis, 1.0);
        assert_approx_eq!(q.axis(), axis).abs(1e-12);
        assert_approx_eq!(q.angle(), 1.0).abs(1e-12);

        assert_eq!(Quatd::IDENTITY.axis(), Vec3d::X);
        assert_eq!(Quatd::IDENTITY.angle(), 0.0);
        // A slightly denormalized scalar part must not produce NaN.
        assert!(!Quatd::new(1.0 + 1e-9, 0.0, 0.0, 0.0).angle().is_nan());
        assert!(!Quatd::new(1.0 + 1e-9, 0.0, 0.0, 0.0).axis().x.is_nan());

        assert_eq!(Quatd::from_rotation_x(0.5), Quat::from_axis_angle(Vec3d::X, 0.5));
        assert_eq!(Quatd::from_rotation_y(0.5), Quat::from_axis_angle(Vec3d::Y, 0.5));
        assert_eq!(Quatd::from_rotation_z(0.5), Quat::from_axis_angle(Vec3d::Z, 0.5));
    }

    #[test]
    fn euler() {
        assert_eq!(Quatf::from_euler_321(0.0, 0.0, 0.0), Quat::IDENTITY);
        assert_approx_eq!(
            Quatf::from_euler_321(0.0, 0.0, 1.0),
            Quat::new(0.8775826, 0.0, 0.0, 0.4794255)
        );
        assert_approx_eq!(
            Quatf::from_euler_321(0.0, 1.0, 0.0),
            Quat::new(0.8775826, 0.0, 0.4794255, 0.0)
        );
        assert_approx_eq!(
            Quatf::from_euler_321(1.0, 0.0, 0.0),
            Quat::new(0.8775826, 0.4794255, 0.0, 0.0)
        );
        assert_approx_eq!(
            Quatf::from_euler_321(0.1, 0.2, 0.3),
            Quat::new(0.9833474, 0.0342708, 0.1060205, 0.1435722)
        );
        assert_approx_eq!(
            Quatf::from_euler_321(1.0, 2.0, 3.0),
            Quat::new(0.4359528, -0.718287, 0.3106225, 0.4444351)
        );

        let (x, y, z) = (0.7, -0.4, 2.1);
        let composed = Quatd::from_rotation_z(z) * Quat::from_rotation_y(y) * Quat::from_rotation_x(x);
        assert_approx_eq!(Quatd::from_euler_321(x, y, z), composed).abs(1e-12);

        let angles = Quatf::new(0.9833474, 0.0342708, 0.1060205, 0.1435722).to_euler_321();
        assert_approx_eq!(angles, vec3(0.1, 0.2, 0.3)).abs(1e-5);
    }

    #[test]
    fn gimbal_lock() {
        init_logger();

        let q = Quatd::from_euler_321(0.3, FRAC_PI_2, 0.0);
        let angles = q.to_euler_321();
        assert!(!angles.x.is_nan() && !angles.y.is_nan() && !angles.z.is_nan());
        assert_approx_eq!(angles.y, FRAC_PI_2).abs(1e-6);

        // Slightly denormalized, pushing `sin(pitch)` past 1.
        let q = Quatd::from_rotation_y(-FRAC_PI_2) * 1.000001;
        let angles = q.to_euler_321();
        assert_approx_eq!(angles.y, -FRAC_PI_2);
    }

    #[test]
    fn rotate() {
        let q = Quat::new(0.5, 0.1, 0.2, 0.3);
        assert_approx_eq!(q.rotate(vec3(6.0, 5.0, 4.0)), vec3(0.52, 3.07, 1.42)).abs(1e-12);
        assert_approx_eq!(q * vec3(6.0, 5.0, 4.0), vec3(0.52, 3.07, 1.42)).abs(1e-12);
        assert_approx_eq!(q * vec4(6.0, 5.0, 4.0, 2.34), vec4(0.52, 3.07, 1.42, 2.34)).abs(1e-12);

        let q = Quatd::from_euler_321(0.4, 1.1, -2.0);
        let v = vec3(1.0, -2.0, 0.5);
        assert_approx_eq!(q.rotate(v), q.to_mat3() * v).abs(1e-12);
        assert_approx_eq!(q.rotate(v).length(), v.length()).abs(1e-12);
        assert_approx_eq!(q.conjugate().rotate(q.rotate(v)), v).abs(1e-12);
    }

    #[test]
    fn matrix_conversion() {
        init_logger();

        let expected = Quatf::new(0.9689124, 0.2006711, 0.0802684, 0.1204027);
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 0.9581203, -0.2011042,  0.2038689],
            [ 0.2655344,  0.8904686, -0.3695364],
            [-0.1072235,  0.4081945,  0.9065762],
        ]);
        assert!(Quat::from_mat3(&mat).orientation_eq(expected, 1e-5));
        assert_approx_eq!(expected.to_mat3(), mat).abs(1e-5);

        let mut mat4 = mat.resize::<4, 4>();
        mat4.set_translation(vec3(10.0, 11.0, 12.0));
        assert!(Quat::from_mat4(&mat4).orientation_eq(expected, 1e-5));

        // Negative trace, x dominant.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0.8518519, -0.0740741,  0.5185185],
            [0.3703704, -0.6148148, -0.6962963],
            [0.3703704,  0.7851852, -0.4962963],
        ]);
        let expected = Quatf::new(0.4303315, 0.860663, 0.0860663, 0.2581989);
        assert!(Quat::from_mat3(&mat).orientation_eq(expected, 1e-5));

        // Negative trace, y dominant.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [-0.8010421,  0.3810056,  0.4616993],
            [ 0.4996996,  0.8502801,  0.1653000],
            [-0.3295935,  0.3631231, -0.8714985],
        ]);
        let expected = Quatf::new(-0.2107958, -0.2346147, -0.9384589, -0.1407688);
        assert!(Quat::from_mat3(&mat).orientation_eq(expected, 1e-5));
        assert!(Quat::from_mat4(&Mat4::from(expected)).orientation_eq(expected, 1e-5));

        // Negative trace, z dominant.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [-0.8597005, -0.3850632,  0.3356210],
            [ 0.4262070, -0.9029015,  0.0558256],
            [ 0.2815363,  0.1910373,  0.9403415],
        ]);
        let expected = Quatf::new(-0.2107958, -0.1603586, -0.0641434, -0.9621517);
        assert!(Quat::from_mat3(&mat).orientation_eq(expected, 1e-5));

        assert_eq!(Quatf::IDENTITY.to_mat3(), Mat3::IDENTITY);
        assert_eq!(Mat4::from(Quatf::IDENTITY), Mat4::IDENTITY);
        // Rotation by π has a trace of -1.
        let half_turn = Quatd::from_rotation_y(PI);
        assert!(Quat::from_mat3(&half_turn.to_mat3()).orientation_eq(half_turn, 1e-9));
    }

    #[test]
    fn slerp() {
        let a = Quatd::from_axis_angle(vec3(1.0, 2.0, 3.0).normalize(), 1.0);
        let b = Quatd::from_euler_321(-0.3, 0.8, 0.1);
        assert_approx_eq!(a.slerp(b, 0.0), a).abs(1e-12);
        assert_approx_eq!(a.slerp(b, 1.0), b).abs(1e-12);
        assert_approx_eq!(a.slerp(b, 0.5).length(), 1.0).abs(1e-12);

        // Same axis: the angle is interpolated linearly.
        let axis = vec3(0.0, 0.6, 0.8);
        let q = Quatd::from_axis_angle(axis, 0.2).slerp(Quat::from_axis_angle(axis, 1.4), 0.25);
        assert_approx_eq!(q, Quat::from_axis_angle(axis, 0.5)).abs(1e-12);

        // `b` is the rotation by -1 radian, but represented in the opposite hemisphere. The short
        // path passes through the identity.
        let axis = vec3(1.0, 2.0, 3.0).normalize();
        let a = Quatd::from_axis_angle(axis, 1.0);
        let b = Quatd::from_axis_angle(axis, 2.0 * PI - 1.0);
        assert!(a.dot(b) < 0.0);
        assert!(a.slerp(b, 0.5).orientation_eq(Quat::IDENTITY, 1e-9));

        // Nearly identical rotations fall back to linear interpolation.
        let a = Quatd::from_rotation_x(0.3);
        let b = Quatd::from_rotation_x(0.3 + 1e-5);
        assert_approx_eq!(a.slerp(b, 0.5), a.lerp(b, 0.5)).abs(1e-12);
        assert!(!a.slerp(a, 0.5).w.is_nan());
    }

    #[test]
    fn lerp() {
        let a = Quat::new(1.0, 0.0, 0.0, 0.0);
        let b = Quat::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Quat::new(0.5, 0.5, 0.0, 0.0));
    }

    #[test]
    fn orientation_eq() {
        let q = Quatd::new(0.5, 0.5, 0.5, 0.5);
        assert!(q.orientation_eq(q, 1e-9));
        assert!(q.orientation_eq(-q, 1e-9));
        assert!(!q.orientation_eq(q.conjugate(), 1e-9));
        assert!(q.orientation_eq(Quat::new(0.5, 0.5, 0.5, 0.5 + 1e-6), 1e-5));
        assert!(!q.orientation_eq(Quat::new(-0.5, -0.5, 0.5, -0.5), 1e-5));
    }
}
