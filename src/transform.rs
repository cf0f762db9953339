//! Rigid-body transforms.

use std::fmt;

use crate::{
    traits::{Cast, Float, One, Zero},
    Mat4, Quat, Vec3,
};

mod ops;

/// A rigid transform with [`f32`] components.
pub type Transformf = Transform<f32>;
/// A rigid transform with [`f64`] components.
pub type Transformd = Transform<f64>;

/// A rigid-body pose: a rotation followed by a translation.
///
/// Applying a [`Transform`] to a point first rotates it by [`Transform::orientation`] and then
/// moves it by [`Transform::position`]. Transforms form a group under composition (`*`): `a * b`
/// applies `b` first, then `a`, and [`Transform::inverse`] undoes a transform.
///
/// The orientation is expected to be a unit quaternion. As with [`Quat`], composing many
/// transforms can make its length drift, so it should be normalized from time to time.
///
/// # Equality
///
/// [`PartialEq`] and [`ApproxEq`] compare position and orientation component-wise, so two
/// transforms whose orientations are `q` and `-q` compare unequal even though they move points
/// identically. [`Transform::pose_eq`] treats them as equal.
///
/// [`ApproxEq`]: crate::approx::ApproxEq
#[derive(Clone, Copy, Hash)]
pub struct Transform<T> {
    /// Translation, applied after the rotation.
    pub position: Vec3<T>,
    /// Rotation.
    pub orientation: Quat<T>,
}

impl<T: Zero + One> Transform<T> {
    /// The identity transform, which leaves every point where it is.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Creates a pure translation.
    pub fn from_position(position: Vec3<T>) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Creates a pure rotation.
    pub fn from_orientation(orientation: Quat<T>) -> Self {
        Self {
            orientation,
            ..Self::IDENTITY
        }
    }
}

impl<T> Transform<T> {
    /// Creates a transform that rotates by `orientation`, then moves by `position`.
    pub const fn new(position: Vec3<T>, orientation: Quat<T>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Converts position and orientation to another element type, as if by an `as` cast.
    pub fn cast<U>(self) -> Transform<U>
    where
        T: Cast<U>,
    {
        Transform {
            position: self.position.cast(),
            orientation: self.orientation.cast(),
        }
    }
}

impl<T: Float> Transform<T> {
    /// Returns the transform that undoes `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let t = Transformd::new(vec3(1.0, 2.0, 3.0), Quat::from_euler_321(0.1, 0.2, 0.3));
    /// assert_approx_eq!(t * t.inverse(), Transform::IDENTITY);
    /// ```
    pub fn inverse(self) -> Self {
        let orientation = self.orientation.conjugate();
        Self {
            position: orientation.rotate(-self.position),
            orientation,
        }
    }

    /// Applies the transform to a point: rotates it, then translates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let t = Transformf::new(
    ///     vec3(1.0, 2.0, 3.0),
    ///     Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
    /// );
    /// assert_approx_eq!(t.transform(vec3(5.0, 1.0, 2.0)), vec3(0.0, 7.0, 5.0)).abs(1e-6);
    /// ```
    pub fn transform(&self, point: Vec3<T>) -> Vec3<T> {
        self.orientation.rotate(point) + self.position
    }

    /// Applies the inverse transform to a point.
    ///
    /// This is equivalent to `self.inverse().transform(point)`, and undoes
    /// [`Transform::transform`].
    pub fn inv_transform(&self, point: Vec3<T>) -> Vec3<T> {
        self.orientation.conjugate().rotate(point - self.position)
    }

    /// Rotates a direction vector. The position is ignored.
    pub fn rotate(&self, vector: Vec3<T>) -> Vec3<T> {
        self.orientation.rotate(vector)
    }

    /// Rotates a direction vector by the inverse orientation. The position is ignored.
    pub fn inv_rotate(&self, vector: Vec3<T>) -> Vec3<T> {
        self.orientation.conjugate().rotate(vector)
    }

    /// Returns the equivalent 4x4 homogeneous matrix.
    ///
    /// See [`Matrix::from_transformation`](crate::Matrix::from_transformation).
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_transformation(self.position, self.orientation)
    }

    /// Returns whether `self` and `other` describe the same pose.
    ///
    /// Positions must match component-wise within `tolerance`, and the orientations must satisfy
    /// [`Quat::orientation_eq`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let a = Transformd::new(vec3(1.0, 2.0, 3.0), Quat::from_rotation_x(2.0));
    /// let b = Transform::new(a.position, -a.orientation);
    /// assert!(a.pose_eq(&b, 1e-9));
    /// assert_ne!(a, b);
    /// ```
    pub fn pose_eq(&self, other: &Self, tolerance: T) -> bool {
        let (a, b) = (self.position, other.position);
        (0..3).all(|i| (a[i] - b[i]).abs() < tolerance)
            && self.orientation.orientation_eq(other.orientation, tolerance)
    }
}

impl<T: Zero + One> Default for Transform<T> {
    /// Returns [`Transform::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Float> From<Transform<T>> for Mat4<T> {
    fn from(t: Transform<T>) -> Self {
        t.to_mat4()
    }
}

impl<T: fmt::Debug> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("position", &self.position)
            .field("orientation", &self.orientation)
            .finish()
    }
}
