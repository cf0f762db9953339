use std::{array, fmt};

use crate::{
    error::{check_len, Error},
    traits::{Cast, Float, Number, One, Zero},
    Quat, Vec3, Vector,
};

mod ops;

/// A 3x3 matrix, used for rotations.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix, used for rigid transformations in homogeneous coordinates.
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

/// A matrix of `R` rows and `C` columns, stored column by column.
///
/// # Construction
///
/// - [`Matrix::from_rows`] takes the rows in reading order, [`Matrix::from_columns`] takes the
///   columns. Both accept arrays as well as [`Vector`]s.
/// - [`Matrix::from_fn`] computes each element from its `(row, col)` position.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero outside of its diagonal.
/// - [`Matrix::try_from_slice`] copies a column-major buffer.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`]. [`Default`] is the identity.
/// - Rigid transformations: [`Matrix::from_translation`], [`Matrix::from_transformation`] and
///   [`Matrix::look_at`].
///
/// # Element Access
///
/// Matrices are indexed with `(row, col)` tuples, in that order, starting at 0. Out-of-bounds
/// indices panic; [`Matrix::get`] and [`Matrix::get_mut`] are the checked alternatives.
///
/// ```
/// # use rigid_linalg::*;
/// let mut m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// m[(1, 2)] = 9;
/// assert_eq!(m.row(1), vec3(4, 5, 9));
/// assert_eq!(m.get(2, 0), None);
/// ```
///
/// [`Matrix::as_slice`] returns the elements in storage order (column-major), which is what
/// graphics APIs expect.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    ///
    /// [`Matrix::invert`] falls back to this for singular input.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the diagonal, zeros elsewhere.
    ///
    /// Non-square matrices get as many ones as the smaller dimension allows.
    pub const IDENTITY: Self = {
        let mut cols = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            cols[i][i] = T::ONE;
            i += 1;
        }
        Self(cols)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows.
    ///
    /// Matrix literals written this way read like the math, even though storage is column-major.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(m, Matrix::from_columns([vec2(1, 3), vec2(2, 4)]));
    /// ```
    pub fn from_rows<V: Into<Vector<T, C>>>(rows: [V; R]) -> Self
    where
        T: Copy,
    {
        let rows = rows.map(|r| r.into());
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Builds a matrix from its columns.
    pub fn from_columns<V: Into<Vector<T, R>>>(columns: [V; C]) -> Self {
        Self(columns.map(|c| c.into().into_array()))
    }

    /// Builds a matrix by calling `f(row, col)` for every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m: Matrix<_, 2, 3> = Matrix::from_fn(|row, col| 10 * row + col);
    /// assert_eq!(m.row(1), vec3(10, 11, 12));
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Copies a matrix out of a column-major buffer of exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.column(1), vec2(3, 4));
    ///
    /// assert!(Mat3f::try_from_slice(&[0.0; 4]).is_err());
    /// ```
    pub fn try_from_slice(elems: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        check_len(R * C, elems.len())?;
        Ok(Self::from_fn(|row, col| elems[col * R + row]))
    }

    /// Returns a matrix with `f` applied to each element.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix(self.0.map(|col| col.map(&mut f)))
    }

    /// Converts each element to `U` as if by an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m: Mat4d = Mat4f::from_translation(vec3(1.0, 2.0, 3.0)).cast();
    /// assert_eq!(m.translation(), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(T::cast)
    }

    /// Mirrors the matrix along its diagonal, turning rows into columns.
    ///
    /// For a rotation matrix, this is its inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Matrix::from_rows([[1, 2, 3]]);
    /// assert_eq!(m.transpose(), Matrix::from_columns([[1, 2, 3]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the element at `(row, col)`, or [`None`] if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Returns a copy of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns a copy of column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Mat4f::from_translation(vec3(-1.0, 0.5, 8.0));
    /// assert_eq!(m.column(3), vec4(-1.0, 0.5, 8.0, 1.0));
    /// ```
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Overwrites column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn set_column(&mut self, col: usize, column: impl Into<Vector<T, R>>) {
        self.0[col] = column.into().into_array();
    }

    /// Returns all elements, column after column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Copies `self` into the top-left corner of an `R2 x C2` matrix, cutting off or zero-filling
    /// rows and columns as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Mat3f::from_diagonal([2.0, 3.0, 4.0]).resize::<4, 4>();
    /// assert_eq!(m, Mat4f::from_diagonal([2.0, 3.0, 4.0, 0.0]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| match self.get(row, col) {
            Some(&elem) => elem,
            None => T::ZERO,
        })
    }

    /// Interpolates each element linearly between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }
}

/// Prints the matrix as a list of rows. `{:#?}` puts each row on its own line.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for col in 0..C {
                    if col > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(self, row)))
            .finish()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Builds a square matrix with `diag` on its diagonal and zeros elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let scale = Mat3f::from_diagonal([2.0, 2.0, 0.5]);
    /// assert_eq!(scale * vec3(1.0, 1.0, 1.0), vec3(2.0, 2.0, 0.5));
    /// ```
    pub fn from_diagonal(diag: impl Into<Vector<T, N>>) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the diagonal elements.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Returns the sum of the diagonal elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// assert_eq!(Matrix::from_rows([[1, 9], [9, -3]]).trace(), -2);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the determinant, the scalar triple product of the columns.
    pub fn determinant(&self) -> T {
        self.column(0).dot(self.column(1).cross(self.column(2)))
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Returns the inverse of this matrix.
    ///
    /// A matrix whose [`determinant`][Self::determinant] is smaller in magnitude than
    /// [`Float::TOLERANCE`] has no usable inverse, and [`Matrix::ZERO`] is returned.
    /// [`Matrix::try_invert`] reports that case as an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Mat3f::from_diagonal([2.0, 4.0, 0.5]);
    /// assert_eq!(m.invert(), Mat3f::from_diagonal([0.5, 0.25, 2.0]));
    ///
    /// let flat = Mat3f::from_diagonal([1.0, 1.0, 0.0]);
    /// assert_eq!(flat.invert(), Mat3f::ZERO);
    /// ```
    pub fn invert(&self) -> Self {
        self.try_invert().unwrap_or_else(|_| {
            log::debug!("inverting singular 3x3 matrix, returning the zero matrix");
            Self::ZERO
        })
    }

    /// Returns the inverse of this matrix, or [`Error::SingularMatrix`].
    pub fn try_invert(&self) -> Result<Self, Error> {
        let [c0, c1, c2] = [0, 1, 2].map(|col| self.column(col));
        // The rows of the inverse are the cross products of the other two columns.
        let rows = [c1.cross(c2), c2.cross(c0), c0.cross(c1)];
        let det = c0.dot(rows[0]);
        if det.abs() < T::TOLERANCE {
            return Err(Error::SingularMatrix);
        }
        Ok(Mat3::from_rows(rows) / det)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the 2x2 minors of rows 0-1 and of rows 2-3, for the column pairs
    /// `(0,1) (0,2) (0,3) (1,2) (1,3) (2,3)`.
    fn minors(&self) -> ([T; 6], [T; 6]) {
        const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let minor = |top: usize, (l, r): (usize, usize)| {
            self[(top, l)] * self[(top + 1, r)] - self[(top + 1, l)] * self[(top, r)]
        };
        (PAIRS.map(|p| minor(0, p)), PAIRS.map(|p| minor(2, p)))
    }

    /// Returns the determinant, by Laplace expansion along the upper two rows.
    pub fn determinant(&self) -> T {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Returns a transformation that moves points by `offset` and leaves directions alone.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn from_translation(offset: Vec3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.set_translation(offset);
        m
    }

    /// Returns the translation, the top three elements of the last column.
    pub fn translation(&self) -> Vec3<T> {
        self.column(3).truncate()
    }

    /// Sets the last column to `(offset, 1)`.
    pub fn set_translation(&mut self, offset: Vec3<T>) {
        self.set_column(3, offset.extend(T::ONE));
    }

    /// Returns the upper-left 3x3 block, the rotation part of a rigid transformation.
    pub fn rotation(&self) -> Mat3<T> {
        Matrix::from_fn(|row, col| self[(row, col)])
    }

    /// Overwrites the upper-left 3x3 block.
    pub fn set_rotation(&mut self, rotation: Mat3<T>) {
        for col in 0..3 {
            let bottom = self[(3, col)];
            self.set_column(col, rotation.column(col).extend(bottom));
        }
    }

    /// Applies this transformation to a point, including its translation.
    ///
    /// The point is treated as having `w = 1`. The `w` of the result is dropped without a
    /// perspective divide.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::ONE)).truncate()
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Returns the inverse of this matrix, or [`Matrix::ZERO`] if its determinant is smaller in
    /// magnitude than [`Float::TOLERANCE`].
    pub fn invert(&self) -> Self {
        self.try_invert().unwrap_or_else(|_| {
            log::debug!("inverting singular 4x4 matrix, returning the zero matrix");
            Self::ZERO
        })
    }

    /// Returns the inverse of this matrix, or [`Error::SingularMatrix`].
    pub fn try_invert(&self) -> Result<Self, Error> {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det.abs() < T::TOLERANCE {
            return Err(Error::SingularMatrix);
        }

        let m = |row: usize, col: usize| self[(row, col)];
        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [
                 m(1, 1) * c5 - m(1, 2) * c4 + m(1, 3) * c3,
                -m(0, 1) * c5 + m(0, 2) * c4 - m(0, 3) * c3,
                 m(3, 1) * s5 - m(3, 2) * s4 + m(3, 3) * s3,
                -m(2, 1) * s5 + m(2, 2) * s4 - m(2, 3) * s3,
            ],
            [
                -m(1, 0) * c5 + m(1, 2) * c2 - m(1, 3) * c1,
                 m(0, 0) * c5 - m(0, 2) * c2 + m(0, 3) * c1,
                -m(3, 0) * s5 + m(3, 2) * s2 - m(3, 3) * s1,
                 m(2, 0) * s5 - m(2, 2) * s2 + m(2, 3) * s1,
            ],
            [
                 m(1, 0) * c4 - m(1, 1) * c2 + m(1, 3) * c0,
                -m(0, 0) * c4 + m(0, 1) * c2 - m(0, 3) * c0,
                 m(3, 0) * s4 - m(3, 1) * s2 + m(3, 3) * s0,
                -m(2, 0) * s4 + m(2, 1) * s2 - m(2, 3) * s0,
            ],
            [
                -m(1, 0) * c3 + m(1, 1) * c1 - m(1, 2) * c0,
                 m(0, 0) * c3 - m(0, 1) * c1 + m(0, 2) * c0,
                -m(3, 0) * s3 + m(3, 1) * s1 - m(3, 2) * s0,
                 m(2, 0) * s3 - m(2, 1) * s1 + m(2, 2) * s0,
            ],
        ]);
        Ok(adjugate / det)
    }

    /// Returns the rigid transformation that rotates by `orientation`, then translates by
    /// `translation`.
    ///
    /// `orientation` is expected to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigid_linalg::*;
    /// let m = Mat4d::from_transformation(vec3(0.0, 0.0, 1.0), Quat::from_rotation_z(0.0));
    /// assert_eq!(m, Mat4d::from_translation(vec3(0.0, 0.0, 1.0)));
    /// ```
    pub fn from_transformation(translation: Vec3<T>, orientation: Quat<T>) -> Self {
        let mut m = orientation.to_mat4();
        m.set_translation(translation);
        m
    }

    /// Returns the pose of a camera at `eye` that looks towards `to`.
    ///
    /// The camera looks down its local -Z axis, and its X axis is perpendicular to `up`. The
    /// result maps camera space to world space, with `eye` as its translation.
    ///
    /// `up` must not be parallel to `to - eye`.
    pub fn look_at(eye: Vec3<T>, to: Vec3<T>, up: Vec3<T>) -> Self {
        let back = (eye - to).normalize();
        let right = up.cross(back).normalize();
        let cam_up = back.cross(right);

        Matrix::from_columns([
            right.extend(T::ZERO),
            cam_up.extend(T::ZERO),
            back.extend(T::ZERO),
            eye.extend(T::ONE),
        ])
    }

    /// [`Matrix::look_at`] with +Z as the up direction.
    pub fn look_at_z_up(eye: Vec3<T>, to: Vec3<T>) -> Self {
        Self::look_at(eye, to, Vec3::Z)
    }
}

/// Returns [`Matrix::IDENTITY`].
impl<T: Zero + One + Copy, const N: usize> Default for Matrix<T, N, N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec3f};

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
    fn rows_vs_columns() {
        let by_rows = Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let by_columns = Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]);
        assert_eq!(by_rows, by_columns);
        assert_eq!(by_rows.transpose(), Matrix::from_rows([[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn fmt() {
        let m = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{m:?}"), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{m:#?}"), "[\n    [0, 1],\n    [2, 3],\n]");
    }

    #[test]
    fn constants() {
        assert_eq!(
            format!("{:?}", Mat3f::IDENTITY),
            "[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]"
        );
        assert_eq!(Mat4d::ZERO.as_slice(), &[0.0; 16]);
        assert_eq!(Mat4d::default(), Mat4d::IDENTITY);
        assert_eq!(Mat3::<i32>::default().trace(), 3);
        assert_eq!(
            Matrix::<i32, 2, 3>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[test]
    fn diagonal() {
        let m = Matrix::from_diagonal([5, -1]);
        assert_eq!(m, Matrix::from_rows([[5, 0], [0, -1]]));
        assert_eq!(m.into_diagonal(), vec2(5, -1));
        assert_eq!(m.trace(), 4);
    }

    #[test]
    fn buffer() {
        #[rustfmt::skip]
        let mut m = Matrix::from_rows([
            [1.0f32, 2.0, 3.0],
            [4.0,    5.0, 6.0],
            [7.0,    8.0, 9.0],
        ]);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(Mat3f::try_from_slice(m.as_slice()), Ok(m));

        m.as_mut_slice()[5] = -8.0;
        assert_eq!(m[(2, 1)], -8.0);

        assert_eq!(bytemuck::cast_slice::<_, f32>(&[m])[5], -8.0);
        assert_eq!(
            Mat4f::try_from_slice(&[0.0; 9]),
            Err(Error::LengthMismatch {
                expected: 16,
                actual: 9
            })
        );
    }

    #[test]
    fn rows_and_columns() {
        let mut m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(0), vec3(1, 2, 3));
        assert_eq!(m.column(1), vec2(2, 5));

        m.set_column(2, vec2(-3, -6));
        assert_eq!(m.row(1), vec3(4, 5, -6));

        if let Some(e) = m.get_mut(0, 0) {
            *e = 10;
        }
        assert_eq!(m.get(0, 0), Some(&10));
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.get_mut(2, 0), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Mat3f::IDENTITY;
        let _ = m[(0, std::hint::black_box(3))];
    }

    #[test]
    fn resize() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(
            m.resize::<2, 3>(),
            Matrix::from_rows([[1, 2, 0], [3, 4, 0]])
        );
        assert_eq!(m.resize::<1, 1>(), Matrix::from_rows([[1]]));
        assert_eq!(m.resize::<1, 2>().resize::<2, 2>(), Matrix::from_rows([[1, 2], [0, 0]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(m.determinant(), 54);
        assert_eq!(m.transpose().determinant(), 54);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1, 2, 3, 4],
            [8, 6, 7, 1],
            [9, 4, 5, 1],
            [4, 7, 8, 9],
        ]);
        assert_eq!(m.determinant(), -123);
        assert_eq!(m.transpose().determinant(), -123);
        assert_eq!(Mat4::from_diagonal([2, 3, 4, 5]).determinant(), 120);
    }

    #[test]
    fn invert3() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [6.0, 5.0, 4.0],
            [3.0, 8.0, 5.0],
        ]);
        assert_eq!(m.determinant(), 56.0);

        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [-0.125,     0.25,       -0.125],
            [-0.3214286, -0.0714286,  0.25],
            [ 0.5892857, -0.0357143, -0.125],
        ]);
        let inv = m.invert();
        assert_approx_eq!(inv, expected).abs(1e-6);
        assert_approx_eq!(m * inv, Mat3d::IDENTITY).abs(1e-12);
        assert_approx_eq!(inv * m, Mat3d::IDENTITY).abs(1e-12);

        assert_eq!(Mat3f::IDENTITY.invert(), Mat3f::IDENTITY);
    }

    #[test]
    fn invert4() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [8.0, 6.0, 7.0, 1.0],
            [9.0, 4.0, 5.0, 1.0],
            [4.0, 7.0, 8.0, 9.0],
        ]);

        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [-0.1300813, -0.2032520,  0.2845528,  0.0487805],
            [-1.5528455, -0.1138211, -0.0406504,  0.7073171],
            [ 1.4878049,  0.5121951, -0.3170732, -0.6829268],
            [-0.0569106, -0.2764228,  0.1869919,  0.1463415],
        ]);
        let inv = m.invert();
        assert_approx_eq!(inv, expected).abs(1e-6);
        assert_approx_eq!(m * inv, Mat4d::IDENTITY).abs(1e-12);
        assert_approx_eq!(inv.invert(), m).abs(1e-9);

        assert_eq!(Mat4f::IDENTITY.invert(), Mat4f::IDENTITY);
    }

    #[test]
    fn invert_singular() {
        init_logger();

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1.0f32, 2.0, 3.0],
            [4.0,    5.0, 6.0],
            [7.0,    8.0, 9.0],
        ]);
        assert_eq!(m.invert(), Mat3f::ZERO);
        assert_eq!(m.try_invert(), Err(Error::SingularMatrix));

        let mut m = Mat4d::IDENTITY;
        m.set_column(2, vec4(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.invert(), Mat4d::ZERO);
        assert_eq!(m.try_invert(), Err(Error::SingularMatrix));
        assert!(Mat4d::IDENTITY.try_invert().is_ok());
    }

    #[test]
    fn translation() {
        let mut m = Mat4f::ZERO;
        m.set_translation(vec3(11.0, 12.0, 13.0));
        assert_eq!(m.column(3), vec4(11.0, 12.0, 13.0, 1.0));
        assert_eq!(m.row(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.translation(), vec3(11.0, 12.0, 13.0));

        let flip = Mat3f::from_diagonal([1.0, -1.0, -1.0]);
        m.set_rotation(flip);
        assert_eq!(m.rotation(), flip);
        assert_eq!(m.row(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.translation(), vec3(11.0, 12.0, 13.0));
        assert_eq!(m.transform_point(vec3(1.0, 2.0, 3.0)), vec3(12.0, 10.0, 10.0));

        let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
        assert_approx_eq!(m.invert().translation(), vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn transformation() {
        let axis = vec3(1.0, 2.0, 3.0).normalize();
        let m = Mat4d::from_transformation(vec3(1.0, 2.0, 3.0), Quat::from_axis_angle(axis, 1.0));

        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [ 0.5731379, -0.6090066,  0.5482918],
            [ 0.7403488,  0.6716445, -0.0278793],
            [-0.3512785,  0.4219059,  0.8358222],
        ]);
        assert_approx_eq!(m.rotation(), expected).abs(1e-6);
        assert_eq!(m.translation(), vec3(1.0, 2.0, 3.0));
        assert_eq!(m.row(3), vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn look_at() {
        let m = Mat4d::look_at_z_up(vec3(0.0, -10.0, 0.0), Vec3::ZERO);

        #[rustfmt::skip]
        assert_approx_eq!(m, Matrix::from_rows([
            [1.0, 0.0,  0.0,   0.0],
            [0.0, 0.0, -1.0, -10.0],
            [0.0, 1.0,  0.0,   0.0],
            [0.0, 0.0,  0.0,   1.0],
        ]));

        let eye = vec3(3.0f32, 4.0, 5.0);
        let m = Mat4f::look_at(eye, Vec3f::ZERO, Vec3f::Y);
        assert_approx_eq!(m.rotation().determinant(), 1.0).abs(1e-6);
        assert_approx_eq!(m.transform_point(Vec3f::ZERO), eye);
        // -Z points at the target.
        assert_approx_eq!(m.column(2).truncate(), eye.normalize());
    }

    #[test]
    fn lerp() {
        let a = Mat3d::from_diagonal([1.0, 2.0, 3.0]);
        let b = Mat3d::IDENTITY * 3.0;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_approx_eq!(a.lerp(b, 0.5), Mat3d::from_diagonal([2.0, 2.5, 3.0]));
    }

    #[test]
    fn cast() {
        let m = Matrix::from_rows([[1.7f32, -2.2], [0.0, 9.9]]);
        assert_eq!(m.cast::<i32>(), Matrix::from_rows([[1, -2], [0, 9]]));
    }
}
