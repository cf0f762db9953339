//! Fixed-size linear algebra for rigid-body poses.
//!
//! This crate provides small, dense vectors ([`Vector`]) and matrices ([`Matrix`]), rotation
//! quaternions ([`Quat`]) and rigid transforms ([`Transform`], a rotation followed by a
//! translation). Everything is a plain [`Copy`] value generic over its element type, with type
//! aliases for the common [`f32`] and [`f64`] cases (eg. [`Vec3f`], [`Mat4d`], [`Quatf`]).
//!
//! # Motivation
//!
//! Tracking the pose of an object involves a lot of rotation bookkeeping: converting between
//! Euler angles, rotation matrices and quaternions, interpolating between orientations, and
//! composing and inverting poses. These conversions are where numerical edge cases live (gimbal
//! lock, near-zero matrix traces, the double cover of rotations by quaternions), and this crate
//! handles them in one place, with documented fallbacks instead of `NaN`s.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics to specify
//!   dimensions keeps the API small.
//! - Support only a single, column-major, unpadded data layout for matrices, and `w, x, y, z` order
//!   for quaternions. All types can be viewed as slices and implement [`bytemuck::Pod`] when their
//!   element type does.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Rotation-related operations require a [`Float`] element type.
//! - Degenerate input never produces `NaN`: normalizing a zero-length value, inverting a singular
//!   matrix and converting a gimbal-locked rotation to Euler angles all take a documented fallback
//!   path. Checked `try_*` variants return an [`Error`] instead.
//! - No SIMD, no sparse or iterative solvers.
//!
//! # Equality
//!
//! [`PartialEq`] compares exactly. Floating-point results should be compared with the
//! [`approx::ApproxEq`] trait, or the [`assert_approx_eq!`] and [`assert_approx_ne!`] macros in
//! tests. Neither considers a quaternion equal to its negation; use [`Quat::orientation_eq`] or
//! [`Transform::pose_eq`] to compare rotations and poses.

pub mod approx;
mod error;
mod matrix;
mod quat;
mod traits;
mod transform;
mod vector;
mod view;

pub use error::Error;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
