// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix construction from position and rotation.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::matrix::{FlatMatrix, Vec3};

/// Builds a rotation + translation matrix, with the angle in degrees.
///
/// The basis-X column is `(cos θ, sin θ, 0)`, the basis-Y column is
/// `(−sin θ, cos θ, 0)` and the translation column is `(x, y, 1)`.
///
/// Angles are not normalized; the trigonometric functions wrap them. NaN and
/// infinite inputs propagate into the result.
///
/// ```rust
/// use dtif_transform::build_transform;
///
/// let m = build_transform(100.0, 50.0, 90.0).as_coeffs();
/// let expected = [0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 100.0, 50.0, 1.0];
/// for (got, want) in m.iter().zip(expected) {
///     assert!((got - want).abs() < 1e-12);
/// }
/// ```
#[must_use]
pub fn build_transform(x: f64, y: f64, angle_degrees: f64) -> FlatMatrix {
    build_transform_radians(x, y, angle_degrees.to_radians())
}

/// Builds a rotation + translation matrix, with the angle in radians.
///
/// See [`build_transform`] for the layout.
#[must_use]
pub fn build_transform_radians(x: f64, y: f64, angle_radians: f64) -> FlatMatrix {
    let cos = angle_radians.cos();
    let sin = angle_radians.sin();
    compose_basis([cos, sin, 0.0], [-sin, cos, 0.0], [x, y, 1.0])
}

/// Concatenates three caller-computed column vectors into a flat matrix.
///
/// The vectors are stored in the given order; nothing is transposed or
/// reordered.
#[must_use]
#[inline]
pub const fn compose_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> FlatMatrix {
    FlatMatrix::from_cols(x_axis, y_axis, z_axis)
}
