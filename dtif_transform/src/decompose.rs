// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decomposition of flat matrices into human-readable transforms.
//!
//! The rotation unit is part of the operation name: [`decompose_radians`]
//! and [`decompose_degrees`] return the same record with `rotation` in
//! different units. Nothing in [`Decomposed2DTransform`] itself records the
//! unit, so keep values from the two entry points apart.
//!
//! Rotation follows the DTIF convention of reading the lead terms of both
//! basis columns, `atan2(-d, a)`. For pure rotations, and rotations with
//! uniform scale, this is the exact angle. For sheared or non-uniformly
//! scaled matrices it is a "primary" angle rather than a true polar
//! decomposition.
//!
//! Shear and reflection are not recovered. Scales are always the
//! non-negative column norms, so a mirrored matrix decomposes to the same
//! scale as its unmirrored counterpart.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::builder::build_transform_radians;
use crate::matrix::FlatMatrix;

/// Translation, rotation and per-axis scale derived from a [`FlatMatrix`].
///
/// This is derived data for display and editing; the matrix stays the
/// source of truth.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Decomposed2DTransform {
    /// `tx`, copied unscaled.
    pub translation_x: f64,
    /// `ty`, copied unscaled.
    pub translation_y: f64,
    /// Norm of the basis-X column, `√(a² + b²)`.
    pub scale_x: f64,
    /// Norm of the basis-Y column, `√(d² + e²)`.
    pub scale_y: f64,
    /// Counter-clockwise angle from the positive X axis.
    ///
    /// Radians or degrees depending on which function produced the value.
    pub rotation: f64,
}

impl Decomposed2DTransform {
    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translation_x, self.translation_y)
    }

    /// Returns the per-axis scale as a vector.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }
}

/// Decomposes a matrix, reporting `rotation` in radians.
///
/// The result's rotation lies in `(-π, π]`.
///
/// Precondition: the bottom row is `(0, 0, 1)`. It is not checked, and the
/// z components are ignored. Degenerate matrices yield NaN or zero fields
/// rather than an error.
#[must_use]
pub fn decompose_radians(matrix: &FlatMatrix) -> Decomposed2DTransform {
    let [a, b, _c, d, e, _f, tx, ty, _i] = matrix.as_coeffs();
    Decomposed2DTransform {
        translation_x: tx,
        translation_y: ty,
        scale_x: (a * a + b * b).sqrt(),
        scale_y: (d * d + e * e).sqrt(),
        rotation: (-d).atan2(a),
    }
}

/// Decomposes a matrix, reporting `rotation` in degrees.
///
/// Identical to [`decompose_radians`] except that the rotation is
/// converted with `180 / π`; it lies in `(-180, 180]`.
///
/// ```rust
/// use dtif_transform::{FlatMatrix, decompose_degrees};
///
/// let m = FlatMatrix::new([0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 100.0, 50.0, 1.0]);
/// let t = decompose_degrees(&m);
/// assert_eq!((t.translation_x, t.translation_y), (100.0, 50.0));
/// assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
/// assert_eq!(t.rotation, 90.0);
/// ```
#[must_use]
pub fn decompose_degrees(matrix: &FlatMatrix) -> Decomposed2DTransform {
    let radians = decompose_radians(matrix);
    Decomposed2DTransform {
        rotation: radians.rotation.to_degrees(),
        ..radians
    }
}

/// Rebuilds a matrix from a decomposition whose rotation is in radians.
///
/// The basis columns of the rotation are scaled by `scale_x` and `scale_y`
/// respectively. Recomposing a decomposition reproduces the original matrix
/// for rotations with uniform, non-negative scale.
#[must_use]
pub fn recompose_radians(t: &Decomposed2DTransform) -> FlatMatrix {
    let rotated = build_transform_radians(t.translation_x, t.translation_y, t.rotation);
    let [a, b, c, d, e, f, tx, ty, i] = rotated.as_coeffs();
    FlatMatrix::new([
        a * t.scale_x,
        b * t.scale_x,
        c,
        d * t.scale_y,
        e * t.scale_y,
        f,
        tx,
        ty,
        i,
    ])
}

/// Rebuilds a matrix from a decomposition whose rotation is in degrees.
///
/// See [`recompose_radians`].
#[must_use]
pub fn recompose_degrees(t: &Decomposed2DTransform) -> FlatMatrix {
    recompose_radians(&Decomposed2DTransform {
        rotation: t.rotation.to_radians(),
        ..*t
    })
}
