// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Mul, MulAssign};

use kurbo::{Affine, Point, Vec2};

use crate::error::MatrixError;

/// A 3-component column vector, as stored inside a [`FlatMatrix`].
pub type Vec3 = [f64; 3];

/// A 3×3 matrix stored as nine numbers in column-major order.
///
/// The coefficients are `[a, b, c, d, e, f, tx, ty, i]`, that is the
/// basis-X column `(a, b, c)`, the basis-Y column `(d, e, f)` and the
/// translation column `(tx, ty, i)`.
///
/// For 2D affine use the bottom row `(c, f, i)` must be `(0, 0, 1)`. The
/// constructors here do not enforce it; see [`FlatMatrix::checked`] for the
/// validating form.
///
/// With the `serde` feature this serializes as a plain array of nine
/// numbers, which is the shape the composition engine emits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatMatrix([f64; 9]);

impl FlatMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Creates a matrix from raw column-major coefficients.
    #[must_use]
    #[inline]
    pub const fn new(coeffs: [f64; 9]) -> Self {
        Self(coeffs)
    }

    /// Creates a matrix from raw coefficients, rejecting a non-affine bottom row.
    ///
    /// The comparison is exact: `(0, 0, 1)` as produced by the builder passes,
    /// anything else (including NaN) is rejected.
    pub fn checked(coeffs: [f64; 9]) -> Result<Self, MatrixError> {
        let m = Self(coeffs);
        if m.is_affine() {
            Ok(m)
        } else {
            Err(MatrixError::NotAffine {
                c: coeffs[2],
                f: coeffs[5],
                i: coeffs[8],
            })
        }
    }

    /// Creates a matrix from three column vectors, in order.
    #[must_use]
    #[inline]
    pub const fn from_cols(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self([
            x_axis[0], x_axis[1], x_axis[2], y_axis[0], y_axis[1], y_axis[2], z_axis[0],
            z_axis[1], z_axis[2],
        ])
    }

    /// Returns the nine coefficients.
    #[must_use]
    #[inline]
    pub const fn as_coeffs(self) -> [f64; 9] {
        self.0
    }

    /// Returns the basis-X column `(a, b, c)`.
    #[must_use]
    #[inline]
    pub const fn x_axis(self) -> Vec3 {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Returns the basis-Y column `(d, e, f)`.
    #[must_use]
    #[inline]
    pub const fn y_axis(self) -> Vec3 {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// Returns the translation column `(tx, ty, i)`.
    #[must_use]
    #[inline]
    pub const fn translation_axis(self) -> Vec3 {
        [self.0[6], self.0[7], self.0[8]]
    }

    /// Returns the translation part `(tx, ty)`.
    #[must_use]
    #[inline]
    pub const fn translation(self) -> Vec2 {
        Vec2::new(self.0[6], self.0[7])
    }

    /// Whether the bottom row is exactly `(0, 0, 1)`.
    #[must_use]
    pub fn is_affine(self) -> bool {
        self.0[2] == 0.0 && self.0[5] == 0.0 && self.0[8] == 1.0
    }

    /// Converts to a [`kurbo::Affine`], dropping the bottom row.
    ///
    /// This is lossless for matrices that satisfy the affine precondition.
    #[must_use]
    #[inline]
    pub const fn to_affine(self) -> Affine {
        let m = self.0;
        Affine::new([m[0], m[1], m[3], m[4], m[6], m[7]])
    }
}

impl Default for FlatMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for FlatMatrix {
    fn from(affine: Affine) -> Self {
        let [a, b, d, e, tx, ty] = affine.as_coeffs();
        Self([a, b, 0.0, d, e, 0.0, tx, ty, 1.0])
    }
}

impl From<FlatMatrix> for Affine {
    fn from(m: FlatMatrix) -> Self {
        m.to_affine()
    }
}

impl From<FlatMatrix> for [f64; 9] {
    fn from(m: FlatMatrix) -> Self {
        m.0
    }
}

impl TryFrom<&[f64]> for FlatMatrix {
    type Error = MatrixError;

    /// Accepts any 9-element sequence.
    ///
    /// Only the length is checked here; chain [`FlatMatrix::checked`] when the
    /// bottom row must be validated as well.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let coeffs: [f64; 9] = values
            .try_into()
            .map_err(|_| MatrixError::WrongLength { len: values.len() })?;
        Ok(Self(coeffs))
    }
}

impl Mul for FlatMatrix {
    type Output = Self;

    /// Full 3×3 product; `self * rhs` applies `rhs` first.
    fn mul(self, rhs: Self) -> Self {
        let l = self.0;
        let r = rhs.0;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = l[row] * r[col * 3]
                    + l[3 + row] * r[col * 3 + 1]
                    + l[6 + row] * r[col * 3 + 2];
            }
        }
        Self(out)
    }
}

impl MulAssign for FlatMatrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Point> for FlatMatrix {
    type Output = Point;

    /// Maps a point through the affine part of the matrix.
    #[inline]
    fn mul(self, pt: Point) -> Point {
        let m = self.0;
        Point::new(
            m[0] * pt.x + m[3] * pt.y + m[6],
            m[1] * pt.x + m[4] * pt.y + m[7],
        )
    }
}
