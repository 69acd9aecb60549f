// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when untrusted coefficients do not form a 2D affine [`FlatMatrix`].
///
/// Only the boundary validators produce this; the builder and decomposer
/// never fail.
///
/// [`FlatMatrix`]: crate::FlatMatrix
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MatrixError {
    /// The sequence did not contain exactly nine numbers.
    #[error("flat matrix needs 9 coefficients, got {len}")]
    WrongLength {
        /// Number of coefficients that were supplied.
        len: usize,
    },
    /// The bottom row was not `(0, 0, 1)`.
    #[error("flat matrix bottom row is ({c}, {f}, {i}), expected (0, 0, 1)")]
    NotAffine {
        /// Coefficient 2 (basis-X `z`).
        c: f64,
        /// Coefficient 5 (basis-Y `z`).
        f: f64,
        /// Coefficient 8 (translation `z`).
        i: f64,
    },
}
