// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DTIF Transform: flat 3×3 affine matrices for design-tree node transforms.
//!
//! DTIF stores every node transform as nine numbers `[a, b, c, d, e, f, tx, ty, i]`,
//! three column vectors of a 3×3 matrix:
//!
//! ```text
//! | a d tx |
//! | b e ty |
//! | c f i  |
//! ```
//!
//! For 2D affine transforms the bottom row is always `(0, 0, 1)`.
//!
//! This crate provides:
//! - [`FlatMatrix`], a `Copy` value type over the nine coefficients, with
//!   conversions to and from [`kurbo::Affine`].
//! - The builder: [`build_transform`] (position + rotation in degrees) and
//!   [`compose_basis`] (three caller-computed basis vectors).
//! - The decomposer: [`decompose_radians`] and [`decompose_degrees`], which
//!   extract translation, rotation and scale for display and editing, plus
//!   [`recompose_radians`] / [`recompose_degrees`] to go back.
//!
//! All functions are pure and total over `f64`. Preconditions such as the
//! affine bottom row are documented, not checked; callers at the document
//! boundary use [`FlatMatrix::checked`] or `TryFrom<&[f64]>` to reject bad
//! input before it reaches the math.
//!
//! ## Example
//!
//! ```rust
//! use dtif_transform::{build_transform, decompose_degrees};
//!
//! let m = build_transform(100.0, 50.0, 90.0);
//! let t = decompose_degrees(&m);
//!
//! assert!((t.translation_x - 100.0).abs() < 1e-9);
//! assert!((t.translation_y - 50.0).abs() < 1e-9);
//! assert!((t.rotation - 90.0).abs() < 1e-9);
//! assert!((t.scale_x - 1.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod builder;
mod decompose;
mod error;
mod matrix;

pub use builder::{build_transform, build_transform_radians, compose_basis};
pub use decompose::{
    Decomposed2DTransform, decompose_degrees, decompose_radians, recompose_degrees,
    recompose_radians,
};
pub use error::MatrixError;
pub use matrix::{FlatMatrix, Vec3};
