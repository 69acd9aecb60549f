// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DTIF Viewport: contain-fit viewports for design canvases.
//!
//! A DTIF document is authored on a logical canvas (its content size). When
//! it is shown in a physical container of a different aspect ratio, the
//! content is scaled uniformly so that it is fully visible and centered
//! ("contain" or letterbox fit). The engine is told about this through a
//! [`Viewport`]: the rectangle of *content space* that the container
//! reveals, including the letterbox bars.
//!
//! This crate provides:
//! - [`fit_viewport`], the pure centered contain fit.
//! - [`ContainFit`] and [`FitMode`] for callers that need the intermediate
//!   scale and offset, or a fit pinned to the container origin.
//! - [`FitTarget`], [`CanvasFrame`] and [`apply_fit`] to write a fit into a
//!   document record, kept apart from the math.
//! - [`validate_dimensions`] / [`try_fit_viewport`] for the boundary where
//!   sizes come from untrusted input.
//!
//! ## Example
//!
//! ```rust
//! use dtif_viewport::{Dimensions, fit_viewport};
//! use kurbo::Point;
//!
//! // A 500x500 design in a 1000x500 window: bars left and right.
//! let viewport = fit_viewport(Dimensions::new(1000.0, 500.0), Dimensions::new(500.0, 500.0));
//! assert_eq!(viewport.physical_position, Point::new(-250.0, 0.0));
//! assert_eq!(viewport.physical_size, Dimensions::new(1000.0, 500.0));
//! ```
//!
//! ## Design notes
//!
//! - The fit functions never validate. Zero or negative dimensions propagate
//!   as `inf`/`NaN` through IEEE-754 arithmetic instead of panicking.
//! - `f64::min` ignores a NaN operand, so a NaN on one axis lets the other
//!   axis choose the scale.
//! - Applying a fit to a document is a separate, explicit step; computing a
//!   viewport never mutates anything.
//!
//! This crate is `no_std`.

#![no_std]

mod apply;
mod error;
mod fit;
mod modes;
mod viewport;

pub use apply::{CanvasFrame, FitTarget, apply_fit};
pub use error::{DimensionsError, try_fit_viewport, validate_dimensions};
pub use fit::{ContainFit, ContainFitDebugInfo, fit_viewport, fit_viewport_with};
pub use modes::FitMode;
pub use viewport::Viewport;

/// Width/height pair used for both content and container sizes.
pub type Dimensions = kurbo::Size;
