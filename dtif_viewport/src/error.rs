// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary validation for sizes that come from documents or the host.

use kurbo::Size;
use thiserror::Error;

use crate::fit::fit_viewport;
use crate::viewport::Viewport;

/// Error returned by [`validate_dimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DimensionsError {
    /// A component was NaN or infinite.
    #[error("dimensions must be finite, got {width}x{height}")]
    NonFinite {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// A component was zero or negative.
    #[error("dimensions must be positive, got {width}x{height}")]
    NonPositive {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
}

/// Checks that both components of `size` are finite and strictly positive.
///
/// Returns the size unchanged on success so it can be used inline.
pub fn validate_dimensions(size: Size) -> Result<Size, DimensionsError> {
    let Size { width, height } = size;
    if !width.is_finite() || !height.is_finite() {
        return Err(DimensionsError::NonFinite { width, height });
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(DimensionsError::NonPositive { width, height });
    }
    Ok(size)
}

/// Validating form of [`fit_viewport`].
///
/// Both sizes are checked with [`validate_dimensions`] first, the container
/// before the content.
pub fn try_fit_viewport(container: Size, content: Size) -> Result<Viewport, DimensionsError> {
    let container = validate_dimensions(container)?;
    let content = validate_dimensions(content)?;
    Ok(fit_viewport(container, content))
}
