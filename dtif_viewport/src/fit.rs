// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::modes::FitMode;
use crate::viewport::Viewport;

/// A uniform "contain" fit of content into a container.
///
/// The scale is the tighter of the two per-axis ratios, so the whole content
/// stays visible and its aspect ratio is preserved. The leftover space on
/// the looser axis is distributed according to the [`FitMode`].
///
/// No input is validated: zero dimensions give `inf` or `NaN` scales and
/// offsets, which flow into the [`Viewport`] unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    container: Size,
    content: Size,
    mode: FitMode,
    scale: f64,
    scaled_size: Size,
    offset: Vec2,
}

impl ContainFit {
    /// Computes the fit of `content` into `container`.
    #[must_use]
    pub fn compute(container: Size, content: Size, mode: FitMode) -> Self {
        let scale_x = container.width / content.width;
        let scale_y = container.height / content.height;
        let scale = scale_x.min(scale_y);

        let scaled_size = Size::new(content.width * scale, content.height * scale);
        let offset = match mode {
            FitMode::Center => Vec2::new(
                (container.width - scaled_size.width) / 2.0,
                (container.height - scaled_size.height) / 2.0,
            ),
            FitMode::AlignMin => Vec2::ZERO,
        };

        Self {
            container,
            content,
            mode,
            scale,
            scaled_size,
            offset,
        }
    }

    /// Uniform factor mapping content units to container units.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Content size after scaling, in container units.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    /// Position of the scaled content inside the container, in container units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The fit expressed in content space.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            Point::new(-self.offset.x / self.scale, -self.offset.y / self.scale),
            Size::new(
                self.container.width / self.scale,
                self.container.height / self.scale,
            ),
        )
    }

    /// Snapshot of the fit inputs and results for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ContainFitDebugInfo {
        ContainFitDebugInfo {
            container: self.container,
            content: self.content,
            mode: self.mode,
            scale: self.scale,
            scaled_size: self.scaled_size,
            offset: self.offset,
            viewport: self.viewport(),
        }
    }
}

/// Debug snapshot of a [`ContainFit`].
#[derive(Clone, Copy, Debug)]
pub struct ContainFitDebugInfo {
    /// Physical container size.
    pub container: Size,
    /// Logical content size.
    pub content: Size,
    /// Placement mode used for the offset.
    pub mode: FitMode,
    /// Uniform content-to-container scale.
    pub scale: f64,
    /// Content size in container units.
    pub scaled_size: Size,
    /// Offset of the scaled content in container units.
    pub offset: Vec2,
    /// Resulting content-space viewport.
    pub viewport: Viewport,
}

/// Centered contain fit of `content` into `container`.
///
/// Equivalent to `ContainFit::compute(container, content, FitMode::Center).viewport()`.
///
/// Both sizes are expected to be positive; this is a precondition, not a
/// check. See [`crate::try_fit_viewport`] for the validating form.
#[must_use]
pub fn fit_viewport(container: Size, content: Size) -> Viewport {
    fit_viewport_with(container, content, FitMode::Center)
}

/// Contain fit of `content` into `container` with an explicit [`FitMode`].
#[must_use]
pub fn fit_viewport_with(container: Size, content: Size, mode: FitMode) -> Viewport {
    ContainFit::compute(container, content, mode).viewport()
}
