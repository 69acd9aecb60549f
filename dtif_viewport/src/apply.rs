// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing a fit into a document record.
//!
//! Computing a viewport is pure; storing it is the caller's business. The
//! [`FitTarget`] trait is the seam between the two, so that document types
//! outside this crate can receive a fit without this crate knowing their
//! layout. [`CanvasFrame`] is the minimal record with the two fields a DTIF
//! document carries for this purpose.

use kurbo::Size;

use crate::fit::ContainFit;
use crate::modes::FitMode;
use crate::viewport::Viewport;

/// Something that stores the result of fitting content into a container.
pub trait FitTarget {
    /// Records a fit: the target now renders into `container` through `viewport`.
    fn apply_fit(&mut self, container: Size, viewport: Viewport);
}

/// The size and viewport fields of a DTIF document.
///
/// `size` is the physical size the document renders at; `viewport` is the
/// content-space window, or `None` until the document is first fitted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CanvasFrame {
    /// Physical render size.
    pub size: Size,
    /// Content-space window into the document.
    #[cfg_attr(feature = "serde", serde(default))]
    pub viewport: Option<Viewport>,
}

impl CanvasFrame {
    /// Creates an unfitted frame rendering at `size`.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            viewport: None,
        }
    }

    /// Returns a copy of this frame fitted into `container`.
    ///
    /// `content` is the document's logical canvas size; it is not stored.
    #[must_use]
    pub fn fitted(mut self, container: Size, content: Size) -> Self {
        apply_fit(&mut self, container, content);
        self
    }
}

impl FitTarget for CanvasFrame {
    fn apply_fit(&mut self, container: Size, viewport: Viewport) {
        self.size = container;
        self.viewport = Some(viewport);
    }
}

/// Computes the centered contain fit and hands it to `target`.
///
/// Returns the viewport that was applied.
pub fn apply_fit<T: FitTarget + ?Sized>(
    target: &mut T,
    container: Size,
    content: Size,
) -> Viewport {
    let fit = ContainFit::compute(container, content, FitMode::Center);
    let viewport = fit.viewport();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        container_width = container.width,
        container_height = container.height,
        content_width = content.width,
        content_height = content.height,
        scale = fit.scale(),
        "applying contain fit"
    );
    target.apply_fit(container, viewport);
    viewport
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{CanvasFrame, FitTarget, apply_fit};
    use crate::{Viewport, fit_viewport};

    #[test]
    fn fitted_resizes_and_sets_viewport() {
        let frame = CanvasFrame::new(Size::new(500.0, 500.0));
        let fitted = frame.fitted(Size::new(1000.0, 500.0), Size::new(500.0, 500.0));

        assert_eq!(fitted.size, Size::new(1000.0, 500.0));
        assert_eq!(
            fitted.viewport,
            Some(Viewport::new(
                Point::new(-250.0, 0.0),
                Size::new(1000.0, 500.0)
            ))
        );
        // The original value is untouched.
        assert_eq!(frame.viewport, None);
    }

    #[test]
    fn refit_replaces_previous_viewport() {
        let content = Size::new(200.0, 100.0);
        let mut frame = CanvasFrame::new(content);
        apply_fit(&mut frame, Size::new(400.0, 400.0), content);
        let second = apply_fit(&mut frame, Size::new(200.0, 100.0), content);

        assert_eq!(frame.size, Size::new(200.0, 100.0));
        assert_eq!(frame.viewport, Some(second));
        assert_eq!(second.physical_position, Point::ZERO);
    }

    #[derive(Default)]
    struct Recorder {
        calls: u32,
        last: Option<(Size, Viewport)>,
    }

    impl FitTarget for Recorder {
        fn apply_fit(&mut self, container: Size, viewport: Viewport) {
            self.calls += 1;
            self.last = Some((container, viewport));
        }
    }

    #[test]
    fn custom_targets_receive_the_pure_fit() {
        let mut rec = Recorder::default();
        let container = Size::new(640.0, 480.0);
        let content = Size::new(100.0, 100.0);
        let applied = apply_fit(&mut rec, container, content);

        assert_eq!(rec.calls, 1);
        assert_eq!(rec.last, Some((container, applied)));
        assert_eq!(applied, fit_viewport(container, content));
    }
}
