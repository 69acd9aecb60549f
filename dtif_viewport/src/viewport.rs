// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// The region of content space that a physical container reveals.
///
/// Both fields are in the content's own coordinates. After a contain fit the
/// rectangle has the container's aspect ratio and encloses the whole
/// content, so letterbox bars show up as negative `physical_position`
/// components or a `physical_size` larger than the content.
///
/// With the `serde` feature this serializes as
/// `{ "physicalPosition": { "x", "y" }, "physicalSize": { "width", "height" } }`,
/// the shape carried by the engine's resize event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Viewport {
    /// Content-space point shown at the container's top-left corner.
    pub physical_position: Point,
    /// Content-space extent of the whole container.
    pub physical_size: Size,
}

impl Viewport {
    /// Creates a viewport from its two fields.
    #[must_use]
    pub const fn new(physical_position: Point, physical_size: Size) -> Self {
        Self {
            physical_position,
            physical_size,
        }
    }

    /// Returns the revealed content-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.physical_position, self.physical_size)
    }

    /// Recovers the uniform scale this viewport implies for `container`.
    ///
    /// For a viewport produced by a contain fit into `container` this equals
    /// the fit's scale; the width ratio is used.
    #[must_use]
    pub fn scale_for(&self, container: Size) -> f64 {
        container.width / self.physical_size.width
    }

    /// Maps content coordinates into container (device) coordinates.
    #[must_use]
    pub fn content_to_container(&self, container: Size) -> Affine {
        Affine::scale(self.scale_for(container))
            * Affine::translate(-self.physical_position.to_vec2())
    }

    /// Maps container (device) coordinates back into content coordinates.
    #[must_use]
    pub fn container_to_content(&self, container: Size) -> Affine {
        Affine::translate(self.physical_position.to_vec2())
            * Affine::scale(1.0 / self.scale_for(container))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::Viewport;

    #[test]
    fn rect_spans_position_and_size() {
        let vp = Viewport::new(Point::new(-250.0, 0.0), Size::new(1000.0, 500.0));
        assert_eq!(vp.rect(), Rect::new(-250.0, 0.0, 750.0, 500.0));
    }

    #[test]
    fn transforms_are_inverse() {
        let container = Size::new(800.0, 600.0);
        let vp = Viewport::new(Point::new(-10.0, -40.0), Size::new(400.0, 300.0));
        assert_eq!(vp.scale_for(container), 2.0);

        let pt = Point::new(33.0, -7.5);
        let there = vp.content_to_container(container) * pt;
        let back = vp.container_to_content(container) * there;
        assert!((back.x - pt.x).abs() < 1e-9);
        assert!((back.y - pt.y).abs() < 1e-9);
    }

    #[test]
    fn position_maps_to_container_origin() {
        let container = Size::new(800.0, 600.0);
        let vp = Viewport::new(Point::new(-10.0, -40.0), Size::new(400.0, 300.0));
        let origin = vp.content_to_container(container) * vp.physical_position;
        assert_eq!(origin, Point::ZERO);
    }
}
