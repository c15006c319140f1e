// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit-and-center: computing the transform that frames a content box
//! inside the padded viewport.

use kurbo::{Rect, Size};

use crate::transform::{ViewTransform, MAX_SCALE, MIN_SCALE};

/// Span substituted for a degenerate content axis, centered on the
/// original coordinate. A single stay point still gets a sensible frame
/// instead of an unbounded scale.
const DEGENERATE_SPAN: f64 = 200.0;

/// Pixel insets carving the usable frame out of the window.
///
/// The left inset is the widest: it reserves room for the floor list and
/// timeline panels that overlay the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl Padding {
    /// The same inset on all four edges.
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            bottom: inset,
            left: inset,
            right: inset,
        }
    }
}

impl Default for Padding {
    /// The overlay layout of the viewer: wide left inset for the floor
    /// and timeline panels, narrower right inset for the legend.
    fn default() -> Self {
        Self {
            top: 50.0,
            bottom: 50.0,
            left: 450.0,
            right: 360.0,
        }
    }
}

/// Computes the transform that centers `content` in the padded viewport
/// at the largest in-range scale that still shows all of it.
///
/// A zero-width or zero-height content box (a single point, a purely
/// horizontal or vertical trace) is widened to a 200-unit span centered
/// on the degenerate axis before fitting. The scale is
/// `min(sx, sy)` clamped to [`MIN_SCALE`]`..=`[`MAX_SCALE`]; clamping
/// changes the scale but the content box center is still mapped onto the
/// padded frame center. Returns `None` only when a content dimension is
/// still not positive after substitution (an empty or malformed box).
#[must_use]
pub fn fit(content: Rect, viewport: Size, padding: Padding) -> Option<ViewTransform> {
    let mut box_x = content.x0;
    let mut box_y = content.y0;
    let mut box_w = content.width();
    let mut box_h = content.height();

    if box_w == 0.0 {
        box_w = DEGENERATE_SPAN;
        box_x -= DEGENERATE_SPAN / 2.0;
    }
    if box_h == 0.0 {
        box_h = DEGENERATE_SPAN;
        box_y -= DEGENERATE_SPAN / 2.0;
    }
    if !(box_w > 0.0 && box_h > 0.0) {
        return None;
    }

    let frame_x = padding.left;
    let frame_y = padding.top;
    let frame_w = viewport.width - padding.left - padding.right;
    let frame_h = viewport.height - padding.top - padding.bottom;

    let scale = (frame_w / box_w)
        .min(frame_h / box_h)
        .clamp(MIN_SCALE, MAX_SCALE);
    let dx = frame_x + frame_w / 2.0 - (box_x + box_w / 2.0) * scale;
    let dy = frame_y + frame_h / 2.0 - (box_y + box_h / 2.0) * scale;
    Some(ViewTransform { x: dx, y: dy, k: scale })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn frame_center(viewport: Size, padding: Padding) -> Point {
        Point::new(
            padding.left + (viewport.width - padding.left - padding.right) / 2.0,
            padding.top + (viewport.height - padding.top - padding.bottom) / 2.0,
        )
    }

    #[test]
    fn content_center_lands_on_the_padded_frame_center() {
        let content = Rect::new(100.0, 100.0, 500.0, 300.0);
        let viewport = Size::new(1600.0, 900.0);
        let padding = Padding::default();

        let t = fit(content, viewport, padding).unwrap();
        let mapped = t.affine() * content.center();
        let expected = frame_center(viewport, padding);
        assert!((mapped.x - expected.x).abs() < 1e-9);
        assert!((mapped.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn scale_is_the_limiting_axis() {
        // Frame is 790x800 with uniform padding on a 1000x1010 window; a
        // 100x400 box is height-limited.
        let viewport = Size::new(1000.0, 1010.0);
        let padding = Padding::uniform(105.0);
        let t = fit(Rect::new(0.0, 0.0, 100.0, 400.0), viewport, padding).unwrap();
        assert_eq!(t.k, 2.0, "height-limited: 800 / 400");
    }

    #[test]
    fn point_box_gets_a_substituted_span() {
        let viewport = Size::new(1000.0, 800.0);
        let padding = Padding::uniform(100.0);
        let t = fit(Rect::new(40.0, 60.0, 40.0, 60.0), viewport, padding).unwrap();
        // Substituted box is 200x200 centered on (40, 60); frame is
        // 800x600, so the height limits: 600 / 200 = 3.
        assert_eq!(t.k, 3.0);
        let mapped = t.affine() * Point::new(40.0, 60.0);
        assert!((mapped.x - 500.0).abs() < 1e-9);
        assert!((mapped.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn empty_box_in_the_overlay_layout_still_fits() {
        // The default layout leaves a negative-width frame on an 800px
        // window; the clamp floors the scale and the result stays usable.
        let t = fit(
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Size::new(800.0, 600.0),
            Padding::default(),
        )
        .unwrap();
        assert_eq!(t.k, MIN_SCALE);
        assert!(t.x.is_finite() && t.y.is_finite());
    }

    #[test]
    fn scale_clamps_at_both_bounds() {
        let viewport = Size::new(1000.0, 1000.0);
        let padding = Padding::uniform(0.0);
        // Tiny content would need k = 100.
        let tiny = fit(Rect::new(0.0, 0.0, 10.0, 10.0), viewport, padding).unwrap();
        assert_eq!(tiny.k, MAX_SCALE);
        // Huge content would need k = 0.01.
        let huge = fit(Rect::new(0.0, 0.0, 1e5, 1e5), viewport, padding).unwrap();
        assert_eq!(huge.k, MIN_SCALE);
    }

    #[test]
    fn nan_box_is_rejected() {
        let t = fit(
            Rect::new(0.0, 0.0, f64::NAN, 100.0),
            Size::new(800.0, 600.0),
            Padding::uniform(10.0),
        );
        assert!(t.is_none());
    }
}
