// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The translate-then-scale view transform and its scale bounds.

use kurbo::{Affine, Point, Vec2};

/// Lower bound on the view scale factor.
pub const MIN_SCALE: f64 = 0.2;

/// Upper bound on the view scale factor.
pub const MAX_SCALE: f64 = 5.0;

/// A uniform pan/zoom transform: translate by `(x, y)`, then scale by `k`.
///
/// `k` is always within [`MIN_SCALE`]`..=`[`MAX_SCALE`]; every constructor
/// and mutator clamps it, so no code path can observe an out-of-range
/// scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Horizontal translation in view pixels.
    pub x: f64,
    /// Vertical translation in view pixels.
    pub y: f64,
    /// Uniform scale factor.
    pub k: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    /// Builds a transform, clamping the scale into range.
    #[must_use]
    pub fn new(x: f64, y: f64, k: f64) -> Self {
        Self {
            x,
            y,
            k: k.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    /// The equivalent affine: translation applied before scaling, matching
    /// the `translate(x, y) scale(k)` attribute order of the rendered
    /// content group.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y)) * Affine::scale(self.k)
    }

    /// Shifts the translation by a view-space delta. Scale is untouched.
    #[must_use]
    pub fn panned_by(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            k: self.k,
        }
    }

    /// Multiplies the scale by `factor`, keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// When the clamp absorbs the factor entirely the transform is
    /// returned unchanged, so pinned-at-bounds zooming never drifts the
    /// pan.
    #[must_use]
    pub fn zoomed_about(self, anchor: Point, factor: f64) -> Self {
        let k = (self.k * factor).clamp(MIN_SCALE, MAX_SCALE);
        if k == self.k {
            return self;
        }
        // World point under the anchor stays put: solve for the new
        // translation from anchor = world * k' + t'.
        let world_x = (anchor.x - self.x) / self.k;
        let world_y = (anchor.y - self.y) / self.k;
        Self {
            x: anchor.x - world_x * k,
            y: anchor.y - world_y * k,
            k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_clamped_on_construction() {
        assert_eq!(ViewTransform::new(0.0, 0.0, 0.01).k, MIN_SCALE);
        assert_eq!(ViewTransform::new(0.0, 0.0, 100.0).k, MAX_SCALE);
        assert_eq!(ViewTransform::new(0.0, 0.0, 1.5).k, 1.5);
    }

    #[test]
    fn zoom_about_keeps_the_anchor_fixed() {
        let t = ViewTransform::new(10.0, 20.0, 1.0);
        let anchor = Point::new(100.0, 80.0);
        let world = Point::new((anchor.x - t.x) / t.k, (anchor.y - t.y) / t.k);

        let zoomed = t.zoomed_about(anchor, 2.0);
        assert_eq!(zoomed.k, 2.0);
        let mapped = Point::new(world.x * zoomed.k + zoomed.x, world.y * zoomed.k + zoomed.y);
        assert!((mapped.x - anchor.x).abs() < 1e-9);
        assert!((mapped.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_pinned_at_bounds_does_not_drift_the_pan() {
        let t = ViewTransform::new(5.0, 5.0, MAX_SCALE);
        let zoomed = t.zoomed_about(Point::new(50.0, 50.0), 1.5);
        assert_eq!(zoomed, t, "saturated zoom is a no-op");
    }

    #[test]
    fn affine_translates_before_scaling() {
        let t = ViewTransform::new(10.0, 20.0, 2.0);
        // World origin lands at the translation, independent of scale.
        let mapped = t.affine() * Point::ZERO;
        assert_eq!(mapped, Point::new(10.0, 20.0));
        // A unit step in world space covers k pixels.
        let stepped = t.affine() * Point::new(1.0, 0.0);
        assert_eq!(stepped, Point::new(12.0, 20.0));
    }
}
