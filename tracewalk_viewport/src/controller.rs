// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful viewport controller: gesture handling, the centralize
//! queue, and the resize debounce.

use std::time::{Duration, Instant};

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};
use ui_events::pointer::{PointerEvent, PointerGesture, PointerScrollEvent, PointerUpdate};
use ui_events::ScrollDelta;

use crate::fit::{fit, Padding};
use crate::transform::ViewTransform;

/// Quiet period after the last resize before the viewport refits.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Wheel-to-zoom rate: one 500px scroll doubles or halves the scale.
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Pixels per scroll line, for devices reporting line deltas.
const LINE_SIZE: f64 = 20.0;

/// What a centralize command should frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CentralizeTarget {
    /// The full extent of the current floor's rendered content, sampled
    /// when the command is resolved rather than when it was issued.
    FloorContent,
    /// A specific world-space box, e.g. the bounds of one trace.
    Bounds(Rect),
}

/// A queued centralize command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentralizeRequest {
    /// What to frame.
    pub target: CentralizeTarget,
    /// Whether the renderer should transition smoothly to the new
    /// transform instead of snapping.
    pub animate: bool,
}

/// A resolved centralize: the transform now in effect and how to get
/// there visually.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentralizeOutcome {
    /// The transform the viewport settled on.
    pub transform: ViewTransform,
    /// Whether to animate the transition.
    pub animate: bool,
}

/// Pointer-drag tracking: start anchor plus last seen position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragState {
    fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Movement since the previous update, `None` when not dragging.
    fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}

/// Owner of the view transform.
///
/// All transform mutations flow through here: pointer gestures mutate it
/// directly, centralize commands are queued and resolved against a
/// content box sampled at resolution time, and window resizes refit
/// after a [`RESIZE_DEBOUNCE`] quiet period.
#[derive(Debug)]
pub struct ViewportController {
    transform: ViewTransform,
    viewport: Size,
    padding: Padding,
    drag: DragState,
    pending: SmallVec<[CentralizeRequest; 2]>,
    resize_deadline: Option<Instant>,
    surface_attached: bool,
}

impl ViewportController {
    /// A controller at the identity transform for the given window size.
    #[must_use]
    pub fn new(viewport: Size, padding: Padding) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            viewport,
            padding,
            drag: DragState::default(),
            pending: SmallVec::new(),
            resize_deadline: None,
            surface_attached: false,
        }
    }

    /// The current view transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The current window size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Claims the render surface binding. The first call returns `true`;
    /// every later call returns `false`, so gesture wiring happens
    /// exactly once however many times the canvas re-renders.
    pub fn attach_surface(&mut self) -> bool {
        if self.surface_attached {
            return false;
        }
        self.surface_attached = true;
        true
    }

    /// Feeds a pointer event through the gesture state machine.
    ///
    /// Drag pans, scroll and pinch zoom about the pointer. Returns `true`
    /// when the transform changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => {
                self.drag.start(e.state.logical_point());
                false
            }
            PointerEvent::Up(_) | PointerEvent::Cancel(_) => {
                self.drag.end();
                false
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                let Some(delta) = self.drag.update(current.logical_point()) else {
                    return false;
                };
                self.transform = self.transform.panned_by(delta);
                trace!(dx = delta.x, dy = delta.y, "drag pan");
                true
            }
            PointerEvent::Scroll(scroll) => {
                let delta = self.scroll_pixels(scroll);
                if delta.y == 0.0 {
                    return false;
                }
                let factor = (-delta.y * WHEEL_ZOOM_RATE).exp2();
                self.zoom_about(scroll.state.logical_point(), factor)
            }
            PointerEvent::Gesture(gesture) => {
                let PointerGesture::Pinch(delta) = &gesture.gesture else {
                    return false;
                };
                let factor = 1.0 + f64::from(*delta);
                if factor <= 0.0 {
                    return false;
                }
                self.zoom_about(gesture.state.logical_point(), factor)
            }
            PointerEvent::Enter(_) | PointerEvent::Leave(_) => false,
        }
    }

    fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        let zoomed = self.transform.zoomed_about(anchor, factor);
        if zoomed == self.transform {
            return false;
        }
        trace!(factor, k = zoomed.k, "zoom");
        self.transform = zoomed;
        true
    }

    fn scroll_pixels(&self, event: &PointerScrollEvent) -> Vec2 {
        match &event.delta {
            ScrollDelta::PixelDelta(pos) => {
                let logical = pos.to_logical(event.state.scale_factor);
                Vec2::new(logical.x, logical.y)
            }
            ScrollDelta::LineDelta(x, y) => {
                Vec2::new(f64::from(*x) * LINE_SIZE, f64::from(*y) * LINE_SIZE)
            }
            ScrollDelta::PageDelta(x, y) => Vec2::new(
                f64::from(*x) * self.viewport.width,
                f64::from(*y) * self.viewport.height,
            ),
        }
    }

    /// Queues a centralize command. Nothing happens until
    /// [`resolve_centralize`](Self::resolve_centralize) runs with a
    /// freshly sampled content box.
    pub fn request_centralize(&mut self, target: CentralizeTarget, animate: bool) {
        self.pending.push(CentralizeRequest { target, animate });
    }

    /// Whether any centralize commands are waiting.
    #[must_use]
    pub fn has_pending_centralize(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Resolves all queued centralize commands against `floor_content`,
    /// the rendered extent of the current floor sampled now.
    ///
    /// Commands apply in order; the returned outcome reflects the last
    /// one that produced a fit. Commands whose box cannot be fitted are
    /// dropped, never retried. Returns `None` when the queue was empty
    /// or nothing fit.
    pub fn resolve_centralize(&mut self, floor_content: Rect) -> Option<CentralizeOutcome> {
        let mut outcome = None;
        for request in self.pending.drain(..) {
            let target = match request.target {
                CentralizeTarget::FloorContent => floor_content,
                CentralizeTarget::Bounds(rect) => rect,
            };
            if let Some(transform) = fit(target, self.viewport, self.padding) {
                self.transform = transform;
                debug!(
                    k = transform.k,
                    animate = request.animate,
                    "centralize resolved"
                );
                outcome = Some(CentralizeOutcome {
                    transform,
                    animate: request.animate,
                });
            }
        }
        outcome
    }

    /// Records a window resize. The new size takes effect immediately
    /// for scroll-delta resolution, but the refit waits for
    /// [`poll_resize`](Self::poll_resize) after the debounce quiet
    /// period; a burst of resize events refits once.
    pub fn note_resize(&mut self, viewport: Size, now: Instant) {
        self.viewport = viewport;
        self.resize_deadline = Some(now + RESIZE_DEBOUNCE);
    }

    /// Fires the debounced refit if its quiet period has elapsed,
    /// queueing an animated full-content centralize. Returns `true` when
    /// it fired.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        match self.resize_deadline {
            Some(deadline) if now >= deadline => {
                self.resize_deadline = None;
                debug!(w = self.viewport.width, h = self.viewport.height, "resize refit");
                self.request_centralize(CentralizeTarget::FloorContent, true);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{MAX_SCALE, MIN_SCALE};

    fn controller() -> ViewportController {
        ViewportController::new(Size::new(1000.0, 800.0), Padding::uniform(100.0))
    }

    #[test]
    fn surface_attaches_exactly_once() {
        let mut c = controller();
        assert!(c.attach_surface());
        assert!(!c.attach_surface());
        assert!(!c.attach_surface());
    }

    #[test]
    fn centralize_waits_for_resolution() {
        let mut c = controller();
        c.request_centralize(CentralizeTarget::FloorContent, false);
        assert!(c.has_pending_centralize());
        assert_eq!(c.transform(), ViewTransform::IDENTITY, "queued, not applied");

        let outcome = c
            .resolve_centralize(Rect::new(0.0, 0.0, 400.0, 300.0))
            .unwrap();
        assert!(!outcome.animate);
        assert_eq!(outcome.transform, c.transform());
        assert_eq!(outcome.transform.k, 2.0, "frame 800x600 over box 400x300");
        assert!(!c.has_pending_centralize());
    }

    #[test]
    fn last_queued_centralize_wins() {
        let mut c = controller();
        c.request_centralize(CentralizeTarget::Bounds(Rect::new(0.0, 0.0, 100.0, 100.0)), false);
        c.request_centralize(CentralizeTarget::Bounds(Rect::new(0.0, 0.0, 400.0, 400.0)), true);

        let outcome = c.resolve_centralize(Rect::ZERO).unwrap();
        assert!(outcome.animate);
        assert_eq!(outcome.transform.k, 600.0 / 400.0, "fitted to the later box");
    }

    #[test]
    fn empty_queue_resolves_to_nothing() {
        let mut c = controller();
        assert!(c.resolve_centralize(Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn resize_refit_waits_out_the_quiet_period() {
        let mut c = controller();
        let t0 = Instant::now();
        c.note_resize(Size::new(1200.0, 900.0), t0);
        assert!(!c.poll_resize(t0), "still within the debounce window");
        assert!(!c.poll_resize(t0 + Duration::from_millis(150)));

        assert!(c.poll_resize(t0 + RESIZE_DEBOUNCE));
        assert!(c.has_pending_centralize(), "refit queued as a centralize");
        assert!(!c.poll_resize(t0 + Duration::from_secs(1)), "fires once");
    }

    #[test]
    fn resize_burst_refits_once() {
        let mut c = controller();
        let t0 = Instant::now();
        c.note_resize(Size::new(900.0, 700.0), t0);
        c.note_resize(Size::new(950.0, 750.0), t0 + Duration::from_millis(100));
        c.note_resize(Size::new(1000.0, 800.0), t0 + Duration::from_millis(180));

        // The first deadline has passed, but the burst pushed it out.
        assert!(!c.poll_resize(t0 + Duration::from_millis(250)));
        assert!(c.poll_resize(t0 + Duration::from_millis(380)));
        assert_eq!(c.viewport(), Size::new(1000.0, 800.0), "latest size sticks");
    }

    #[test]
    fn zoom_stays_within_scale_bounds() {
        let mut c = controller();
        let anchor = Point::new(500.0, 400.0);
        for _ in 0..100 {
            c.zoom_about(anchor, 2.0);
        }
        assert_eq!(c.transform().k, MAX_SCALE);
        for _ in 0..100 {
            c.zoom_about(anchor, 0.5);
        }
        assert_eq!(c.transform().k, MIN_SCALE);
    }
}
