// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stream-dependency graph, reduced to one merged event channel and
//! one reducer per mutable field.

use std::fmt;
use std::time::Instant;

use kurbo::{Rect, Size};
use tracing::{debug, trace};
use tracewalk_model::{DataSource, LegendState, LoadError, TimeRange};
use tracewalk_timeline::{shortcut_nav, step, OutOfRange, PrefixIndex};
use tracewalk_viewport::{
    CentralizeOutcome, CentralizeTarget, Padding, ViewTransform, ViewportController,
};

use crate::derive;
use crate::events::InputEvent;
use crate::latch::Latch;

/// A failure while applying an input event.
#[derive(Debug)]
pub enum FlowError {
    /// The loaded file did not parse; the current data source is
    /// untouched.
    Load(LoadError),
    /// A timeline index resolved to no point. Navigation clamps its
    /// indices, so this only fires for absolute selections that name a
    /// nonexistent point, which is a caller bug surfaced fail-fast.
    Index(OutOfRange),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "file load failed: {e}"),
            Self::Index(e) => write!(f, "timeline selection failed: {e}"),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Index(e) => Some(e),
        }
    }
}

impl From<LoadError> for FlowError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<OutOfRange> for FlowError {
    fn from(e: OutOfRange) -> Self {
        Self::Index(e)
    }
}

/// What one applied event changed.
///
/// Everything defaults to unchanged; the renderer can skip whole layers
/// for events that did not touch them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    /// The active floor changed.
    pub floor_changed: bool,
    /// The timeline index changed.
    pub s_index_changed: bool,
    /// The derived time window changed (post-dedup).
    pub time_range_changed: bool,
    /// A legend channel was toggled.
    pub legend_changed: bool,
    /// The data source was replaced wholesale.
    pub source_replaced: bool,
    /// A gesture moved the view transform.
    pub transform_changed: bool,
}

/// One consistent snapshot for the renderer to draw.
#[derive(Debug)]
pub struct RenderFrame<'g> {
    /// The active floor.
    pub floor: u8,
    /// The loaded traces.
    pub source: &'g DataSource,
    /// Which layers are visible.
    pub legend: LegendState,
    /// The selected point's time window.
    pub time_range: TimeRange,
    /// The selected timeline index.
    pub s_index: usize,
    /// The current view transform.
    pub transform: ViewTransform,
    /// A centralize that resolved this frame, with its animation flag.
    pub centralize: Option<CentralizeOutcome>,
}

/// The reactive core: every piece of session state and the reducers that
/// mutate it.
///
/// Construction is two-phase by design: the pure derivations live in
/// [`crate::derive`] and are recomputed from the state snapshot; the
/// state itself only changes inside [`apply`](Self::apply), which runs
/// synchronously, so every derivation after an `apply` observes one
/// consistent snapshot. The single feedback path, index-change to
/// floor-change, is an ordinary reduction step here instead of a stream
/// cycle.
#[derive(Debug)]
pub struct FlowGraph {
    source: DataSource,
    index: PrefixIndex,
    floor_id: u8,
    s_index: usize,
    legend: LegendState,
    controller: ViewportController,
    time_range: Latch<TimeRange>,
}

impl FlowGraph {
    /// Builds the graph around an initial data source.
    ///
    /// The floor is seeded from the first semantic trace (floor 0 for an
    /// empty source) and an un-animated full-content centralize is queued
    /// for the first frame.
    #[must_use]
    pub fn new(source: DataSource, viewport: Size, padding: Padding) -> Self {
        let floor_id = source.first_semantic_floor().unwrap_or(0);
        let index = PrefixIndex::new(&source.semantic_traces);
        let mut controller = ViewportController::new(viewport, padding);
        controller.request_centralize(CentralizeTarget::FloorContent, false);

        let mut time_range = Latch::new();
        time_range.update(derive::time_range(&source, 0));

        debug!(floor = floor_id, points = index.point_count(), "graph built");
        Self {
            source,
            index,
            floor_id,
            s_index: 0,
            legend: LegendState::default(),
            controller,
            time_range,
        }
    }

    /// The active floor.
    #[must_use]
    pub fn floor_id(&self) -> u8 {
        self.floor_id
    }

    /// The selected timeline index.
    #[must_use]
    pub fn s_index(&self) -> usize {
        self.s_index
    }

    /// The legend visibility flags.
    #[must_use]
    pub fn legend(&self) -> LegendState {
        self.legend
    }

    /// The loaded traces.
    #[must_use]
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// The viewport controller, for surface attachment and transform
    /// reads.
    pub fn controller(&mut self) -> &mut ViewportController {
        &mut self.controller
    }

    /// Applies one input event synchronously.
    ///
    /// On error no state has changed: a failed file load leaves the
    /// current data source displayed, and a bad absolute selection leaves
    /// the timeline where it was.
    pub fn apply(&mut self, event: InputEvent, now: Instant) -> Result<FrameUpdate, FlowError> {
        let mut update = FrameUpdate::default();
        match event {
            InputEvent::LoadFile { json } => {
                let source = DataSource::from_json(&json)?;
                debug!(points = source.semantic_point_count(), "data source replaced");
                self.index = PrefixIndex::new(&source.semantic_traces);
                self.source = source;
                // The active floor is retained across a file swap; only
                // the initial data source seeds it.
                self.s_index = 0;
                self.controller
                    .request_centralize(CentralizeTarget::FloorContent, false);
                update.source_replaced = true;
                update.s_index_changed = true;
            }
            InputEvent::ChooseFloor(floor) => {
                if floor != self.floor_id {
                    debug!(from = self.floor_id, to = floor, "floor chosen");
                    self.floor_id = floor;
                    update.floor_changed = true;
                }
            }
            InputEvent::SelectTimeline(s_index) | InputEvent::PickPoint(s_index) => {
                self.select_index(s_index, &mut update)?;
            }
            InputEvent::Nav(nav) => {
                let next = step(self.s_index, nav, self.index.point_count());
                if next != self.s_index {
                    self.select_index(next, &mut update)?;
                }
            }
            InputEvent::Keyboard(key_event) => {
                if key_event.state.is_down()
                    && let Some(nav) = shortcut_nav(&key_event.key)
                {
                    let next = step(self.s_index, nav, self.index.point_count());
                    if next != self.s_index {
                        self.select_index(next, &mut update)?;
                    }
                }
            }
            InputEvent::ToggleLegend(channel) => {
                self.legend.toggle_channel(channel);
                debug!(?channel, "legend toggled");
                update.legend_changed = true;
            }
            InputEvent::Pointer(pointer_event) => {
                update.transform_changed = self.controller.handle_pointer(&pointer_event);
            }
            InputEvent::Resize(size) => {
                self.controller.note_resize(size, now);
            }
            InputEvent::Centralize => {
                self.controller
                    .request_centralize(CentralizeTarget::FloorContent, true);
            }
        }

        let range = derive::time_range(&self.source, self.s_index);
        update.time_range_changed = self.time_range.update(range);
        if !update.time_range_changed {
            trace!("time range unchanged, emission suppressed");
        }
        Ok(update)
    }

    /// Fires the debounced resize refit when its quiet period has
    /// elapsed. Call periodically (per animation frame is fine).
    pub fn poll(&mut self, now: Instant) -> bool {
        self.controller.poll_resize(now)
    }

    /// Resolves pending centralize commands against the floor content box
    /// sampled now, and assembles the snapshot for the renderer.
    pub fn frame(&mut self, floor_content: Rect) -> RenderFrame<'_> {
        let centralize = self.controller.resolve_centralize(floor_content);
        RenderFrame {
            floor: self.floor_id,
            source: &self.source,
            legend: self.legend,
            time_range: derive::time_range(&self.source, self.s_index),
            s_index: self.s_index,
            transform: self.controller.transform(),
            centralize,
        }
    }

    /// Absolute timeline selection, with the cross-floor feedback step.
    ///
    /// When the newly selected point's trace lives on another floor, the
    /// floor mutates once and one animated centralize on that trace's
    /// bounds is queued; a same-floor move does neither. The guard is the
    /// floor inequality itself, so repeated selections inside one trace
    /// cannot flicker the floor.
    fn select_index(
        &mut self,
        s_index: usize,
        update: &mut FrameUpdate,
    ) -> Result<(), OutOfRange> {
        let location = self.index.locate(s_index)?;
        if s_index != self.s_index {
            self.s_index = s_index;
            update.s_index_changed = true;
        }
        if location.floor != self.floor_id {
            debug!(
                from = self.floor_id,
                to = location.floor,
                s_index,
                "cross-floor jump"
            );
            self.floor_id = location.floor;
            update.floor_changed = true;
            if let Some(bounds) = self.source.semantic_traces[location.trace_index].bounds() {
                self.controller
                    .request_centralize(CentralizeTarget::Bounds(bounds), true);
            }
        }
        Ok(())
    }
}
