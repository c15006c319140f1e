// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The primitive input events feeding the derivation graph.

use kurbo::Size;
use tracewalk_model::TraceChannel;
use tracewalk_timeline::TimelineNav;
use ui_events::keyboard::KeyboardEvent;
use ui_events::pointer::PointerEvent;

/// Everything the outside world can push into the graph.
///
/// One merged channel carries all sources; each event mutates at most one
/// piece of state, and every derivation downstream of the mutation
/// observes the fully updated snapshot before the next event is accepted.
#[derive(Debug)]
pub enum InputEvent {
    /// A capture file was opened; `json` is its full content.
    LoadFile {
        /// Raw file content, parsed into a data source.
        json: String,
    },
    /// Absolute floor selection from the floor chooser.
    ChooseFloor(u8),
    /// Absolute timeline selection from a timeline item click.
    SelectTimeline(usize),
    /// Absolute timeline selection from a click on a rendered semantic
    /// point.
    PickPoint(usize),
    /// A clamped next/prev timeline move.
    Nav(TimelineNav),
    /// A raw keyboard event, mapped through the shortcut table.
    Keyboard(KeyboardEvent),
    /// Visibility toggle for one legend entry.
    ToggleLegend(TraceChannel),
    /// A pointer gesture over the canvas (drag, scroll, pinch).
    Pointer(PointerEvent),
    /// The window changed size.
    Resize(Size),
    /// The explicit "centralize" action.
    Centralize,
}
