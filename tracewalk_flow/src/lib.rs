// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tracewalk_flow --heading-base-level=0

//! Tracewalk Flow: the reactive core of the trajectory viewer.
//!
//! Every user action enters as an [`InputEvent`] on one merged channel;
//! [`FlowGraph::apply`] reduces it into the session state (active floor,
//! timeline index, legend, view transform) synchronously, so after each
//! event all derived values reflect one consistent snapshot. The pure
//! derivations over that snapshot live in [`derive`]; unchanged results
//! are swallowed by [`Latch`] so they never re-trigger rendering.
//!
//! The one feedback path, "timeline moved onto another floor", is an
//! ordinary reduction step: selecting an index whose trace lives on a
//! different floor mutates the floor once and queues a single animated
//! centralize on that trace's bounds, guarded by the floor inequality so
//! same-floor moves do neither.
//!
//! The renderer consumes [`RenderFrame`] snapshots from
//! [`FlowGraph::frame`], passing in the content bounding box it rendered
//! last so queued centralize commands resolve against current content
//! rather than a stale box.

pub mod derive;
mod events;
mod graph;
mod latch;

pub use events::InputEvent;
pub use graph::{FlowError, FlowGraph, FrameUpdate, RenderFrame};
pub use latch::Latch;
