// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracewalk Model: floor plans, movement traces, and data sources.
//!
//! This crate defines the static and loaded data the Tracewalk viewer core
//! operates on:
//!
//! - [`Floor`] and [`FloorRegistry`]: vector floor plans (regions, doors,
//!   walls, named nodes), loaded once at startup and immutable afterwards.
//! - [`RawTrace`]: the three unclassified point-sequence channels
//!   (ground-truth, raw, cleaned-raw) sharing one shape.
//! - [`SemanticTrace`] / [`TracePoint`]: classified movement episodes with
//!   the flat `s_index` coordinate the timeline operates in.
//! - [`DataSource`]: the root load unit, replaced wholesale on file open.
//!   [`DataSource::from_json`] parses and runs the load-time preprocessing
//!   pass (assigning `trace_index` and `s_index`) before returning, so a
//!   parse failure can never leave a half-initialized value behind.
//! - [`LegendState`] / [`TraceChannel`]: per-channel visibility flags.
//! - [`TimeRange`]: the derived `[start, end]` window of the selected
//!   semantic point, with a `{-1, -1}` sentinel for "no selection".
//! - [`floor_stats`]: per-floor raw-record counts for the floor chooser.
//!
//! The wire format is camelCase JSON; see [`DataSource`] for the shape.

mod floor;
mod legend;
mod source;
mod stats;
mod time;
mod trace;

pub use floor::{Door, Floor, FloorConfig, FloorRegistry, LabelConfig, Line, Node, Point, Region};
pub use legend::{LegendState, PlainChannel, TraceChannel, SEMANTIC_COLOR, SEMANTIC_STAY_COLOR};
pub use source::{DataSource, LoadError};
pub use stats::{floor_stats, FloorStat};
pub use time::{format_clock, TimeRange};
pub use trace::{
    strip_points, RawTrace, RawTracePoint, SemanticEvent, SemanticTrace, TracePoint,
};
