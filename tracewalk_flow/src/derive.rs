// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure derivations over the current state snapshot.
//!
//! Each function here is total and deterministic: same inputs, same
//! output, structurally. They are recomputed freely on every upstream
//! change; callers pair them with a [`Latch`](crate::Latch) to keep
//! unchanged results from re-triggering rendering.

use tracewalk_model::{
    DataSource, LegendState, PlainChannel, RawTrace, RawTracePoint, SemanticTrace, TimeRange,
    TraceChannel,
};

/// The `[start, end]` window of the selected point, or the sentinel when
/// the index selects nothing (empty data source, stale index).
#[must_use]
pub fn time_range(source: &DataSource, s_index: usize) -> TimeRange {
    match source.point_at(s_index) {
        Some(point) => TimeRange {
            start: point.start_time,
            end: point.end_time,
        },
        None => TimeRange::EMPTY,
    }
}

/// The traces of one plain channel on the active floor, or nothing when
/// the legend hides the channel.
#[must_use]
pub fn visible_plain_traces<'s>(
    source: &'s DataSource,
    legend: LegendState,
    channel: PlainChannel,
    floor: u8,
) -> Vec<&'s RawTrace> {
    if !legend.is_visible(TraceChannel::Plain(channel)) {
        return Vec::new();
    }
    source
        .plain_traces(channel)
        .iter()
        .filter(|trace| trace.floor_id() == Some(floor))
        .collect()
}

/// The points of one plain channel on the active floor that fall inside
/// the active time window.
///
/// With the sentinel window no points are visible; the channel's path is
/// still drawn from [`visible_plain_traces`], only the point markers are
/// time-gated.
#[must_use]
pub fn visible_plain_points<'s>(
    source: &'s DataSource,
    legend: LegendState,
    channel: PlainChannel,
    floor: u8,
    range: TimeRange,
) -> Vec<&'s RawTracePoint> {
    visible_plain_traces(source, legend, channel, floor)
        .into_iter()
        .flat_map(|trace| trace.data.iter())
        .filter(|point| range.contains(point.time))
        .collect()
}

/// The semantic episodes on the active floor, or nothing when the legend
/// hides the semantic layer. Episodes are never time-gated: a full
/// episode is always shown on its floor while the layer is on.
#[must_use]
pub fn visible_semantic_traces<'s>(
    source: &'s DataSource,
    legend: LegendState,
    floor: u8,
) -> Vec<&'s SemanticTrace> {
    if !legend.is_visible(TraceChannel::Semantic) {
        return Vec::new();
    }
    source
        .semantic_traces
        .iter()
        .filter(|trace| trace.floor == floor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Latch;

    const FIXTURE: &str = r#"{
        "startTime": 1000,
        "groundTruthTraces": [
            {"floor": "0", "data": [
                {"x": 1, "y": 2, "time": 1005},
                {"x": 2, "y": 2, "time": 1030}
            ]},
            {"floor": "1", "data": [{"x": 7, "y": 8, "time": 1055}]}
        ],
        "rawTraces": [
            {"floor": "0", "data": [{"x": 1, "y": 2, "time": 1006}]}
        ],
        "semanticTraces": [
            {"floor": 0, "data": [
                {"x": 1, "y": 2, "startTime": 1001, "endTime": 1010, "event": "stay"},
                {"x": 3, "y": 2, "startTime": 1010, "endTime": 1011, "event": "pass-by"}
            ]},
            {"floor": 1, "data": [
                {"x": 7, "y": 8, "startTime": 1050, "endTime": 1060, "event": "stay"}
            ]}
        ]
    }"#;

    fn source() -> DataSource {
        DataSource::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn time_range_follows_the_selected_point() {
        let source = source();
        assert_eq!(
            time_range(&source, 0),
            TimeRange {
                start: 1001.0,
                end: 1010.0
            }
        );
        assert_eq!(
            time_range(&source, 2),
            TimeRange {
                start: 1050.0,
                end: 1060.0
            }
        );
        assert_eq!(time_range(&source, 99), TimeRange::EMPTY);
    }

    #[test]
    fn hidden_channel_derives_to_nothing() {
        let source = source();
        let legend = LegendState::default(); // raw is off by default
        assert!(visible_plain_traces(&source, legend, PlainChannel::Raw, 0).is_empty());
        assert_eq!(
            visible_plain_traces(&source, legend, PlainChannel::GroundTruth, 0).len(),
            1,
            "ground truth is on and floor-filtered"
        );
    }

    #[test]
    fn points_are_gated_by_floor_and_time() {
        let source = source();
        let legend = LegendState::default();
        let range = TimeRange {
            start: 1001.0,
            end: 1010.0,
        };

        let points =
            visible_plain_points(&source, legend, PlainChannel::GroundTruth, 0, range);
        assert_eq!(points.len(), 1, "only the 1005 sample falls in the window");
        assert_eq!(points[0].time, 1005.0);

        assert!(
            visible_plain_points(&source, legend, PlainChannel::GroundTruth, 0, TimeRange::EMPTY)
                .is_empty(),
            "sentinel window shows no points"
        );
    }

    #[test]
    fn semantic_traces_are_floor_filtered_but_not_time_gated() {
        let source = source();
        let legend = LegendState::default();
        let on_floor_1 = visible_semantic_traces(&source, legend, 1);
        assert_eq!(on_floor_1.len(), 1);
        assert_eq!(on_floor_1[0].floor, 1);

        let mut legend = legend;
        legend.toggle_channel(TraceChannel::Semantic);
        assert!(visible_semantic_traces(&source, legend, 1).is_empty());
    }

    #[test]
    fn identical_inputs_derive_identically_and_latch_suppresses() {
        let source = source();
        let legend = LegendState::default();

        let first = visible_plain_traces(&source, legend, PlainChannel::GroundTruth, 0);
        let second = visible_plain_traces(&source, legend, PlainChannel::GroundTruth, 0);
        assert_eq!(first, second, "pure derivation");

        let mut latch = Latch::new();
        assert!(latch.update(first));
        assert!(!latch.update(second), "second emission suppressed");
    }
}
