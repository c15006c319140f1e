// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner lookup: which semantic trace a flat timeline index lands in.

use std::fmt;

use tracewalk_model::SemanticTrace;

/// Error returned when a flat index exceeds the total point count.
///
/// Upstream navigation clamps indices, so hitting this at runtime means a
/// derivation bug; it is reported rather than swallowed so defects surface
/// during development.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested flat index.
    pub s_index: usize,
    /// Total number of semantic points.
    pub point_count: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timeline index {} out of range (total points: {})",
            self.s_index, self.point_count
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Where a flat timeline index lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointLocation {
    /// Index of the owning trace.
    pub trace_index: usize,
    /// Offset of the point within the owning trace.
    pub offset: usize,
    /// Floor the owning trace lives on.
    pub floor: u8,
}

/// Resolves the trace owning `s_index` by a linear cumulative-count walk.
///
/// Traces are walked in array order; the first trace whose cumulative point
/// count exceeds `s_index` owns it. `O(traces)` per call; build a
/// [`PrefixIndex`] instead when resolving repeatedly against one data
/// source.
pub fn resolve(
    s_index: usize,
    traces: &[SemanticTrace],
) -> Result<&SemanticTrace, OutOfRange> {
    let mut cumulative = 0;
    for trace in traces {
        cumulative += trace.data.len();
        if cumulative > s_index {
            return Ok(trace);
        }
    }
    Err(OutOfRange {
        s_index,
        point_count: cumulative,
    })
}

/// Like [`resolve`], but returns the full location.
pub fn resolve_location(
    s_index: usize,
    traces: &[SemanticTrace],
) -> Result<PointLocation, OutOfRange> {
    let mut cumulative = 0;
    for (trace_index, trace) in traces.iter().enumerate() {
        let next = cumulative + trace.data.len();
        if next > s_index {
            return Ok(PointLocation {
                trace_index,
                offset: s_index - cumulative,
                floor: trace.floor,
            });
        }
        cumulative = next;
    }
    Err(OutOfRange {
        s_index,
        point_count: cumulative,
    })
}

/// Precomputed prefix sums for `O(log n)` owner lookup.
///
/// The index is built once per data source (semantic traces never change
/// after load) and answers the same query as [`resolve_location`]; parity
/// between the two is a tested invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixIndex {
    /// `cumulative[i]` = total points of traces `0..=i`.
    cumulative: Vec<usize>,
    floors: Vec<u8>,
}

impl PrefixIndex {
    /// Builds the index from the semantic traces of one data source.
    #[must_use]
    pub fn new(traces: &[SemanticTrace]) -> Self {
        let mut cumulative = Vec::with_capacity(traces.len());
        let mut floors = Vec::with_capacity(traces.len());
        let mut total = 0;
        for trace in traces {
            total += trace.data.len();
            cumulative.push(total);
            floors.push(trace.floor);
        }
        Self { cumulative, floors }
    }

    /// Total number of semantic points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Locates the owner of `s_index`.
    pub fn locate(&self, s_index: usize) -> Result<PointLocation, OutOfRange> {
        // First trace whose cumulative count exceeds s_index. Zero-length
        // traces repeat the previous cumulative value and are skipped.
        let trace_index = self.cumulative.partition_point(|&c| c <= s_index);
        if trace_index == self.cumulative.len() {
            return Err(OutOfRange {
                s_index,
                point_count: self.point_count(),
            });
        }
        let preceding = if trace_index == 0 {
            0
        } else {
            self.cumulative[trace_index - 1]
        };
        Ok(PointLocation {
            trace_index,
            offset: s_index - preceding,
            floor: self.floors[trace_index],
        })
    }
}
