// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The root load unit: everything one capture file contains.

use std::fmt;

use serde::Deserialize;

use crate::legend::PlainChannel;
use crate::trace::{RawTrace, SemanticTrace, TracePoint};

/// Error produced when a capture file cannot be parsed.
///
/// Load failures are isolated to the load attempt: the caller's current
/// data source is never touched until a replacement fully parses.
#[derive(Debug)]
pub struct LoadError {
    inner: serde_json::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed data source: {}", self.inner)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(inner: serde_json::Error) -> Self {
        Self { inner }
    }
}

/// All traces loaded from one capture file.
///
/// A data source is replaced wholesale on file open, never patched. The
/// derived fields (`trace_index`, `s_index`) are computed once by the
/// preprocessing pass inside [`DataSource::from_json`] and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Capture start, epoch seconds.
    pub start_time: f64,
    /// Surveyed ground-truth traces.
    #[serde(default)]
    pub ground_truth_traces: Vec<RawTrace>,
    /// Unprocessed device traces.
    #[serde(default)]
    pub raw_traces: Vec<RawTrace>,
    /// Cleaned device traces.
    #[serde(default)]
    pub cleaned_raw_traces: Vec<RawTrace>,
    /// Classified movement episodes.
    #[serde(default)]
    pub semantic_traces: Vec<SemanticTrace>,
}

impl DataSource {
    /// Parses a capture file and runs the load-time preprocessing pass.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut source: Self = serde_json::from_str(json)?;
        source.preprocess();
        Ok(source)
    }

    /// Assigns `trace_index` to every semantic trace and `s_index` (the
    /// flat, strictly increasing timeline coordinate) to every point.
    fn preprocess(&mut self) {
        let mut next_s_index = 0;
        for (trace_index, trace) in self.semantic_traces.iter_mut().enumerate() {
            trace.trace_index = trace_index;
            for point in &mut trace.data {
                point.trace_index = trace_index;
                point.s_index = next_s_index;
                next_s_index += 1;
            }
        }
    }

    /// The traces of one plain channel.
    #[must_use]
    pub fn plain_traces(&self, channel: PlainChannel) -> &[RawTrace] {
        match channel {
            PlainChannel::GroundTruth => &self.ground_truth_traces,
            PlainChannel::Raw => &self.raw_traces,
            PlainChannel::CleanedRaw => &self.cleaned_raw_traces,
        }
    }

    /// Total number of semantic points across all traces.
    #[must_use]
    pub fn semantic_point_count(&self) -> usize {
        self.semantic_traces.iter().map(|t| t.data.len()).sum()
    }

    /// The semantic point at a flat timeline index, if in range.
    #[must_use]
    pub fn point_at(&self, s_index: usize) -> Option<&TracePoint> {
        let mut remaining = s_index;
        for trace in &self.semantic_traces {
            if remaining < trace.data.len() {
                return Some(&trace.data[remaining]);
            }
            remaining -= trace.data.len();
        }
        None
    }

    /// Floor of the first semantic trace; seeds the initial floor.
    #[must_use]
    pub fn first_semantic_floor(&self) -> Option<u8> {
        self.semantic_traces.first().map(|t| t.floor)
    }
}
