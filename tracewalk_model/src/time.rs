// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time windows and clock formatting for timeline labels.

use chrono::DateTime;

/// The `[start, end]` window of the currently selected semantic point.
///
/// This is derived state, never stored: it is recomputed from the data
/// source and the timeline index on every change. [`TimeRange::EMPTY`] is
/// the sentinel for "the index selects no point".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    /// Window start, epoch seconds.
    pub start: f64,
    /// Window end, epoch seconds.
    pub end: f64,
}

impl TimeRange {
    /// The out-of-bounds sentinel.
    pub const EMPTY: Self = Self {
        start: -1.0,
        end: -1.0,
    };

    /// Returns `true` if this is the sentinel range.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Returns `true` if `time` falls inside the window (inclusive).
    ///
    /// The sentinel contains nothing.
    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        !self.is_empty() && self.start <= time && time <= self.end
    }
}

/// Formats epoch seconds as a `HH:MM:SS` wall-clock label (UTC).
///
/// Out-of-range timestamps render as `--:--:--` rather than failing; the
/// label is cosmetic.
#[must_use]
pub fn format_clock(epoch_seconds: f64) -> String {
    #[expect(clippy::cast_possible_truncation, reason = "epoch seconds fit i64")]
    let secs = epoch_seconds as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_owned(),
    }
}
