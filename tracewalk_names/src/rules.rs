// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered room-naming rule table.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Number of distinct location ids per floor.
///
/// A global node id decodes as `floor_offset * PERIOD + local_index`.
pub const PERIOD: u32 = 141;

/// Formats a label from `(local_index, floor_offset)`.
type LabelFn = fn(u32, u32) -> String;

/// Zero-pads a wing/room number to two digits, matching the historical
/// labelling scheme (`W-105`, not `W-15`).
fn pad2(n: u32) -> String {
    format!("{n:02}")
}

/// The index span a rule applies to.
///
/// Spans are **not** disjoint by construction: strided spans interleave with
/// each other and exact entries punch holes into ranges. Earlier rules win.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Matches exactly one local index.
    Exact(u32),
    /// Matches every local index in `start..=end`.
    Range(u32, u32),
    /// Matches `start, start + step, ...` up to and including `end`.
    Strided(u32, u32, u32),
}

impl Rule {
    /// Returns `true` if `index` falls within this rule's span.
    #[must_use]
    pub fn matches(self, index: u32) -> bool {
        match self {
            Self::Exact(i) => index == i,
            Self::Range(start, end) => start <= index && index <= end,
            Self::Strided(start, end, step) => {
                start <= index && index <= end && (index - start) % step == 0
            }
        }
    }
}

/// Error returned when no rule in the table covers a local index.
///
/// Indices `0..PERIOD` must all be covered; a gap is a bug in the table (or
/// in the floor data that produced the id), not a runtime condition callers
/// are expected to recover from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameError {
    /// The uncovered local index.
    pub local_index: u32,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no naming rule covers local index {}",
            self.local_index
        )
    }
}

impl core::error::Error for NameError {}

/// An ordered, first-match-wins list of naming rules.
pub struct RuleTable {
    rules: Vec<(Rule, LabelFn)>,
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules.iter().map(|(r, _)| r).collect::<Vec<_>>())
            .finish()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::building()
    }
}

impl RuleTable {
    /// The naming table for the surveyed building.
    ///
    /// `x` is the local index, `y` the floor offset. Trailing comments give
    /// the label range each rule produces.
    #[must_use]
    pub fn building() -> Self {
        use Rule::{Exact, Range, Strided};
        let rules: Vec<(Rule, LabelFn)> = alloc::vec![
            (Exact(0), (|_x, y| format!("warehouse-{y}01")) as LabelFn),
            (Range(1, 5), |x, y| format!("W-{y}{}", pad2(x))), // W-1 ~ W-5
            (Range(6, 10), |x, y| format!("N-{y}{}", pad2(x - 5))), // N-1 ~ N-5
            (Range(11, 18), |x, y| format!("shop-{y}{}", pad2(x - 10))), // shop-1 ~ shop-8
            (Exact(19), |_x, y| format!("hallway-{y}01")), // hallway-1
            (Range(20, 22), |x, y| format!("shop-{y}{}", pad2(x - 11))), // shop-9 ~ shop-11
            (Exact(23), |_x, y| format!("hallway-{y}02")), // hallway-2
            (Range(24, 25), |x, y| format!("shop-{y}{}", pad2(x - 12))), // shop-12 ~ shop-13
            (Range(26, 31), |x, y| format!("hallway-{y}{}", pad2(x - 23))), // hallway-3 ~ hallway-8
            (Range(32, 34), |x, y| format!("warehouse-{y}{}", pad2(x - 30))), // warehouse-2 ~ warehouse-4
            (Strided(35, 47, 3), |x, y| format!("E-{y}{}", pad2((x - 35) / 3 + 1))), // E-1 ~ E-5
            (Strided(36, 48, 3), |x, y| format!("W-{y}{}", pad2((x - 36) / 3 + 6))), // W-6 ~ W-10
            (Strided(37, 49, 3), |x, y| format!("E-{y}{}", pad2((x - 37) / 3 + 6))), // E-6 ~ E-10
            (Strided(50, 62, 3), |x, y| format!("N-{y}{}", pad2((x - 50) / 3 + 6))), // N-6 ~ N-10
            (Strided(51, 63, 3), |x, y| format!("S-{y}{}", pad2((x - 51) / 3 + 1))), // S-1 ~ S-5
            (Strided(52, 64, 3), |x, y| format!("S-{y}{}", pad2((x - 52) / 3 + 6))), // S-6 ~ S-10
            (Strided(65, 86, 3), |x, y| format!("shop-{y}{}", pad2((x - 65) / 3 + 14))), // shop-14 ~ shop-21
            (Strided(66, 87, 3), |x, y| format!("shop-{y}{}", pad2((x - 66) / 3 + 22))), // shop-22 ~ shop-29
            (Strided(67, 88, 3), |x, y| format!("shop-{y}{}", pad2((x - 67) / 3 + 30))), // shop-30 ~ shop-37
            (Range(89, 91), |x, y| format!("hallway-{y}{}", pad2(x - 80))), // hallway-9 ~ hallway-11
            // The next three exact entries intentionally shadow the strided
            // shop rules below them.
            (Exact(101), |x, y| format!("hallway-{y}{}", pad2(x - 101 + 12))), // hallway-12
            (Exact(102), |x, y| format!("hallway-{y}{}", pad2(x - 102 + 13))), // hallway-13
            (Exact(103), |x, y| format!("hallway-{y}{}", pad2(x - 103 + 14))), // hallway-14
            (Strided(92, 107, 3), |x, y| format!("shop-{y}{}", pad2((x - 92) / 3 + 38))), // shop-38 ~ shop-43
            (Strided(93, 108, 3), |x, y| format!("shop-{y}{}", pad2((x - 93) / 3 + 44))), // shop-44 ~ shop-49
            (Strided(94, 109, 3), |x, y| format!("shop-{y}{}", pad2((x - 94) / 3 + 50))), // shop-50 ~ shop-55
            (Strided(110, 125, 3), |x, y| format!("hallway-{y}{}", pad2((x - 110) / 3 + 15))), // hallway-15 ~ hallway-20
            (Strided(111, 126, 3), |x, y| format!("hallway-{y}{}", pad2((x - 111) / 3 + 21))), // hallway-21 ~ hallway-26
            (Strided(112, 127, 3), |x, y| format!("hallway-{y}{}", pad2((x - 112) / 3 + 27))), // hallway-27 ~ hallway-32
            (Exact(128), |_x, _y| String::from("staircase-W")),
            (Exact(129), |_x, _y| String::from("staircase-N")),
            (Exact(130), |_x, _y| String::from("staircase-S")),
            (Exact(131), |_x, _y| String::from("staircase-E")),
            (Range(132, 140), |x, y| format!("C-{y}{}", pad2(x - 132 + 1))), // C-1 ~ C-9
        ];
        Self { rules }
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Formats the label for `(local_index, floor_offset)` using the first
    /// matching rule.
    pub fn label_for(&self, local_index: u32, floor_offset: u32) -> Result<String, NameError> {
        for (rule, label) in &self.rules {
            if rule.matches(local_index) {
                return Ok(label(local_index, floor_offset));
            }
        }
        Err(NameError { local_index })
    }
}
