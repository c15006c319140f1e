// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-channel visibility flags for the trace legend.

use bitflags::bitflags;

/// Fill color for semantic pass-by points.
pub const SEMANTIC_COLOR: &str = "#ffa726";
/// Fill color for semantic stay points.
pub const SEMANTIC_STAY_COLOR: &str = "#fb8c00";

/// One of the three unclassified trace channels.
///
/// The channels share a shape and differ only in provenance and trust
/// level; most derivations are generic over which one they filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlainChannel {
    /// Surveyed ground-truth positions.
    GroundTruth,
    /// Unprocessed device captures.
    Raw,
    /// Captures after cleaning.
    CleanedRaw,
}

impl PlainChannel {
    /// All plain channels, in legend order.
    pub const ALL: [Self; 3] = [Self::GroundTruth, Self::Raw, Self::CleanedRaw];

    /// The channel's stroke/fill color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::GroundTruth => "#444444",
            Self::Raw => "#3078b3",
            Self::CleanedRaw => "#7fc378",
        }
    }
}

/// Any toggleable legend entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceChannel {
    /// A plain trace channel.
    Plain(PlainChannel),
    /// The semantic (classified) layer.
    Semantic,
    /// The hover tooltip layer.
    Tooltip,
}

impl TraceChannel {
    fn flag(self) -> LegendState {
        match self {
            Self::Plain(PlainChannel::GroundTruth) => LegendState::GROUND_TRUTH,
            Self::Plain(PlainChannel::Raw) => LegendState::RAW,
            Self::Plain(PlainChannel::CleanedRaw) => LegendState::CLEANED_RAW,
            Self::Semantic => LegendState::SEMANTIC,
            Self::Tooltip => LegendState::TOOLTIP,
        }
    }
}

bitflags! {
    /// Which trace layers are currently visible.
    ///
    /// Mutated one channel at a time by legend toggles; everything else only
    /// reads it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LegendState: u8 {
        /// Ground-truth traces.
        const GROUND_TRUTH = 1 << 0;
        /// Raw traces.
        const RAW = 1 << 1;
        /// Cleaned raw traces.
        const CLEANED_RAW = 1 << 2;
        /// Semantic episodes.
        const SEMANTIC = 1 << 3;
        /// Hover tooltips.
        const TOOLTIP = 1 << 4;
    }
}

impl Default for LegendState {
    /// Ground truth and semantics on, everything else off.
    fn default() -> Self {
        Self::GROUND_TRUTH | Self::SEMANTIC
    }
}

impl LegendState {
    /// Returns `true` if the given channel is visible.
    #[must_use]
    pub fn is_visible(self, channel: TraceChannel) -> bool {
        self.contains(channel.flag())
    }

    /// Flips the visibility of one channel, leaving the rest untouched.
    pub fn toggle_channel(&mut self, channel: TraceChannel) {
        self.toggle(channel.flag());
    }
}
