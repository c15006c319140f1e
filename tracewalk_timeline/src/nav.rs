// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped timeline navigation and its keyboard mapping.

use ui_events::keyboard::{Key, NamedKey};

/// A one-step timeline move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineNav {
    /// Advance to the next semantic point.
    Next,
    /// Retreat to the previous semantic point.
    Prev,
}

/// Maps a pressed key to a timeline move, if it is a timeline shortcut.
///
/// `s` and ArrowDown advance, `w` and ArrowUp retreat (the timeline list
/// grows downward, so "down" means "forward in time").
#[must_use]
pub fn shortcut_nav(key: &Key) -> Option<TimelineNav> {
    match key {
        Key::Named(NamedKey::ArrowDown) => Some(TimelineNav::Next),
        Key::Named(NamedKey::ArrowUp) => Some(TimelineNav::Prev),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(TimelineNav::Next),
        Key::Character(c) if c.eq_ignore_ascii_case("w") => Some(TimelineNav::Prev),
        _ => None,
    }
}

/// Applies a move to a flat index, clamped to `0..point_count`.
///
/// No wraparound at either boundary: repeated [`TimelineNav::Next`] pins at
/// the last point, repeated [`TimelineNav::Prev`] at the first. With no
/// points at all the index stays at zero.
#[must_use]
pub fn step(s_index: usize, nav: TimelineNav, point_count: usize) -> usize {
    if point_count == 0 {
        return 0;
    }
    match nav {
        TimelineNav::Next => (s_index + 1).min(point_count - 1),
        TimelineNav::Prev => s_index.saturating_sub(1),
    }
}
