// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracewalk Timeline: mapping the flat timeline coordinate onto
//! floor-segmented traces.
//!
//! Semantic traces are segmented per floor, but the timeline UI operates in
//! a single flat coordinate: `s_index`, a zero-based index over the
//! concatenation of all semantic points in load order. This crate owns the
//! two directions of that mapping:
//!
//! - [`resolve`] / [`PrefixIndex`]: which trace (and offset within it) a
//!   flat index lands in. The linear walk is the reference; the prefix-sum
//!   index answers the same question in `O(log n)`.
//! - [`step`] and [`shortcut_nav`]: clamped next/prev navigation and the
//!   keyboard mapping that drives it (`s`/ArrowDown forward, `w`/ArrowUp
//!   backward). There is no wraparound at either end.
//!
//! ```
//! use tracewalk_timeline::{step, TimelineNav};
//!
//! // Five points; walking forward saturates at the last one.
//! assert_eq!(step(3, TimelineNav::Next, 5), 4);
//! assert_eq!(step(4, TimelineNav::Next, 5), 4);
//! assert_eq!(step(0, TimelineNav::Prev, 5), 0);
//! ```

mod nav;
mod resolver;

pub use nav::{shortcut_nav, step, TimelineNav};
pub use resolver::{resolve, resolve_location, OutOfRange, PointLocation, PrefixIndex};
