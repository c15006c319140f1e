// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracewalk Names: room-name derivation for periodic building ids.
//!
//! Every point of interest in a building carries a numeric id that encodes
//! both its position on a floor and the floor itself:
//!
//! ```text
//! global_id = floor_offset * PERIOD + local_index
//! ```
//!
//! where [`PERIOD`] is the number of distinct locations per floor. The local
//! index selects an entry from an **ordered** rule table; the entry formats a
//! human-readable label such as `W-105`, `shop-312`, or `staircase-N` from
//! the local index and the floor offset.
//!
//! Rules are matched first-wins and their spans deliberately overlap: an
//! exact entry earlier in the table shadows a strided range later in the
//! table. The ordering is therefore part of the data, not an implementation
//! detail.
//!
//! ## Example
//!
//! ```
//! use tracewalk_names::NameResolver;
//!
//! let mut resolver = NameResolver::new();
//!
//! // Local index 0 on the third building level (offset 2).
//! assert_eq!(resolver.resolve(2 * 141).unwrap(), "warehouse-201");
//!
//! // Staircases are floor-independent labels.
//! assert_eq!(resolver.resolve(128).unwrap(), "staircase-W");
//! ```
//!
//! Resolution results are cached per id; the same ids are resolved over and
//! over while labelling a floor, and the table scan is linear.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod resolver;
mod rules;

pub use resolver::NameResolver;
pub use rules::{NameError, Rule, RuleTable, PERIOD};

/// Node ids whose label exists in the data but must never be attached to a
/// rendered text layer.
///
/// These are mostly hallway segments and corridor cells whose labels would
/// collide with neighbouring room labels at typical zoom levels. The list is
/// curated by hand alongside the floor definition files.
pub const HIDDEN_LABEL_IDS: &[u32] = &[
    26, 110, 19, 89, 23, 101, 132, 139, 134, 137, 90, 91, 111, 112, 102, 103, 94, 97, 27, 28, 117,
    114, 113, 116, 118, 115, 24, 25, 108, 105, 20, 21, 95, 92, 93, 96, 104, 107, 106, 109,
];

/// Returns `true` if the label for `id` is suppressed from text layers.
///
/// This is a separate concern from the rule table: the label can still be
/// resolved (for tooltips, search, and so on), it just is not drawn.
#[must_use]
pub fn is_label_hidden(id: u32) -> bool {
    HIDDEN_LABEL_IDS.contains(&id)
}
