// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached name resolution over the rule table.

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;

use crate::rules::{NameError, RuleTable, PERIOD};

/// Resolves global node ids to room labels, caching per id.
///
/// The rule-table scan is linear and the same ids are resolved repeatedly
/// while labelling a floor, so results are memoized. The resolver is a plain
/// value: construct one at startup and pass it to whatever needs labels,
/// instead of sharing a process-wide cache.
pub struct NameResolver {
    table: RuleTable,
    cache: HashMap<u32, String>,
    scans: u64,
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver")
            .field("table", &self.table)
            .field("cached", &self.cache.len())
            .field("scans", &self.scans)
            .finish()
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver {
    /// Creates a resolver over the building's rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(RuleTable::building())
    }

    /// Creates a resolver over a custom rule table.
    #[must_use]
    pub fn with_table(table: RuleTable) -> Self {
        Self {
            table,
            cache: HashMap::new(),
            scans: 0,
        }
    }

    /// Resolves the label for a global node id.
    ///
    /// `global_id` decodes as `floor_offset * PERIOD + local_index`. The
    /// first call for an id scans the table; subsequent calls return the
    /// cached label.
    pub fn resolve(&mut self, global_id: u32) -> Result<&str, NameError> {
        if !self.cache.contains_key(&global_id) {
            let local_index = global_id % PERIOD;
            let floor_offset = global_id / PERIOD;
            self.scans += 1;
            let label = self.table.label_for(local_index, floor_offset)?;
            self.cache.insert(global_id, label);
        }
        Ok(&self.cache[&global_id])
    }

    /// Number of rule-table scans performed so far.
    ///
    /// Cache hits do not scan; this counter lets callers (and tests) observe
    /// cache effectiveness.
    #[must_use]
    pub fn table_scans(&self) -> u64 {
        self.scans
    }

    /// Drops all cached labels, e.g. after swapping the rule table.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_through_the_period() {
        let mut resolver = NameResolver::new();
        for id in 0..(PERIOD * 3) {
            let label = resolver.resolve(id).unwrap();
            assert!(!label.is_empty(), "id {id} resolved to an empty label");
        }
    }

    #[test]
    fn floor_offset_is_encoded_in_the_label() {
        let mut resolver = NameResolver::new();
        assert_eq!(resolver.resolve(0).unwrap(), "warehouse-001");
        assert_eq!(resolver.resolve(PERIOD).unwrap(), "warehouse-101");
        assert_eq!(resolver.resolve(2 * PERIOD).unwrap(), "warehouse-201");
    }

    #[test]
    fn repeated_resolution_hits_the_cache() {
        let mut resolver = NameResolver::new();
        let first = String::from(resolver.resolve(282).unwrap());
        assert_eq!(resolver.table_scans(), 1, "first call scans the table");

        let second = String::from(resolver.resolve(282).unwrap());
        assert_eq!(resolver.table_scans(), 1, "second call must not rescan");
        assert_eq!(first, second);

        resolver.resolve(283).unwrap();
        assert_eq!(resolver.table_scans(), 2, "new id scans once more");
    }

    #[test]
    fn clearing_the_cache_forces_a_rescan() {
        let mut resolver = NameResolver::new();
        resolver.resolve(5).unwrap();
        resolver.clear_cache();
        resolver.resolve(5).unwrap();
        assert_eq!(resolver.table_scans(), 2, "cleared entry is re-derived");
    }
}
