// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-floor record counts for the floor chooser.

use crate::trace::RawTrace;

/// Number of floor buckets; floor ids run `0..=9`.
const FLOOR_COUNT: u8 = 10;

/// Raw-record count for one floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorStat {
    /// Floor id.
    pub floor_id: u8,
    /// Display name (`floor-3`).
    pub floor_name: String,
    /// Number of raw points captured on this floor.
    pub count: usize,
}

/// Buckets raw-trace point counts by floor id.
///
/// One entry per floor id `0..=9`, in order, zero-filled for floors without
/// records. Traces whose floor label does not parse as an id in range are
/// ignored. Recomputed whenever the data source changes.
#[must_use]
pub fn floor_stats(raw_traces: &[RawTrace]) -> Vec<FloorStat> {
    let mut stats: Vec<FloorStat> = (0..FLOOR_COUNT)
        .map(|floor_id| FloorStat {
            floor_id,
            floor_name: format!("floor-{floor_id}"),
            count: 0,
        })
        .collect();

    for trace in raw_traces {
        if let Some(floor_id) = trace.floor_id()
            && floor_id < FLOOR_COUNT
        {
            stats[usize::from(floor_id)].count += trace.data.len();
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RawTracePoint;

    fn trace_on(floor: &str, points: usize) -> RawTrace {
        RawTrace {
            floor: floor.to_owned(),
            data: vec![
                RawTracePoint {
                    x: 0.0,
                    y: 0.0,
                    time: 0.0,
                };
                points
            ],
        }
    }

    #[test]
    fn counts_sum_per_floor() {
        let traces = vec![trace_on("0", 3), trace_on("1", 2), trace_on("0", 4)];
        let stats = floor_stats(&traces);
        assert_eq!(stats.len(), 10, "one bucket per floor id");
        assert_eq!(stats[0].count, 7);
        assert_eq!(stats[1].count, 2);
        assert_eq!(stats[9].count, 0);
        assert_eq!(stats[3].floor_name, "floor-3");
    }

    #[test]
    fn unparseable_floor_labels_are_ignored() {
        let traces = vec![trace_on("roof", 5), trace_on("12", 5), trace_on("2", 1)];
        let stats = floor_stats(&traces);
        let total: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, 1, "only the in-range floor counts");
    }

    #[test]
    fn empty_input_yields_zero_filled_buckets() {
        let stats = floor_stats(&[]);
        assert!(stats.iter().all(|s| s.count == 0), "all buckets empty");
    }
}
