// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw and semantically-annotated movement traces.

use kurbo::Rect;
use serde::Deserialize;

/// Classification of one semantic trace point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum SemanticEvent {
    /// The device lingered in one place.
    #[serde(rename = "stay")]
    Stay,
    /// The device moved past without stopping.
    #[serde(rename = "pass-by")]
    PassBy,
}

impl SemanticEvent {
    /// The fill color used for points of this classification.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Stay => crate::legend::SEMANTIC_STAY_COLOR,
            Self::PassBy => crate::legend::SEMANTIC_COLOR,
        }
    }
}

/// One sample of an unclassified trace.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RawTracePoint {
    /// X coordinate in floor units.
    pub x: f64,
    /// Y coordinate in floor units.
    pub y: f64,
    /// Sample timestamp, epoch seconds.
    pub time: f64,
}

/// A device's unprocessed path on one floor.
///
/// Three parallel channels share this shape: ground-truth, raw, and
/// cleaned-raw; they differ only in provenance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawTrace {
    /// Floor label in string form (`"3"`), as found in the capture files.
    pub floor: String,
    /// Ordered samples.
    pub data: Vec<RawTracePoint>,
}

impl RawTrace {
    /// The floor id, if the label parses as one.
    #[must_use]
    pub fn floor_id(&self) -> Option<u8> {
        self.floor.parse().ok()
    }
}

/// One classified point of a semantic trace.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracePoint {
    /// X coordinate in floor units.
    pub x: f64,
    /// Y coordinate in floor units.
    pub y: f64,
    /// Start of the event, epoch seconds.
    pub start_time: f64,
    /// End of the event, epoch seconds.
    pub end_time: f64,
    /// Stay or pass-by.
    pub event: SemanticEvent,
    /// Label of the region the event happened in.
    #[serde(default)]
    pub region_name: String,
    /// Global id of the room, when known.
    #[serde(rename = "roomID", default)]
    pub room_id: Option<u32>,
    /// Flat timeline index, assigned at load time across all semantic
    /// traces in load order. Never present on the wire.
    #[serde(default)]
    pub s_index: usize,
    /// Index of the owning trace, assigned at load time.
    #[serde(default)]
    pub trace_index: usize,
}

/// One contiguous episode of classified movement on a single floor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTrace {
    /// Floor the episode happened on.
    pub floor: u8,
    /// Position among all semantic traces, assigned at load time.
    #[serde(default)]
    pub trace_index: usize,
    /// Ordered classified points.
    pub data: Vec<TracePoint>,
}

impl SemanticTrace {
    /// Axis-aligned bounding box of the episode's points.
    ///
    /// `None` for an empty episode; a single point yields a zero-size box
    /// (the fit engine substitutes a sane span for those).
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.data.first()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in &self.data[1..] {
            rect = rect.union_pt(kurbo::Point::new(p.x, p.y));
        }
        Some(rect)
    }
}

/// Drops successive points closer than `threshold` (Manhattan distance).
///
/// Dense captures sample far below drawing resolution; thinning them keeps
/// path geometry cheap without visibly changing it.
#[must_use]
pub fn strip_points(points: &[RawTracePoint], threshold: f64) -> Vec<RawTracePoint> {
    let mut result: Vec<RawTracePoint> = Vec::new();
    for p in points {
        match result.last() {
            None => result.push(*p),
            Some(last) => {
                let distance = (p.x - last.x).abs() + (p.y - last.y).abs();
                if distance >= threshold {
                    result.push(*p);
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(x: f64, y: f64) -> RawTracePoint {
        RawTracePoint { x, y, time: 0.0 }
    }

    #[test]
    fn floor_label_parses() {
        let trace = RawTrace {
            floor: "3".to_owned(),
            data: vec![],
        };
        assert_eq!(trace.floor_id(), Some(3));

        let bad = RawTrace {
            floor: "mezzanine".to_owned(),
            data: vec![],
        };
        assert_eq!(bad.floor_id(), None);
    }

    #[test]
    fn strip_points_keeps_first_and_distant_points() {
        let points = vec![
            raw(0.0, 0.0),
            raw(1.0, 1.0), // distance 2, dropped
            raw(3.0, 2.0), // distance 5 from (0,0), kept
            raw(3.5, 2.5), // distance 1 from (3,2), dropped
            raw(10.0, 2.0),
        ];
        let stripped = strip_points(&points, 4.0);
        let xs: Vec<f64> = stripped.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 10.0]);
    }

    #[test]
    fn strip_points_of_empty_input_is_empty() {
        assert!(strip_points(&[], 4.0).is_empty(), "no points in, none out");
    }

    #[test]
    fn trace_bounds_cover_all_points() {
        let trace = SemanticTrace {
            floor: 0,
            trace_index: 0,
            data: vec![
                point_at(2.0, 8.0),
                point_at(-1.0, 3.0),
                point_at(5.0, 4.0),
            ],
        };
        let bounds = trace.bounds().unwrap();
        assert_eq!(bounds, Rect::new(-1.0, 3.0, 5.0, 8.0));

        let empty = SemanticTrace {
            floor: 0,
            trace_index: 0,
            data: vec![],
        };
        assert!(empty.bounds().is_none(), "empty episode has no bounds");
    }

    fn point_at(x: f64, y: f64) -> TracePoint {
        TracePoint {
            x,
            y,
            start_time: 0.0,
            end_time: 0.0,
            event: SemanticEvent::PassBy,
            region_name: String::new(),
            room_id: None,
            s_index: 0,
            trace_index: 0,
        }
    }
}
