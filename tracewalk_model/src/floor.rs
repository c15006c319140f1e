// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static floor-plan geometry, loaded once at startup.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use tracewalk_names::{NameError, NameResolver};

use crate::source::LoadError;

/// A 2D point in floor coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// A line segment in floor coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Line {
    /// Start X.
    pub x1: f64,
    /// Start Y.
    pub y1: f64,
    /// End X.
    pub x2: f64,
    /// End Y.
    pub y2: f64,
}

/// Placement of a node's text label.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    /// Whether the label is drawn at all.
    pub show: bool,
    /// Label anchor position.
    pub pos: Point,
    /// Font size in floor units.
    pub font_size: f64,
}

/// A named point of interest on a floor.
///
/// `name` is blank in the floor definition files; it is stamped at startup
/// by [`FloorRegistry::stamp_names`] from the node id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Global node id (encodes floor offset and local index).
    pub id: u32,
    /// Human-readable room label.
    #[serde(default)]
    pub name: String,
    /// Node category (room, hallway, staircase, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Label placement, if this node carries a label.
    #[serde(default)]
    pub label_config: Option<LabelConfig>,
}

/// A filled polygon belonging to a node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region id.
    pub id: u32,
    /// Color-class name, resolved through [`FloorConfig::colors`].
    pub color: String,
    /// Owning node id.
    pub node_id: u32,
    /// Polygon outline.
    pub points: Vec<Point>,
}

/// A door segment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Door {
    /// Door id.
    pub id: u32,
    /// Color-class name.
    #[serde(default)]
    pub color: String,
    /// Door geometry.
    pub line: Line,
}

/// Per-floor drawing configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FloorConfig {
    /// Color palette, keyed by color-class name.
    pub colors: HashMap<String, String>,
    /// Stroke width for doors.
    pub doorwidth: f64,
    /// Stroke width for walls.
    pub wallwidth: f64,
}

/// One floor of the building: regions, walls, doors, and named nodes.
///
/// Floors are immutable after load; the only post-processing is the
/// name-stamping pass in [`FloorRegistry::stamp_names`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    /// Floor id, `0..=9`.
    pub floor_id: u8,
    /// Building the floor belongs to.
    #[serde(default)]
    pub building_name: String,
    /// Level number as printed on signage.
    #[serde(default)]
    pub floor_number: i32,
    /// Filled room polygons.
    pub regions: Vec<Region>,
    /// Wall segments.
    #[serde(default)]
    pub walls: Vec<Line>,
    /// Named points of interest.
    pub nodes: Vec<Node>,
    /// Door segments.
    pub doors: Vec<Door>,
    /// Drawing configuration.
    pub config: FloorConfig,
}

impl Floor {
    /// The display name for this floor (`floor-3`).
    #[must_use]
    pub fn name(&self) -> String {
        format!("floor-{}", self.floor_id)
    }
}

/// The in-memory list of all floors, loaded once at startup.
#[derive(Clone, PartialEq, Default)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

impl fmt::Debug for FloorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloorRegistry")
            .field("floors", &self.floors.len())
            .finish()
    }
}

impl FloorRegistry {
    /// Wraps an already-deserialized floor list.
    #[must_use]
    pub fn new(mut floors: Vec<Floor>) -> Self {
        floors.sort_by_key(|f| f.floor_id);
        Self { floors }
    }

    /// Parses a JSON array of floor definitions.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let floors: Vec<Floor> = serde_json::from_str(json)?;
        Ok(Self::new(floors))
    }

    /// Looks up a floor by id.
    #[must_use]
    pub fn get(&self, floor_id: u8) -> Option<&Floor> {
        self.floors.iter().find(|f| f.floor_id == floor_id)
    }

    /// All floors, ordered by id.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Number of floors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Returns `true` if no floors are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Stamps every node's `name` from its id via the name resolver.
    ///
    /// A resolution failure means a node id falls into a gap of the rule
    /// table; that is a data bug and aborts the pass.
    pub fn stamp_names(&mut self, resolver: &mut NameResolver) -> Result<(), NameError> {
        for floor in &mut self.floors {
            for node in &mut floor.nodes {
                node.name = resolver.resolve(node.id)?.to_owned();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_floor_json(floor_id: u8) -> String {
        format!(
            r##"{{
                "floorId": {floor_id},
                "buildingName": "B",
                "floorNumber": {floor_id},
                "regions": [
                    {{"id": 1, "color": "room", "nodeId": 0,
                      "points": [{{"x": 0, "y": 0}}, {{"x": 10, "y": 0}}, {{"x": 10, "y": 10}}]}}
                ],
                "nodes": [
                    {{"id": {node_id}, "type": "room",
                      "labelConfig": {{"show": true, "pos": {{"x": 5, "y": 5}}, "fontSize": 1.2}}}}
                ],
                "doors": [
                    {{"id": 7, "color": "door", "line": {{"x1": 0, "y1": 0, "x2": 1, "y2": 0}}}}
                ],
                "config": {{"colors": {{"room": "#f4f4f4"}}, "doorwidth": 0.3, "wallwidth": 0.2}}
            }}"##,
            node_id = u32::from(floor_id) * 141,
        )
    }

    #[test]
    fn parses_floor_definition() {
        let json = format!("[{}]", minimal_floor_json(3));
        let registry = FloorRegistry::from_json(&json).unwrap();
        let floor = registry.get(3).expect("floor 3 present");
        assert_eq!(floor.name(), "floor-3");
        assert_eq!(floor.regions.len(), 1);
        assert_eq!(floor.nodes[0].kind, "room");
        assert_eq!(floor.config.colors["room"], "#f4f4f4");
    }

    #[test]
    fn registry_orders_by_floor_id() {
        let json = format!(
            "[{},{}]",
            minimal_floor_json(4),
            minimal_floor_json(1)
        );
        let registry = FloorRegistry::from_json(&json).unwrap();
        let ids: Vec<u8> = registry.floors().iter().map(|f| f.floor_id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(registry.get(9).is_none(), "absent floor is None");
    }

    #[test]
    fn stamping_writes_resolved_names() {
        let json = format!("[{}]", minimal_floor_json(2));
        let mut registry = FloorRegistry::from_json(&json).unwrap();
        assert_eq!(registry.get(2).unwrap().nodes[0].name, "");

        let mut resolver = NameResolver::new();
        registry.stamp_names(&mut resolver).unwrap();
        // Node id 282 = offset 2, local index 0.
        assert_eq!(registry.get(2).unwrap().nodes[0].name, "warehouse-201");
    }
}
