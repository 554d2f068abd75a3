use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-left coordinate of a node on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Rendered size reported by the canvas, used when no explicit size is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f32,
    pub height: f32,
}

/// A single node of a flow document.
///
/// Only `position` is ever written by the layout passes. Every other field,
/// including unknown payload collected into `extra`, round-trips untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured: Option<NodeSize>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlowNode {
    /// Effective size for overlap computation: the explicit size wins,
    /// then the measured size, then zero.
    pub fn size(&self) -> (f32, f32) {
        let width = self
            .width
            .or_else(|| self.measured.map(|m| m.width))
            .unwrap_or(0.0);
        let height = self
            .height
            .or_else(|| self.measured.map(|m| m.height))
            .unwrap_or(0.0);
        (width, height)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The canvas wire format: a node list, an edge list, and whatever else the
/// caller stored alongside them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDocument {
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
