//! Path-string generation and the marshaled shape mapping.
//!
//! The output is the `{type, id, points}` mapping a web-facing
//! serialization layer embeds into its JSON response. `points` is an
//! SVG-style command string: `M` move-to, `L` line-to, `z` close-path.

use std::fmt::Write;

use serde::Serialize;

use crate::points::{PathPoint, parse_points};
use crate::shapes::ShapeRecord;

/// Marshaled form of a shape record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarshaledShape {
    /// Wire type name ("PolyLine" or "Polygon")
    #[serde(rename = "type")]
    pub shape_type: &'static str,
    pub id: i64,
    /// SVG-style path command string
    pub points: String,
}

impl MarshaledShape {
    /// JSON value for embedding into a larger response
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.shape_type,
            "id": self.id,
            "points": self.points,
        })
    }
}

/// Format coordinate pairs as an SVG-style path string.
///
/// The first pair is a move-to, each subsequent pair a line-to, with
/// coordinates space-separated. Closed shapes get a trailing ` z` even
/// when there are no pairs at all.
pub fn svg_path(points: &[PathPoint], closed: bool) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        write!(&mut path, "{} {} {}", cmd, p.x, p.y).unwrap();
    }
    if closed {
        path.push_str(" z");
    }
    path
}

/// Marshal a shape record into the mapping the web layer embeds.
///
/// Pure function of the record: `type` depends only on the kind, `id`
/// passes through unchanged, and `points` depends only on the point
/// text and the kind.
pub fn marshal_shape(record: &ShapeRecord) -> MarshaledShape {
    let pairs = parse_points(&record.points);
    MarshaledShape {
        shape_type: record.kind.type_name(),
        id: record.id,
        points: svg_path(&pairs, record.kind.is_closed()),
    }
}
