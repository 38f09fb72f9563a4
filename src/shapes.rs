//! Shape record types for ROI annotations.
//!
//! ShapeKind defines the supported shape variants.
//! ShapeRecord is the value object the marshaling layer consumes.

use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Kinds of multi-segment shapes we can marshal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Open multi-segment path (no closing segment)
    Polyline,
    /// Closed multi-segment path (closing segment drawn back to start)
    Polygon,
}

impl ShapeKind {
    /// Wire type name the web layer expects (note the interior capital L)
    pub fn type_name(self) -> &'static str {
        match self {
            ShapeKind::Polyline => "PolyLine",
            ShapeKind::Polygon => "Polygon",
        }
    }

    /// Whether the rendered path gets a closing marker
    pub fn is_closed(self) -> bool {
        matches!(self, ShapeKind::Polygon)
    }
}

impl FromStr for ShapeKind {
    type Err = anyhow::Error;

    /// Parse the discriminator string supplied by the model layer.
    /// Accepts the wire name and the OME-XML spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PolyLine" | "Polyline" => Ok(ShapeKind::Polyline),
            "Polygon" => Ok(ShapeKind::Polygon),
            other => bail!("Unknown shape type: {}", other),
        }
    }
}

/// A shape record as supplied by the model layer: an id, a kind, and the
/// raw textual point list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: i64,
    pub kind: ShapeKind,
    /// Point list in either supported textual convention; may be empty
    pub points: String,
}

impl ShapeRecord {
    pub fn new(id: i64, kind: ShapeKind, points: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            points: points.into(),
        }
    }
}
