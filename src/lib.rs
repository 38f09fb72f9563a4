//! Shape marshaling for web display of microscopy ROI annotations.
//!
//! Converts polyline/polygon shape records into an SVG-style path string
//! plus the type/id tag a web viewer expects. Point lists arrive in one
//! of two textual conventions - plain OME-XML pair lists, or
//! annotation-tool strings carrying labeled groups - and both marshal
//! identically.

pub mod marshal;
pub mod points;
pub mod shapes;

pub use marshal::{MarshaledShape, marshal_shape, svg_path};
pub use points::{PathPoint, parse_points};
pub use shapes::{ShapeKind, ShapeRecord};
