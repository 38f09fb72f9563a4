//! Point-list parsing for the two textual conventions.
//!
//! OME-XML stores a plain list of whitespace-separated "x,y" pairs.
//! Annotation-tool strings embed several labeled groups, e.g.
//! `points[1,2 2,3] points1[...] points2[...] mask[0,0,0]`; only the
//! `points` group is authoritative for display.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A parsed coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extract the bracketed content of a `name[...]` group, if present.
///
/// The group name must start on a token boundary, so `points1[...]` is
/// not a match for `points`.
pub fn labeled_group<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("{}[", name);
    for (idx, _) in text.match_indices(pattern.as_str()) {
        let at_boundary = idx == 0
            || text[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_alphanumeric());
        if !at_boundary {
            continue;
        }
        let content_start = idx + pattern.len();
        if let Some(end) = text[content_start..].find(']') {
            return Some(&text[content_start..content_start + end]);
        }
    }
    None
}

/// Parse a point-list string into ordered coordinate pairs.
///
/// If the string carries a `points[...]` group, only that group's
/// content is read; otherwise the whole string is the list. Malformed
/// tokens are skipped rather than raised, so an empty or fully
/// malformed list parses to no pairs.
pub fn parse_points(text: &str) -> Vec<PathPoint> {
    let source = match labeled_group(text, "points") {
        Some(group) => {
            debug!("reading coordinates from labeled points group");
            group
        }
        None => text,
    };

    source.split_whitespace().filter_map(parse_pair).collect()
}

/// Parse a single "x,y" token, returning None for anything malformed
fn parse_pair(token: &str) -> Option<PathPoint> {
    let Some((x, y)) = token.split_once(',') else {
        trace!("skipping point token without separator: {:?}", token);
        return None;
    };
    match (x.parse::<f64>(), y.parse::<f64>()) {
        (Ok(x), Ok(y)) => Some(PathPoint::new(x, y)),
        _ => {
            trace!("skipping unparseable point token: {:?}", token);
            None
        }
    }
}
