//! Zone configuration, layout, and hit-testing.
//!
//! Zones are immutable target rectangles arranged in a single horizontal row
//! centered on the canvas midpoint. Their sizes are fractions of the smaller
//! canvas dimension, so the row scales with the viewport. All functions here
//! are pure; a degenerate (unsized) canvas yields no hits rather than NaN.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZONE_SIZE, ZONE_SPACING};
use crate::geom::{CanvasSize, Point, Rect};

/// A configured target region. Supplied once at mount and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Caller-chosen identifier reported by hit tests.
    pub id: String,
    /// CSS color used to fill the zone rectangle.
    pub color: String,
    /// Side length as a fraction of the smaller canvas dimension.
    #[serde(rename = "size")]
    pub relative_size: f64,
}

impl Zone {
    #[must_use]
    pub fn new(id: impl Into<String>, color: impl Into<String>, relative_size: f64) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            relative_size,
        }
    }
}

/// The stock three-zone row: translucent red, green, and blue squares.
#[must_use]
pub fn default_zones() -> Vec<Zone> {
    vec![
        Zone::new("1", "rgba(255, 0, 0, 0.5)", DEFAULT_ZONE_SIZE),
        Zone::new("2", "rgba(0, 255, 0, 0.5)", DEFAULT_ZONE_SIZE),
        Zone::new("3", "rgba(0, 0, 255, 0.5)", DEFAULT_ZONE_SIZE),
    ]
}

/// A zone's side length in pixels at the given canvas size.
#[must_use]
pub fn absolute_size(zone: &Zone, size: CanvasSize) -> f64 {
    zone.relative_size * size.min_dimension()
}

/// The pixel bounds of the zone at position `index` in a row of `count`.
///
/// Each zone is a square centered vertically on the canvas midpoint. The row
/// is centered horizontally: the offset is
/// `(index - (count - 1) / 2) * side * ZONE_SPACING`, which for the default
/// three-zone row places the middle zone on the canvas center with its
/// neighbors `1.25` side-lengths to either side, and places a lone zone dead
/// center.
#[must_use]
pub fn bounds_of(zone: &Zone, index: usize, count: usize, size: CanvasSize) -> Rect {
    let center = size.center();
    let side = absolute_size(zone, size);
    let slot = index as f64 - (count.saturating_sub(1) as f64) / 2.0;
    let offset_x = slot * side * ZONE_SPACING;
    Rect::new(
        center.x - side / 2.0 + offset_x,
        center.y - side / 2.0,
        side,
        side,
    )
}

/// The id of the first zone (in index order) containing `pt`, if any.
///
/// Zones are assumed non-overlapping by configuration; first-match is the
/// tie-break if they do overlap. An unsized canvas matches nothing.
#[must_use]
pub fn hit_test<'a>(pt: Point, zones: &'a [Zone], size: CanvasSize) -> Option<&'a str> {
    if !size.is_sized() {
        return None;
    }
    zones
        .iter()
        .enumerate()
        .find(|(index, zone)| bounds_of(zone, *index, zones.len(), size).contains(pt))
        .map(|(_, zone)| zone.id.as_str())
}
