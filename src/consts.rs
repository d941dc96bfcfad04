//! Shared numeric constants for the zonepad crate.

// ── Zone layout ─────────────────────────────────────────────────

/// Horizontal distance between adjacent zone centers, as a multiple of the
/// zone's own side length. The row is centered on the canvas midpoint.
pub const ZONE_SPACING: f64 = 1.25;

/// Default zone side length as a fraction of the smaller canvas dimension.
pub const DEFAULT_ZONE_SIZE: f64 = 0.2;

// ── Stroke sampling ─────────────────────────────────────────────

/// Minimum pointer travel in screen pixels before the next mark may be
/// committed. Converted to normalized units per event, since the canvas can
/// resize mid-drag.
pub const MIN_DRAW_DISTANCE_PX: f64 = 10.0;

// ── Rendering ───────────────────────────────────────────────────

/// Side length in screen pixels of a drawn marker icon.
pub const MARK_ICON_SIZE_PX: f64 = 20.0;
