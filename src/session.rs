//! Draw-session model: behavior policy, committed marks, and the sampling
//! state machine.
//!
//! This module defines the types consumed by the engine. `DrawPolicy`
//! captures mount-time behavior choices, `DrawState` is the active gesture
//! tracked between pointer-down and pointer-up, and `CommittedMark` is the
//! append-only record replayed on every full redraw. `DebugSnapshot` is the
//! five-value readout published to the host on every state change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::geom::NormalizedPoint;

/// Mount-time behavior switches for the stroke sampler.
///
/// Both flags cover behaviors that shifted between revisions of the widget;
/// the defaults match the latest revision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawPolicy {
    /// When set, a mark is committed only while the pointer is inside a
    /// zone; out-of-zone samples advance the stroke anchor but record
    /// nothing. When unset, out-of-zone samples commit [`MarkKind::Danger`]
    /// marks.
    pub commit_only_inside_zones: bool,
    /// When set, the first-touched-zone value is cleared on drag-end
    /// together with the rest of the session. When unset it survives until
    /// the next drag-start re-seeds it.
    pub reset_first_touched_on_drag_end: bool,
}

impl Default for DrawPolicy {
    fn default() -> Self {
        Self {
            commit_only_inside_zones: true,
            reset_first_touched_on_drag_end: false,
        }
    }
}

/// Classification of a committed mark by zone membership at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// Committed inside a zone.
    Safe,
    /// Committed outside every zone (only possible when
    /// [`DrawPolicy::commit_only_inside_zones`] is off).
    Danger,
}

/// A recorded drawing action, persisted for the component lifetime.
///
/// Stored in normalized coordinates so the mark list reflows to new canvas
/// dimensions on resize instead of being re-sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedMark {
    pub point: NormalizedPoint,
    pub kind: MarkKind,
}

/// The stroke-sampler state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A drag is active.
    Dragging {
        /// The anchor for the minimum-distance threshold: the last point at
        /// which the threshold was met (or the drag started). Not advanced
        /// by sub-threshold moves.
        last: NormalizedPoint,
    },
}

impl DrawState {
    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// The debug readout published to the host on every state change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebugSnapshot {
    /// Whether a drag session is active.
    pub is_drawing: bool,
    /// Last reported pointer x in document coordinates.
    pub doc_x: f64,
    /// Last reported pointer y in document coordinates.
    pub doc_y: f64,
    /// Zone currently under the pointer, if any. Updated on every move.
    pub touched_zone_id: Option<String>,
    /// First zone entered during the current session. Sticky: set at most
    /// once per drag, per [`DrawPolicy`] reset semantics.
    pub first_touched_zone_id: Option<String>,
}
