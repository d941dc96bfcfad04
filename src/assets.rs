//! Marker icon registry.
//!
//! Icons arrive asynchronously: the host kicks off image loads at mount and
//! registers each element once its `onload` fires. Until then, lookups
//! return `None` and drawing silently skips the mark. Nothing here errors.

use web_sys::HtmlImageElement;

use crate::session::MarkKind;

/// Which marker image to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Mark committed inside a zone.
    Safe,
    /// Mark committed outside every zone.
    Danger,
    /// Transient live-cursor indicator shown during a drag.
    Trace,
}

impl From<MarkKind> for IconKind {
    fn from(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Safe => Self::Safe,
            MarkKind::Danger => Self::Danger,
        }
    }
}

/// Holds the marker images as they finish loading.
#[derive(Debug, Default)]
pub struct IconSet {
    safe: Option<HtmlImageElement>,
    danger: Option<HtmlImageElement>,
    trace: Option<HtmlImageElement>,
}

impl IconSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded image for `kind`, replacing any previous one.
    pub fn set(&mut self, kind: IconKind, image: HtmlImageElement) {
        match kind {
            IconKind::Safe => self.safe = Some(image),
            IconKind::Danger => self.danger = Some(image),
            IconKind::Trace => self.trace = Some(image),
        }
    }

    /// The image for `kind`, if it has loaded.
    #[must_use]
    pub fn get(&self, kind: IconKind) -> Option<&HtmlImageElement> {
        match kind {
            IconKind::Safe => self.safe.as_ref(),
            IconKind::Danger => self.danger.as_ref(),
            IconKind::Trace => self.trace.as_ref(),
        }
    }
}
