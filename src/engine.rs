use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use serde::{Deserialize, Serialize};

use crate::assets::{IconKind, IconSet};
use crate::consts::MIN_DRAW_DISTANCE_PX;
use crate::geom::{CanvasSize, NormalizedPoint, Point};
use crate::render;
use crate::session::{CommittedMark, DebugSnapshot, DrawPolicy, DrawState, MarkKind};
use crate::zone::{self, Zone};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A mark was appended to the session's mark list.
    MarkCommitted(CommittedMark),
    /// The debug readout values changed; the host should refresh its panel.
    DebugChanged(DebugSnapshot),
    /// Visual state changed; the scene must be redrawn.
    RenderNeeded,
}

/// Mount-time configuration: the zone row and the sampler behavior flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub zones: Vec<Zone>,
    pub policy: DrawPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zones: zone::default_zones(),
            policy: DrawPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a host-supplied JSON configuration. Missing fields fall back to
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the string is not a
    /// valid configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. All transitions are synchronous and infallible; degenerate
/// input (an unsized canvas) makes the pointer handlers no-op.
pub struct EngineCore {
    /// Immutable zone row, in index order.
    pub zones: Vec<Zone>,
    /// Behavior flags fixed at mount.
    pub policy: DrawPolicy,
    /// Append-only committed marks, in normalized coordinates.
    pub marks: Vec<CommittedMark>,
    /// The stroke-sampler state machine.
    pub state: DrawState,
    /// Zone currently under the pointer, if any.
    pub touched_zone_id: Option<String>,
    /// First zone entered during the current session; sticky per policy.
    pub first_touched_zone_id: Option<String>,
    /// Pointer position during a drag, for the live trace marker.
    pub live_cursor: Option<NormalizedPoint>,
    /// Current canvas pixel dimensions.
    pub canvas_size: CanvasSize,
    /// Last reported pointer position in document coordinates.
    pub pointer_doc: Point,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            zones: config.zones,
            policy: config.policy,
            marks: Vec::new(),
            state: DrawState::Idle,
            touched_zone_id: None,
            first_touched_zone_id: None,
            live_cursor: None,
            canvas_size: CanvasSize::default(),
            pointer_doc: Point::new(0.0, 0.0),
        }
    }

    // --- Viewport ---

    /// Record new canvas pixel dimensions.
    ///
    /// Committed marks are stored normalized, so nothing is re-sampled; the
    /// requested redraw reprojects them at the new size. A call with the
    /// unchanged size is a no-op.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let size = CanvasSize::new(width, height);
        if size == self.canvas_size {
            return Vec::new();
        }
        self.canvas_size = size;
        log::debug!("viewport resized to {width}x{height}");
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Begin a drag session at canvas-relative pixel point `pt`.
    ///
    /// `doc` is the same pointer position in document coordinates, carried
    /// only for the debug readout.
    pub fn on_pointer_down(&mut self, pt: Point, doc: Point) -> Vec<Action> {
        self.pointer_doc = doc;
        if !self.canvas_size.is_sized() {
            return Vec::new();
        }

        let normalized = self.canvas_size.normalize(pt).clamped();
        self.state = DrawState::Dragging { last: normalized };
        self.live_cursor = Some(normalized);

        let hit = zone::hit_test(pt, &self.zones, self.canvas_size).map(str::to_owned);
        self.touched_zone_id.clone_from(&hit);
        // A new session always re-seeds the first-touched value.
        self.first_touched_zone_id.clone_from(&hit);

        let mut actions = Vec::new();
        if hit.is_some() {
            actions.push(Action::MarkCommitted(self.commit(normalized, MarkKind::Safe)));
        }
        actions.push(Action::DebugChanged(self.debug()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Sample a pointer position during (or outside) a drag.
    ///
    /// Classification state — the touched zone, the first-touched seed, and
    /// the live cursor — updates on every move. Committing a mark and
    /// advancing the stroke anchor are gated on the pointer having traveled
    /// at least [`MIN_DRAW_DISTANCE_PX`] (in screen pixels, converted to
    /// normalized units at the current canvas size) since the anchor.
    pub fn on_pointer_move(&mut self, pt: Point, doc: Point) -> Vec<Action> {
        self.pointer_doc = doc;
        if !self.canvas_size.is_sized() {
            return Vec::new();
        }
        let DrawState::Dragging { last } = self.state else {
            // Not drawing: only the document coordinates moved.
            return vec![Action::DebugChanged(self.debug())];
        };

        let normalized = self.canvas_size.normalize(pt).clamped();
        self.live_cursor = Some(normalized);

        let hit = zone::hit_test(pt, &self.zones, self.canvas_size).map(str::to_owned);
        self.touched_zone_id.clone_from(&hit);
        if self.first_touched_zone_id.is_none() {
            self.first_touched_zone_id.clone_from(&hit);
        }

        let mut actions = Vec::new();
        let threshold = MIN_DRAW_DISTANCE_PX / self.canvas_size.min_dimension();
        let distance = (normalized.x - last.x).hypot(normalized.y - last.y);
        if distance >= threshold {
            if hit.is_some() {
                actions.push(Action::MarkCommitted(self.commit(normalized, MarkKind::Safe)));
            } else if !self.policy.commit_only_inside_zones {
                actions.push(Action::MarkCommitted(self.commit(normalized, MarkKind::Danger)));
            }
            // The anchor advances whenever the threshold is met, committed
            // or not; sub-threshold moves keep measuring from the old one.
            self.state = DrawState::Dragging { last: normalized };
        }
        actions.push(Action::DebugChanged(self.debug()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// End the drag session (pointer released).
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_session()
    }

    /// End the drag session (pointer left the canvas bounds).
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_session()
    }

    fn end_session(&mut self) -> Vec<Action> {
        if !self.state.is_dragging() {
            return Vec::new();
        }
        self.state = DrawState::Idle;
        self.live_cursor = None;
        self.touched_zone_id = None;
        if self.policy.reset_first_touched_on_drag_end {
            self.first_touched_zone_id = None;
        }
        log::debug!("drag ended; {} marks committed this session so far", self.marks.len());
        vec![Action::DebugChanged(self.debug()), Action::RenderNeeded]
    }

    fn commit(&mut self, point: NormalizedPoint, kind: MarkKind) -> CommittedMark {
        let mark = CommittedMark { point, kind };
        self.marks.push(mark);
        mark
    }

    // --- Queries ---

    /// The committed marks, oldest first.
    #[must_use]
    pub fn marks(&self) -> &[CommittedMark] {
        &self.marks
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.state.is_dragging()
    }

    /// The current debug readout values.
    #[must_use]
    pub fn debug(&self) -> DebugSnapshot {
        DebugSnapshot {
            is_drawing: self.state.is_dragging(),
            doc_x: self.pointer_doc.x,
            doc_y: self.pointer_doc.y,
            touched_zone_id: self.touched_zone_id.clone(),
            first_touched_zone_id: self.first_touched_zone_id.clone(),
        }
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element plus the loaded image assets.
///
/// Handlers delegate to the core and then redraw whenever the returned
/// actions include [`Action::RenderNeeded`]; the action list is passed back
/// to the host unchanged so it can feed the debug readout.
pub struct Engine {
    canvas: HtmlCanvasElement,
    background: Option<HtmlImageElement>,
    icons: IconSet,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine with the default zone row bound to `canvas`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self::with_config(canvas, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        Self {
            canvas,
            background: None,
            icons: IconSet::new(),
            core: EngineCore::with_config(config),
        }
    }

    // --- Assets ---

    /// Register the loaded background image.
    pub fn set_background(&mut self, image: HtmlImageElement) {
        self.background = Some(image);
    }

    /// Register a loaded marker icon.
    pub fn set_icon(&mut self, kind: IconKind, image: HtmlImageElement) {
        self.icons.set(kind, image);
    }

    // --- Viewport ---

    /// Resize the canvas backing store to the new viewport and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails; see [`Self::render`].
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<Vec<Action>, JsValue> {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        let actions = self.core.set_viewport(width, height);
        self.process(&actions)?;
        Ok(actions)
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails; see [`Self::render`].
    pub fn on_pointer_down(&mut self, pt: Point, doc: Point) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_down(pt, doc);
        self.process(&actions)?;
        Ok(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails; see [`Self::render`].
    pub fn on_pointer_move(&mut self, pt: Point, doc: Point) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_move(pt, doc);
        self.process(&actions)?;
        Ok(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails; see [`Self::render`].
    pub fn on_pointer_up(&mut self) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_up();
        self.process(&actions)?;
        Ok(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails; see [`Self::render`].
    pub fn on_pointer_leave(&mut self) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_leave();
        self.process(&actions)?;
        Ok(actions)
    }

    // --- Render ---

    /// Redraw the full scene: background, zones, committed marks, and the
    /// live-cursor marker. A no-op until the 2D context is available.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails (e.g. invalid context
    /// state).
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = context_2d(&self.canvas) else {
            return Ok(());
        };
        render::draw(&ctx, &self.core, self.background.as_ref(), &self.icons)
    }

    fn process(&self, actions: &[Action]) -> Result<(), JsValue> {
        if actions.iter().any(|action| matches!(action, Action::RenderNeeded)) {
            self.render()?;
        }
        Ok(())
    }
}

/// The canvas's 2D context, or `None` when it is not (yet) obtainable.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let object = match canvas.get_context("2d") {
        Ok(Some(object)) => object,
        Ok(None) | Err(_) => return None,
    };
    match object.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
