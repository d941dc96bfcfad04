//! Zone-gated drawing canvas for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a full-viewport drawing canvas layered over a background
//! image: translating raw DOM pointer/touch events into draw-session state
//! transitions, hit-testing against a row of "zone" rectangles centered on
//! the canvas, accumulating committed marks in resize-independent normalized
//! coordinates, and rendering the scene. The host layer is responsible only
//! for wiring DOM events to the engine, loading image assets, and displaying
//! the [`session::DebugSnapshot`] values it receives back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geom`] | Canvas sizes, pixel/normalized coordinate conversions |
//! | [`zone`] | Zone configuration, layout, and hit-testing |
//! | [`session`] | Draw-session state machine types and policy flags |
//! | [`assets`] | Marker icon registry |
//! | [`render`] | Scene rendering against the 2D context |
//! | [`consts`] | Shared numeric constants (spacing, thresholds, icon size) |

pub mod assets;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod render;
pub mod session;
pub mod zone;

/// Install the browser logging backend and panic hook.
///
/// Safe to call more than once; if a logger is already registered (for
/// example by a host application that boots its own), the existing one is
/// kept.
pub fn init_log(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed; keeping existing backend");
    }
}
