//! Rendering: draws the full widget scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine core and produces pixels — it
//! does not mutate any application state, so redrawing with unchanged state
//! is pixel-identical.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result. Assets that have not finished loading are skipped, never errors.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets::{IconKind, IconSet};
use crate::consts::MARK_ICON_SIZE_PX;
use crate::engine::EngineCore;
use crate::geom::Point;
use crate::zone;

/// Draw the full scene: background image, zone row, committed marks, and
/// the live-cursor marker.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    background: Option<&HtmlImageElement>,
    icons: &IconSet,
) -> Result<(), JsValue> {
    let size = core.canvas_size;
    if !size.is_sized() {
        return Ok(());
    }

    // Layer 1: clear and background.
    ctx.clear_rect(0.0, 0.0, size.width, size.height);
    if let Some(image) = background {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, size.width, size.height)?;
    }

    // Layer 2: the zone row.
    for (index, z) in core.zones.iter().enumerate() {
        let bounds = zone::bounds_of(z, index, core.zones.len(), size);
        ctx.set_fill_style_str(&z.color);
        ctx.fill_rect(bounds.x, bounds.y, bounds.width, bounds.height);
    }

    // Layer 3: committed marks, reprojected at the current size.
    for mark in &core.marks {
        draw_icon(ctx, icons, IconKind::from(mark.kind), size.denormalize(mark.point))?;
    }

    // Layer 4: the transient live-cursor marker while a drag is active.
    if let Some(cursor) = core.live_cursor {
        draw_icon(ctx, icons, IconKind::Trace, size.denormalize(cursor))?;
    }

    Ok(())
}

/// Draw a marker icon centered on `at`. Skipped silently while the image is
/// still loading.
fn draw_icon(
    ctx: &CanvasRenderingContext2d,
    icons: &IconSet,
    kind: IconKind,
    at: Point,
) -> Result<(), JsValue> {
    let Some(image) = icons.get(kind) else {
        return Ok(());
    };
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        at.x - MARK_ICON_SIZE_PX / 2.0,
        at.y - MARK_ICON_SIZE_PX / 2.0,
        MARK_ICON_SIZE_PX,
        MARK_ICON_SIZE_PX,
    )
}
