use crate::input;
use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use ztoline_core::StageError;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

/// Viewport size in CSS pixels, read once at load.
pub fn inner_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    input::backing_size(read(window.inner_width()), read(window.inner_height()))
}

/// Creates a canvas of the given size and appends it to `<body>`.
pub fn attach_canvas(
    document: &web::Document,
    width: u32,
    height: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Acquires the 2D context; failing here is fatal for the stage.
pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, StageError> {
    canvas
        .get_context("2d")
        .map_err(|e| StageError::ContextUnavailable(format!("{:?}", e)))?
        .ok_or_else(|| StageError::ContextUnavailable("2d context not supported".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| StageError::ContextUnavailable(format!("{:?}", e)))
}
